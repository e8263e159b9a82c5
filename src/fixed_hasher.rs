//! Deterministic hashing for point ingestion.

use core::hash::BuildHasher;
use foldhash::fast::{FixedState, FoldHasher};

/// Fixed seed, so that hashing coordinate keys gives the same results on every run.
const COORDINATE_HASHER: FixedState = FixedState::with_seed(0x9e37_79b9_7f4a_7c15);

/// A [`BuildHasher`] with a fixed state.
///
/// Duplicate detection does not depend on iteration order, but a fixed state keeps
/// the work done for a given input identical between runs and platforms.
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHasher;

impl BuildHasher for FixedHasher {
    type Hasher = FoldHasher<'static>;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        COORDINATE_HASHER.build_hasher()
    }
}
