//! Ingestion of the working point set.
//!
//! Points are identified by their position in the working slice from here on.
//! Coordinates are only compared when collapsing exact duplicates.

use glam::DVec2;
use hashbrown::HashSet;

use crate::fixed_hasher::FixedHasher;

/// The bit patterns of a point's coordinates, with `-0.0` folded into `0.0`.
type CoordinateKey = [u64; 2];

#[inline]
fn coordinate_key(point: DVec2) -> CoordinateKey {
    // Adding positive zero maps negative zero to positive zero and leaves everything else as is.
    [(point.x + 0.0).to_bits(), (point.y + 0.0).to_bits()]
}

/// Moves the first occurrence of every distinct point to the front of `points`,
/// preserving their relative order, and returns the number of distinct points.
///
/// The elements after the returned length are the duplicates, in unspecified order.
pub(crate) fn dedup_in_place(points: &mut [DVec2]) -> usize {
    let mut seen: HashSet<CoordinateKey, FixedHasher> =
        HashSet::with_capacity_and_hasher(points.len(), FixedHasher);
    let mut distinct = 0;

    for i in 0..points.len() {
        if seen.insert(coordinate_key(points[i])) {
            points.swap(distinct, i);
            distinct += 1;
        }
    }

    distinct
}

/// Returns the index of the first point with a non-finite coordinate, if any.
pub(crate) fn first_non_finite(points: &[DVec2]) -> Option<usize> {
    points.iter().position(|point| !point.is_finite())
}

/// Returns the indices of the points with the minimum and maximum `x` coordinate.
///
/// Ties on `x` go to the point with the lower `y` for both extremes. If every point
/// shares the same `x`, the maximum is the point with the highest `y` instead, so
/// that the two extremes are the ends of the vertical line.
///
/// Comparisons are strict, so the first occurrence wins when two points are equal.
/// Returns `(0, 0)` for an empty slice.
pub(crate) fn extreme_indices(points: &[DVec2]) -> (usize, usize) {
    let (min_index, max_index) =
        points
            .iter()
            .enumerate()
            .skip(1)
            .fold((0, 0), |(min_index, max_index), (i, point)| {
                let min = points[min_index];
                let min_index = if point.x < min.x || (point.x == min.x && point.y < min.y) {
                    i
                } else {
                    min_index
                };

                let max = points[max_index];
                let max_index = if point.x > max.x || (point.x == max.x && point.y < max.y) {
                    i
                } else {
                    max_index
                };

                (min_index, max_index)
            });

    if min_index != max_index {
        return (min_index, max_index);
    }

    // Either all points share the same `x`, or none of them compare.
    let max_index = points
        .iter()
        .enumerate()
        .skip(1)
        .fold(0, |max_index, (i, point)| {
            if point.y > points[max_index].y {
                i
            } else {
                max_index
            }
        });

    (min_index, max_index)
}
