//! # Quickhull2d
//!
//! A divide-and-conquer implementation of the Quickhull algorithm for computing
//! the convex hull of a 2D point set.
//!
//! The hull is built by splitting the point set along the line through its
//! leftmost and rightmost points, then recursively pulling out the point furthest
//! from each baseline until no point remains outside the boundary.
//!
//! ```
//! use glam::DVec2;
//! use quickhull2d::ConvexHull2d;
//!
//! let points = [
//!     DVec2::new(0.0, 0.0),
//!     DVec2::new(4.0, 0.0),
//!     DVec2::new(4.0, 4.0),
//!     DVec2::new(0.0, 4.0),
//!     DVec2::new(2.0, 2.0),
//! ];
//!
//! let hull = ConvexHull2d::from_points(&points);
//! assert_eq!(hull.len(), 4);
//! assert!(!hull.points_ref().contains(&DVec2::new(2.0, 2.0)));
//! ```
//!
//! ## Features
//!
//! - `parallel`: computes large sub-regions of the hull concurrently with [rayon](https://docs.rs/rayon).
//!
//! ## References
//!
//! - C. Bradford Barber et al. 1996. [The Quickhull Algorithm for Convex Hulls](https://www.cise.ufl.edu/~ungor/courses/fall06/papers/QuickHull.pdf) (the original paper)
//! - Jonathan Richard Shewchuk. 1997. [Adaptive Precision Floating-Point Arithmetic and Fast Robust Geometric Predicates](https://people.eecs.berkeley.edu/~jrs/papers/robustr.pdf)

#![warn(missing_docs)]

mod dim2;
mod fixed_hasher;

pub use dim2::{CollinearPolicy, ConvexHull2d, ConvexHull2dError, HullBuilder};
