mod collinear;
mod partition;
mod point_set;
mod predicates;
mod validation;

pub use collinear::CollinearPolicy;

use glam::DVec2;
use thiserror::Error;

use self::partition::{collect_hull_set, hull_set, join, partition_slice, swap_with_first_and_remove};
use self::predicates::is_left;

/// An error returned during checked [`ConvexHull2d`] construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvexHull2dError {
    /// A point has a NaN or infinite coordinate.
    #[error("Input point {index} has a non-finite coordinate: {point}")]
    NonFinitePoint {
        /// The index of the offending point in the input.
        index: usize,
        /// The offending point.
        point: DVec2,
    },
}

/// A 2D [convex hull] representing the smallest convex set containing
/// all input points in a given point set.
///
/// The boundary is built by splitting the points along the line through the
/// leftmost and rightmost points, then recursively finding the point furthest
/// from each baseline. The boundary is clockwise: it starts with the lower chain
/// walked back from the rightmost point, followed by the leftmost point, the
/// upper chain and finally the rightmost point.
///
/// [convex hull]: https://en.wikipedia.org/wiki/Convex_hull
///
/// # Example
///
/// ```
/// use quickhull2d::ConvexHull2d;
/// use glam::DVec2;
///
/// let points = vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(4.0, 0.0),
///     DVec2::new(4.0, 4.0),
///     DVec2::new(0.0, 4.0),
///     DVec2::new(2.0, 2.0),
/// ];
///
/// // Create the convex hull.
/// let hull = ConvexHull2d::from_points(&points);
///
/// // The interior point is not part of the boundary.
/// assert_eq!(
///     hull.points(),
///     vec![
///         DVec2::new(0.0, 0.0),
///         DVec2::new(0.0, 4.0),
///         DVec2::new(4.0, 4.0),
///         DVec2::new(4.0, 0.0),
///     ],
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConvexHull2d {
    points: Vec<DVec2>,
}

impl ConvexHull2d {
    /// Computes a [`ConvexHull2d`] for the given set of 2D points with the default [`HullBuilder`].
    ///
    /// Point sets with fewer than three points are returned unchanged.
    ///
    /// This allocates a new vector for the points. To avoid this allocation,
    /// consider using [`from_mut_points`](Self::from_mut_points).
    #[inline]
    pub fn from_points(points: &[DVec2]) -> Self {
        HullBuilder::new().build(points)
    }

    /// Computes a [`ConvexHull2d`] for the given mutable set of 2D points with the default [`HullBuilder`].
    ///
    /// The input slice may be reordered during hull construction.
    #[inline]
    pub fn from_mut_points(points: &mut [DVec2]) -> Self {
        HullBuilder::new().build_mut(points)
    }

    /// Attempts to compute a [`ConvexHull2d`] for the given set of 2D points.
    ///
    /// # Errors
    ///
    /// Returns [`ConvexHull2dError::NonFinitePoint`] if any point has a NaN or infinite coordinate.
    #[inline]
    pub fn try_from_points(points: &[DVec2]) -> Result<Self, ConvexHull2dError> {
        HullBuilder::new().try_build(points)
    }

    /// Returns the points of the convex hull in boundary order.
    ///
    /// This consumes the convex hull. If you want a reference to the points,
    /// consider using [`points_ref`](Self::points_ref) instead.
    #[inline]
    pub fn points(self) -> Vec<DVec2> {
        self.points
    }

    /// Returns a reference to the points of the convex hull in boundary order.
    #[inline]
    pub fn points_ref(&self) -> &[DVec2] {
        &self.points
    }

    /// Returns the number of points on the boundary.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the hull has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if `point` lies inside the hull or on its boundary.
    ///
    /// Hulls of one or two points are treated as a point and a line segment.
    #[inline]
    pub fn contains(&self, point: DVec2) -> bool {
        validation::contains(&self.points, point)
    }

    /// Returns `true` if the boundary is a strictly convex polygon.
    ///
    /// Hulls of fewer than three points are trivially convex. A hull built with
    /// [`CollinearPolicy::Retain`] is not strictly convex if it kept any edge points.
    #[inline]
    pub fn is_convex(&self) -> bool {
        validation::is_convex(&self.points)
    }
}

/// Configuration for building a [`ConvexHull2d`].
///
/// # Example
///
/// ```
/// use quickhull2d::{CollinearPolicy, HullBuilder};
/// use glam::DVec2;
///
/// let points = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(2.0, 0.0),
///     DVec2::new(1.0, 1.0),
/// ];
///
/// let hull = HullBuilder::new()
///     .collinear(CollinearPolicy::Retain)
///     .build(&points);
///
/// assert_eq!(hull.len(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HullBuilder {
    collinear: CollinearPolicy,
    parallel_threshold: usize,
}

impl Default for HullBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HullBuilder {
    /// The default minimum region size for computing sub-regions in parallel.
    #[cfg(feature = "parallel")]
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

    /// Creates a builder that discards collinear edge points.
    ///
    /// With the `parallel` feature, regions of at least 4096 points are split across threads.
    pub const fn new() -> Self {
        Self {
            collinear: CollinearPolicy::Discard,
            #[cfg(feature = "parallel")]
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
            #[cfg(not(feature = "parallel"))]
            parallel_threshold: usize::MAX,
        }
    }

    /// Sets how points lying exactly on a hull edge are treated.
    pub const fn collinear(mut self, policy: CollinearPolicy) -> Self {
        self.collinear = policy;
        self
    }

    /// Sets the minimum number of candidate points a region must have for its two
    /// halves to be computed in parallel.
    ///
    /// The result is identical to sequential construction. Use `usize::MAX` to
    /// always run sequentially.
    #[cfg(feature = "parallel")]
    pub const fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns the configured [`CollinearPolicy`].
    pub const fn collinear_policy(&self) -> CollinearPolicy {
        self.collinear
    }

    /// Computes a [`ConvexHull2d`] for the given set of 2D points.
    ///
    /// Never fails: point sets with fewer than three points are returned unchanged,
    /// exact duplicates are collapsed, and collinear point sets produce the two
    /// ends of their line. Non-finite coordinates give an unspecified but finite-sized result.
    pub fn build(&self, points: &[DVec2]) -> ConvexHull2d {
        self.build_mut(&mut points.to_vec())
    }

    /// Like [`build`](Self::build), but uses the input slice as the working set.
    ///
    /// The input slice may be reordered during hull construction.
    pub fn build_mut(&self, points: &mut [DVec2]) -> ConvexHull2d {
        if points.len() < 3 {
            return ConvexHull2d {
                points: points.to_vec(),
            };
        }

        let distinct = point_set::dedup_in_place(points);
        if distinct < points.len() {
            log::trace!("collapsed {} duplicate points", points.len() - distinct);
        }
        let points = &mut points[..distinct];

        if points.len() < 3 {
            log::debug!("only {} distinct points, returning them as is", points.len());
            return ConvexHull2d {
                points: points.to_vec(),
            };
        }

        // Edge points are found from the whole distinct set after the strict hull is known.
        let all_points = (self.collinear == CollinearPolicy::Retain).then(|| points.to_vec());

        let hull = self.strict_hull(points);

        let hull = match all_points {
            Some(all_points) => collinear::retain_edge_points(&hull, &all_points),
            None => hull,
        };

        ConvexHull2d { points: hull }
    }

    /// Like [`build`](Self::build), but rejects non-finite input.
    ///
    /// # Errors
    ///
    /// Returns [`ConvexHull2dError::NonFinitePoint`] for the first point with a NaN or infinite coordinate.
    pub fn try_build(&self, points: &[DVec2]) -> Result<ConvexHull2d, ConvexHull2dError> {
        if let Some(index) = point_set::first_non_finite(points) {
            return Err(ConvexHull2dError::NonFinitePoint {
                index,
                point: points[index],
            });
        }
        Ok(self.build(points))
    }

    /// Computes the hull corners of at least three distinct points.
    fn strict_hull(&self, mut points: &mut [DVec2]) -> Vec<DVec2> {
        debug_assert!(points.len() >= 3);

        let (min_index, mut max_index) = point_set::extreme_indices(points);

        if min_index == max_index {
            // Only reachable when the coordinates are not comparable.
            log::debug!("no distinct extreme points, returning the first point");
            return vec![points[min_index]];
        }

        // Move the min and max points out of the candidates.
        let min = *swap_with_first_and_remove(&mut points, min_index);

        // If the max point was at index 0, it was just swapped to `min_index`.
        if max_index == 0 {
            max_index = min_index;
        }

        // Account for the removed front element.
        let max = *swap_with_first_and_remove(&mut points, max_index - 1);

        // Points exactly on the line `min, max` are on neither side and never become hull points.
        let (upper, rest) = partition_slice(points, |point| is_left(min, max, *point));
        let (lower, _) = partition_slice(rest, |point| is_left(max, min, *point));

        log::trace!(
            "split at {min} and {max}: {} points above, {} below",
            upper.len(),
            lower.len()
        );

        let mut hull = Vec::new();

        if upper.len() + lower.len() >= self.parallel_threshold {
            let threshold = self.parallel_threshold;
            let (lower_chain, upper_chain) = join(
                || collect_hull_set(max, min, lower, threshold),
                || collect_hull_set(min, max, upper, threshold),
            );
            hull.reserve(lower_chain.len() + upper_chain.len() + 2);
            hull.extend(lower_chain);
            hull.push(min);
            hull.extend(upper_chain);
            hull.push(max);
        } else {
            // Walk the lower chain from `max` to `min`, then the upper chain from `min` to `max`.
            hull_set(max, min, lower, &mut hull, self.parallel_threshold);
            hull.push(min);
            hull_set(min, max, upper, &mut hull, self.parallel_threshold);
            hull.push(max);
        }

        hull
    }
}

#[cfg(test)]
mod test {
    use glam::dvec2;

    use super::*;

    #[test]
    fn empty_point_set() {
        let hull = ConvexHull2d::from_points(&[]);
        assert!(hull.is_empty());
    }

    #[test]
    fn fewer_than_three_points_unchanged() {
        let one = [dvec2(3.0, 1.0)];
        assert_eq!(ConvexHull2d::from_points(&one).points(), one.to_vec());

        let two = [dvec2(3.0, 1.0), dvec2(-1.0, 2.0)];
        assert_eq!(ConvexHull2d::from_points(&two).points(), two.to_vec());

        // Even duplicates are left alone below three points.
        let same = [dvec2(1.0, 1.0), dvec2(1.0, 1.0)];
        assert_eq!(ConvexHull2d::from_points(&same).points(), same.to_vec());
    }

    #[test]
    fn square_with_interior_point() {
        let points = vec![
            dvec2(0.0, 0.0),
            dvec2(4.0, 0.0),
            dvec2(4.0, 4.0),
            dvec2(0.0, 4.0),
            dvec2(2.0, 2.0),
        ];
        let expected = vec![
            dvec2(0.0, 0.0),
            dvec2(0.0, 4.0),
            dvec2(4.0, 4.0),
            dvec2(4.0, 0.0),
        ];
        let result = ConvexHull2d::from_points(&points).points();
        assert_eq!(result, expected);
    }

    #[test]
    fn hull_correct() {
        let points = vec![
            dvec2(0.0, 10.0),
            dvec2(1.0, 1.0),
            dvec2(10.0, 0.0),
            dvec2(1.0, -1.0),
            dvec2(0.0, -10.0),
            dvec2(-1.0, -1.0),
            dvec2(-10.0, 0.0),
            dvec2(-1.0, 1.0),
            dvec2(0.0, 10.0),
        ];
        // Lower chain from the right, the leftmost point, then the upper chain.
        let expected = vec![
            dvec2(0.0, -10.0),
            dvec2(-10.0, 0.0),
            dvec2(0.0, 10.0),
            dvec2(10.0, 0.0),
        ];
        let result = ConvexHull2d::from_points(&points).points();
        assert_eq!(result, expected);
    }

    #[test]
    fn clockwise() {
        let points = vec![
            dvec2(1.0, 0.0),
            dvec2(2.0, 1.0),
            dvec2(1.75, 1.1),
            dvec2(1.0, 2.0),
            dvec2(0.0, 1.0),
            dvec2(1.0, 0.0),
        ];
        let expected = [
            dvec2(1.0, 0.0),
            dvec2(0.0, 1.0),
            dvec2(1.0, 2.0),
            dvec2(2.0, 1.0),
        ];
        let hull = ConvexHull2d::from_points(&points);
        assert!(hull.is_convex());
        assert_eq!(hull.points(), expected);
    }

    #[test]
    fn triangle() {
        let points = vec![dvec2(0.0, 0.0), dvec2(2.0, 3.0), dvec2(4.0, 0.0)];
        let result = ConvexHull2d::from_points(&points).points();
        assert_eq!(result, vec![dvec2(0.0, 0.0), dvec2(2.0, 3.0), dvec2(4.0, 0.0)]);

        let points = vec![dvec2(0.0, 0.0), dvec2(2.0, -3.0), dvec2(4.0, 0.0)];
        let result = ConvexHull2d::from_points(&points).points();
        assert_eq!(result, vec![dvec2(2.0, -3.0), dvec2(0.0, 0.0), dvec2(4.0, 0.0)]);
    }

    #[test]
    fn trivial_collinear() {
        let points = vec![dvec2(0.0, 0.0), dvec2(1.0, 1.0), dvec2(2.0, 2.0)];
        let expected = vec![dvec2(0.0, 0.0), dvec2(2.0, 2.0)];
        let result = ConvexHull2d::from_points(&points).points();
        assert_eq!(result, expected);
    }

    #[test]
    fn all_collinear_unordered() {
        let points = vec![
            dvec2(2.0, 1.0),
            dvec2(-4.0, -2.0),
            dvec2(0.0, 0.0),
            dvec2(6.0, 3.0),
            dvec2(4.0, 2.0),
        ];
        let result = ConvexHull2d::from_points(&points).points();
        assert_eq!(result, vec![dvec2(-4.0, -2.0), dvec2(6.0, 3.0)]);
    }

    #[test]
    fn vertical_collinear() {
        let points = vec![dvec2(1.0, 2.0), dvec2(1.0, -5.0), dvec2(1.0, 9.0), dvec2(1.0, 0.0)];
        let result = ConvexHull2d::from_points(&points).points();
        assert_eq!(result, vec![dvec2(1.0, -5.0), dvec2(1.0, 9.0)]);
    }

    #[test]
    fn non_trivial_collinear() {
        let points = vec![
            dvec2(0.0, 0.0),
            dvec2(1.0, 1.0),
            dvec2(2.0, 2.0),
            dvec2(0.0, 2.0),
            dvec2(2.0, 0.0),
        ];
        let expected = vec![
            dvec2(0.0, 0.0),
            dvec2(0.0, 2.0),
            dvec2(2.0, 2.0),
            dvec2(2.0, 0.0),
        ];
        let result = ConvexHull2d::from_points(&points).points();
        assert_eq!(result, expected);
    }

    #[test]
    fn tied_furthest_run_keeps_only_its_ends() {
        // Three points tie for the furthest from the first baseline, the middle one first.
        let points = vec![
            dvec2(0.0, 0.0),
            dvec2(4.0, 0.0),
            dvec2(2.0, 2.0),
            dvec2(1.0, 2.0),
            dvec2(3.0, 2.0),
        ];
        let expected = vec![
            dvec2(0.0, 0.0),
            dvec2(1.0, 2.0),
            dvec2(3.0, 2.0),
            dvec2(4.0, 0.0),
        ];
        let hull = ConvexHull2d::from_points(&points);
        assert!(hull.is_convex());
        assert_eq!(hull.points(), expected);
    }

    #[test]
    fn tied_run_on_hull_of_hull() {
        let points = vec![
            dvec2(0.0, 0.0),
            dvec2(-48.0, 1.0),
            dvec2(0.0, 50.0),
            dvec2(1.0, 50.0),
            dvec2(24.0, 50.0),
            dvec2(47.0, 1.0),
        ];
        let hull = ConvexHull2d::from_points(&points);
        assert!(hull.is_convex());
        assert!(!hull.points_ref().contains(&dvec2(1.0, 50.0)));

        let again = ConvexHull2d::from_points(hull.points_ref());
        assert_eq!(again, hull);
    }

    #[test]
    fn shared_extreme_x_uses_corners() {
        // The first point with the minimum `x` is in the middle of the left edge.
        let points = vec![
            dvec2(0.0, 2.0),
            dvec2(0.0, 0.0),
            dvec2(0.0, 4.0),
            dvec2(3.0, 2.0),
        ];
        let expected = vec![dvec2(0.0, 0.0), dvec2(0.0, 4.0), dvec2(3.0, 2.0)];
        let hull = ConvexHull2d::from_points(&points);
        assert!(hull.is_convex());
        assert_eq!(hull.points(), expected);
    }

    #[test]
    fn duplicates_are_collapsed() {
        let points = vec![
            dvec2(4.0, 4.0),
            dvec2(0.0, 0.0),
            dvec2(4.0, 4.0),
            dvec2(4.0, 0.0),
            dvec2(0.0, 0.0),
            dvec2(0.0, 4.0),
            dvec2(0.0, 4.0),
        ];
        let expected = vec![
            dvec2(0.0, 0.0),
            dvec2(0.0, 4.0),
            dvec2(4.0, 4.0),
            dvec2(4.0, 0.0),
        ];
        let result = ConvexHull2d::from_points(&points).points();
        assert_eq!(result, expected);
    }

    #[test]
    fn duplicates_of_fewer_than_three_distinct_points() {
        let points = vec![dvec2(1.0, 1.0), dvec2(2.0, 0.0), dvec2(1.0, 1.0)];
        let result = ConvexHull2d::from_points(&points).points();
        assert_eq!(result, vec![dvec2(1.0, 1.0), dvec2(2.0, 0.0)]);

        let points = vec![dvec2(1.0, 1.0); 5];
        let result = ConvexHull2d::from_points(&points).points();
        assert_eq!(result, vec![dvec2(1.0, 1.0)]);
    }

    #[test]
    fn retain_collinear_edge_points() {
        let points = vec![
            dvec2(0.0, 0.0),
            dvec2(2.0, 0.0),
            dvec2(4.0, 0.0),
            dvec2(4.0, 4.0),
            dvec2(0.0, 4.0),
            dvec2(0.0, 2.0),
            dvec2(1.0, 1.0),
        ];
        let expected = vec![
            dvec2(0.0, 0.0),
            dvec2(0.0, 2.0),
            dvec2(0.0, 4.0),
            dvec2(4.0, 4.0),
            dvec2(4.0, 0.0),
            dvec2(2.0, 0.0),
        ];
        let builder = HullBuilder::new().collinear(CollinearPolicy::Retain);
        assert_eq!(builder.collinear_policy(), CollinearPolicy::Retain);
        assert_eq!(HullBuilder::default().collinear_policy(), CollinearPolicy::Discard);

        let hull = builder.build(&points);
        assert!(!hull.is_convex());
        assert_eq!(hull.points(), expected);

        let hull = ConvexHull2d::from_points(&points);
        assert_eq!(hull.len(), 4);
    }

    #[test]
    fn retain_all_collinear() {
        let points = vec![dvec2(2.0, 2.0), dvec2(0.0, 0.0), dvec2(3.0, 3.0), dvec2(1.0, 1.0)];
        let hull = HullBuilder::new()
            .collinear(CollinearPolicy::Retain)
            .build(&points);
        assert_eq!(
            hull.points(),
            vec![
                dvec2(0.0, 0.0),
                dvec2(1.0, 1.0),
                dvec2(2.0, 2.0),
                dvec2(3.0, 3.0)
            ]
        );
    }

    #[test]
    fn mut_points_matches_points() {
        let points = vec![
            dvec2(3.0, 1.0),
            dvec2(-2.0, 4.0),
            dvec2(0.5, 0.5),
            dvec2(-1.0, -3.0),
            dvec2(2.0, -2.0),
            dvec2(0.0, 5.0),
        ];
        let expected = ConvexHull2d::from_points(&points);
        let mut working = points.clone();
        assert_eq!(ConvexHull2d::from_mut_points(&mut working), expected);
    }

    #[test]
    fn contains_input_points() {
        let points = vec![
            dvec2(3.0, 1.0),
            dvec2(-2.0, 4.0),
            dvec2(0.5, 0.5),
            dvec2(-1.0, -3.0),
            dvec2(2.0, -2.0),
            dvec2(0.0, 5.0),
        ];
        let hull = ConvexHull2d::from_points(&points);
        assert!(points.iter().all(|point| hull.contains(*point)));
        assert!(!hull.contains(dvec2(10.0, 10.0)));
    }

    #[test]
    fn non_finite_points_are_rejected() {
        let points = vec![dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(f64::NAN, 1.0)];
        let result = ConvexHull2d::try_from_points(&points);
        assert!(matches!(
            result,
            Err(ConvexHull2dError::NonFinitePoint { index: 2, .. })
        ));

        let points = vec![dvec2(0.0, 0.0), dvec2(f64::NEG_INFINITY, 0.0)];
        assert!(ConvexHull2d::try_from_points(&points).is_err());
    }

    #[test]
    fn non_finite_points_do_not_panic() {
        let points = vec![
            dvec2(f64::NAN, f64::NAN),
            dvec2(f64::NAN, 0.0),
            dvec2(1.0, f64::NAN),
            dvec2(0.0, 0.0),
        ];
        let hull = ConvexHull2d::from_points(&points);
        assert!(hull.len() <= points.len());
    }

    #[test]
    fn error_message() {
        let error = ConvexHull2dError::NonFinitePoint {
            index: 3,
            point: dvec2(f64::INFINITY, 0.0),
        };
        assert!(error.to_string().starts_with("Input point 3 has a non-finite coordinate"));
    }

    #[test]
    fn try_from_points_matches_from_points() {
        let points = vec![
            dvec2(0.0, 0.0),
            dvec2(4.0, 0.0),
            dvec2(4.0, 4.0),
            dvec2(0.0, 4.0),
            dvec2(2.0, 2.0),
        ];
        assert_eq!(
            ConvexHull2d::try_from_points(&points),
            Ok(ConvexHull2d::from_points(&points))
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let points: Vec<DVec2> = (0..2000)
            .map(|i| {
                let angle = i as f64 * 0.618_033_988_75 * core::f64::consts::TAU;
                let radius = 1.0 + (i % 7) as f64 * 0.1;
                dvec2(angle.cos() * radius, angle.sin() * radius)
            })
            .collect();

        let sequential = HullBuilder::new().parallel_threshold(usize::MAX).build(&points);
        let parallel = HullBuilder::new().parallel_threshold(1).build(&points);

        assert!(sequential.len() > 3);
        assert_eq!(parallel, sequential);
    }
}
