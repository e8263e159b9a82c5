//! The recursive divide step of the hull construction.

use glam::DVec2;

use super::predicates::{baseline_distance, is_left};

/// Recursively computes the hull points strictly to the left of the baseline `a -> b`.
///
/// `points` must only contain points strictly left of `a -> b`. The hull points of
/// this region are appended to `hull` in boundary order from `a` towards `b`,
/// excluding `a` and `b` themselves. The slice is reordered in the process.
///
/// Regions with at least `parallel_threshold` candidates after the split are
/// computed concurrently when the `parallel` feature is enabled.
pub(crate) fn hull_set(
    a: DVec2,
    b: DVec2,
    mut points: &mut [DVec2],
    hull: &mut Vec<DVec2>,
    parallel_threshold: usize,
) {
    if points.is_empty() {
        return;
    }

    if points.len() == 1 {
        hull.push(points[0]);
        return;
    }

    // Find the point furthest from the baseline `ab`.
    let furthest_index = furthest_from_baseline(a, b, points);

    // Move the furthest point out of the candidates.
    let furthest_point = *swap_with_first_and_remove(&mut points, furthest_index);

    // Points left of `a -> furthest_point` and left of `furthest_point -> b` are outside
    // the triangle `a, furthest_point, b`. Everything else is inside and gets dropped.
    let (outside_af, rest) = partition_slice(points, |point| is_left(a, furthest_point, *point));
    let (outside_fb, _) = partition_slice(rest, |point| is_left(furthest_point, b, *point));

    log::trace!(
        "split at {furthest_point}: {} points before, {} after",
        outside_af.len(),
        outside_fb.len()
    );

    if outside_af.len() + outside_fb.len() >= parallel_threshold {
        let (before, after) = join(
            || collect_hull_set(a, furthest_point, outside_af, parallel_threshold),
            || collect_hull_set(furthest_point, b, outside_fb, parallel_threshold),
        );
        hull.extend(before);
        hull.push(furthest_point);
        hull.extend(after);
    } else {
        hull_set(a, furthest_point, outside_af, hull, parallel_threshold);
        hull.push(furthest_point);
        hull_set(furthest_point, b, outside_fb, hull, parallel_threshold);
    }
}

/// Like [`hull_set`], but collects the region into its own vector.
pub(crate) fn collect_hull_set(
    a: DVec2,
    b: DVec2,
    points: &mut [DVec2],
    parallel_threshold: usize,
) -> Vec<DVec2> {
    let mut hull = Vec::new();
    hull_set(a, b, points, &mut hull, parallel_threshold);
    hull
}

/// Returns the index of the point furthest from the line through `a` and `b`.
///
/// Equally distant points lie on one line parallel to `a -> b`. Among them the one
/// closest to `a` along the baseline wins, so the chosen point is always an end of
/// that run and the points between its ends fall inside the next triangle.
/// Returns `0` for an empty slice.
fn furthest_from_baseline(a: DVec2, b: DVec2, points: &[DVec2]) -> usize {
    let direction = b - a;
    points
        .iter()
        .map(|point| (baseline_distance(a, b, *point), direction.dot(*point - a)))
        .enumerate()
        .fold(
            (0, f64::NEG_INFINITY, f64::INFINITY),
            |(best_index, best, best_along), (i, (distance, along))| {
                if distance > best || (distance == best && along < best_along) {
                    (i, distance, along)
                } else {
                    (best_index, best, best_along)
                }
            },
        )
        .0
}

/// Runs two closures, potentially in parallel, and returns both results.
#[cfg(feature = "parallel")]
#[inline]
pub(crate) fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    rayon::join(a, b)
}

/// Runs two closures, potentially in parallel, and returns both results.
#[cfg(not(feature = "parallel"))]
#[inline]
pub(crate) fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA,
    B: FnOnce() -> RB,
{
    (a(), b())
}

/// Partitions a mutable slice in-place so that it contains all elements for
/// which `predicate(e)` is `true`, followed by all elements for which
/// `predicate(e)` is `false`. Returns sub-slices to all predicated and
/// non-predicated elements, respectively.
///
/// https://github.com/llogiq/partition/blob/master/src/lib.rs
pub(crate) fn partition_slice<T, P>(data: &mut [T], predicate: P) -> (&mut [T], &mut [T])
where
    P: Fn(&T) -> bool,
{
    let len = data.len();

    if len == 0 {
        return (&mut [], &mut []);
    }

    let (mut left, mut right) = (0, len - 1);

    loop {
        while left < len && predicate(&data[left]) {
            left += 1;
        }

        while right > 0 && !predicate(&data[right]) {
            right -= 1;
        }

        if left >= right {
            return data.split_at_mut(left);
        }

        data.swap(left, right);
    }
}

/// Swaps the element at `index` with the first element of `slice`, removes it from the slice,
/// and returns a mutable reference to it.
///
/// # Panics
///
/// Panics if `slice` is empty or `index` is out of bounds.
#[inline]
pub(crate) fn swap_with_first_and_remove<'a, T>(slice: &mut &'a mut [T], index: usize) -> &'a mut T {
    let tmp = std::mem::take(slice);
    tmp.swap(0, index);
    let (head, tail) = tmp
        .split_first_mut()
        .expect("cannot remove an element from an empty slice");
    *slice = tail;
    head
}
