use glam::DVec2;

use super::predicates::orient2d;

/// Returns `true` if walking `boundary` in order (and back to the start) turns in
/// the same direction at every vertex, with no collinear or reflex vertices.
///
/// Boundaries of fewer than three points are trivially convex.
pub(crate) fn is_convex(boundary: &[DVec2]) -> bool {
    let n = boundary.len();
    if n < 3 {
        return true;
    }

    let mut sign = 0.0;
    for i in 0..n {
        let turn = orient2d(boundary[i], boundary[(i + 1) % n], boundary[(i + 2) % n]);
        if turn == 0.0 || turn.is_nan() {
            return false;
        }
        if sign == 0.0 {
            sign = turn.signum();
        } else if turn.signum() != sign {
            return false;
        }
    }

    // Consistent turns can still wind around more than once.
    let winding: f64 = (0..n)
        .map(|i| {
            let (a, b, c) = (boundary[i], boundary[(i + 1) % n], boundary[(i + 2) % n]);
            (b - a).angle_to(c - b).abs()
        })
        .sum();
    winding < 2.0 * core::f64::consts::PI + 1e-6
}

/// Returns `true` if `point` lies inside or on the convex polygon `boundary`.
///
/// The boundary may wind either way. Boundaries of one and two points are
/// treated as a point and a segment.
pub(crate) fn contains(boundary: &[DVec2], point: DVec2) -> bool {
    match boundary {
        [] => false,
        [only] => *only == point,
        [a, b] => on_segment(*a, *b, point),
        _ => {
            let n = boundary.len();
            let mut sign = 0.0;
            for i in 0..n {
                let (a, b) = (boundary[i], boundary[(i + 1) % n]);
                let side = orient2d(a, b, point);
                if side == 0.0 {
                    if on_segment(a, b, point) {
                        return true;
                    }
                    continue;
                }
                if sign == 0.0 {
                    sign = side.signum();
                } else if side.signum() != sign {
                    return false;
                }
            }
            true
        }
    }
}

/// Returns `true` if `point` is on the closed segment `a, b`.
fn on_segment(a: DVec2, b: DVec2, point: DVec2) -> bool {
    orient2d(a, b, point) == 0.0
        && point.x >= a.x.min(b.x)
        && point.x <= a.x.max(b.x)
        && point.y >= a.y.min(b.y)
        && point.y <= a.y.max(b.y)
}
