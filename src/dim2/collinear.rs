use glam::DVec2;

use super::predicates::orient2d;

/// How points lying exactly on an edge of the hull are treated.
///
/// Only points on the boundary between two hull vertices are affected. Points on
/// the infinite line through an edge but outside the edge are never on the hull.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CollinearPolicy {
    /// Drop points on hull edges, keeping only the ends of each collinear run.
    ///
    /// Every vertex of the resulting hull is a strict corner.
    #[default]
    Discard,
    /// Keep points on hull edges as hull vertices, ordered along their edge.
    Retain,
}

/// Inserts every point of `points` that lies strictly inside an edge of `hull`
/// into that edge, ordered from the edge's start to its end.
///
/// A hull of two points is treated as a single segment rather than a closed
/// polygon, so its interior points are only inserted once.
pub(crate) fn retain_edge_points(hull: &[DVec2], points: &[DVec2]) -> Vec<DVec2> {
    let edge_count = match hull.len() {
        0 | 1 => return hull.to_vec(),
        2 => 1,
        n => n,
    };

    let mut result = Vec::with_capacity(hull.len());
    let mut on_edge: Vec<(f64, DVec2)> = Vec::new();

    for i in 0..edge_count {
        let start = hull[i];
        let end = hull[(i + 1) % hull.len()];
        let direction = end - start;

        on_edge.clear();
        on_edge.extend(points.iter().filter_map(|&point| {
            let along = direction.dot(point - start);
            let strictly_inside = orient2d(start, end, point) == 0.0
                && along > 0.0
                && (start - end).dot(point - end) > 0.0;
            strictly_inside.then_some((along, point))
        }));
        on_edge.sort_unstable_by(|(a, _), (b, _)| a.total_cmp(b));

        result.push(start);
        result.extend(on_edge.iter().map(|&(_, point)| point));
    }

    if edge_count == 1 {
        result.push(hull[1]);
    }

    result
}
