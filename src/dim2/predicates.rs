use glam::DVec2;

/// Gives the orientation of the triangle formed by `a`, `b`, `c`.
///
/// This is the 2D cross product `(b - a) × (c - a)`, evaluated with adaptive
/// precision so that its sign is exact.
///
/// - `orientation > 0`: counterclockwise, `c` is left of the directed line `a -> b`
/// - `orientation < 0`: clockwise, `c` is right of the directed line `a -> b`
/// - `orientation == 0`: collinear
#[inline]
pub(crate) fn orient2d(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    use robust::Coord;
    robust::orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    )
}

/// Returns `true` if `query` lies strictly to the left of the directed line `from -> to`.
///
/// Points on the line are not to the left of it.
#[inline]
pub(crate) fn is_left(from: DVec2, to: DVec2, query: DVec2) -> bool {
    orient2d(from, to, query) > 0.0
}

/// Returns a measure of how far `query` is from the infinite line through `from` and `to`.
///
/// The value is twice the area of the triangle `from, to, query`, so it is only
/// proportional to the Euclidean distance. It is only meaningful for ranking
/// points against the same baseline.
#[inline]
pub(crate) fn baseline_distance(from: DVec2, to: DVec2, query: DVec2) -> f64 {
    orient2d(from, to, query).abs()
}
