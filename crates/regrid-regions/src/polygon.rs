//! Lattice polygon helpers.

use regrid_core::Point;

/// Area of the simple polygon whose vertices are `points`, in order.
///
/// Uses the shoelace formula; the polygon is closed implicitly from the
/// last vertex back to the first. Fewer than three vertices give 0.
pub fn shoelace_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice: i64 = points
        .windows(2)
        .map(|w| cross(w[0], w[1]))
        .sum();
    if let (Some(&last), Some(&first)) = (points.last(), points.first()) {
        twice += cross(last, first);
    }
    twice.abs() as f64 / 2.0
}

#[inline]
fn cross(a: Point, b: Point) -> i64 {
    i64::from(a.x) * i64::from(b.y) - i64::from(b.x) * i64::from(a.y)
}

/// Number of lattice points strictly inside a lattice polygon, by Pick's
/// theorem `A = I + B/2 - 1`.
///
/// `boundary` is the number of lattice points on the boundary. Negative
/// results are clamped to 0.
pub fn interior_points(area: f64, boundary: f64) -> f64 {
    (area - boundary / 2.0 + 1.0).max(0.0)
}
