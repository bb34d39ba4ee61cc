//! Neighbor geometry on the bounded i64 plane.

use crate::state::Point;

/// Offsets of the Moore neighborhood, column by column (x-1, x, x+1).
const OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Step one cell along an axis, or `None` past the edge of the i64 range.
#[inline]
pub fn offset_axis(v: i64, d: i64) -> Option<i64> {
    match d {
        -1 if v == i64::MIN => None,
        1 if v == i64::MAX => None,
        _ => Some(v + d),
    }
}

/// Compute the valid neighbors of `p`.
///
/// Neighbors that would overflow i64 are left out rather than wrapped, so
/// an interior point yields 8 entries, an edge point 5 and a corner 3.
pub fn compute_valid_neighbors(p: Point) -> Vec<Point> {
    let mut neighbors = Vec::with_capacity(8);

    for &(dx, dy) in OFFSETS.iter() {
        if let (Some(nx), Some(ny)) = (offset_axis(p.x, dx), offset_axis(p.y, dy)) {
            neighbors.push(Point::new(nx, ny));
        }
    }

    neighbors
}
