//! Core state structure and helper methods.

use std::collections::hash_set;
use std::collections::HashSet;

use crate::automaton::grid::offset_axis;

/// A cell coordinate on the unbounded i64 plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

/// The living set of a Game of Life board.
///
/// Presence means alive, absence means dead. Nothing else is stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridState {
    pub living: HashSet<Point>,
}

impl GridState {
    /// Create an empty state (every cell dead).
    pub fn new() -> Self {
        GridState {
            living: HashSet::new(),
        }
    }

    /// Mark a cell alive. Returns false if it was already alive.
    pub fn insert(&mut self, p: Point) -> bool {
        self.living.insert(p)
    }

    #[inline]
    pub fn is_living(&self, p: Point) -> bool {
        self.living.contains(&p)
    }

    pub fn len(&self) -> usize {
        self.living.len()
    }

    pub fn is_empty(&self) -> bool {
        self.living.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Point> {
        self.living.iter()
    }

    /// Count living neighbors using the Moore neighborhood (8 neighbors).
    ///
    /// Each direction is guarded against the edge of the i64 range, so a
    /// cell on `i64::MIN`/`i64::MAX` only sees the neighbors that exist.
    pub fn living_neighbor_count(&self, p: Point) -> u8 {
        let Point { x, y } = p;
        let mut count = 0;

        for dx in -1i64..=1 {
            let Some(nx) = offset_axis(x, dx) else {
                continue;
            };
            for dy in -1i64..=1 {
                // Skip the center cell
                if dx == 0 && dy == 0 {
                    continue;
                }
                let Some(ny) = offset_axis(y, dy) else {
                    continue;
                };
                if self.is_living(Point::new(nx, ny)) {
                    count += 1;
                }
            }
        }

        count
    }
}

impl FromIterator<Point> for GridState {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        GridState {
            living: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a GridState {
    type Item = &'a Point;
    type IntoIter = hash_set::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.living.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(points: &[(i64, i64)]) -> GridState {
        points.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_new_is_empty() {
        let state = GridState::new();
        assert!(state.is_empty());
        assert_eq!(state.len(), 0);
        assert!(!state.is_living(Point::new(0, 0)));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut state = GridState::new();
        assert!(state.insert(Point::new(3, -4)));
        assert!(!state.insert(Point::new(3, -4)));
        assert_eq!(state.len(), 1);
        assert!(state.is_living(Point::new(3, -4)));
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = grid(&[(0, 0), (1, 1), (2, 2)]);
        let b = grid(&[(2, 2), (0, 0), (1, 1)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_count_neighbors_interior() {
        // 3x3 block, all alive
        let mut points = Vec::new();
        for x in -1..=1 {
            for y in -1..=1 {
                points.push((x, y));
            }
        }
        let state = grid(&points);

        // Center sees all 8, itself excluded
        assert_eq!(state.living_neighbor_count(Point::new(0, 0)), 8);
        // Corner of the block sees 3
        assert_eq!(state.living_neighbor_count(Point::new(1, 1)), 3);
        // Edge of the block sees 5
        assert_eq!(state.living_neighbor_count(Point::new(1, 0)), 5);
        // Diagonal outside the block touches one corner
        assert_eq!(state.living_neighbor_count(Point::new(2, 2)), 1);
        // Far cell should have 0 neighbors
        assert_eq!(state.living_neighbor_count(Point::new(10, 10)), 0);
    }

    #[test]
    fn test_count_neighbors_does_not_wrap() {
        // Living cells on the opposite edge must not be seen through the boundary
        let state = grid(&[(i64::MIN, 0), (i64::MIN, 1), (i64::MIN, -1)]);
        assert_eq!(state.living_neighbor_count(Point::new(i64::MAX, 0)), 0);

        let state = grid(&[(0, i64::MAX), (1, i64::MAX)]);
        assert_eq!(state.living_neighbor_count(Point::new(0, i64::MIN)), 0);
    }

    #[test]
    fn test_count_neighbors_at_corner() {
        let state = grid(&[
            (i64::MAX - 1, i64::MAX),
            (i64::MAX - 1, i64::MAX - 1),
            (i64::MAX, i64::MAX - 1),
        ]);
        assert_eq!(
            state.living_neighbor_count(Point::new(i64::MAX, i64::MAX)),
            3
        );

        let state = grid(&[
            (i64::MIN + 1, i64::MIN),
            (i64::MIN + 1, i64::MIN + 1),
            (i64::MIN, i64::MIN + 1),
        ]);
        assert_eq!(
            state.living_neighbor_count(Point::new(i64::MIN, i64::MIN)),
            3
        );
    }
}
