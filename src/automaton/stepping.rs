//! Game of Life stepping with B3/S23 rules.

use std::collections::HashSet;

use log::trace;

use super::grid::compute_valid_neighbors;
use crate::state::{GridState, Point};

/// A living cell with fewer than 2 or more than 3 living neighbors dies.
#[inline]
pub fn should_die(living_neighbors: u8) -> bool {
    living_neighbors < 2 || living_neighbors > 3
}

/// A dead cell with exactly 3 living neighbors is born.
#[inline]
pub fn should_be_born(living_neighbors: u8) -> bool {
    living_neighbors == 3
}

/// Collect dead cells adjacent to at least one living cell of `snapshot`.
pub fn birth_candidates(snapshot: &GridState) -> HashSet<Point> {
    let mut candidates = HashSet::new();
    for &p in snapshot {
        for n in compute_valid_neighbors(p) {
            if !snapshot.is_living(n) {
                candidates.insert(n);
            }
        }
    }
    candidates
}

/// Step the board forward by one generation using B3/S23 rules.
///
/// B3/S23 rules:
/// - Survival: A living cell with 2 or 3 living neighbors survives
/// - Birth: A dead cell with exactly 3 living neighbors becomes alive
/// - Moore neighborhood: 8 neighbors, clipped at the edge of the i64 range
///
/// Every neighbor count is taken against `snapshot`; the next generation is
/// built in a separate set and returned.
pub fn advance_one_generation(snapshot: &GridState) -> GridState {
    let mut next = snapshot.living.clone();

    // Deaths
    for &p in snapshot.iter() {
        if should_die(snapshot.living_neighbor_count(p)) {
            next.remove(&p);
        }
    }

    // Births
    let candidates = birth_candidates(snapshot);
    for p in candidates {
        if should_be_born(snapshot.living_neighbor_count(p)) {
            next.insert(p);
        }
    }

    trace!(
        "generation step: {} -> {} living cells",
        snapshot.len(),
        next.len()
    );

    GridState { living: next }
}

/// Apply `advance_one_generation` exactly `generations` times.
pub fn advance(state: GridState, generations: u64) -> GridState {
    let mut state = state;
    for _ in 0..generations {
        state = advance_one_generation(&state);
    }
    state
}
