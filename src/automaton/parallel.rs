//! Multi-threaded stepping over a frozen snapshot.
//!
//! The death pass and birth pass are split across a rayon thread pool.
//! Core invariant: workers only read the generation-N snapshot. Each worker
//! accumulates its own partial sets, which are merged afterwards, so the
//! order in which cells are processed doesn't affect the result.

use std::collections::HashSet;

use log::{debug, warn};
use rayon::prelude::*;

use super::grid::compute_valid_neighbors;
use super::stepping::{should_be_born, should_die};
use crate::state::{GridState, Point};

/// Runs generations on a dedicated rayon thread pool.
pub struct ParallelStepper {
    /// Rayon thread pool (at least 1 thread).
    pub thread_pool: rayon::ThreadPool,
}

/// Union two partial results, keeping the larger set as the accumulator.
fn merge(mut a: HashSet<Point>, mut b: HashSet<Point>) -> HashSet<Point> {
    if a.len() < b.len() {
        std::mem::swap(&mut a, &mut b);
    }
    a.extend(b);
    a
}

impl ParallelStepper {
    /// Create a stepper with the given thread pool size. 0 is treated as 1.
    pub fn new(num_threads: u8) -> Self {
        let num_threads = if num_threads == 0 {
            1
        } else {
            num_threads as usize
        };
        let thread_pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
        {
            Ok(pool) => pool,
            Err(err) => {
                warn!("could not build a {num_threads}-thread pool ({err}), using 1 thread");
                Self::single_thread_pool()
            }
        };

        debug!(
            "parallel stepper ready with {} threads",
            thread_pool.current_num_threads()
        );
        ParallelStepper { thread_pool }
    }

    fn single_thread_pool() -> rayon::ThreadPool {
        rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap_or_else(|err| panic!("failed to build a single-thread pool: {err}"))
    }

    /// Number of worker threads in the pool.
    pub fn num_threads(&self) -> usize {
        self.thread_pool.current_num_threads()
    }

    /// Compute the next generation of `snapshot`.
    ///
    /// Produces exactly what `stepping::advance_one_generation` produces.
    pub fn step(&self, snapshot: &GridState) -> GridState {
        self.thread_pool.install(|| {
            let survivors = snapshot
                .living
                .par_iter()
                .filter(|&&p| !should_die(snapshot.living_neighbor_count(p)))
                .copied()
                .fold(HashSet::new, |mut acc, p| {
                    acc.insert(p);
                    acc
                })
                .reduce(HashSet::new, merge);

            // The same dead cell may be found by several workers; the merge collapses it.
            let candidates = snapshot
                .living
                .par_iter()
                .fold(HashSet::new, |mut acc, &p| {
                    for n in compute_valid_neighbors(p) {
                        if !snapshot.is_living(n) {
                            acc.insert(n);
                        }
                    }
                    acc
                })
                .reduce(HashSet::new, merge);

            let births = candidates
                .into_par_iter()
                .filter(|&p| should_be_born(snapshot.living_neighbor_count(p)))
                .fold(HashSet::new, |mut acc, p| {
                    acc.insert(p);
                    acc
                })
                .reduce(HashSet::new, merge);

            GridState {
                living: merge(survivors, births),
            }
        })
    }

    /// Apply `step` exactly `generations` times.
    pub fn advance(&self, state: GridState, generations: u64) -> GridState {
        let mut state = state;
        for _ in 0..generations {
            state = self.step(&state);
        }
        state
    }
}
