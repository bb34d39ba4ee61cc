//! Core automaton logic.
//!
//! This module contains the neighbor geometry and the generation step, in a
//! sequential and a thread-pool flavour. The `format` module and the binary
//! call into these functions.

pub mod grid;
pub mod parallel;
pub mod stepping;

pub use grid::compute_valid_neighbors;
pub use parallel::ParallelStepper;
pub use stepping::{advance, advance_one_generation};
