//! Life 1.06 - sparse Game of Life on the full i64 plane
//!
//! Reads a board in the Life 1.06 text format, advances it with the B3/S23
//! rules, and writes the result back in the same format. Cells on the edge of
//! the i64 range have fewer neighbors; nothing wraps around.

pub mod automaton;
pub mod config;
pub mod error;
pub mod format;
pub mod state;

pub use automaton::{advance, advance_one_generation, compute_valid_neighbors, ParallelStepper};
pub use config::Config;
pub use error::StreamError;
pub use format::{parse_life106, read_life106, render_life106, write_life106};
pub use state::{GridState, Point};

use std::io::{BufRead, Write};

use log::info;

/// Read a board from `input`, advance it per `config`, and write it to `output`.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    input: R,
    output: W,
) -> Result<(), StreamError> {
    let state = read_life106(input)?;
    info!(
        "advancing {} living cells by {} generations",
        state.len(),
        config.generations
    );

    let state = if config.is_parallel() {
        ParallelStepper::new(config.threads).advance(state, config.generations)
    } else {
        advance(state, config.generations)
    };

    info!(
        "{} living cells after {} generations",
        state.len(),
        config.generations
    );
    write_life106(&state, output)
}
