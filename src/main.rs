//! Command-line entry point.
//!
//! Reads a Life 1.06 board from stdin, advances it (10 generations unless
//! `LIFE_GENERATIONS` says otherwise) and writes the result to stdout.
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::error::Error;
use std::io;
use std::process;

use log::error;

use life106::Config;

fn main() {
    // Initialize logger from environment variable (default to warn level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = life106::run(&config, stdin.lock(), stdout.lock()) {
        match err.source() {
            Some(source) => error!("{err}: {source}"),
            None => error!("{err}"),
        }
        process::exit(1);
    }
}
