//! Run configuration.
//!
//! Defaults match the reference behavior (10 generations, one thread) and
//! can be overridden through environment variables.

use std::env;
use std::str::FromStr;

use log::warn;

/// Number of generations to advance when `LIFE_GENERATIONS` is unset.
pub const DEFAULT_GENERATIONS: u64 = 10;

/// Worker threads when `LIFE_THREADS` is unset. 1 selects the sequential engine.
pub const DEFAULT_THREADS: u8 = 1;

pub const GENERATIONS_VAR: &str = "LIFE_GENERATIONS";
pub const THREADS_VAR: &str = "LIFE_THREADS";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub generations: u64,
    pub threads: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            generations: DEFAULT_GENERATIONS,
            threads: DEFAULT_THREADS,
        }
    }
}

/// Parse an optional setting, falling back to `default` (with a warning) on bad input.
fn parse_or<T: FromStr + Copy>(name: &str, raw: Option<&str>, default: T) -> T {
    match raw.map(str::trim) {
        None | Some("") => default,
        Some(value) => value.parse().unwrap_or_else(|_| {
            warn!("ignoring invalid {name}={value:?}");
            default
        }),
    }
}

impl Config {
    /// Build a config from raw (possibly absent) setting values.
    pub fn from_values(generations: Option<&str>, threads: Option<&str>) -> Self {
        Config {
            generations: parse_or(GENERATIONS_VAR, generations, DEFAULT_GENERATIONS),
            threads: parse_or(THREADS_VAR, threads, DEFAULT_THREADS),
        }
    }

    /// Read `LIFE_GENERATIONS` and `LIFE_THREADS` from the environment.
    pub fn from_env() -> Self {
        let generations = env::var(GENERATIONS_VAR).ok();
        let threads = env::var(THREADS_VAR).ok();
        Self::from_values(generations.as_deref(), threads.as_deref())
    }

    /// Whether stepping should go through the thread pool.
    pub fn is_parallel(&self) -> bool {
        self.threads > 1
    }
}
