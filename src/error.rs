//! Stream error types.

use std::io;

use thiserror::Error;

/// Errors raised at the input/output boundary.
///
/// Malformed lines are never errors; only the stream itself can fail.
#[derive(Debug, Error)]
pub enum StreamError {
    /// Reading the input stream failed.
    #[error("failed to read input")]
    Read(#[source] io::Error),

    /// Writing the output stream failed.
    #[error("failed to write output")]
    Write(#[source] io::Error),
}
