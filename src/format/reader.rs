//! Life 1.06 reader.

use std::io::BufRead;

use log::{debug, trace};

use super::HEADER;
use crate::error::StreamError;
use crate::state::{GridState, Point};

/// Parse one trimmed line into a point.
///
/// Returns `None` for anything that is not exactly two i64 tokens.
fn parse_line(line: &str) -> Option<Point> {
    let mut tokens = line.split_whitespace();
    let (x, y) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(x), Some(y), None) => (x, y),
        _ => return None,
    };
    let x = x.parse::<i64>().ok()?;
    let y = y.parse::<i64>().ok()?;
    Some(Point::new(x, y))
}

/// Insert the point on `line`, if any, into `state`.
fn ingest_line(state: &mut GridState, line_no: usize, line: &str) {
    let line = line.trim();
    if line == HEADER {
        return;
    }
    match parse_line(line) {
        Some(p) => {
            state.insert(p);
        }
        None => trace!("skipping line {line_no}: {line:?}"),
    }
}

/// Read a Life 1.06 stream into a new state.
///
/// Lines that are not a header or a pair of i64 coordinates are skipped,
/// including lines that are not valid UTF-8. Only a failure of the
/// underlying reader is reported.
pub fn read_life106<R: BufRead>(mut input: R) -> Result<GridState, StreamError> {
    let mut state = GridState::new();
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        let n = input
            .read_until(b'\n', &mut buf)
            .map_err(StreamError::Read)?;
        if n == 0 {
            break;
        }
        line_no += 1;
        ingest_line(&mut state, line_no, &String::from_utf8_lossy(&buf));
    }
    debug!("read {} living cells", state.len());
    Ok(state)
}

/// Parse an in-memory Life 1.06 document.
pub fn parse_life106(text: &str) -> GridState {
    let mut state = GridState::new();
    for (idx, line) in text.lines().enumerate() {
        ingest_line(&mut state, idx + 1, line);
    }
    state
}
