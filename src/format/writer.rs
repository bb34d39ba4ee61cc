//! Life 1.06 writer.

use std::io::Write;

use log::debug;

use super::HEADER;
use crate::error::StreamError;
use crate::state::GridState;

/// Render the coordinate lines of `state`, sorted as text (`"10 0"` before `"9 0"`).
fn coordinate_lines(state: &GridState) -> Vec<String> {
    let mut lines: Vec<String> = state.iter().map(|p| format!("{} {}", p.x, p.y)).collect();
    lines.sort_unstable();
    lines
}

/// Write `state` as a Life 1.06 document.
///
/// The header is always followed by a newline. Coordinate lines are joined
/// by newlines with none after the last one.
pub fn write_life106<W: Write>(state: &GridState, mut output: W) -> Result<(), StreamError> {
    writeln!(output, "{HEADER}").map_err(StreamError::Write)?;

    let lines = coordinate_lines(state);
    if !lines.is_empty() {
        output
            .write_all(lines.join("\n").as_bytes())
            .map_err(StreamError::Write)?;
    }
    output.flush().map_err(StreamError::Write)?;

    debug!("wrote {} living cells", lines.len());
    Ok(())
}

/// Render `state` as a Life 1.06 document.
pub fn render_life106(state: &GridState) -> String {
    let lines = coordinate_lines(state);
    format!("{HEADER}\n{}", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::parse_life106;
    use crate::state::Point;
    use std::io;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_empty_state_is_header_only() {
        let mut out = Vec::new();
        write_life106(&GridState::new(), &mut out).unwrap();
        assert_eq!(out, b"#Life 1.06\n");
        assert_eq!(render_life106(&GridState::new()), "#Life 1.06\n");
    }

    #[test]
    fn test_lines_sorted_as_text() {
        let state: GridState = [(10, 0), (9, 0), (-1, 5), (0, -1), (0, 1)]
            .iter()
            .map(|&(x, y)| Point::new(x, y))
            .collect();

        // "-" < "0" < "1" < "9": text order, not numeric order
        let expected = "#Life 1.06\n-1 5\n0 -1\n0 1\n10 0\n9 0";

        let mut out = Vec::new();
        write_life106(&state, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
        assert_eq!(render_life106(&state), expected);
    }

    #[test]
    fn test_no_trailing_newline() {
        let state: GridState = [Point::new(1, 1)].into_iter().collect();
        assert_eq!(render_life106(&state), "#Life 1.06\n1 1");
    }

    #[test]
    fn test_extreme_coordinates() {
        let state: GridState = [Point::new(i64::MIN, i64::MAX)].into_iter().collect();
        assert_eq!(
            render_life106(&state),
            "#Life 1.06\n-9223372036854775808 9223372036854775807"
        );
    }

    #[test]
    fn test_round_trip() {
        let state: GridState = [
            Point::new(0, 0),
            Point::new(-12, 7),
            Point::new(i64::MAX, i64::MIN),
            Point::new(3, -3),
        ]
        .into_iter()
        .collect();

        assert_eq!(parse_life106(&render_life106(&state)), state);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let err = write_life106(&GridState::new(), BrokenPipe).unwrap_err();
        assert!(matches!(err, StreamError::Write(_)));
    }
}
