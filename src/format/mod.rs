//! Life 1.06 text format.
//!
//! One `#Life 1.06` header line followed by one `X Y` coordinate pair per
//! living cell.

pub mod reader;
pub mod writer;

pub use reader::{parse_life106, read_life106};
pub use writer::{render_life106, write_life106};

/// Header line of the Life 1.06 format.
pub const HEADER: &str = "#Life 1.06";
