//! Task file parsing and checkbox mutation.
//!
//! - [`parser`]: recognizes checkbox lines in the bracket and glyph dialects
//! - [`mutator`]: rewrites one checkbox inside the workspace

pub mod mutator;
pub mod parser;

pub use mutator::toggle;
pub use parser::{match_line, parse_content, parse_file, Dialect, LineMatch};
