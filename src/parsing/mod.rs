//! Tags-file parsing.

pub mod tags_file;

pub use tags_file::{TagsFileParser, parse_line, parse_tags};
