use serde::{Deserialize, Serialize};

/// One definition site read from a tags file.
///
/// Records carry no identity beyond `(symbol, path, lineno)`; two records with
/// the same triple are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagRecord {
    /// Identifier name, case-sensitive and never empty.
    pub symbol: CompactString,
    /// File path exactly as written in the tags file.
    pub path: CompactString,
    /// Zero-based line number within `path`.
    pub lineno: u32,
}

impl TagRecord {
    pub fn new(symbol: &str, path: &str, lineno: u32) -> Self {
        Self {
            symbol: compact_string(symbol),
            path: compact_string(path),
            lineno,
        }
    }

    /// One-based line number, the form editors and `path:line` output expect.
    pub fn display_line(&self) -> u32 {
        self.lineno + 1
    }

    /// `path:line` with a one-based line.
    pub fn location(&self) -> String {
        format!("{}:{}", self.path, self.display_line())
    }
}

pub type CompactString = Box<str>;

pub fn compact_string(s: &str) -> CompactString {
    s.into()
}
