//! Error types for the tags index.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from [`CTagsIndex::reindex`](super::CTagsIndex::reindex).
///
/// Malformed tags-file lines never surface here; they are dropped during
/// parsing. Only failure to obtain the file content is an error.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Cannot read tags file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IndexError {
    /// Path of the tags file involved in the failure.
    pub fn path(&self) -> &std::path::Path {
        match self {
            IndexError::Read { path, .. } => path,
        }
    }
}

pub type IndexResult<T> = Result<T, IndexError>;
