//! Reindex command - reload the tags file and report the tag count.

use crate::index::CTagsIndex;
use crate::io::ExitCode;

/// Reload the index, printing the outcome the way the status bar would.
pub async fn run(index: &CTagsIndex) -> ExitCode {
    if reindex_with_status(index).await {
        ExitCode::Success
    } else {
        ExitCode::GeneralError
    }
}

/// Reindex and report on stderr. Returns whether a snapshot was published.
///
/// Query commands call this first and stop with `GeneralError` when it returns
/// `false`: a fresh process has no earlier snapshot to fall back on.
pub(crate) async fn reindex_with_status(index: &CTagsIndex) -> bool {
    match index.reindex().await {
        Ok(tags) => {
            eprintln!("CTags indexing complete. Indexed {} tags.", tags.len());
            true
        }
        Err(e) => {
            eprintln!("Failed to index CTags. {e}.");
            false
        }
    }
}
