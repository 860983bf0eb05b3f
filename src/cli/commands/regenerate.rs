//! Regenerate command - run the tag generator, then reindex.

use crate::config::Settings;
use crate::generator::TagGenerator;
use crate::index::CTagsIndex;
use crate::io::ExitCode;

use super::reindex;

/// Run the configured generator in the workspace root and reload.
///
/// A generator failure is reported but not fatal: the tags file may still
/// exist from an earlier run, and reindexing picks up whatever is on disk.
pub async fn run(index: &CTagsIndex, settings: &Settings) -> ExitCode {
    let generator =
        TagGenerator::from_config(&settings.generator, index.root(), index.tags_file());
    eprintln!("Regenerating CTags ({})", generator.command_line());

    if let Err(e) = generator.run().await {
        tracing::warn!("[generator] {e}");
        eprintln!("Warning: {e}");
    }

    reindex::run(index).await
}
