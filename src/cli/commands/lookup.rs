//! Lookup, goto and define commands.

use std::path::Path;

use crate::index::CTagsIndex;
use crate::io::{ExitCode, OutputFormat, render_lookup};
use crate::query::word_at;

use super::reindex::reindex_with_status;

/// List every definition of `symbol`.
pub async fn run_lookup(index: &CTagsIndex, symbol: &str, format: OutputFormat) -> ExitCode {
    if !reindex_with_status(index).await {
        return ExitCode::GeneralError;
    }
    report(index, symbol, false, format).await
}

/// Print only the first definition of `symbol`, the jump target.
pub async fn run_goto(index: &CTagsIndex, symbol: &str, format: OutputFormat) -> ExitCode {
    if !reindex_with_status(index).await {
        return ExitCode::GeneralError;
    }
    report(index, symbol, true, format).await
}

/// Resolve the word at a 1-based `line`/`column` of `file`.
pub async fn run_define(
    index: &CTagsIndex,
    file: &Path,
    line: u32,
    column: u32,
    format: OutputFormat,
) -> ExitCode {
    let text = match tokio::fs::read_to_string(file).await {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: cannot read {}: {e}", file.display());
            return ExitCode::GeneralError;
        }
    };

    let line0 = line.saturating_sub(1) as usize;
    let column0 = column.saturating_sub(1) as usize;
    let Some(query) = word_at(&text, line0, column0) else {
        eprintln!("No symbol at {}:{line}:{column}", file.display());
        return ExitCode::NotFound;
    };
    crate::debug_event!("cli", "define", "{query:?} at {}:{line}:{column}", file.display());

    if !reindex_with_status(index).await {
        return ExitCode::GeneralError;
    }
    report(index, query, false, format).await
}

async fn report(
    index: &CTagsIndex,
    symbol: &str,
    first_only: bool,
    format: OutputFormat,
) -> ExitCode {
    match index.lookup(symbol).await {
        Some(matches) => {
            let shown = if first_only { &matches[..1] } else { &matches[..] };
            for m in shown {
                tracing::debug!("[cli] \"{symbol}\" matches {}:{}", m.path, m.lineno);
            }
            println!("{}", render_lookup(symbol, shown, format));
            ExitCode::Success
        }
        None => {
            let rendered = render_lookup(symbol, &[], format);
            match format {
                OutputFormat::Json => println!("{rendered}"),
                OutputFormat::Text => eprintln!("{rendered}"),
            }
            ExitCode::NotFound
        }
    }
}
