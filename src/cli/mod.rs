//! CLI module: argument parsing and command dispatch.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};

use crate::config::Settings;
use crate::index::CTagsIndex;
use crate::io::{ExitCode, OutputFormat};

/// Fold global CLI overrides into the loaded settings.
pub fn apply_overrides(cli: &Cli, settings: &mut Settings) {
    if let Some(root) = &cli.root {
        settings.workspace_root = Some(root.clone());
    }
    if let Some(tags_file) = &cli.tags_file {
        settings.index.tags_file = tags_file.clone();
    }
}

/// Dispatch a parsed command.
pub async fn run(command: Commands, settings: &Settings) -> ExitCode {
    match command {
        Commands::Init { force } => commands::init::run_init(force),
        Commands::Config => commands::init::run_config(settings),
        Commands::Reindex => {
            let index = open_index(settings);
            commands::reindex::run(&index).await
        }
        Commands::Lookup { symbol, json } => {
            let index = open_index(settings);
            let format = OutputFormat::from_json_flag(json);
            commands::lookup::run_lookup(&index, &symbol, format).await
        }
        Commands::Goto { symbol, json } => {
            let index = open_index(settings);
            let format = OutputFormat::from_json_flag(json);
            commands::lookup::run_goto(&index, &symbol, format).await
        }
        Commands::Define {
            file,
            line,
            column,
            json,
        } => {
            let index = open_index(settings);
            commands::lookup::run_define(
                &index,
                &file,
                line,
                column,
                OutputFormat::from_json_flag(json),
            )
            .await
        }
        Commands::Regenerate => {
            let index = open_index(settings);
            commands::regenerate::run(&index, settings).await
        }
    }
}

fn open_index(settings: &Settings) -> CTagsIndex {
    CTagsIndex::new(settings.resolved_root(), settings.index.tags_file.clone())
}
