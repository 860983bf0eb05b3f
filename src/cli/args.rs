//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Jump to definition from a ctags tags file
#[derive(Parser, Debug)]
#[command(
    name = "ctags-index",
    version = env!("CARGO_PKG_VERSION"),
    about = "Jump to definition from a ctags tags file",
    long_about = "Load a ctags tags file and answer exact-name symbol queries.",
    next_line_help = true,
    styles = clap_cargo_style(),
    after_help = "Quick Start:\n  $ ctags-index regenerate        # run ctags, then index tags_vscode\n  $ ctags-index lookup main       # every definition of main\n  $ ctags-index goto main         # first definition only\n  $ ctags-index define src/a.c 12 9"
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Workspace root containing the tags file (overrides config)
    #[arg(short, long, global = true, env = "CTI_ROOT")]
    pub root: Option<PathBuf>,

    /// Tags-file name relative to the root (overrides config)
    #[arg(short, long, global = true)]
    pub tags_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize project
    #[command(about = "Set up .ctags-index directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings")]
    Config,

    /// Reload the tags file
    #[command(about = "Load the tags file and report how many tags it holds")]
    Reindex,

    /// List every definition of a symbol
    #[command(
        about = "List all definitions of a symbol",
        after_help = "Examples:\n  ctags-index lookup main\n  ctags-index lookup Point --json"
    )]
    Lookup {
        /// Exact symbol name (case-sensitive)
        symbol: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the first definition of a symbol
    #[command(about = "Print the location to jump to for a symbol")]
    Goto {
        /// Exact symbol name (case-sensitive)
        symbol: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Resolve the identifier at a position in a source file
    #[command(
        about = "Find definitions of the word at FILE:LINE:COLUMN",
        after_help = "LINE and COLUMN are 1-based, COLUMN counts characters."
    )]
    Define {
        /// Source file containing the reference
        file: PathBuf,

        /// 1-based line number
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        line: u32,

        /// 1-based column
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        column: u32,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Run the tag generator, then reload
    #[command(about = "Regenerate the tags file with ctags, then reindex")]
    Regenerate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lookup_with_overrides() {
        let cli = Cli::try_parse_from([
            "ctags-index",
            "--root",
            "/ws",
            "--tags-file",
            "tags",
            "lookup",
            "main",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/ws")));
        assert_eq!(cli.tags_file.as_deref(), Some("tags"));
        match cli.command {
            Commands::Lookup { symbol, json } => {
                assert_eq!(symbol, "main");
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_define_rejects_zero_positions() {
        assert!(Cli::try_parse_from(["ctags-index", "define", "a.c", "0", "1"]).is_err());
        assert!(Cli::try_parse_from(["ctags-index", "define", "a.c", "1", "0"]).is_err());
        assert!(Cli::try_parse_from(["ctags-index", "define", "a.c", "3", "7"]).is_ok());
    }
}
