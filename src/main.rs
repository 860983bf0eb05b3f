use clap::Parser;
use ctags_index::cli::{self, Cli, Commands};
use ctags_index::{Settings, logging};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let mut settings = loaded.unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        eprintln!("Using default configuration for now.");
        Settings::default()
    });
    cli::apply_overrides(&cli, &mut settings);

    logging::init_with_config(&settings.logging);
    if !matches!(cli.command, Commands::Init { .. }) {
        tracing::debug!(
            "[cli] workspace root {}, tags file {}",
            settings.resolved_root().display(),
            settings.index.tags_file
        );
    }

    cli::run(cli.command, &settings).await.into()
}
