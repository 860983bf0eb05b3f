//! Runs the external tag generator that writes the tags file.
//!
//! The index never calls this itself; front ends run it before
//! [`CTagsIndex::reindex`](crate::index::CTagsIndex::reindex) to pick up fresh data.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use thiserror::Error;
use tokio::process::Command;

use crate::config::GeneratorConfig;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to start '{command}' in {}: {source}", cwd.display())]
    Spawn {
        command: String,
        cwd: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: ExitStatus,
        stderr: String,
    },
}

pub type GenerateResult<T> = Result<T, GenerateError>;

/// External tags generator bound to a workspace.
#[derive(Debug, Clone)]
pub struct TagGenerator {
    command: String,
    args: Vec<String>,
    cwd: PathBuf,
}

impl TagGenerator {
    pub fn new(command: impl Into<String>, args: Vec<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            args,
            cwd: cwd.into(),
        }
    }

    /// Build from settings, writing `tags_file` inside `root`.
    pub fn from_config(config: &GeneratorConfig, root: &Path, tags_file: &str) -> Self {
        Self::new(
            config.command.clone(),
            config.resolved_args(tags_file),
            root.to_path_buf(),
        )
    }

    pub fn command_line(&self) -> String {
        let mut parts = vec![self.command.as_str()];
        parts.extend(self.args.iter().map(String::as_str));
        parts.join(" ")
    }

    /// Run the generator to completion in the workspace root.
    pub async fn run(&self) -> GenerateResult<()> {
        let command_line = self.command_line();
        crate::log_event!(
            "generator",
            "running",
            "{command_line} (in {})",
            self.cwd.display()
        );

        let output = Command::new(&self.command)
            .args(&self.args)
            .current_dir(&self.cwd)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| GenerateError::Spawn {
                command: command_line.clone(),
                cwd: self.cwd.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(GenerateError::Failed {
                command: command_line,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        crate::debug_event!("generator", "finished", "{command_line}");
        Ok(())
    }
}
