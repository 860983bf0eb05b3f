//! Configuration for the tags index and its command-line front end.
//!
//! Layered configuration, later layers win:
//! - Default values
//! - TOML configuration file (`.ctags-index/settings.toml`)
//! - Environment variable overrides
//! - CLI argument overrides (applied by the caller)
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `CTI_` and use double underscores
//! to separate nested levels:
//! - `CTI_INDEX__TAGS_FILE=tags` sets `index.tags_file`
//! - `CTI_GENERATOR__COMMAND=uctags` sets `generator.command`
//! - `CTI_LOGGING__DEFAULT=debug` sets `logging.default`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::index::DEFAULT_TAGS_FILE;

/// Directory holding the settings file, searched for from the current directory upwards.
pub const CONFIG_DIR: &str = ".ctags-index";
pub const CONFIG_FILE: &str = "settings.toml";
const ENV_PREFIX: &str = "CTI_";

/// Placeholder in generator arguments replaced by the tags-file name.
pub const TAGS_FILE_PLACEHOLDER: &str = "{tagsfile}";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Workspace root the tags file lives in (where .ctags-index is located)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,

    /// Tags-file location
    #[serde(default)]
    pub index: IndexConfig,

    /// External tag generator
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Log levels
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IndexConfig {
    /// Tags-file name, relative to the workspace root
    #[serde(default = "default_tags_file")]
    pub tags_file: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GeneratorConfig {
    /// Executable that writes the tags file
    #[serde(default = "default_generator_command")]
    pub command: String,

    /// Arguments; `{tagsfile}` is replaced by `index.tags_file`
    #[serde(default = "default_generator_args")]
    pub args: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Level for every target without an explicit override
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-target overrides, e.g. `ctags_index = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_tags_file() -> String {
    DEFAULT_TAGS_FILE.to_string()
}
fn default_generator_command() -> String {
    "ctags".to_string()
}
fn default_generator_args() -> Vec<String> {
    vec![
        "--excmd=number".to_string(),
        "--fields=+n".to_string(),
        "-R".to_string(),
        "-f".to_string(),
        TAGS_FILE_PLACEHOLDER.to_string(),
        ".".to_string(),
    ]
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            workspace_root: None,
            index: IndexConfig::default(),
            generator: GeneratorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            tags_file: default_tags_file(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            command: default_generator_command(),
            args: default_generator_args(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl GeneratorConfig {
    /// Arguments with the tags-file placeholder substituted.
    pub fn resolved_args(&self, tags_file: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace(TAGS_FILE_PLACEHOLDER, tags_file))
            .collect()
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        // Try to find the workspace root by looking for .ctags-index directory
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));

        Self::layered(&config_path).map(|mut settings| {
            // If workspace_root is not set in config, detect it
            if settings.workspace_root.is_none() {
                settings.workspace_root = Self::workspace_root();
            }
            settings
        })
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::layered(path.as_ref())
    }

    fn layered(config_path: &Path) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Settings::default()))
            // Layer in config file if it exists
            .merge(Toml::file(config_path))
            // Double underscore separates nested levels, single underscore
            // stays within field names
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
            .extract()
            .map_err(Box::new)
    }

    /// Find the workspace config by looking for .ctags-index directory
    /// Searches from current directory up to root
    fn find_workspace_config() -> Option<PathBuf> {
        Self::workspace_root().map(|root| root.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Get the workspace root directory (where .ctags-index is located)
    pub fn workspace_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .find(|ancestor| ancestor.join(CONFIG_DIR).is_dir())
            .map(Path::to_path_buf)
    }

    /// Directory the tags file is resolved against: the configured workspace
    /// root, otherwise the current directory.
    pub fn resolved_root(&self) -> PathBuf {
        self.workspace_root
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Save current configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let parent = path.as_ref().parent().ok_or("Invalid path")?;
        std::fs::create_dir_all(parent)?;

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Create a default settings file in the current directory
    pub fn init_config_file(force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = PathBuf::from(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err("Configuration file already exists. Use --force to overwrite".into());
        }

        let mut settings = Settings::default();
        if let Ok(current_dir) = std::env::current_dir() {
            settings.workspace_root = Some(current_dir);
        }

        settings.save(&config_path)?;
        Ok(config_path)
    }
}
