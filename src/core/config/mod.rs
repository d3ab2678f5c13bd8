//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! The format string is resolved in this order (earlier wins):
//! 1. `--format` flag
//! 2. `$GITPROMPT_FORMAT` (when non-empty)
//! 3. `format` in the config file
//! 4. [`crate::render::DEFAULT_FORMAT`]
//!
//! # Config Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$GITPROMPT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitprompt/config.toml`
//! 3. `~/.gitprompt/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use gitprompt::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! let format = config.resolve_format(None, None);
//! println!("Format: {}", format);
//! ```

pub mod schema;

pub use schema::PromptConfig;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::render::DEFAULT_FORMAT;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "GITPROMPT_CONFIG";

/// Environment variable holding a format string.
pub const FORMAT_ENV: &str = "GITPROMPT_FORMAT";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Values from the config file (defaults if none was found)
    pub file: PromptConfig,
    /// Problems that did not prevent loading
    warnings: Vec<ConfigWarning>,
}

impl Config {
    /// Load configuration from the process environment and home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    /// A missing config file is not an error (defaults are used).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok(), dirs::home_dir())
    }

    /// Load configuration using the given environment lookup and home directory.
    pub fn load_with(
        env: impl Fn(&str) -> Option<String>,
        home: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let mut warnings = Vec::new();

        if let Some(explicit) = env(CONFIG_ENV).filter(|p| !p.is_empty()) {
            let explicit = PathBuf::from(explicit);
            if !explicit.exists() {
                warnings.push(ConfigWarning {
                    message: format!("${} points to a missing file, ignoring it", CONFIG_ENV),
                    path: explicit,
                });
            }
        }

        for path in Self::candidate_paths(&env, home) {
            if path.exists() {
                log::debug!("loading config from {}", path.display());
                let file = Self::read_config(&path)?;
                file.validate()?;
                return Ok(Config {
                    file,
                    warnings,
                });
            }
        }

        log::debug!("no config file found, using defaults");
        Ok(Config {
            warnings,
            ..Config::default()
        })
    }

    /// Config file locations in search order.
    pub fn candidate_paths(
        env: impl Fn(&str) -> Option<String>,
        home: Option<PathBuf>,
    ) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(path) = env(CONFIG_ENV).filter(|p| !p.is_empty()) {
            paths.push(PathBuf::from(path));
        }

        if let Some(xdg_home) = env("XDG_CONFIG_HOME").filter(|p| !p.is_empty()) {
            paths.push(PathBuf::from(xdg_home).join("gitprompt/config.toml"));
        }

        if let Some(home) = home {
            paths.push(home.join(".gitprompt/config.toml"));
        }

        paths
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<PromptConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Pick the format string.
    ///
    /// An explicit flag always wins, even when empty. The environment value
    /// is only used when non-empty.
    pub fn resolve_format<'a>(
        &'a self,
        flag: Option<&'a str>,
        env_format: Option<&'a str>,
    ) -> &'a str {
        if let Some(format) = flag {
            return format;
        }
        if let Some(format) = env_format.filter(|f| !f.is_empty()) {
            return format;
        }
        self.file.format.as_deref().unwrap_or(DEFAULT_FORMAT)
    }

    /// Whether zsh padding is on when the flag is absent.
    ///
    /// Defaults to `false` if not configured.
    pub fn zsh(&self) -> bool {
        self.file.zsh.unwrap_or(false)
    }

    /// Warnings generated while loading.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }
}
