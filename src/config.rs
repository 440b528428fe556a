//! Application configuration
//!
//! Settings are layered, later sources winning:
//! 1. Built-in defaults
//! 2. `config.toml` in the user's config directory (or an explicit path)
//! 3. `WORDLEASSIST_*` environment variables, e.g. `WORDLEASSIST_API_URL`
//!
//! Command-line flags are applied on top by the binary.

use crate::client::DEFAULT_API_URL;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "WORDLEASSIST";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not load configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error("invalid API URL {url:?}: {source}")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Colour scheme of the interactive form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Follow the terminal's own colours
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    /// Next mode in the toggle cycle
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::System => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        };
        f.write_str(name)
    }
}

/// Application configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistConfig {
    /// Base URL of the word-matching service
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default)]
    pub theme: ThemeMode,

    /// `tracing` filter directive used when `RUST_LOG` is not set
    #[serde(default)]
    pub log_filter: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            theme: ThemeMode::default(),
            log_filter: None,
        }
    }
}

impl AssistConfig {
    /// Default config file location, if the platform has a config directory
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wordle_assist").join("config.toml"))
    }

    /// Load configuration from the default file and the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let default_path = Self::config_path();
        let file = path.or(default_path.as_deref());
        Self::load_layered(file, None)
    }

    /// Load configuration from `file` and an environment map
    ///
    /// `env` replaces the process environment when given. A missing file is
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or parsed.
    pub fn load_layered(
        file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("api_url", defaults.api_url)?
            .set_default("theme", defaults.theme.to_string())?;

        if let Some(path) = file {
            tracing::debug!(path = %path.display(), "reading config file");
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).source(env));

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Parsed service URL
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidApiUrl` if `api_url` is not an absolute URL.
    pub fn api_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.api_url).map_err(|source| ConfigError::InvalidApiUrl {
            url: self.api_url.clone(),
            source,
        })
    }
}
