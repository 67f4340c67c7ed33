use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode configuration: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ConfigError {
    /// The config file could not be read
    pub const fn is_read(&self) -> bool {
        matches!(self, Self::Read { .. })
    }

    /// The raw bytes were acquired but are not a valid configuration document
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Where the raw configuration text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Name of an environment variable holding the JSON document
    Environment(String),
    /// Path of a file holding the JSON document
    File(PathBuf),
    /// JSON document supplied directly
    Inline(String),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment(name) => write!(f, "env:{name}"),
            Self::File(path) => write!(f, "file:{}", path.display()),
            Self::Inline(_) => f.write_str("inline"),
        }
    }
}

/// Stateless configuration loader
///
/// Each entry point only acquires raw text and hands it to the same decoder,
/// so every call returns a fresh [`Config`]. Missing keys are never an error;
/// see [`ConfigValidator`](crate::domain::ports::ConfigValidator) for
/// presence checks.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from any supported source
    pub fn load(source: &ConfigSource) -> Result<Config, ConfigError> {
        match source {
            ConfigSource::Environment(name) => Self::load_from_env(name),
            ConfigSource::File(path) => Self::load_from_file(path),
            ConfigSource::Inline(text) => Self::load_from_str(text),
        }
    }

    /// Load configuration from the value of an environment variable
    ///
    /// An unset variable reads as the empty string, which fails to decode.
    /// Invalid UTF-8 in the value is replaced with U+FFFD before decoding.
    pub fn load_from_env(name: &str) -> Result<Config, ConfigError> {
        let raw = env::var_os(name)
            .map(|value| value.to_string_lossy().into_owned())
            .unwrap_or_default();
        decode(raw.as_bytes())
    }

    /// Load configuration from a file
    ///
    /// Read failures are returned as [`ConfigError::Read`] without attempting
    /// to decode anything.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        decode(&raw)
    }

    /// Load configuration from an in-memory JSON document
    pub fn load_from_str(text: &str) -> Result<Config, ConfigError> {
        decode(text.as_bytes())
    }
}

/// Decode a JSON document into a [`Config`].
///
/// Unknown keys are ignored and a top-level `null` yields the zero config.
/// Invalid UTF-8 is replaced with U+FFFD, so it only fails inside JSON syntax.
pub(crate) fn decode(bytes: &[u8]) -> Result<Config, ConfigError> {
    let text = String::from_utf8_lossy(bytes);
    Ok(serde_json::from_str(&text)?)
}
