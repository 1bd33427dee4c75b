use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading a mask rule configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Mask rule #{index} has no 'name' field")]
    MissingName { index: usize },

    #[error("Unknown mask rule name: '{name}'")]
    UnknownRule { name: String },

    #[error("Invalid settings for mask rule '{name}': {source}")]
    InvalidRule {
        name: String,
        source: toml::de::Error,
    },
}
