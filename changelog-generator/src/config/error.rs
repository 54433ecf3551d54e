//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading or validating the changelog configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write a file.
    #[error("Failed to access file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse changelog config '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Validation error in the configuration.
    #[error("Invalid changelog config: {message}")]
    ValidationError { message: String },

    /// Missing config file.
    #[error("Missing config file: {path}")]
    MissingFile { path: String },

    /// Refused to overwrite an existing config file.
    #[error("Config file already exists: {path}")]
    AlreadyExists { path: String },
}
