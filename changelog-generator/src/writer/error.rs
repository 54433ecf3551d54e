//! Changelog write error types.

use thiserror::Error;

/// Errors that can occur while writing the changelog file.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to read, write or replace a file.
    #[error("Failed to write changelog '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Refused to write an empty changelog entry.
    #[error("Nothing to write to '{path}'")]
    EmptyContent { path: String },
}
