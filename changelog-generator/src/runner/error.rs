//! Runner error types.

/// Errors that can occur during a changelog generation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading and validation errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Pull request retrieval errors.
    #[error(transparent)]
    Fetch(#[from] crate::fetch::FetchError),

    /// Changelog file errors.
    #[error(transparent)]
    Write(#[from] crate::writer::WriteError),
}
