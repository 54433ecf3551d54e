//! Runner configuration.

/// Options for a changelog generation run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// GitHub token used for API calls.
    token: String,
    /// Whether to assemble the entry without writing the changelog file.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(token: String, dry_run: bool) -> Self {
        Self { token, dry_run }
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
