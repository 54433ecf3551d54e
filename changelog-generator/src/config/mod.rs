//! Configuration loading and validation.
//!
//! The configuration lives in a `changelog-config.toml` file in the working
//! directory. It names the repositories to query, the sections of the
//! generated changelog, and an optional issue-tracker base URL.

mod changelog;
mod error;
mod repo;
mod section;
mod template;

pub use changelog::{ChangelogConfig, DEFAULT_CHANGELOG_PATH, TOKEN_ENV_VARS};
pub use error::ConfigError;
pub use repo::RepoQuery;
pub use section::ChangelogSection;
pub use template::{create_config_template, CONFIG_FILE_NAME, CONFIG_TEMPLATE};

use std::path::Path;

/// Loads the config at `path`.
///
/// # Errors
///
/// See [`ChangelogConfig::load`].
pub fn load_config(path: &Path) -> Result<ChangelogConfig, ConfigError> {
    ChangelogConfig::load(path)
}
