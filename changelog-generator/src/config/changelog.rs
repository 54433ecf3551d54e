//! The top-level changelog configuration.

use crate::config::{ChangelogSection, ConfigError, RepoQuery};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default location of the changelog file.
pub const DEFAULT_CHANGELOG_PATH: &str = "./CHANGELOG.md";

/// Environment variables consulted, in order, when the config holds no token.
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_ACCESS_TOKEN", "GITHUB_TOKEN"];

/// Parsed `changelog-config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChangelogConfig {
    /// GitHub token (optional, falls back to the environment).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_access_token: Option<String>,

    /// Heading of the generated entry, e.g. "v1.4.0".
    #[serde(default)]
    pub version_title: String,

    /// Changelog file to create or prepend to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changelog_path: Option<PathBuf>,

    /// Base URL for issue-tracker links, e.g. "https://acme.atlassian.net/browse".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jira_url: Option<String>,

    /// Repositories to collect pull requests from.
    #[serde(default)]
    pub repos: Vec<RepoQuery>,

    /// Sections in render order.
    #[serde(default)]
    pub changelog_sections: Vec<ChangelogSection>,
}

impl ChangelogConfig {
    /// Loads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] if `path` does not exist, and
    /// [`ConfigError::IoError`] / [`ConfigError::TomlError`] if it cannot be
    /// read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading changelog config");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::parse(&content, path)
    }

    /// Parses config content; `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Checks the invariants the pipeline relies on.
    ///
    /// A section with neither labels nor `leftovers` is accepted with a
    /// warning since it simply never matches.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version_title.trim().is_empty() {
            return Err(invalid("version-title is required"));
        }

        if self.repos.is_empty() {
            return Err(invalid("at least one [[repos]] entry is required"));
        }

        for repo in &self.repos {
            if repo.owner.trim().is_empty() || repo.name.trim().is_empty() {
                return Err(invalid("every repo needs an owner and a name"));
            }
            if repo.version_label.trim().is_empty() {
                return Err(invalid(format!(
                    "version-label is required for {}",
                    repo.full_name()
                )));
            }
        }

        let mut leftovers = 0;
        for section in &self.changelog_sections {
            if section.leftovers {
                leftovers += 1;
                if !section.labels.is_empty() {
                    return Err(invalid(format!(
                        "section '{}' cannot set both labels and leftovers",
                        section.title
                    )));
                }
            } else if section.labels.is_empty() {
                warn!(
                    section = %section.title,
                    "Section has no labels and is not a leftovers section, it will stay empty"
                );
            }
        }

        if leftovers > 1 {
            return Err(invalid("at most one section may set leftovers"));
        }

        if let Some(jira_url) = &self.jira_url {
            url::Url::parse(jira_url)
                .map_err(|e| invalid(format!("jira-url '{jira_url}' is not a valid URL: {e}")))?;
        }

        Ok(())
    }

    /// Resolves the GitHub token from the config or the environment.
    pub fn access_token(&self) -> Option<String> {
        self.github_access_token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| {
                TOKEN_ENV_VARS
                    .iter()
                    .find_map(|var| std::env::var(var).ok().filter(|t| !t.trim().is_empty()))
            })
    }

    /// Returns the changelog path, falling back to [`DEFAULT_CHANGELOG_PATH`].
    pub fn changelog_path(&self) -> PathBuf {
        self.changelog_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CHANGELOG_PATH))
    }
}

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
