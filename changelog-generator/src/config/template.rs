//! Starter config written when no config file exists yet.

use crate::config::ConfigError;
use std::path::Path;
use tracing::info;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "changelog-config.toml";

/// Contents of a freshly created config file.
pub const CONFIG_TEMPLATE: &str = r#"# Changelog generator configuration.
#
# The GitHub token may also be supplied through GITHUB_ACCESS_TOKEN or GITHUB_TOKEN.
# github-access-token = ""

# Heading of the next changelog entry. Prompted for when left empty.
version-title = ""

# changelog-path = "./CHANGELOG.md"

# Turns [DEV-1234] style ids in pull request titles into links.
# jira-url = "https://your-company.atlassian.net/browse"

[[repos]]
owner = "your-org"
name = "your-repo"
# Label every pull request of this release carries. Prompted for when left empty.
version-label = ""
# include-labels = []
# exclude-labels = ["internal"]

[[changelog-sections]]
title = "New"
labels = ["new", "feature"]

[[changelog-sections]]
title = "Changed"
labels = ["changed"]

[[changelog-sections]]
title = "Fixed"
labels = ["fixed", "bug"]

[[changelog-sections]]
title = "Other"
leftovers = true
"#;

/// Writes [`CONFIG_TEMPLATE`] to `path`.
///
/// # Errors
///
/// Returns [`ConfigError::AlreadyExists`] rather than overwriting an existing
/// file, or [`ConfigError::IoError`] if the file cannot be written.
pub fn create_config_template(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists {
            path: path.display().to_string(),
        });
    }

    std::fs::write(path, CONFIG_TEMPLATE).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    info!(path = %path.display(), "Created config file");
    Ok(())
}
