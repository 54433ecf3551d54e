//! Per-repository query settings.

use serde::{Deserialize, Serialize};

/// A repository to collect merged pull requests from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RepoQuery {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,

    /// Label a pull request must carry to belong to this release.
    ///
    /// Used as the server-side filter. Left empty in the file when it is
    /// supplied interactively or on the command line.
    #[serde(default)]
    pub version_label: String,

    /// A pull request is dropped unless it carries every one of these labels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_labels: Vec<String>,

    /// A pull request is dropped if it carries any of these labels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_labels: Vec<String>,
}

impl RepoQuery {
    /// Creates a query with no include/exclude filters.
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        version_label: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            version_label: version_label.into(),
            ..Default::default()
        }
    }

    /// Full repository name in "owner/name" format.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Returns true if a pull request carrying `labels` passes both the
    /// include and the exclude filter.
    pub fn accepts(&self, labels: &[String]) -> bool {
        let has = |wanted: &String| labels.contains(wanted);

        if self.exclude_labels.iter().any(has) {
            return false;
        }

        self.include_labels.iter().all(has)
    }
}
