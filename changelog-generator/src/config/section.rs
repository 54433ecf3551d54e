//! Changelog section definitions.

use serde::{Deserialize, Serialize};

/// One heading of the rendered changelog.
///
/// A section either routes pull requests by label, or (with `leftovers`)
/// collects everything no labeled section claims.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChangelogSection {
    /// Heading text.
    pub title: String,

    /// Labels that route a pull request into this section.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,

    /// Collect every pull request not claimed by another section.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub leftovers: bool,
}

impl ChangelogSection {
    /// Creates a section matched by any of `labels`.
    pub fn labeled<I, S>(title: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            labels: labels.into_iter().map(Into::into).collect(),
            leftovers: false,
        }
    }

    /// Creates the catch-all section.
    pub fn leftovers(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            labels: Vec::new(),
            leftovers: true,
        }
    }
}
