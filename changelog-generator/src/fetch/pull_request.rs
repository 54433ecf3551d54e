//! Pull request shapes produced by the fetcher.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A merged pull request, as consumed by the changelog assembler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Web URL of the pull request.
    pub url: String,

    /// Pull request number within its repository.
    pub number: u64,

    /// Pull request title.
    pub title: String,

    /// Label names. Order carries no meaning.
    pub labels: Vec<String>,
}

impl PullRequest {
    /// Returns true if the pull request carries `label`.
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}

/// A pull request together with its merge time, used only for ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedPullRequest {
    pub pull_request: PullRequest,
    pub merged_at: Option<DateTime<Utc>>,
}

/// One page of merged pull requests for a repository.
#[derive(Debug, Clone, Default)]
pub struct PullRequestPage {
    /// Pull requests on this page.
    pub nodes: Vec<MergedPullRequest>,

    /// Whether another page follows.
    pub has_next_page: bool,

    /// Cursor to pass for the next page.
    pub end_cursor: Option<String>,
}
