//! In-memory pull request source for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use changelog_generator::{
    FetchError, MergedPullRequest, PullRequest, PullRequestApi, PullRequestPage, RepoQuery,
};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

/// One recorded page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCall {
    pub repository: String,
    pub version_label: String,
    pub cursor: Option<String>,
}

/// Serves pull requests per repository in fixed-size pages.
pub struct MockApi {
    page_size: usize,
    pull_requests: HashMap<String, Vec<MergedPullRequest>>,
    calls: Mutex<Vec<PageCall>>,
}

impl MockApi {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            pull_requests: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Adds pull requests for "owner/name".
    pub fn with_repo(mut self, full_name: &str, pull_requests: Vec<MergedPullRequest>) -> Self {
        self.pull_requests
            .insert(full_name.to_string(), pull_requests);
        self
    }

    pub fn calls(&self) -> Vec<PageCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, full_name: &str) -> Vec<PageCall> {
        self.calls()
            .into_iter()
            .filter(|c| c.repository == full_name)
            .collect()
    }
}

#[async_trait]
impl PullRequestApi for MockApi {
    async fn merged_pull_requests_page(
        &self,
        repo: &RepoQuery,
        cursor: Option<&str>,
    ) -> Result<PullRequestPage, FetchError> {
        let repository = repo.full_name();
        self.calls.lock().unwrap().push(PageCall {
            repository: repository.clone(),
            version_label: repo.version_label.clone(),
            cursor: cursor.map(str::to_string),
        });

        let Some(all) = self.pull_requests.get(&repository) else {
            return Err(FetchError::RepositoryNotFound { repository });
        };

        // Server-side filter on the version label.
        let labeled: Vec<_> = all
            .iter()
            .filter(|m| m.pull_request.has_label(&repo.version_label))
            .cloned()
            .collect();

        let start: usize = cursor.map_or(0, |c| c.parse().unwrap());
        let end = (start + self.page_size).min(labeled.len());
        let has_next_page = end < labeled.len();

        Ok(PullRequestPage {
            nodes: labeled[start..end].to_vec(),
            has_next_page,
            end_cursor: has_next_page.then(|| end.to_string()),
        })
    }
}

/// Builds a merged pull request for `repo` ("owner/name").
pub fn merged(
    repo: &str,
    number: u64,
    title: &str,
    labels: &[&str],
    merged_at: &str,
) -> MergedPullRequest {
    MergedPullRequest {
        pull_request: PullRequest {
            url: format!("https://github.com/{repo}/pull/{number}"),
            number,
            title: title.to_string(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        },
        merged_at: Some(merged_at.parse::<DateTime<Utc>>().unwrap()),
    }
}
