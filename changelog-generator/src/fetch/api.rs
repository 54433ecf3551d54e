//! Remote API boundary for merged pull request queries.

use crate::config::RepoQuery;
use crate::fetch::query::{
    GraphQlResponse, MergedPullRequestsData, MergedPullRequestsVariables,
    LABELS_PER_PULL_REQUEST, MERGED_PULL_REQUESTS_QUERY, PAGE_SIZE,
};
use crate::fetch::{FetchError, PullRequestPage};
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

/// Source of merged pull request pages.
///
/// Implemented by [`GitHubApi`]; tests provide in-memory implementations.
#[async_trait]
pub trait PullRequestApi: Send + Sync {
    /// Fetches one page of merged pull requests labeled with the repo's
    /// version label, starting after `cursor`.
    async fn merged_pull_requests_page(
        &self,
        repo: &RepoQuery,
        cursor: Option<&str>,
    ) -> Result<PullRequestPage, FetchError>;
}

/// [`PullRequestApi`] backed by the GitHub GraphQL API.
#[derive(Clone)]
pub struct GitHubApi {
    octocrab: Octocrab,
}

impl GitHubApi {
    /// Builds a client authenticated with a personal access token.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::GitHubError`] if the client cannot be built.
    pub fn new(token: &str) -> Result<Self, FetchError> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;
        Ok(Self { octocrab })
    }
}

#[async_trait]
impl PullRequestApi for GitHubApi {
    async fn merged_pull_requests_page(
        &self,
        repo: &RepoQuery,
        cursor: Option<&str>,
    ) -> Result<PullRequestPage, FetchError> {
        let vars = MergedPullRequestsVariables {
            owner: repo.owner.clone(),
            name: repo.name.clone(),
            labels: vec![repo.version_label.clone()],
            first: PAGE_SIZE,
            labels_first: LABELS_PER_PULL_REQUEST,
            after: cursor.map(str::to_string),
        };

        debug!(repo = %repo.full_name(), cursor = ?cursor, "Requesting merged pull requests");

        let response: GraphQlResponse<MergedPullRequestsData> = self
            .octocrab
            .graphql(&serde_json::json!({
                "query": MERGED_PULL_REQUESTS_QUERY,
                "variables": vars,
            }))
            .await?;

        if let Some(errors) = response.errors {
            if !errors.is_empty() {
                let messages: Vec<_> = errors.into_iter().map(|e| e.message).collect();
                return Err(FetchError::GraphQlError {
                    repository: repo.full_name(),
                    message: messages.join(", "),
                });
            }
        }

        let repository = response
            .data
            .and_then(|d| d.repository)
            .ok_or_else(|| FetchError::RepositoryNotFound {
                repository: repo.full_name(),
            })?;

        Ok(repository.pull_requests.into())
    }
}
