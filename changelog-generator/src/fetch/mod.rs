//! Merged pull request retrieval.
//!
//! Every configured repository is paged through concurrently, filtered by
//! its include/exclude labels, and the results are merged into a single
//! sequence ordered by merge time, most recent first.

mod api;
mod error;
mod pull_request;
mod query;

pub use api::{GitHubApi, PullRequestApi};
pub use error::FetchError;
pub use pull_request::{MergedPullRequest, PullRequest, PullRequestPage};
pub use query::{LABELS_PER_PULL_REQUEST, PAGE_SIZE};

use crate::config::RepoQuery;
use futures::future::try_join_all;
use std::cmp::Ordering;
use tracing::{debug, info, info_span, Instrument};

/// Fetches the merged pull requests of every repository.
///
/// Repositories are fetched concurrently and awaited together; the first
/// failure aborts the whole fetch.
///
/// # Errors
///
/// Returns the first [`FetchError`] raised by any repository.
pub async fn fetch_all<A>(api: &A, repos: &[RepoQuery]) -> Result<Vec<PullRequest>, FetchError>
where
    A: PullRequestApi + ?Sized,
{
    info!(repositories = repos.len(), "Fetching merged pull requests");

    let per_repo = try_join_all(repos.iter().map(|repo| fetch_repository(api, repo))).await?;

    let mut merged: Vec<MergedPullRequest> = per_repo.into_iter().flatten().collect();
    sort_by_merged_at(&mut merged);

    info!(count = merged.len(), "Fetched pull requests");
    Ok(merged.into_iter().map(|m| m.pull_request).collect())
}

/// Pages through one repository and applies its label filters.
///
/// Pages are requested strictly one after another, each with the previous
/// page's cursor.
///
/// # Errors
///
/// Returns a [`FetchError`] if any page request fails; pages already
/// fetched are discarded.
pub async fn fetch_repository<A>(
    api: &A,
    repo: &RepoQuery,
) -> Result<Vec<MergedPullRequest>, FetchError>
where
    A: PullRequestApi + ?Sized,
{
    let span = info_span!(
        "fetch_repository",
        repo = %repo.full_name(),
        version_label = %repo.version_label
    );

    async {
        let mut all_nodes = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = api
                .merged_pull_requests_page(repo, cursor.as_deref())
                .await?;
            pages += 1;
            debug!(page = pages, count = page.nodes.len(), "Fetched page");

            all_nodes.extend(page.nodes);

            if !page.has_next_page {
                break;
            }

            cursor = Some(page.end_cursor.ok_or_else(|| FetchError::MissingCursor {
                repository: repo.full_name(),
            })?);
        }

        let fetched = all_nodes.len();
        let filtered = filter_by_labels(all_nodes, repo);

        info!(
            pages,
            fetched,
            kept = filtered.len(),
            "Repository fetch complete"
        );
        Ok(filtered)
    }
    .instrument(span)
    .await
}

/// Drops pull requests rejected by the repo's include/exclude labels.
fn filter_by_labels(nodes: Vec<MergedPullRequest>, repo: &RepoQuery) -> Vec<MergedPullRequest> {
    nodes
        .into_iter()
        .filter(|m| repo.accepts(&m.pull_request.labels))
        .collect()
}

/// Orders by merge time, newest first.
///
/// Equal merge times fall back to the higher pull request number, then to
/// the URL, so the order never depends on which repository answered first.
/// Pull requests without a merge time go last.
fn sort_by_merged_at(pull_requests: &mut [MergedPullRequest]) {
    pull_requests.sort_by(compare_newest_first);
}

fn compare_newest_first(a: &MergedPullRequest, b: &MergedPullRequest) -> Ordering {
    b.merged_at
        .cmp(&a.merged_at)
        .then_with(|| b.pull_request.number.cmp(&a.pull_request.number))
        .then_with(|| a.pull_request.url.cmp(&b.pull_request.url))
}
