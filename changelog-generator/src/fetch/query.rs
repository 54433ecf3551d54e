//! GraphQL query and response types for merged pull requests.

use crate::fetch::{MergedPullRequest, PullRequest, PullRequestPage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pull requests requested per page.
pub const PAGE_SIZE: u8 = 100;

/// Labels requested per pull request.
pub const LABELS_PER_PULL_REQUEST: u8 = 100;

pub const MERGED_PULL_REQUESTS_QUERY: &str = r#"
query MergedPullRequests(
    $owner: String!
    $name: String!
    $labels: [String!]
    $first: Int!
    $labelsFirst: Int!
    $after: String
) {
    repository(owner: $owner, name: $name) {
        pullRequests(first: $first, states: [MERGED], labels: $labels, after: $after) {
            nodes {
                url
                number
                title
                mergedAt
                labels(first: $labelsFirst) {
                    nodes {
                        name
                    }
                }
            }
            pageInfo {
                hasNextPage
                endCursor
            }
        }
    }
}
"#;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedPullRequestsVariables {
    pub owner: String,
    pub name: String,
    pub labels: Vec<String>,
    pub first: u8,
    pub labels_first: u8,
    pub after: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct MergedPullRequestsData {
    pub repository: Option<RepositoryNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    pub pull_requests: PullRequestConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestConnection {
    #[serde(default)]
    pub nodes: Vec<Option<PullRequestNode>>,
    pub page_info: PageInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestNode {
    pub url: String,
    pub number: u64,
    pub title: String,
    pub merged_at: Option<DateTime<Utc>>,
    pub labels: Option<LabelConnection>,
}

#[derive(Debug, Deserialize)]
pub struct LabelConnection {
    #[serde(default)]
    pub nodes: Vec<Option<LabelNode>>,
}

#[derive(Debug, Deserialize)]
pub struct LabelNode {
    pub name: String,
}

impl From<PullRequestNode> for MergedPullRequest {
    fn from(node: PullRequestNode) -> Self {
        let labels = node
            .labels
            .map(|l| l.nodes.into_iter().flatten().map(|n| n.name).collect())
            .unwrap_or_default();

        Self {
            pull_request: PullRequest {
                url: node.url,
                number: node.number,
                title: node.title,
                labels,
            },
            merged_at: node.merged_at,
        }
    }
}

impl From<PullRequestConnection> for PullRequestPage {
    fn from(connection: PullRequestConnection) -> Self {
        Self {
            nodes: connection
                .nodes
                .into_iter()
                .flatten()
                .map(MergedPullRequest::from)
                .collect(),
            has_next_page: connection.page_info.has_next_page,
            end_cursor: connection.page_info.end_cursor,
        }
    }
}
