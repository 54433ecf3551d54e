//! Pull request fetch error types.

use thiserror::Error;

/// Errors that can occur while fetching merged pull requests.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport or authentication failure from the GitHub client.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The GraphQL endpoint answered with errors.
    #[error("GraphQL error for {repository}: {message}")]
    GraphQlError { repository: String, message: String },

    /// The repository does not exist or the token cannot see it.
    #[error("Repository {repository} not found or not accessible")]
    RepositoryNotFound { repository: String },

    /// A page claimed more results but gave no cursor to continue from.
    #[error("Missing pagination cursor for {repository}")]
    MissingCursor { repository: String },
}
