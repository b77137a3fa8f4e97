pub mod branches;
pub mod client;
pub mod errors;
pub mod issues;
pub mod pulls;
pub mod types;

use async_trait::async_trait;

pub use client::GitHubClient;
pub use errors::GitHubError;
pub use types::{Branch, CreatedIssue, CreatedPullRequest};

/// External workflow actions the board engine may invoke.
///
/// The gateway is constructed for a single repository, so the methods take
/// no owner/repo parameters. Calls are never retried by the engine; a
/// failure is surfaced for the caller to resubmit.
#[async_trait]
pub trait WorkflowGateway: Send + Sync {
    /// Create an issue titled after a board item.
    async fn create_issue(&self, title: &str) -> Result<CreatedIssue, GitHubError>;

    /// All branches of the repository with their head commits.
    async fn list_branches(&self) -> Result<Vec<Branch>, GitHubError>;

    /// Create a branch from a source commit.
    async fn create_branch(&self, name: &str, from_sha: &str) -> Result<Branch, GitHubError>;

    /// Delete a branch.
    async fn delete_branch(&self, name: &str) -> Result<(), GitHubError>;

    /// Open a pull request; `issue_number` links an existing issue,
    /// otherwise `title` names the new pull request.
    async fn create_pull_request(
        &self,
        head: &str,
        base: &str,
        issue_number: Option<u64>,
        title: &str,
    ) -> Result<CreatedPullRequest, GitHubError>;

    /// Merge a pull request with the given commit title and message.
    async fn merge_pull_request(
        &self,
        number: u64,
        commit_title: &str,
        commit_message: &str,
    ) -> Result<(), GitHubError>;
}
