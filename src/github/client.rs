use async_trait::async_trait;
use octocrab::Octocrab;

use super::branches::BranchHandler;
use super::errors::GitHubError;
use super::issues::IssueHandler;
use super::pulls::PullRequestHandler;
use super::types::{Branch, CreatedIssue, CreatedPullRequest};
use super::WorkflowGateway;

/// octocrab-backed gateway to one GitHub repository.
///
/// Owner and repository come from configuration; the original board
/// hard-coded them at every call site, which the redesign treats as a
/// configuration concern.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    issues: IssueHandler,
    branches: BranchHandler,
    pulls: PullRequestHandler,
    owner: String,
    repo: String,
}

impl GitHubClient {
    /// Build a client from the process configuration.
    pub fn new() -> Result<Self, GitHubError> {
        let config =
            crate::config::config().map_err(|e| GitHubError::ConfigNotFound(e.to_string()))?;

        let token = config.github.token.clone().ok_or_else(|| {
            GitHubError::TokenNotFound(
                "set github.token in boardwalk.toml or export GITHUB_TOKEN / BOARDWALK_GITHUB_TOKEN"
                    .to_string(),
            )
        })?;

        let owner = config.github.owner.clone();
        let repo = config.github.repo.clone();
        if owner.is_empty() || repo.is_empty() {
            return Err(GitHubError::ConfigNotFound(
                "github.owner and github.repo must be set to actual values".to_string(),
            ));
        }

        let octocrab = Octocrab::builder().personal_token(token).build()?;
        Ok(Self::from_octocrab(octocrab, owner, repo))
    }

    /// Build a client around an existing octocrab instance.
    ///
    /// Tests use this to point the client at a mock API server.
    pub fn from_octocrab(octocrab: Octocrab, owner: String, repo: String) -> Self {
        Self {
            issues: IssueHandler::new(octocrab.clone(), owner.clone(), repo.clone()),
            branches: BranchHandler::new(octocrab.clone(), owner.clone(), repo.clone()),
            pulls: PullRequestHandler::new(octocrab, owner.clone(), repo.clone()),
            owner,
            repo,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Look up a single branch; `None` when it does not exist.
    pub async fn get_branch(&self, name: &str) -> Result<Option<Branch>, GitHubError> {
        self.branches.get_branch(name).await
    }
}

#[async_trait]
impl WorkflowGateway for GitHubClient {
    async fn create_issue(&self, title: &str) -> Result<CreatedIssue, GitHubError> {
        self.issues.create_issue(title).await
    }

    async fn list_branches(&self) -> Result<Vec<Branch>, GitHubError> {
        self.branches.list_branches().await
    }

    async fn create_branch(&self, name: &str, from_sha: &str) -> Result<Branch, GitHubError> {
        self.branches.create_branch(name, from_sha).await
    }

    async fn delete_branch(&self, name: &str) -> Result<(), GitHubError> {
        self.branches.delete_branch(name).await
    }

    async fn create_pull_request(
        &self,
        head: &str,
        base: &str,
        issue_number: Option<u64>,
        title: &str,
    ) -> Result<CreatedPullRequest, GitHubError> {
        self.pulls
            .create_pull_request(head, base, issue_number, title)
            .await
    }

    async fn merge_pull_request(
        &self,
        number: u64,
        commit_title: &str,
        commit_message: &str,
    ) -> Result<(), GitHubError> {
        self.pulls
            .merge_pull_request(number, commit_title, commit_message)
            .await
    }
}
