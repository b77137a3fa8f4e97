use octocrab::Octocrab;

use super::errors::GitHubError;
use super::types::CreatedIssue;

/// Handler for GitHub issue operations
#[derive(Debug, Clone)]
pub struct IssueHandler {
    octocrab: Octocrab,
    owner: String,
    repo: String,
}

impl IssueHandler {
    pub fn new(octocrab: Octocrab, owner: String, repo: String) -> Self {
        Self {
            octocrab,
            owner,
            repo,
        }
    }

    /// Create a new issue titled after a board item.
    pub async fn create_issue(&self, title: &str) -> Result<CreatedIssue, GitHubError> {
        let issue = self
            .octocrab
            .issues(&self.owner, &self.repo)
            .create(title)
            .send()
            .await?;

        tracing::info!(number = issue.number, title, "created issue");
        Ok(CreatedIssue {
            id: issue.id.0,
            number: issue.number,
            url: issue.html_url.to_string(),
        })
    }
}
