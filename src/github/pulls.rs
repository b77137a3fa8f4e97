use octocrab::params::pulls::MergeMethod;
use octocrab::Octocrab;

use super::errors::GitHubError;
use super::types::CreatedPullRequest;

/// Handler for GitHub pull request operations
#[derive(Debug, Clone)]
pub struct PullRequestHandler {
    octocrab: Octocrab,
    owner: String,
    repo: String,
}

impl PullRequestHandler {
    pub fn new(octocrab: Octocrab, owner: String, repo: String) -> Self {
        Self {
            octocrab,
            owner,
            repo,
        }
    }

    /// Open a pull request from `head` into `base`.
    ///
    /// When an issue number is given the issue-linked form of the pulls API
    /// is used (the issue becomes the pull request); the typed octocrab
    /// builder cannot express that form, so this goes through the raw route.
    /// Without an issue, `title` names the new pull request.
    pub async fn create_pull_request(
        &self,
        head: &str,
        base: &str,
        issue_number: Option<u64>,
        title: &str,
    ) -> Result<CreatedPullRequest, GitHubError> {
        let route = format!("/repos/{}/{}/pulls", self.owner, self.repo);
        let body = match issue_number {
            Some(number) => serde_json::json!({
                "head": head,
                "base": base,
                "issue": number,
            }),
            None => serde_json::json!({
                "head": head,
                "base": base,
                "title": title,
            }),
        };

        let pr: CreatedPullRequest = self.octocrab.post(route, Some(&body)).await?;
        tracing::info!(number = pr.number, head, base, "created pull request");
        Ok(pr)
    }

    /// Merge a pull request with the given commit title and message.
    pub async fn merge_pull_request(
        &self,
        number: u64,
        commit_title: &str,
        commit_message: &str,
    ) -> Result<(), GitHubError> {
        let result = self
            .octocrab
            .pulls(&self.owner, &self.repo)
            .merge(number)
            .title(commit_title)
            .message(commit_message)
            .method(MergeMethod::Merge)
            .send()
            .await?;

        if result.merged {
            tracing::info!(number, "merged pull request");
            Ok(())
        } else {
            Err(GitHubError::MergeNotConfirmed { number })
        }
    }
}
