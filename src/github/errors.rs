use octocrab::Error as OctocrabError;
use thiserror::Error;

/// Errors surfaced by the workflow gateway.
///
/// Upstream API rejections keep the HTTP status and response body so the
/// caller can see which step failed and resubmit manually.
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("GitHub token not configured: {0}")]
    TokenNotFound(String),
    #[error("GitHub repository not configured: {0}")]
    ConfigNotFound(String),
    #[error("GitHub API call failed with HTTP {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("GitHub API error: {0}")]
    ApiError(OctocrabError),
    #[error("GitHub did not confirm the merge of pull request #{number}")]
    MergeNotConfirmed { number: u64 },
}

impl From<OctocrabError> for GitHubError {
    fn from(err: OctocrabError) -> Self {
        match err {
            OctocrabError::GitHub { source, .. } => GitHubError::Upstream {
                status: source.status_code.as_u16(),
                body: source.message.clone(),
            },
            other => GitHubError::ApiError(other),
        }
    }
}
