use octocrab::params::repos::Reference;
use octocrab::Octocrab;

use super::errors::GitHubError;
use super::types::Branch;

/// Handler for GitHub branch operations
#[derive(Debug, Clone)]
pub struct BranchHandler {
    octocrab: Octocrab,
    owner: String,
    repo: String,
}

impl BranchHandler {
    pub fn new(octocrab: Octocrab, owner: String, repo: String) -> Self {
        Self {
            octocrab,
            owner,
            repo,
        }
    }

    /// List branches in the repository
    pub async fn list_branches(&self) -> Result<Vec<Branch>, GitHubError> {
        let page = self
            .octocrab
            .repos(&self.owner, &self.repo)
            .list_branches()
            .per_page(100)
            .send()
            .await?;

        Ok(page
            .items
            .into_iter()
            .map(|branch| Branch {
                name: branch.name,
                sha: branch.commit.sha,
            })
            .collect())
    }

    /// Look up a single branch; `None` when it does not exist.
    pub async fn get_branch(&self, name: &str) -> Result<Option<Branch>, GitHubError> {
        match self
            .octocrab
            .repos(&self.owner, &self.repo)
            .get_ref(&Reference::Branch(name.to_string()))
            .await
        {
            Ok(reference) => {
                // A branch ref always points at a commit.
                let sha = match reference.object {
                    octocrab::models::repos::Object::Commit { sha, .. } => sha,
                    _ => return Ok(None),
                };
                Ok(Some(Branch {
                    name: name.to_string(),
                    sha,
                }))
            }
            Err(octocrab::Error::GitHub { source, .. }) if source.status_code.as_u16() == 404 => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Create a new branch from a source commit.
    pub async fn create_branch(&self, name: &str, from_sha: &str) -> Result<Branch, GitHubError> {
        self.octocrab
            .repos(&self.owner, &self.repo)
            .create_ref(&Reference::Branch(name.to_string()), from_sha)
            .await?;

        tracing::info!(branch = name, from = from_sha, "created branch");
        // The refs API echoes the inputs; build the result from them.
        Ok(Branch {
            name: name.to_string(),
            sha: from_sha.to_string(),
        })
    }

    /// Delete a branch
    pub async fn delete_branch(&self, name: &str) -> Result<(), GitHubError> {
        self.octocrab
            .repos(&self.owner, &self.repo)
            .delete_ref(&Reference::Branch(name.to_string()))
            .await?;

        tracing::info!(branch = name, "deleted branch");
        Ok(())
    }
}
