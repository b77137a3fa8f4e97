use serde::{Deserialize, Serialize};

/// Issue created through the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedIssue {
    pub id: u64,
    pub number: u64,
    pub url: String,
}

/// A repository branch and the commit it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub sha: String,
}

/// Pull request created through the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPullRequest {
    pub id: u64,
    pub number: u64,
}
