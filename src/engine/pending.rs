use serde::{Deserialize, Serialize};

use crate::github::types::Branch;
use crate::models::{Item, ProjectId};

/// One selectable option of a pending action's form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// A request for user-supplied parameters before a workflow action runs.
///
/// Plain data for the presentation layer to render: an action title, the
/// endpoint the confirmation should be submitted to, and the selectable
/// options. Absence of a pending action is expressed by `Option::None` at
/// the call site, not by a flag inside the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAction {
    pub title: String,
    pub endpoint: String,
    pub options: Vec<SelectOption>,
}

impl PendingAction {
    /// Ask for a branch name and source commit; options list the
    /// repository's branches (value = head sha, label = branch name).
    pub(crate) fn branch_creation(project_id: ProjectId, item: &Item, branches: &[Branch]) -> Self {
        Self {
            title: format!("Create branch for '{}'", item.name),
            endpoint: format!("/project/{}/items/{}/branch", project_id, item.id),
            options: branches
                .iter()
                .map(|branch| SelectOption {
                    value: branch.sha.clone(),
                    label: branch.name.clone(),
                })
                .collect(),
        }
    }

    /// Ask for head/base branch selection before opening a pull request.
    pub(crate) fn pull_request_creation(
        project_id: ProjectId,
        item: &Item,
        head_branch: &str,
        branches: &[Branch],
    ) -> Self {
        Self {
            title: format!("Create pull request for branch '{}'", head_branch),
            endpoint: format!("/project/{}/items/{}/pr", project_id, item.id),
            options: branches
                .iter()
                .map(|branch| SelectOption {
                    value: branch.name.clone(),
                    label: branch.name.clone(),
                })
                .collect(),
        }
    }

    /// Ask for a merge commit title/message and the delete-branch flag.
    pub(crate) fn pull_request_merge(project_id: ProjectId, item: &Item) -> Self {
        Self {
            title: format!(
                "Merge pull request for branch '{}'",
                item.branch.as_deref().unwrap_or_default()
            ),
            endpoint: format!("/project/{}/items/{}/merge", project_id, item.id),
            options: Vec::new(),
        }
    }
}
