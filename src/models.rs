// Board domain model - projects, columns, items and their workflow linkage

use serde::{Deserialize, Serialize};

pub type ProjectId = u64;
pub type ColumnId = u64;
pub type ItemId = u64;

/// A board with its columns in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Columns in creation order; this crate never reorders them.
    pub columns: Vec<Column>,
}

/// A named column and its items.
///
/// The name doubles as the semantic key for the transition engine
/// (matched case-insensitively against the canonical column states).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    pub project_id: ProjectId,
    /// Items ascending by `order`, ties broken by id.
    pub items: Vec<Item>,
}

/// Linked issue reference, fully populated or absent as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRef {
    pub id: u64,
    pub number: u64,
    pub url: String,
}

/// Linked pull request reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    pub id: u64,
    pub number: u64,
}

/// A single board item.
///
/// `order` is a sparse per-column sequence number: strictly increasing as
/// items are appended, swapped (not renumbered) on reorder, and left with
/// gaps after deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub column_id: ColumnId,
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<IssueRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestRef>,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, column_id: ColumnId, order: i64) -> Self {
        Self {
            id,
            name: name.into(),
            column_id,
            order,
            issue: None,
            branch: None,
            pull_request: None,
        }
    }
}
