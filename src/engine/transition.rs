use tracing::Instrument;

use crate::engine::error::BoardError;
use crate::engine::pending::PendingAction;
use crate::engine::BoardEngine;
use crate::github::WorkflowGateway;
use crate::models::{ColumnId, IssueRef, Item, ItemId, ProjectId, PullRequestRef};
use crate::store::BoardStore;

/// The canonical column states the transition machine dispatches on.
///
/// Column names are user data; parsing them into a closed enum keeps the
/// transition table total and checked at compile time instead of falling
/// through a string switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnState {
    Backlog,
    Todo,
    InProgress,
    ReadyForPullRequest,
    Done,
}

impl ColumnState {
    /// Case-insensitive parse of a column name. Unrecognized names get no
    /// transition behavior, same as `backlog`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "backlog" => Some(ColumnState::Backlog),
            "todo" => Some(ColumnState::Todo),
            "in progress" => Some(ColumnState::InProgress),
            "ready for pull request" => Some(ColumnState::ReadyForPullRequest),
            "done" => Some(ColumnState::Done),
            _ => None,
        }
    }
}

/// Result of a column-entry transition: the item as stored afterwards, and
/// the pending action the presentation layer must collect parameters for,
/// if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOutcome {
    pub item: Item,
    pub pending: Option<PendingAction>,
}

impl TransitionOutcome {
    fn settled(item: Item) -> Self {
        Self {
            item,
            pending: None,
        }
    }
}

impl<S: BoardStore, G: WorkflowGateway> BoardEngine<S, G> {
    /// Run the lifecycle transition for an item that entered a column.
    ///
    /// Invoked by the caller only when a move reported a changed column
    /// reference; same-column reorders never transition. Decisions read only
    /// the item's current linkage snapshot, so re-entering a column is
    /// idempotent: work already linked is never redone.
    pub async fn on_column_enter(
        &self,
        project_id: ProjectId,
        column_id: ColumnId,
        item_id: ItemId,
    ) -> Result<TransitionOutcome, BoardError> {
        let span = tracing::info_span!("column_enter", project_id, column_id, item_id);
        async move {
            let _item_guard = self.locks.lock_item(item_id).await;
            let item = self.store.item(item_id).await?;
            let column = self.store.column(column_id).await?;

            let Some(state) = ColumnState::parse(&column.name) else {
                return Ok(TransitionOutcome::settled(item));
            };

            match state {
                ColumnState::Backlog => Ok(TransitionOutcome::settled(item)),
                ColumnState::Todo => self.enter_todo(item).await,
                ColumnState::InProgress => self.enter_in_progress(project_id, item).await,
                ColumnState::ReadyForPullRequest => {
                    self.enter_ready_for_pull_request(project_id, item).await
                }
                ColumnState::Done => Ok(self.enter_done(project_id, item)),
            }
        }
        .instrument(span)
        .await
    }

    /// Entering `todo` links a fresh issue unless one is already linked.
    async fn enter_todo(&self, mut item: Item) -> Result<TransitionOutcome, BoardError> {
        if item.issue.is_some() {
            return Ok(TransitionOutcome::settled(item));
        }

        let issue = self.gateway.create_issue(&item.name).await?;
        item.issue = Some(IssueRef {
            id: issue.id,
            number: issue.number,
            url: issue.url,
        });
        let item = self.store.update_item(item.id, &item).await?;
        tracing::info!(item = item.id, issue = issue.number, "linked new issue");
        Ok(TransitionOutcome::settled(item))
    }

    /// Entering `in progress` needs a branch; the source commit cannot be
    /// picked automatically, so the user is asked.
    async fn enter_in_progress(
        &self,
        project_id: ProjectId,
        item: Item,
    ) -> Result<TransitionOutcome, BoardError> {
        if item.branch.is_some() {
            return Ok(TransitionOutcome::settled(item));
        }

        let branches = self.gateway.list_branches().await?;
        let pending = PendingAction::branch_creation(project_id, &item, &branches);
        Ok(TransitionOutcome {
            item,
            pending: Some(pending),
        })
    }

    /// Entering `ready for pull request` with a branch asks the user to pick
    /// head and base; without a branch there is nothing to open a PR from.
    async fn enter_ready_for_pull_request(
        &self,
        project_id: ProjectId,
        item: Item,
    ) -> Result<TransitionOutcome, BoardError> {
        let Some(head_branch) = item.branch.clone() else {
            return Ok(TransitionOutcome::settled(item));
        };

        let branches = self.gateway.list_branches().await?;
        let pending = PendingAction::pull_request_creation(project_id, &item, &head_branch, &branches);
        Ok(TransitionOutcome {
            item,
            pending: Some(pending),
        })
    }

    /// Entering `done` with an open pull request asks for the merge commit
    /// title/message and the delete-branch flag.
    fn enter_done(&self, project_id: ProjectId, item: Item) -> TransitionOutcome {
        if item.pull_request.is_none() {
            return TransitionOutcome::settled(item);
        }

        let pending = PendingAction::pull_request_merge(project_id, &item);
        TransitionOutcome {
            item,
            pending: Some(pending),
        }
    }

    /// Confirmation for the `in progress` pending action: create the branch
    /// from the chosen source commit and link it to the item.
    ///
    /// A gateway failure leaves the item untouched; the caller resubmits.
    pub async fn submit_branch_creation(
        &self,
        item_id: ItemId,
        branch_name: &str,
        source_sha: &str,
    ) -> Result<Item, BoardError> {
        let _item_guard = self.locks.lock_item(item_id).await;
        let mut item = self.store.item(item_id).await?;

        let branch = self.gateway.create_branch(branch_name, source_sha).await?;
        item.branch = Some(branch.name);
        let item = self.store.update_item(item.id, &item).await?;
        tracing::info!(item = item.id, branch = branch_name, "linked branch");
        Ok(item)
    }

    /// Confirmation for the `ready for pull request` pending action.
    ///
    /// The linked issue, when present, becomes the pull request (the
    /// issue-linked creation form); the new pull request then supersedes it.
    pub async fn submit_pull_request_creation(
        &self,
        item_id: ItemId,
        head_branch: &str,
        base_branch: &str,
    ) -> Result<Item, BoardError> {
        let _item_guard = self.locks.lock_item(item_id).await;
        let mut item = self.store.item(item_id).await?;

        let issue_number = item.issue.as_ref().map(|issue| issue.number);
        let pr = self
            .gateway
            .create_pull_request(head_branch, base_branch, issue_number, &item.name)
            .await?;

        item.issue = None;
        item.pull_request = Some(PullRequestRef {
            id: pr.id,
            number: pr.number,
        });
        let item = self.store.update_item(item.id, &item).await?;
        tracing::info!(item = item.id, pull_request = pr.number, "linked pull request");
        Ok(item)
    }

    /// Confirmation for the `done` pending action: merge the linked pull
    /// request, optionally deleting its branch afterwards.
    ///
    /// The merge is persisted before the branch deletion is attempted: a
    /// merge cannot be undone, so the stored item must reflect it even when
    /// the deletion subsequently fails. That failure is reported, not rolled
    /// back.
    pub async fn submit_pull_request_merge(
        &self,
        item_id: ItemId,
        commit_title: &str,
        commit_message: &str,
        delete_branch: bool,
    ) -> Result<Item, BoardError> {
        let _item_guard = self.locks.lock_item(item_id).await;
        let mut item = self.store.item(item_id).await?;

        let pr = item
            .pull_request
            .clone()
            .ok_or(BoardError::MissingLinkage {
                item: item_id,
                field: "pull request",
            })?;

        self.gateway
            .merge_pull_request(pr.number, commit_title, commit_message)
            .await?;
        item.pull_request = None;
        let mut item = self.store.update_item(item.id, &item).await?;
        tracing::info!(item = item.id, pull_request = pr.number, "merged pull request");

        if delete_branch {
            if let Some(branch) = item.branch.clone() {
                self.gateway.delete_branch(&branch).await?;
                item.branch = None;
                item = self.store.update_item(item.id, &item).await?;
            }
        }

        Ok(item)
    }
}
