// Boardwalk - Kanban board engine with GitHub workflow integration
// This exposes the core components for embedding and testing

pub mod config;
pub mod engine;
pub mod github;
pub mod models;
pub mod store;
pub mod telemetry;

// Re-export key types for easy access
pub use config::{config, init_config, BoardwalkConfig};
pub use engine::{
    BoardEngine, BoardError, ColumnState, Direction, PendingAction, SelectOption,
    TransitionOutcome,
};
pub use github::{Branch, CreatedIssue, CreatedPullRequest, GitHubClient, GitHubError, WorkflowGateway};
pub use models::{Column, ColumnId, IssueRef, Item, ItemId, Project, ProjectId, PullRequestRef};
pub use store::{BoardStore, Entity, MemoryStore, StorageError};
pub use telemetry::{init_telemetry, shutdown_telemetry};
