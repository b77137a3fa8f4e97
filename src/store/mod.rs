// Ordered item store contract - the persistence seam the engine depends on

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Column, ColumnId, Item, ItemId, Project, ProjectId};

pub use memory::MemoryStore;

/// Entities a storage lookup can miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Project,
    Column,
    Item,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Project => write!(f, "project"),
            Entity::Column => write!(f, "column"),
            Entity::Item => write!(f, "item"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{entity} {id} not found")]
    NotFound { entity: Entity, id: u64 },
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Read/write operations on the board's persisted state.
///
/// Pure data access: order assignment on append is the only semantics an
/// implementation owns (`max(existing) + 1`, or 1 for an empty column).
/// Placement and transition logic live in the engine.
#[async_trait]
pub trait BoardStore: Send + Sync {
    async fn project(&self, id: ProjectId) -> Result<Project, StorageError>;

    async fn column(&self, id: ColumnId) -> Result<Column, StorageError>;

    async fn columns_for_project(&self, project_id: ProjectId)
        -> Result<Vec<Column>, StorageError>;

    async fn item(&self, id: ItemId) -> Result<Item, StorageError>;

    /// Append a new item to a column, assigning the next order value.
    async fn append_item(&self, name: &str, column_id: ColumnId) -> Result<Item, StorageError>;

    /// Replace the stored item under `id` with `item`, returning the stored state.
    async fn update_item(&self, id: ItemId, item: &Item) -> Result<Item, StorageError>;

    /// Delete an item. Remaining orders in its column are not renumbered.
    async fn delete_item(&self, id: ItemId) -> Result<(), StorageError>;

    /// The order value the next append to this column would receive.
    async fn next_order_value(&self, column_id: ColumnId) -> Result<i64, StorageError>;
}
