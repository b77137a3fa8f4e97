// Board engine - item placement and lifecycle transitions

pub mod error;
pub mod locks;
pub mod move_engine;
pub mod pending;
pub mod transition;

use std::sync::Arc;

use crate::github::WorkflowGateway;
use crate::models::{ColumnId, Item, ItemId};
use crate::store::BoardStore;

pub use error::BoardError;
pub use move_engine::Direction;
pub use pending::{PendingAction, SelectOption};
pub use transition::{ColumnState, TransitionOutcome};

use locks::LockRegistry;

/// The board engine: move placement plus the column-entry state machine.
///
/// Every operation serializes on the item (and, for order mutations, the
/// column) it touches; see [`locks::LockRegistry`]. Storage and the workflow
/// gateway are injected seams so callers can back them with anything that
/// honors the contracts.
pub struct BoardEngine<S, G> {
    store: Arc<S>,
    gateway: Arc<G>,
    locks: LockRegistry,
}

impl<S: BoardStore, G: WorkflowGateway> BoardEngine<S, G> {
    pub fn new(store: Arc<S>, gateway: Arc<G>) -> Self {
        Self {
            store,
            gateway,
            locks: LockRegistry::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append a new item to the end of a column.
    pub async fn add_item(&self, column_id: ColumnId, name: &str) -> Result<Item, BoardError> {
        if name.trim().is_empty() {
            return Err(BoardError::InvalidItemName);
        }
        let _column_guard = self.locks.lock_column(column_id).await;
        let item = self.store.append_item(name, column_id).await?;
        tracing::info!(item = item.id, column = column_id, order = item.order, "item added");
        Ok(item)
    }

    /// Delete an item. Orders of the remaining items keep their gaps.
    pub async fn delete_item(&self, item_id: ItemId) -> Result<(), BoardError> {
        let _item_guard = self.locks.lock_item(item_id).await;
        self.store.delete_item(item_id).await?;
        tracing::info!(item = item_id, "item deleted");
        Ok(())
    }
}
