use thiserror::Error;

use crate::engine::move_engine::Direction;
use crate::github::GitHubError;
use crate::models::ItemId;
use crate::store::{Entity, StorageError};

/// Failures of the move engine and the transition state machine.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid move direction '{0}'")]
    InvalidDirection(String),
    #[error("cannot move {direction} from column '{column}'")]
    BoundaryExceeded { direction: Direction, column: String },
    #[error("{entity} {id} not found")]
    NotFound { entity: Entity, id: u64 },
    #[error("item {item} has no linked {field}")]
    MissingLinkage {
        item: ItemId,
        field: &'static str,
    },
    #[error("item name must not be empty")]
    InvalidItemName,
    #[error("storage operation failed: {0}")]
    Storage(StorageError),
    #[error("workflow gateway call failed: {0}")]
    Gateway(#[from] GitHubError),
}

impl From<StorageError> for BoardError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, id } => BoardError::NotFound { entity, id },
            other => BoardError::Storage(other),
        }
    }
}

impl BoardError {
    /// Client errors are the caller's to fix; everything else is a
    /// server-side failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            BoardError::InvalidDirection(_)
                | BoardError::BoundaryExceeded { .. }
                | BoardError::NotFound { .. }
                | BoardError::MissingLinkage { .. }
                | BoardError::InvalidItemName
        )
    }
}
