use std::str::FromStr;

use tracing::Instrument;

use crate::engine::error::BoardError;
use crate::engine::BoardEngine;
use crate::github::WorkflowGateway;
use crate::models::{Item, ItemId, ProjectId};
use crate::store::{BoardStore, Entity};

/// A requested item move, matched case-insensitively from the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Direction {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(BoardError::InvalidDirection(s.to_string())),
        }
    }
}

/// Which same-column neighbor a reorder swaps with.
#[derive(Debug, Clone, Copy)]
enum Neighbor {
    Above,
    Below,
}

impl<S: BoardStore, G: WorkflowGateway> BoardEngine<S, G> {
    /// Move an item one step in the given direction.
    ///
    /// Up/down swap order values with the nearest same-column neighbor and
    /// are a no-op at the column edge. Left/right append the item to the end
    /// of the adjacent column and fail with `BoundaryExceeded` at the board
    /// edge. The returned item carries its final column reference, which the
    /// caller compares against the pre-move column to detect a crossing.
    pub async fn move_item(
        &self,
        project_id: ProjectId,
        item_id: ItemId,
        direction: &str,
    ) -> Result<Item, BoardError> {
        let direction = Direction::from_str(direction)?;
        let span = tracing::info_span!("move_item", project_id, item_id, direction = %direction);
        async move {
            let _item_guard = self.locks.lock_item(item_id).await;
            let item = self.store.item(item_id).await?;

            let moved = match direction {
                Direction::Up => self.swap_within_column(item, Neighbor::Above).await?,
                Direction::Down => self.swap_within_column(item, Neighbor::Below).await?,
                Direction::Left | Direction::Right => {
                    self.shift_across_columns(project_id, item, direction).await?
                }
            };

            tracing::info!(column = moved.column_id, order = moved.order, "item moved");
            Ok(moved)
        }
        .instrument(span)
        .await
    }

    /// Swap order values with the nearest neighbor above or below.
    ///
    /// The topmost item has no neighbor above (likewise bottom/below); that
    /// move returns the item unchanged rather than writing anything.
    async fn swap_within_column(
        &self,
        mut item: Item,
        neighbor: Neighbor,
    ) -> Result<Item, BoardError> {
        let _column_guard = self.locks.lock_column(item.column_id).await;
        let column = self.store.column(item.column_id).await?;

        let candidate = match neighbor {
            Neighbor::Above => column
                .items
                .iter()
                .filter(|other| other.order < item.order)
                .max_by_key(|other| other.order),
            Neighbor::Below => column
                .items
                .iter()
                .filter(|other| other.order > item.order)
                .min_by_key(|other| other.order),
        };

        let Some(mut other) = candidate.cloned() else {
            return Ok(item);
        };

        std::mem::swap(&mut item.order, &mut other.order);
        let moved = self.store.update_item(item.id, &item).await?;
        self.store.update_item(other.id, &other).await?;
        Ok(moved)
    }

    /// Move into the adjacent column, appended to its end.
    async fn shift_across_columns(
        &self,
        project_id: ProjectId,
        mut item: Item,
        direction: Direction,
    ) -> Result<Item, BoardError> {
        let columns = self.store.columns_for_project(project_id).await?;
        let index = columns
            .iter()
            .position(|column| column.id == item.column_id)
            .ok_or(BoardError::NotFound {
                entity: Entity::Column,
                id: item.column_id,
            })?;

        let target = match direction {
            Direction::Left if index > 0 => &columns[index - 1],
            Direction::Right if index + 1 < columns.len() => &columns[index + 1],
            _ => {
                return Err(BoardError::BoundaryExceeded {
                    direction,
                    column: columns[index].name.clone(),
                })
            }
        };

        let _column_guard = self.locks.lock_column(target.id).await;
        item.order = self.store.next_order_value(target.id).await?;
        item.column_id = target.id;
        Ok(self.store.update_item(item.id, &item).await?)
    }
}
