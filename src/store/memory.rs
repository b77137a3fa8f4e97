// In-memory BoardStore - reference implementation for tests and embedded use

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::{Column, ColumnId, Item, ItemId, Project, ProjectId};
use crate::store::{BoardStore, Entity, StorageError};

#[derive(Debug)]
struct ProjectRecord {
    id: ProjectId,
    name: String,
    column_ids: Vec<ColumnId>,
}

#[derive(Debug)]
struct ColumnRecord {
    id: ColumnId,
    name: String,
    project_id: ProjectId,
}

#[derive(Debug, Default)]
struct Inner {
    projects: HashMap<ProjectId, ProjectRecord>,
    columns: HashMap<ColumnId, ColumnRecord>,
    items: HashMap<ItemId, Item>,
    next_id: u64,
}

impl Inner {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Items of a column ascending by (order, id).
    fn column_items(&self, column_id: ColumnId) -> Vec<Item> {
        let mut items: Vec<Item> = self
            .items
            .values()
            .filter(|item| item.column_id == column_id)
            .cloned()
            .collect();
        items.sort_by_key(|item| (item.order, item.id));
        items
    }

    fn next_order(&self, column_id: ColumnId) -> i64 {
        self.items
            .values()
            .filter(|item| item.column_id == column_id)
            .map(|item| item.order)
            .max()
            .map_or(1, |max| max + 1)
    }

    fn materialize_column(&self, record: &ColumnRecord) -> Column {
        Column {
            id: record.id,
            name: record.name.clone(),
            project_id: record.project_id,
            items: self.column_items(record.id),
        }
    }
}

/// In-memory board store guarded by a single async mutex.
///
/// Keeps the persistence semantics the engine relies on (append order
/// assignment, no renumbering on delete) without any wire protocol.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a project, returning its id.
    pub async fn add_project(&self, name: &str) -> ProjectId {
        let mut inner = self.inner.lock().await;
        let id = inner.allocate_id();
        inner.projects.insert(
            id,
            ProjectRecord {
                id,
                name: name.to_string(),
                column_ids: Vec::new(),
            },
        );
        id
    }

    /// Seed a column at the end of a project's column sequence.
    pub async fn add_column(&self, project_id: ProjectId, name: &str) -> ColumnId {
        let mut inner = self.inner.lock().await;
        let id = inner.allocate_id();
        inner.columns.insert(
            id,
            ColumnRecord {
                id,
                name: name.to_string(),
                project_id,
            },
        );
        if let Some(project) = inner.projects.get_mut(&project_id) {
            project.column_ids.push(id);
        }
        id
    }
}

#[async_trait]
impl BoardStore for MemoryStore {
    async fn project(&self, id: ProjectId) -> Result<Project, StorageError> {
        let inner = self.inner.lock().await;
        let record = inner.projects.get(&id).ok_or(StorageError::NotFound {
            entity: Entity::Project,
            id,
        })?;
        let columns = record
            .column_ids
            .iter()
            .filter_map(|column_id| inner.columns.get(column_id))
            .map(|column| inner.materialize_column(column))
            .collect();
        Ok(Project {
            id: record.id,
            name: record.name.clone(),
            columns,
        })
    }

    async fn column(&self, id: ColumnId) -> Result<Column, StorageError> {
        let inner = self.inner.lock().await;
        let record = inner.columns.get(&id).ok_or(StorageError::NotFound {
            entity: Entity::Column,
            id,
        })?;
        Ok(inner.materialize_column(record))
    }

    async fn columns_for_project(
        &self,
        project_id: ProjectId,
    ) -> Result<Vec<Column>, StorageError> {
        let inner = self.inner.lock().await;
        let record = inner
            .projects
            .get(&project_id)
            .ok_or(StorageError::NotFound {
                entity: Entity::Project,
                id: project_id,
            })?;
        Ok(record
            .column_ids
            .iter()
            .filter_map(|column_id| inner.columns.get(column_id))
            .map(|column| inner.materialize_column(column))
            .collect())
    }

    async fn item(&self, id: ItemId) -> Result<Item, StorageError> {
        let inner = self.inner.lock().await;
        inner
            .items
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound {
                entity: Entity::Item,
                id,
            })
    }

    async fn append_item(&self, name: &str, column_id: ColumnId) -> Result<Item, StorageError> {
        let mut inner = self.inner.lock().await;
        if !inner.columns.contains_key(&column_id) {
            return Err(StorageError::NotFound {
                entity: Entity::Column,
                id: column_id,
            });
        }
        let order = inner.next_order(column_id);
        let id = inner.allocate_id();
        let item = Item::new(id, name, column_id, order);
        inner.items.insert(id, item.clone());
        Ok(item)
    }

    async fn update_item(&self, id: ItemId, item: &Item) -> Result<Item, StorageError> {
        let mut inner = self.inner.lock().await;
        if !inner.items.contains_key(&id) {
            return Err(StorageError::NotFound {
                entity: Entity::Item,
                id,
            });
        }
        if !inner.columns.contains_key(&item.column_id) {
            return Err(StorageError::NotFound {
                entity: Entity::Column,
                id: item.column_id,
            });
        }
        let mut stored = item.clone();
        stored.id = id;
        inner.items.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), StorageError> {
        let mut inner = self.inner.lock().await;
        inner.items.remove(&id).ok_or(StorageError::NotFound {
            entity: Entity::Item,
            id,
        })?;
        Ok(())
    }

    async fn next_order_value(&self, column_id: ColumnId) -> Result<i64, StorageError> {
        let inner = self.inner.lock().await;
        if !inner.columns.contains_key(&column_id) {
            return Err(StorageError::NotFound {
                entity: Entity::Column,
                id: column_id,
            });
        }
        Ok(inner.next_order(column_id))
    }
}
