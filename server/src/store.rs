//! Record store for todo items.
//!
//! # Design
//! `TodoStore` is the only seam between the service and persistence. It
//! offers exactly what the service needs: insert, point lookup, full scan and
//! saving a mutated record. `InMemoryStore` keeps records in a shared
//! `HashMap` behind a tokio `RwLock`; clones share the same map.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::model::TodoItem;

/// Storage-layer representation of a todo item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoRecord {
    pub id: Uuid,
    pub description: String,
    pub is_completed: bool,
}

impl From<TodoRecord> for TodoItem {
    fn from(record: TodoRecord) -> Self {
        TodoItem {
            id: record.id,
            description: record.description,
            is_completed: record.is_completed,
        }
    }
}

impl From<TodoItem> for TodoRecord {
    fn from(item: TodoItem) -> Self {
        TodoRecord {
            id: item.id,
            description: item.description,
            is_completed: item.is_completed,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("record {0} already exists")]
    DuplicateKey(Uuid),

    #[error("record {0} does not exist")]
    Missing(Uuid),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Add a new record. Fails with `DuplicateKey` if the id is taken.
    async fn insert(&self, record: TodoRecord) -> Result<(), StoreError>;

    async fn find(&self, id: Uuid) -> Result<Option<TodoRecord>, StoreError>;

    /// Every record, in no particular order.
    async fn scan(&self) -> Result<Vec<TodoRecord>, StoreError>;

    /// Overwrite an existing record. Fails with `Missing` if it was never
    /// inserted.
    async fn save(&self, record: TodoRecord) -> Result<(), StoreError>;
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    records: Arc<RwLock<HashMap<Uuid, TodoRecord>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for InMemoryStore {
    async fn insert(&self, record: TodoRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(StoreError::DuplicateKey(record.id));
        }
        records.insert(record.id, record);
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<TodoRecord>, StoreError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn scan(&self) -> Result<Vec<TodoRecord>, StoreError> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn save(&self, record: TodoRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        let slot = records
            .get_mut(&record.id)
            .ok_or(StoreError::Missing(record.id))?;
        *slot = record;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(description: &str) -> TodoRecord {
        TodoRecord {
            id: Uuid::new_v4(),
            description: description.to_string(),
            is_completed: false,
        }
    }

    #[tokio::test]
    async fn insert_then_find() {
        let store = InMemoryStore::new();
        let rec = record("Buy milk");
        store.insert(rec.clone()).await.unwrap();

        assert_eq!(store.find(rec.id).await.unwrap(), Some(rec));
        assert_eq!(store.find(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn insert_rejects_existing_id() {
        let store = InMemoryStore::new();
        let rec = record("Buy milk");
        store.insert(rec.clone()).await.unwrap();

        let err = store.insert(rec.clone()).await.unwrap_err();
        assert_eq!(err, StoreError::DuplicateKey(rec.id));
    }

    #[tokio::test]
    async fn save_overwrites_existing_record() {
        let store = InMemoryStore::new();
        let mut rec = record("Buy milk");
        store.insert(rec.clone()).await.unwrap();

        rec.description = "Buy bread".to_string();
        rec.is_completed = true;
        store.save(rec.clone()).await.unwrap();

        assert_eq!(store.find(rec.id).await.unwrap(), Some(rec));
        assert_eq!(store.scan().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn save_unknown_record_fails() {
        let store = InMemoryStore::new();
        let rec = record("Ghost");
        let err = store.save(rec.clone()).await.unwrap_err();
        assert_eq!(err, StoreError::Missing(rec.id));
        assert!(store.scan().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn clones_share_records() {
        let store = InMemoryStore::new();
        let other = store.clone();
        store.insert(record("Shared")).await.unwrap();
        assert_eq!(other.scan().await.unwrap().len(), 1);
    }

    #[test]
    fn record_maps_to_item_and_back() {
        let rec = record("Walk dog");
        let item: TodoItem = rec.clone().into();
        assert_eq!(item.id, rec.id);
        assert_eq!(item.description, "Walk dog");
        assert!(!item.is_completed);
        assert_eq!(TodoRecord::from(item), rec);
    }
}
