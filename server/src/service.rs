//! Domain rules for todo items.
//!
//! # Design
//! `TodoItemService` owns the one invariant of the system: at most one
//! pending item per case-insensitive description. It is checked with a
//! linear scan of the store on every create, and on update only when the
//! description actually changes. Completed items never take part in the
//! check. Domain failures come back as `ServiceError` values; the controller
//! decides how to present them.

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::config::IdPolicy;
use crate::model::{descriptions_match, NewTodoItem, TodoItem};
use crate::store::{StoreError, TodoRecord, TodoStore};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Description is required")]
    DescriptionRequired,

    #[error("Description already exists")]
    DuplicateDescription,

    #[error("Id is required")]
    IdRequired,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone)]
pub struct TodoItemService {
    store: Arc<dyn TodoStore>,
    id_policy: IdPolicy,
}

impl TodoItemService {
    pub fn new(store: Arc<dyn TodoStore>, id_policy: IdPolicy) -> Self {
        Self { store, id_policy }
    }

    /// All items that are not completed, in store order.
    pub async fn list_pending(&self) -> Result<Vec<TodoItem>, ServiceError> {
        let records = self.store.scan().await?;
        Ok(records
            .into_iter()
            .filter(|r| !r.is_completed)
            .map(TodoItem::from)
            .collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<TodoItem>, ServiceError> {
        Ok(self.store.find(id).await?.map(TodoItem::from))
    }

    pub async fn create(&self, item: NewTodoItem) -> Result<TodoItem, ServiceError> {
        if item.description.is_empty() {
            return Err(ServiceError::DescriptionRequired);
        }

        let id = match (item.id.filter(|id| !id.is_nil()), self.id_policy) {
            (Some(id), _) => id,
            (None, IdPolicy::AssignWhenAbsent) => Uuid::new_v4(),
            (None, IdPolicy::CallerSupplied) => return Err(ServiceError::IdRequired),
        };

        if self.description_exists(&item.description, None).await? {
            tracing::warn!(description = %item.description, "rejected duplicate description on create");
            return Err(ServiceError::DuplicateDescription);
        }

        let record = TodoRecord {
            id,
            description: item.description,
            is_completed: item.is_completed,
        };
        self.store.insert(record.clone()).await?;
        tracing::debug!(%id, "created todo item");

        Ok(record.into())
    }

    /// Overwrite description and completion of an existing item. Returns
    /// `Ok(None)` if no item has `item.id`.
    pub async fn update(&self, item: TodoItem) -> Result<Option<TodoItem>, ServiceError> {
        let Some(mut saved) = self.store.find(item.id).await? else {
            return Ok(None);
        };

        if saved.description != item.description
            && self
                .description_exists(&item.description, Some(item.id))
                .await?
        {
            tracing::warn!(id = %item.id, description = %item.description, "rejected duplicate description on update");
            return Err(ServiceError::DuplicateDescription);
        }

        saved.description = item.description;
        saved.is_completed = item.is_completed;
        self.store.save(saved.clone()).await?;
        tracing::debug!(id = %saved.id, is_completed = saved.is_completed, "updated todo item");

        Ok(Some(saved.into()))
    }

    /// Whether a pending item other than `except` already uses `description`.
    async fn description_exists(
        &self,
        description: &str,
        except: Option<Uuid>,
    ) -> Result<bool, ServiceError> {
        let records = self.store.scan().await?;
        Ok(records.iter().any(|r| {
            !r.is_completed
                && Some(r.id) != except
                && descriptions_match(&r.description, description)
        }))
    }
}
