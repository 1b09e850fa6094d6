//! Todo list HTTP service.
//!
//! # Overview
//! A small CRUD API over todo items backed by a pluggable record store.
//!
//! # Design
//! - `store` holds records and knows nothing about domain rules.
//! - `service` enforces the pending-description uniqueness rule.
//! - `api` translates HTTP to service calls and results to status codes.
//! - Dependencies are passed in through `AppState`; nothing is global.

pub mod api;
pub mod config;
pub mod model;
pub mod service;
pub mod store;

use std::{future::Future, sync::Arc};

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::{IdPolicy, ServerConfig};
pub use model::{NewTodoItem, TodoItem};
pub use service::{ServiceError, TodoItemService};
pub use store::{InMemoryStore, StoreError, TodoRecord, TodoStore};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub service: TodoItemService,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>, id_policy: IdPolicy) -> Self {
        Self {
            service: TodoItemService::new(store, id_policy),
        }
    }

    pub fn in_memory(id_policy: IdPolicy) -> Self {
        Self::new(Arc::new(InMemoryStore::new()), id_policy)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::in_memory(IdPolicy::default())
    }
}

pub fn app(state: AppState) -> Router {
    api::routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve until the process is killed.
pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    serve(listener, state, std::future::pending()).await
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await
}
