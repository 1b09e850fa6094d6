//! Synchronous client core for the todo items API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, so the core stays deterministic and testable.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces a request) and
//!   `parse_*` (consumes a response), so the I/O boundary is explicit.
//! - Wire types are defined independently from `todo-server`; the
//!   integration test catches schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{TodoClient, ITEMS_PATH};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{NewTodoItem, TodoItem};
