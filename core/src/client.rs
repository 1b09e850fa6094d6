//! Stateless HTTP request builder and response parser for the todo items API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation has a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! the matching `HttpResponse`. Expected statuses: list and get 200, create
//! 201, update 204.

use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTodoItem, TodoItem};

/// Path of the items collection, relative to the base URL.
pub const ITEMS_PATH: &str = "/api/TodoItems";

#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn items_url(&self) -> String {
        format!("{}{ITEMS_PATH}", self.base_url)
    }

    fn item_url(&self, id: Uuid) -> String {
        format!("{}{ITEMS_PATH}/{id}", self.base_url)
    }

    /// Pending items only; completed ones are never listed.
    pub fn build_list_items(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.items_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_item(&self, id: Uuid) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.item_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_item(&self, input: &NewTodoItem) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.items_url(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    /// Full replacement of description and completion. The body carries the
    /// item's own id, which the server checks against the path.
    pub fn build_update_item(&self, item: &TodoItem) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.item_url(item.id),
            headers: json_headers(),
            body: Some(to_json(item)?),
        })
    }

    pub fn build_mark_completed(&self, item: &TodoItem) -> Result<HttpRequest, ApiError> {
        self.build_update_item(&TodoItem {
            is_completed: true,
            ..item.clone()
        })
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<TodoItem>, ApiError> {
        check_status(&response, 200)?;
        from_json(&response.body)
    }

    pub fn parse_get_item(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        check_status(&response, 200)?;
        from_json(&response.body)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<TodoItem, ApiError> {
        check_status(&response, 201)?;
        from_json(&response.body)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        s if s == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        400 => Err(ApiError::BadRequest(response.body.clone())),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
