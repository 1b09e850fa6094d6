//! HTTP controller: maps routes to `TodoItemService` calls and service
//! outcomes to status codes.
//!
//! | Verb | Path                  | Success         |
//! |------|-----------------------|-----------------|
//! | GET  | `/api/TodoItems`      | 200, pending    |
//! | GET  | `/api/TodoItems/{id}` | 200, item       |
//! | PUT  | `/api/TodoItems/{id}` | 204, no body    |
//! | POST | `/api/TodoItems`      | 201 + Location  |
//!
//! Validation and duplicate failures answer 400 with a plain-text message,
//! a path/body id mismatch answers 400 with no body, unknown ids answer 404.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::{TodoItem, TodoItemPayload};
use crate::service::ServiceError;
use crate::store::StoreError;
use crate::AppState;

pub const ITEMS_PATH: &str = "/api/TodoItems";
const ITEM_PATH: &str = "/api/TodoItems/{id}";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Description is required")]
    DescriptionRequired,

    #[error("Description already exists")]
    DuplicateDescription,

    #[error("Id is required")]
    IdRequired,

    #[error("path id does not match body id")]
    MismatchedId,

    #[error("todo item not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::DescriptionRequired => ApiError::DescriptionRequired,
            ServiceError::DuplicateDescription => ApiError::DuplicateDescription,
            ServiceError::IdRequired => ApiError::IdRequired,
            ServiceError::Store(e) => ApiError::Store(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::DescriptionRequired | ApiError::DuplicateDescription | ApiError::IdRequired => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            ApiError::MismatchedId => StatusCode::BAD_REQUEST.into_response(),
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Store(err) => {
                tracing::error!(error = %err, "store failure while handling request");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(ITEMS_PATH, get(list_items).post(create_item))
        .route(ITEM_PATH, get(get_item).put(update_item))
}

async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<TodoItem>>, ApiError> {
    Ok(Json(state.service.list_pending().await?))
}

async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TodoItem>, ApiError> {
    state.service.get(id).await?.map(Json).ok_or(ApiError::NotFound)
}

async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TodoItemPayload>,
) -> Result<StatusCode, ApiError> {
    if payload.id != Some(id) {
        return Err(ApiError::MismatchedId);
    }
    state
        .service
        .update(payload.into_item(id))
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<TodoItemPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let item = payload.into_new_item().ok_or(ApiError::DescriptionRequired)?;
    let created = state.service.create(item).await?;
    tracing::info!(id = %created.id, "todo item created");

    let location = format!("{ITEMS_PATH}/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn domain_errors_map_to_status_codes() {
        assert_eq!(status_of(ApiError::DescriptionRequired), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(ApiError::DuplicateDescription), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(ApiError::IdRequired), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(ApiError::MismatchedId), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(ApiError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(ApiError::Store(StoreError::Unavailable("down".into()))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn service_errors_convert_one_to_one() {
        assert!(matches!(
            ApiError::from(ServiceError::DuplicateDescription),
            ApiError::DuplicateDescription
        ));
        assert!(matches!(
            ApiError::from(ServiceError::Store(StoreError::Missing(Uuid::nil()))),
            ApiError::Store(StoreError::Missing(_))
        ));
    }

    #[test]
    fn validation_messages_match_wire_text() {
        assert_eq!(ApiError::DescriptionRequired.to_string(), "Description is required");
        assert_eq!(ApiError::DuplicateDescription.to_string(), "Description already exists");
    }
}
