//! Errors returned by `TodoClient` parse and build methods.
//!
//! `BadRequest` carries the server's plain-text message ("Description is
//! required", "Description already exists") so a UI can show it verbatim.

use thiserror::Error;

const NOT_FOUND_MESSAGE: &str = "The item is not found. Please refresh the list.";
const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the item does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned 400. Holds the response body, which is empty for
    /// a path/body id mismatch.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Any other unexpected status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),
}

impl ApiError {
    /// Text suitable for showing to an end user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::BadRequest(message) if !message.is_empty() => message.clone(),
            ApiError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            _ => GENERIC_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_text_for_400() {
        let err = ApiError::BadRequest("Description already exists".to_string());
        assert_eq!(err.user_message(), "Description already exists");
    }

    #[test]
    fn user_message_for_404_asks_for_refresh() {
        assert_eq!(
            ApiError::NotFound.user_message(),
            "The item is not found. Please refresh the list."
        );
    }

    #[test]
    fn user_message_falls_back_to_generic_text() {
        let generic = "Something went wrong. Please try again.";
        assert_eq!(ApiError::BadRequest(String::new()).user_message(), generic);
        let err = ApiError::HttpError {
            status: 500,
            body: String::new(),
        };
        assert_eq!(err.user_message(), generic);
        assert_eq!(ApiError::DeserializationError("eof".into()).user_message(), generic);
    }
}
