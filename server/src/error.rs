//! HTTP error responses.
//!
//! # Design
//! Every failure, whether it came from the core or from request parsing,
//! renders the same JSON contract:
//!
//! ```json
//! { "error_id": "<uuid>", "errors": [ { "code": "99160", "message": "...", "metadata": { "id": 4 } } ] }
//! ```
//!
//! `error_id` is fresh per response and logged next to the error code, so a
//! client report can be matched to the server log line.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::warn;
use uuid::Uuid;

/// Errors a request handler can return.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] todo_core::Error),

    /// The body was present but is not a valid todo payload.
    #[error("malformed request body: {0}")]
    MalformedPayload(String),

    /// The path id is not a positive integer.
    #[error("invalid todo id: {0:?}")]
    InvalidId(String),

    /// No route matches the request path.
    #[error("no route for {0}")]
    PathNotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(todo_core::Error::ItemNotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Core(todo_core::Error::MissingPayload) => StatusCode::BAD_REQUEST,
            ApiError::MalformedPayload(_) | ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::PathNotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Stable, client-facing error code.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Core(todo_core::Error::ItemNotFound { .. }) => "99160",
            ApiError::Core(todo_core::Error::MissingPayload) => "99150",
            ApiError::MalformedPayload(_) => "99151",
            ApiError::InvalidId(_) => "99152",
            ApiError::PathNotFound(_) => "99153",
        }
    }

    /// Client-facing message. Details go into `metadata`, not here.
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Core(todo_core::Error::ItemNotFound { .. }) => {
                "The requested TODO was not found"
            }
            ApiError::Core(todo_core::Error::MissingPayload) => "Missing expected content",
            ApiError::MalformedPayload(_) => "Malformed request body",
            ApiError::InvalidId(_) => "Invalid TODO identifier",
            ApiError::PathNotFound(_) => "Not found",
        }
    }

    fn metadata(&self) -> Map<String, Value> {
        let value = match self {
            ApiError::Core(todo_core::Error::ItemNotFound { id }) => json!({ "id": id }),
            ApiError::Core(todo_core::Error::MissingPayload) => return Map::new(),
            ApiError::MalformedPayload(reason) => json!({ "reason": reason }),
            ApiError::InvalidId(raw) => json!({ "id": raw }),
            ApiError::PathNotFound(path) => json!({ "path": path }),
        };
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    /// Builds the response body under a given `error_id`.
    pub fn to_body(&self, error_id: Uuid) -> ErrorBody {
        ErrorBody {
            error_id,
            errors: vec![ErrorDetail {
                code: self.code().to_string(),
                message: self.message().to_string(),
                metadata: self.metadata(),
            }],
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4();
        warn!(
            %error_id,
            code = self.code(),
            status = self.status().as_u16(),
            error = %self,
            "request failed"
        );
        (self.status(), Json(self.to_body(error_id))).into_response()
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error_id: Uuid,
    pub errors: Vec<ErrorDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}
