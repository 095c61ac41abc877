//! HTTP front end for the in-memory todo store.
//!
//! Routes requests onto a shared [`TodoService`] and renders results as
//! JSON. Bodies are read as raw bytes so an empty body can be reported as a
//! missing payload rather than a JSON syntax error.

pub mod config;
pub mod error;
pub mod telemetry;

use std::{future::Future, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};
use todo_core::{TodoId, TodoItem, TodoPayload, TodoService};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::error::ApiError;

pub type SharedService = Arc<TodoService>;

pub fn app(service: SharedService) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .fallback(no_route)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(service)
}

/// Serves until `shutdown` resolves, then lets in-flight requests finish.
pub async fn run_until<F>(
    listener: TcpListener,
    service: SharedService,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(service))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn list_todos(State(service): State<SharedService>) -> Json<Vec<TodoItem>> {
    Json(service.list())
}

async fn create_todo(
    State(service): State<SharedService>,
    body: Bytes,
) -> Result<(StatusCode, Json<TodoItem>), ApiError> {
    let item = service.create(parse_payload(&body)?)?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn get_todo(
    State(service): State<SharedService>,
    Path(id): Path<String>,
) -> Result<Json<TodoItem>, ApiError> {
    Ok(Json(service.read(parse_id(&id)?)?))
}

async fn update_todo(
    State(service): State<SharedService>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<TodoItem>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(service.update(id, parse_payload(&body)?)?))
}

async fn delete_todo(
    State(service): State<SharedService>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete(parse_id(&id)?)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn no_route(uri: Uri) -> ApiError {
    ApiError::PathNotFound(uri.path().to_string())
}

/// An empty or whitespace-only body means no payload was sent.
fn parse_payload(body: &[u8]) -> Result<Option<TodoPayload>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| ApiError::MalformedPayload(e.to_string()))
}

/// Ids are positive; 0 and negatives are never allocated.
fn parse_id(raw: &str) -> Result<TodoId, ApiError> {
    match raw.parse::<TodoId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::InvalidId(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_no_payload() {
        assert!(parse_payload(b"").unwrap().is_none());
        assert!(parse_payload(b" \n\t").unwrap().is_none());
    }

    #[test]
    fn payload_is_parsed() {
        let payload = parse_payload(br#"{ "name": "TaskOne", "task" : "My first task" }"#)
            .unwrap()
            .unwrap();
        assert_eq!(payload, TodoPayload::new("TaskOne", "My first task"));
    }

    #[test]
    fn bad_json_is_malformed() {
        let err = parse_payload(br#"{"name":"no task"}"#).unwrap_err();
        assert!(matches!(err, ApiError::MalformedPayload(_)));
        let err = parse_payload(b"not json").unwrap_err();
        assert!(matches!(err, ApiError::MalformedPayload(_)));
    }

    #[test]
    fn ids_must_be_positive_integers() {
        assert_eq!(parse_id("17").unwrap(), 17);
        for raw in ["0", "-1", "abc", "1.5", "99999999999999999999"] {
            assert!(matches!(parse_id(raw), Err(ApiError::InvalidId(_))), "{raw}");
        }
    }
}
