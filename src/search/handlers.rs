//! HTTP handlers for the search service.
//!
//! Thin boundary over the pipeline: parse the request body, invoke the
//! orchestrator, serialize the outcome. This is the only place where an
//! error kind is translated into a response status code.

use super::engine;
use super::types::{ErrorResponse, SearchRequest};
use crate::error::SearchError;
use crate::gists::client::GistClient;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

/// Liveness probe.
pub async fn handle_ping() -> &'static str {
    "pong"
}

pub async fn handle_search(
    Extension(client): Extension<Arc<GistClient>>,
    Json(req): Json<SearchRequest>,
) -> Response {
    let username = req.username.unwrap_or_default();
    let pattern = req.pattern.unwrap_or_default();

    match engine::search(&client, &username, &pattern).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => {
            tracing::warn!("Search for user {:?} failed: {}", username, err);
            (
                error_status(&err),
                Json(ErrorResponse {
                    status: "error".to_string(),
                    message: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Maps an error kind to the response status code.
///
/// An `Upstream` error reuses the status the upstream service returned,
/// when that is a valid HTTP status; everything unclassified is a 500.
fn error_status(err: &SearchError) -> StatusCode {
    match err {
        SearchError::Validation(_) => StatusCode::BAD_REQUEST,
        SearchError::Pattern(_) => StatusCode::BAD_REQUEST,
        SearchError::Upstream { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
        SearchError::Http(_) | SearchError::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
