use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::persistence::PersistenceError;

/// Errors returned by the article handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No article with id {0}")]
    NotFound(i64),
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Unknown action: {0}")]
    UnknownAction(String),
    #[error("Article was not created")]
    NotCreated,
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MissingParameter(_) | ApiError::UnknownAction(_) => StatusCode::BAD_REQUEST,
            ApiError::NotCreated | ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
