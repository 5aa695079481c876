//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Missing or malformed request field → 400.
  #[error("{0}")]
  Validation(String),

  /// Unknown session → 404.
  #[error("{0}")]
  NotFound(String),

  /// Upstream model failure or missing credential → 500. `details` echoes
  /// the raw error to the caller when there is one.
  #[error("{message}")]
  Upstream {
    message: String,
    details: Option<String>,
  },
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, body) = match self {
      ApiError::Validation(m) => {
        (StatusCode::BAD_REQUEST, json!({ "error": m }))
      }
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, json!({ "error": m })),
      ApiError::Upstream { message, details: Some(details) } => (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": message, "details": details }),
      ),
      ApiError::Upstream { message, details: None } => {
        (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }))
      }
    };
    (status, Json(body)).into_response()
  }
}
