//! Fallback for non-API routes when no frontend build is present.
//!
//! When the dist directory exists the router serves it directly (static
//! assets plus `index.html` for client-side routes); this handler only
//! answers when there is nothing to serve.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn missing_frontend() -> impl IntoResponse {
  (
    StatusCode::NOT_FOUND,
    Json(json!({
      "error": "Frontend not built. Please run the frontend build first.",
      "message": "This is a development server. The frontend needs to be built for production.",
    })),
  )
}
