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
  #[error("not found: {0}")]
  NotFound(String),

  #[error("validation failed: {0}")]
  Validation(#[from] validator::ValidationErrors),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("storage error: {0}")]
  Store(String),
}

impl ApiError {
  /// Lift a store failure into its HTTP-facing form.
  pub fn from_store(err: rolodex_core::Error) -> Self {
    match err {
      rolodex_core::Error::DuplicateEmail(email) => {
        Self::Conflict(format!("email already in use: {email}"))
      }
      rolodex_core::Error::Storage(msg) => Self::Store(msg),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m)   => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
      ApiError::Conflict(m)   => (StatusCode::CONFLICT, m.clone()),
      ApiError::Store(e)      => {
        // Surface only a generic message; the detail goes to the log.
        tracing::error!("storage failure: {e}");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          "storage failure".to_string(),
        )
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
