//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Validation failures and storage outages are kept apart so clients get a
/// retryable 503 for the latter instead of a blanket 400.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("storage unavailable: {0}")]
  Unavailable(String),
}

impl From<till_core::Error> for ApiError {
  fn from(e: till_core::Error) -> Self {
    match e {
      till_core::Error::Validation(m) => ApiError::BadRequest(m),
      till_core::Error::NotFound(m) => ApiError::NotFound(m),
      till_core::Error::Unavailable(m) => ApiError::Unavailable(m),
    }
  }
}

impl ApiError {
  /// Classify a backend error through the core taxonomy.
  pub fn from_store<E: Into<till_core::Error>>(e: E) -> Self {
    ApiError::from(e.into())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Unavailable(m) => (StatusCode::SERVICE_UNAVAILABLE, m.clone()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
