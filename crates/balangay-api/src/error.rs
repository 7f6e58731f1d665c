//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every error renders the registry's response envelope with
//! `success: false`. Infrastructure faults carry the operation they
//! interrupted, which decides both the message and the status code — create
//! and update report 400, the remaining operations 500, mirroring the
//! registry's established surface.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use balangay_core::validate::MissingFields;

// ─── Operation context ───────────────────────────────────────────────────────

/// The operation an infrastructure fault interrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
  Create,
  List,
  Fetch,
  Update,
  Delete,
  Qr,
  Export,
  Import,
}

impl Operation {
  pub fn message(self) -> &'static str {
    match self {
      Operation::Create => "Error creating resident",
      Operation::List   => "Error fetching residents",
      Operation::Fetch  => "Error fetching resident",
      Operation::Update => "Error updating resident",
      Operation::Delete => "Error deleting resident",
      Operation::Qr     => "Error generating QR code",
      Operation::Export => "Error exporting residents data",
      Operation::Import => "Error importing residents data",
    }
  }

  fn status(self) -> StatusCode {
    match self {
      Operation::Create | Operation::Update => StatusCode::BAD_REQUEST,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

// ─── Error ───────────────────────────────────────────────────────────────────

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("resident not found")]
  NotFound,

  #[error("missing required fields")]
  MissingFields(MissingFields),

  #[error("validation error: {0}")]
  Validation(String),

  #[error("invalid import payload: expected an array")]
  InvalidImportFormat,

  #[error("{}: {source}", .operation.message())]
  Store {
    operation: Operation,
    #[source]
    source:    Box<dyn std::error::Error + Send + Sync>,
  },
}

impl ApiError {
  /// Wrap a validation failure from the core validator.
  pub fn validation(err: impl std::fmt::Display) -> Self {
    Self::Validation(err.to_string())
  }

  /// Wrap an infrastructure fault with its operation context.
  pub fn store(
    operation: Operation,
    source: impl std::error::Error + Send + Sync + 'static,
  ) -> Self {
    Self::Store { operation, source: Box::new(source) }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, body) = match &self {
      ApiError::NotFound => (
        StatusCode::NOT_FOUND,
        json!({ "success": false, "message": "Resident not found" }),
      ),
      ApiError::MissingFields(missing) => (
        StatusCode::BAD_REQUEST,
        json!({
          "success":       false,
          "message":       "Missing required fields",
          "missingFields": missing,
        }),
      ),
      ApiError::Validation(detail) => (
        StatusCode::BAD_REQUEST,
        json!({
          "success": false,
          "message": "Validation error",
          "error":   detail,
        }),
      ),
      ApiError::InvalidImportFormat => (
        StatusCode::BAD_REQUEST,
        json!({
          "success": false,
          "message": "Invalid data format. Expected an array of residents.",
        }),
      ),
      ApiError::Store { operation, source } => {
        tracing::error!(error = %source, "{}", operation.message());
        (
          operation.status(),
          json!({
            "success": false,
            "message": operation.message(),
            "error":   source.to_string(),
          }),
        )
      }
    };

    (status, Json(body)).into_response()
  }
}
