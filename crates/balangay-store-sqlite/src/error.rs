//! Error type for `balangay-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] balangay_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// The stored text of an enumerated column did not match any variant.
  #[error("unknown {field}: {value:?}")]
  Decode {
    field: &'static str,
    value: String,
  },

  /// Rejected by the `resident_id` UNIQUE constraint.
  #[error("duplicate resident id: {0}")]
  DuplicateResidentId(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
