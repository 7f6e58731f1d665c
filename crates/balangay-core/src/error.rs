//! Error types for `balangay-core`.

use thiserror::Error;

use crate::validate::MissingFields;

#[derive(Debug, Error)]
pub enum Error {
  #[error("missing required fields")]
  MissingRequired(MissingFields),

  #[error("{value:?} is not a valid {field}")]
  InvalidValue {
    field: &'static str,
    value: String,
  },

  #[error("{0} must not be empty")]
  EmptyField(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
