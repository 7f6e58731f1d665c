//! Error type for `balangay-qr`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("qr encoding error: {0}")]
  Encode(#[from] qrcode::types::QrError),

  #[error("png encoding error: {0}")]
  Png(#[from] image::ImageError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
