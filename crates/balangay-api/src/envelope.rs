//! Typed response envelopes.
//!
//! Every endpoint answers `{success, message?, data?/count?/qrCode?, …}`.
//! Using concrete structs instead of ad-hoc `json!` keeps the wire shape
//! checked at compile time.

use serde::Serialize;

use balangay_core::resident::Resident;

/// A single-record envelope (create / get / update).
#[derive(Debug, Serialize)]
pub struct RecordResponse {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<&'static str>,
  pub data:    Resident,
}

impl RecordResponse {
  pub fn created(data: Resident) -> Self {
    Self { success: true, message: Some("Resident created successfully"), data }
  }

  pub fn fetched(data: Resident) -> Self {
    Self { success: true, message: None, data }
  }

  pub fn updated(data: Resident) -> Self {
    Self { success: true, message: Some("Resident updated successfully"), data }
  }
}

/// Full-collection envelope with a record count.
#[derive(Debug, Serialize)]
pub struct ListResponse {
  pub success: bool,
  pub count:   usize,
  pub data:    Vec<Resident>,
}

impl ListResponse {
  pub fn new(data: Vec<Resident>) -> Self {
    Self { success: true, count: data.len(), data }
  }
}

/// Confirmation with no data payload (delete).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
  pub success: bool,
  pub message: &'static str,
}

impl MessageResponse {
  pub fn deleted() -> Self {
    Self { success: true, message: "Resident deleted successfully" }
  }
}

/// QR regeneration envelope.
#[derive(Debug, Serialize)]
pub struct QrResponse {
  pub success: bool,
  pub message: &'static str,
  #[serde(rename = "qrCode")]
  pub qr_code: String,
}

impl QrResponse {
  pub fn new(qr_code: String) -> Self {
    Self {
      success: true,
      message: "QR code generated successfully",
      qr_code,
    }
  }
}

/// One import item that could not be inserted.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportFailure {
  pub index:       usize,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub resident_id: Option<String>,
  pub reason:      String,
}

/// Bulk-import envelope: how many records made it in, and which did not.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
  pub success:  bool,
  pub message:  &'static str,
  pub count:    usize,
  pub failures: Vec<ImportFailure>,
}

impl ImportResponse {
  pub fn new(count: usize, failures: Vec<ImportFailure>) -> Self {
    Self {
      success: true,
      message: "Residents data imported successfully",
      count,
      failures,
    }
  }
}
