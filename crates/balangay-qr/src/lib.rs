//! QR payload codec for the Balangay resident registry.
//!
//! Turns a small JSON descriptor into an image-embeddable
//! `data:image/png;base64,…` URI. Pure synchronous; no HTTP or database
//! dependencies.
//!
//! Two descriptors exist on purpose: the registration-time payload is the
//! minimal card printed on issuance, while the regeneration payload carries
//! the full lookup superset.

pub mod error;

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use image::{ImageFormat, Luma};
use qrcode::QrCode;
use serde::Serialize;

use balangay_core::resident::{Address, Resident};

pub use error::{Error, Result};

// ─── Payloads ────────────────────────────────────────────────────────────────

/// Descriptor embedded in the QR code assigned at registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
  pub resident_id: String,
  pub name:        String,
  pub barangay:    String,
}

impl RegistrationPayload {
  pub fn for_resident(resident: &Resident) -> Self {
    Self {
      resident_id: resident.resident_id.clone(),
      name:        resident.full_name(),
      barangay:    resident.address.barangay.clone().unwrap_or_default(),
    }
  }
}

/// Descriptor embedded on explicit QR regeneration — a superset of
/// [`RegistrationPayload`] used for physical-ID lookup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityPayload {
  pub resident_id:    String,
  pub name:           String,
  pub address:        Address,
  pub contact_number: String,
}

impl IdentityPayload {
  pub fn for_resident(resident: &Resident) -> Self {
    Self {
      resident_id:    resident.resident_id.clone(),
      name:           resident.full_name(),
      address:        resident.address.clone(),
      contact_number: resident.contact_number.clone(),
    }
  }
}

// ─── Encoder ─────────────────────────────────────────────────────────────────

/// Encode `payload` as a PNG QR code wrapped in a base64 data URI.
pub fn data_uri<T: Serialize>(payload: &T) -> Result<String> {
  let json = serde_json::to_string(payload)?;
  let code = QrCode::new(json.as_bytes())?;
  let image = code.render::<Luma<u8>>().build();

  let mut png = Vec::new();
  image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

  Ok(format!("data:image/png;base64,{}", B64.encode(&png)))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use balangay_core::resident::{
    CivilStatus, Gender, new_resident_id,
  };
  use base64::Engine as _;
  use chrono::{NaiveDate, Utc};
  use uuid::Uuid;

  use super::*;

  fn resident() -> Resident {
    Resident {
      id:                Uuid::new_v4(),
      resident_id:       new_resident_id(),
      first_name:        "Ana".into(),
      last_name:         "Cruz".into(),
      middle_name:       None,
      date_of_birth:     NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
      gender:            Gender::Female,
      civil_status:      CivilStatus::Single,
      contact_number:    "09171234567".into(),
      email:             None,
      address:           Address {
        barangay: Some("San Isidro".into()),
        ..Default::default()
      },
      occupation:        None,
      monthly_income:    None,
      voter_status:      false,
      registration_date: Utc::now(),
      qr_code:           None,
      status:            Default::default(),
      created_at:        Utc::now(),
      updated_at:        Utc::now(),
    }
  }

  #[test]
  fn registration_payload_fields() {
    let r = resident();
    let p = RegistrationPayload::for_resident(&r);
    let json = serde_json::to_value(&p).unwrap();

    assert_eq!(json["residentId"], r.resident_id.as_str());
    assert_eq!(json["name"], "Ana Cruz");
    assert_eq!(json["barangay"], "San Isidro");
  }

  #[test]
  fn registration_payload_barangay_falls_back_to_empty() {
    let mut r = resident();
    r.address.barangay = None;
    let p = RegistrationPayload::for_resident(&r);
    assert_eq!(p.barangay, "");
  }

  #[test]
  fn identity_payload_is_a_superset() {
    let r = resident();
    let json =
      serde_json::to_value(IdentityPayload::for_resident(&r)).unwrap();

    assert_eq!(json["residentId"], r.resident_id.as_str());
    assert_eq!(json["name"], "Ana Cruz");
    assert_eq!(json["contactNumber"], "09171234567");
    assert_eq!(json["address"]["barangay"], "San Isidro");
  }

  #[test]
  fn data_uri_is_base64_png() {
    let uri =
      data_uri(&RegistrationPayload::for_resident(&resident())).unwrap();

    let b64 = uri.strip_prefix("data:image/png;base64,").unwrap();
    assert!(!b64.is_empty());

    let png = B64.decode(b64).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
  }
}
