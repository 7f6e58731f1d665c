//! Resident — the sole entity of the registry.
//!
//! A resident is a mutable record keyed by a store-assigned UUID. The
//! business-facing `resident_id` is generated once at registration and never
//! changes afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

// ─── Enumerations ────────────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
pub enum Gender {
  Male,
  Female,
  Other,
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
pub enum CivilStatus {
  Single,
  Married,
  Widowed,
  Separated,
  Divorced,
}

/// Logical state marker. Transitions are not constrained — any value may be
/// written over any other.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display,
  EnumString,
)]
pub enum ResidentStatus {
  #[default]
  Active,
  Inactive,
  Deceased,
  Transferred,
}

// ─── Address ─────────────────────────────────────────────────────────────────

/// A structured postal address. Every component is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
  pub street:       Option<String>,
  pub house_number: Option<String>,
  pub barangay:     Option<String>,
  pub city:         Option<String>,
  pub province:     Option<String>,
  pub zip_code:     Option<String>,
}

// ─── Resident ────────────────────────────────────────────────────────────────

/// One registered individual.
///
/// Serde defaults on `id` and the timestamps let records from a backup file
/// deserialize even when those store-maintained columns are absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
  /// Store-assigned primary identifier; distinct from `resident_id`.
  #[serde(default = "Uuid::new_v4")]
  pub id:                Uuid,
  /// Business-facing identifier (`BR<digits>`); immutable once assigned.
  pub resident_id:       String,
  pub first_name:        String,
  pub last_name:         String,
  pub middle_name:       Option<String>,
  pub date_of_birth:     NaiveDate,
  pub gender:            Gender,
  pub civil_status:      CivilStatus,
  pub contact_number:    String,
  pub email:             Option<String>,
  #[serde(default)]
  pub address:           Address,
  pub occupation:        Option<String>,
  pub monthly_income:    Option<f64>,
  #[serde(default)]
  pub voter_status:      bool,
  #[serde(default = "Utc::now")]
  pub registration_date: DateTime<Utc>,
  pub qr_code:           Option<String>,
  #[serde(default)]
  pub status:            ResidentStatus,
  #[serde(default = "Utc::now")]
  pub created_at:        DateTime<Utc>,
  #[serde(default = "Utc::now")]
  pub updated_at:        DateTime<Utc>,
}

impl Resident {
  /// `"<first> <last>"` — the display name embedded in QR payloads.
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }
}

/// Generate a fresh business-facing resident identifier.
///
/// The `BR` prefix is followed by the decimal rendering of a UUIDv7, so
/// identifiers are time-ordered and collision-resistant.
pub fn new_resident_id() -> String {
  format!("BR{}", Uuid::now_v7().as_u128())
}

// ─── NewResident ─────────────────────────────────────────────────────────────

/// The write body accepted by the create and update operations.
///
/// Every field is optional: on create, absent required fields are reported
/// back as [`MissingFields`](crate::validate::MissingFields); on update,
/// absent fields are left unchanged. Enumerated fields arrive as strings and
/// are checked for membership by the validator rather than by serde, so that
/// an unknown value surfaces as a validation error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewResident {
  pub first_name:        Option<String>,
  pub last_name:         Option<String>,
  pub middle_name:       Option<String>,
  pub date_of_birth:     Option<NaiveDate>,
  pub gender:            Option<String>,
  pub civil_status:      Option<String>,
  pub contact_number:    Option<String>,
  pub email:             Option<String>,
  pub address:           Option<Address>,
  pub occupation:        Option<String>,
  pub monthly_income:    Option<f64>,
  pub voter_status:      Option<bool>,
  pub registration_date: Option<DateTime<Utc>>,
  pub status:            Option<String>,
}
