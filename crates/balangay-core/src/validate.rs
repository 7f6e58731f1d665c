//! The resident entity validator.
//!
//! Two layers of checking, mirroring the registration flow:
//!
//! 1. Required-field presence on the raw write body, reported as itemized
//!    [`MissingFields`] flags.
//! 2. Schema-level validation (enum membership, non-empty required strings)
//!    run by [`build`]/[`apply`] and re-runnable via [`check`] before any
//!    store write.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
  Error, Result,
  resident::{CivilStatus, Gender, NewResident, Resident, ResidentStatus},
};

// ─── Missing-field flags ──────────────────────────────────────────────────────

/// One flag per required field; `true` means the field was absent (or blank)
/// in the write body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingFields {
  pub first_name:     bool,
  pub last_name:      bool,
  pub date_of_birth:  bool,
  pub gender:         bool,
  pub civil_status:   bool,
  pub contact_number: bool,
}

impl MissingFields {
  pub fn any(&self) -> bool {
    self.first_name
      || self.last_name
      || self.date_of_birth
      || self.gender
      || self.civil_status
      || self.contact_number
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Whitespace-only strings count as absent.
fn blank(s: &Option<String>) -> bool {
  s.as_deref().is_none_or(|s| s.trim().is_empty())
}

fn trimmed(s: String) -> String { s.trim().to_string() }

fn trimmed_opt(s: Option<String>) -> Option<String> {
  s.map(trimmed).filter(|s| !s.is_empty())
}

fn parse_enum<T: FromStr>(field: &'static str, value: &str) -> Result<T> {
  T::from_str(value).map_err(|_| Error::InvalidValue {
    field,
    value: value.to_string(),
  })
}

// ─── Presence check ──────────────────────────────────────────────────────────

/// Flag every required field missing from `input`.
pub fn missing_fields(input: &NewResident) -> MissingFields {
  MissingFields {
    first_name:     blank(&input.first_name),
    last_name:      blank(&input.last_name),
    date_of_birth:  input.date_of_birth.is_none(),
    gender:         blank(&input.gender),
    civil_status:   blank(&input.civil_status),
    contact_number: blank(&input.contact_number),
  }
}

// ─── Construction ────────────────────────────────────────────────────────────

/// Build a full [`Resident`] from a validated write body.
///
/// Trims free-text fields, parses the enumerated strings, and applies
/// defaults (`voter_status` false, `status` Active, `registration_date`
/// `now`). Fails with [`Error::MissingRequired`] if any required field is
/// absent and with [`Error::InvalidValue`] on enum-membership failures.
pub fn build(
  input: NewResident,
  id: Uuid,
  resident_id: String,
  now: DateTime<Utc>,
) -> Result<Resident> {
  let missing = missing_fields(&input);
  if missing.any() {
    return Err(Error::MissingRequired(missing));
  }
  let date_of_birth = input
    .date_of_birth
    .ok_or(Error::MissingRequired(missing))?;

  let gender: Gender =
    parse_enum("gender", input.gender.as_deref().unwrap_or_default())?;
  let civil_status: CivilStatus = parse_enum(
    "civilStatus",
    input.civil_status.as_deref().unwrap_or_default(),
  )?;
  let status: ResidentStatus = match input.status.as_deref() {
    Some(s) => parse_enum("status", s)?,
    None    => ResidentStatus::default(),
  };

  Ok(Resident {
    id,
    resident_id,
    first_name: trimmed(input.first_name.unwrap_or_default()),
    last_name: trimmed(input.last_name.unwrap_or_default()),
    middle_name: trimmed_opt(input.middle_name),
    date_of_birth,
    gender,
    civil_status,
    contact_number: trimmed(input.contact_number.unwrap_or_default()),
    email: trimmed_opt(input.email),
    address: input.address.unwrap_or_default(),
    occupation: trimmed_opt(input.occupation),
    monthly_income: input.monthly_income,
    voter_status: input.voter_status.unwrap_or(false),
    registration_date: input.registration_date.unwrap_or(now),
    qr_code: None,
    status,
    created_at: now,
    updated_at: now,
  })
}

// ─── Partial overwrite ───────────────────────────────────────────────────────

/// Apply a partial overwrite to `resident`, then re-run the schema check.
///
/// Fields absent from `patch` are left unchanged. `resident_id`, `qr_code`
/// and the store-maintained timestamps are not patchable.
pub fn apply(resident: &mut Resident, patch: NewResident) -> Result<()> {
  if let Some(v) = patch.first_name {
    resident.first_name = trimmed(v);
  }
  if let Some(v) = patch.last_name {
    resident.last_name = trimmed(v);
  }
  if let Some(v) = patch.middle_name {
    resident.middle_name = trimmed_opt(Some(v));
  }
  if let Some(v) = patch.date_of_birth {
    resident.date_of_birth = v;
  }
  if let Some(v) = patch.gender.as_deref() {
    resident.gender = parse_enum("gender", v)?;
  }
  if let Some(v) = patch.civil_status.as_deref() {
    resident.civil_status = parse_enum("civilStatus", v)?;
  }
  if let Some(v) = patch.contact_number {
    resident.contact_number = trimmed(v);
  }
  if let Some(v) = patch.email {
    resident.email = trimmed_opt(Some(v));
  }
  if let Some(v) = patch.address {
    resident.address = v;
  }
  if let Some(v) = patch.occupation {
    resident.occupation = trimmed_opt(Some(v));
  }
  if let Some(v) = patch.monthly_income {
    resident.monthly_income = Some(v);
  }
  if let Some(v) = patch.voter_status {
    resident.voter_status = v;
  }
  if let Some(v) = patch.registration_date {
    resident.registration_date = v;
  }
  if let Some(v) = patch.status.as_deref() {
    resident.status = parse_enum("status", v)?;
  }

  check(resident)
}

// ─── Schema re-check ─────────────────────────────────────────────────────────

/// Schema-level validation of a fully-built record: required strings must be
/// non-empty. Run before every store write.
pub fn check(resident: &Resident) -> Result<()> {
  if resident.resident_id.is_empty() {
    return Err(Error::EmptyField("residentId"));
  }
  if resident.first_name.is_empty() {
    return Err(Error::EmptyField("firstName"));
  }
  if resident.last_name.is_empty() {
    return Err(Error::EmptyField("lastName"));
  }
  if resident.contact_number.is_empty() {
    return Err(Error::EmptyField("contactNumber"));
  }
  Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
