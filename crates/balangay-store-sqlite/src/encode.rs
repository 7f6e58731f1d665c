//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings and calendar dates as ISO 8601
//! dates. The structured address is stored as compact JSON. Enumerated
//! columns hold the enum's display string. UUIDs are stored as hyphenated
//! lowercase strings.

use std::str::FromStr;

use balangay_core::resident::{
  Address, CivilStatus, Gender, Resident, ResidentStatus,
};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── Timestamps / dates ──────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Address ─────────────────────────────────────────────────────────────────

pub fn encode_address(a: &Address) -> Result<String> {
  Ok(serde_json::to_string(a)?)
}

pub fn decode_address(s: &str) -> Result<Address> {
  Ok(serde_json::from_str(s)?)
}

// ─── Enumerations ────────────────────────────────────────────────────────────

fn decode_enum<T: FromStr>(field: &'static str, s: &str) -> Result<T> {
  T::from_str(s).map_err(|_| Error::Decode { field, value: s.to_string() })
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw values read directly from a `residents` row.
pub struct RawResident {
  pub id:                String,
  pub resident_id:       String,
  pub first_name:        String,
  pub last_name:         String,
  pub middle_name:       Option<String>,
  pub date_of_birth:     String,
  pub gender:            String,
  pub civil_status:      String,
  pub contact_number:    String,
  pub email:             Option<String>,
  pub address:           String,
  pub occupation:        Option<String>,
  pub monthly_income:    Option<f64>,
  pub voter_status:      bool,
  pub registration_date: String,
  pub qr_code:           Option<String>,
  pub status:            String,
  pub created_at:        String,
  pub updated_at:        String,
}

impl RawResident {
  pub fn into_resident(self) -> Result<Resident> {
    let gender: Gender = decode_enum("gender", &self.gender)?;
    let civil_status: CivilStatus =
      decode_enum("civil_status", &self.civil_status)?;
    let status: ResidentStatus = decode_enum("status", &self.status)?;

    Ok(Resident {
      id: decode_uuid(&self.id)?,
      resident_id: self.resident_id,
      first_name: self.first_name,
      last_name: self.last_name,
      middle_name: self.middle_name,
      date_of_birth: decode_date(&self.date_of_birth)?,
      gender,
      civil_status,
      contact_number: self.contact_number,
      email: self.email,
      address: decode_address(&self.address)?,
      occupation: self.occupation,
      monthly_income: self.monthly_income,
      voter_status: self.voter_status,
      registration_date: decode_dt(&self.registration_date)?,
      qr_code: self.qr_code,
      status,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}

/// Owned column values ready to bind as SQL parameters, in table order.
pub struct ResidentColumns {
  pub id:                String,
  pub resident_id:       String,
  pub first_name:        String,
  pub last_name:         String,
  pub middle_name:       Option<String>,
  pub date_of_birth:     String,
  pub gender:            String,
  pub civil_status:      String,
  pub contact_number:    String,
  pub email:             Option<String>,
  pub address:           String,
  pub occupation:        Option<String>,
  pub monthly_income:    Option<f64>,
  pub voter_status:      bool,
  pub registration_date: String,
  pub qr_code:           Option<String>,
  pub status:            String,
  pub created_at:        String,
  pub updated_at:        String,
}

impl ResidentColumns {
  pub fn from_resident(r: &Resident) -> Result<Self> {
    Ok(Self {
      id:                encode_uuid(r.id),
      resident_id:       r.resident_id.clone(),
      first_name:        r.first_name.clone(),
      last_name:         r.last_name.clone(),
      middle_name:       r.middle_name.clone(),
      date_of_birth:     encode_date(r.date_of_birth),
      gender:            r.gender.to_string(),
      civil_status:      r.civil_status.to_string(),
      contact_number:    r.contact_number.clone(),
      email:             r.email.clone(),
      address:           encode_address(&r.address)?,
      occupation:        r.occupation.clone(),
      monthly_income:    r.monthly_income,
      voter_status:      r.voter_status,
      registration_date: encode_dt(r.registration_date),
      qr_code:           r.qr_code.clone(),
      status:            r.status.to_string(),
      created_at:        encode_dt(r.created_at),
      updated_at:        encode_dt(r.updated_at),
    })
  }
}
