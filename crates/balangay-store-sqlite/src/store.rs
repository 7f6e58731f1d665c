//! [`SqliteStore`] — the SQLite implementation of [`ResidentStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use balangay_core::{resident::Resident, store::ResidentStore};

use crate::{
  Error, Result,
  encode::{RawResident, ResidentColumns, encode_uuid},
  schema::SCHEMA,
};

const COLUMNS: &str = "id, resident_id, first_name, last_name, middle_name, \
                       date_of_birth, gender, civil_status, contact_number, \
                       email, address, occupation, monthly_income, \
                       voter_status, registration_date, qr_code, status, \
                       created_at, updated_at";

fn raw_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawResident> {
  Ok(RawResident {
    id:                row.get(0)?,
    resident_id:       row.get(1)?,
    first_name:        row.get(2)?,
    last_name:         row.get(3)?,
    middle_name:       row.get(4)?,
    date_of_birth:     row.get(5)?,
    gender:            row.get(6)?,
    civil_status:      row.get(7)?,
    contact_number:    row.get(8)?,
    email:             row.get(9)?,
    address:           row.get(10)?,
    occupation:        row.get(11)?,
    monthly_income:    row.get(12)?,
    voter_status:      row.get(13)?,
    registration_date: row.get(14)?,
    qr_code:           row.get(15)?,
    status:            row.get(16)?,
    created_at:        row.get(17)?,
    updated_at:        row.get(18)?,
  })
}

/// `true` when the error is SQLite rejecting a duplicate `resident_id`.
fn is_resident_id_conflict(err: &tokio_rusqlite::Error) -> bool {
  matches!(
    err,
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(e, Some(msg)))
      if e.code == rusqlite::ErrorCode::ConstraintViolation
        && msg.contains("residents.resident_id")
  )
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A resident store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ResidentStore impl ──────────────────────────────────────────────────────

impl ResidentStore for SqliteStore {
  type Error = Error;

  async fn insert_resident(&self, resident: Resident) -> Result<Resident> {
    let c = ResidentColumns::from_resident(&resident)?;

    let inserted = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO residents (
             id, resident_id, first_name, last_name, middle_name,
             date_of_birth, gender, civil_status, contact_number,
             email, address, occupation, monthly_income,
             voter_status, registration_date, qr_code, status,
             created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12,
                     ?13, ?14, ?15, ?16, ?17, ?18, ?19)",
          rusqlite::params![
            c.id,
            c.resident_id,
            c.first_name,
            c.last_name,
            c.middle_name,
            c.date_of_birth,
            c.gender,
            c.civil_status,
            c.contact_number,
            c.email,
            c.address,
            c.occupation,
            c.monthly_income,
            c.voter_status,
            c.registration_date,
            c.qr_code,
            c.status,
            c.created_at,
            c.updated_at,
          ],
        )?;
        Ok(())
      })
      .await;

    match inserted {
      Ok(()) => Ok(resident),
      Err(ref e) if is_resident_id_conflict(e) => {
        Err(Error::DuplicateResidentId(resident.resident_id))
      }
      Err(e) => Err(e.into()),
    }
  }

  async fn get_resident(&self, id: Uuid) -> Result<Option<Resident>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawResident> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {COLUMNS} FROM residents WHERE id = ?1"),
              rusqlite::params![id_str],
              raw_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawResident::into_resident).transpose()
  }

  async fn list_residents(&self) -> Result<Vec<Resident>> {
    let raws: Vec<RawResident> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {COLUMNS} FROM residents"))?;
        let rows = stmt
          .query_map([], raw_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawResident::into_resident).collect()
  }

  async fn replace_resident(&self, resident: Resident) -> Result<Option<Resident>> {
    let mut stored = resident;
    stored.updated_at = Utc::now();

    // `resident_id` and `created_at` are deliberately absent from the SET
    // list: the identifier is immutable and the creation stamp never moves.
    let c = ResidentColumns::from_resident(&stored)?;

    let rows = self
      .conn
      .call(move |conn| {
        let rows = conn.execute(
          "UPDATE residents SET
             first_name        = ?2,
             last_name         = ?3,
             middle_name       = ?4,
             date_of_birth     = ?5,
             gender            = ?6,
             civil_status      = ?7,
             contact_number    = ?8,
             email             = ?9,
             address           = ?10,
             occupation        = ?11,
             monthly_income    = ?12,
             voter_status      = ?13,
             registration_date = ?14,
             qr_code           = ?15,
             status            = ?16,
             updated_at        = ?17
           WHERE id = ?1",
          rusqlite::params![
            c.id,
            c.first_name,
            c.last_name,
            c.middle_name,
            c.date_of_birth,
            c.gender,
            c.civil_status,
            c.contact_number,
            c.email,
            c.address,
            c.occupation,
            c.monthly_income,
            c.voter_status,
            c.registration_date,
            c.qr_code,
            c.status,
            c.updated_at,
          ],
        )?;
        Ok(rows)
      })
      .await?;

    if rows == 0 { Ok(None) } else { Ok(Some(stored)) }
  }

  async fn delete_resident(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let rows = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM residents WHERE id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    Ok(rows > 0)
  }
}
