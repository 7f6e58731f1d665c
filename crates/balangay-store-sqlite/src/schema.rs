//! SQL schema for the Balangay SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- One row per registered resident. `id` is the store-assigned key; the
-- business-facing `resident_id` is UNIQUE and never updated after insert.
CREATE TABLE IF NOT EXISTS residents (
    id                TEXT PRIMARY KEY,
    resident_id       TEXT NOT NULL UNIQUE,
    first_name        TEXT NOT NULL,
    last_name         TEXT NOT NULL,
    middle_name       TEXT,
    date_of_birth     TEXT NOT NULL,       -- ISO 8601 calendar date
    gender            TEXT NOT NULL,       -- 'Male' | 'Female' | 'Other'
    civil_status      TEXT NOT NULL,
    contact_number    TEXT NOT NULL,
    email             TEXT,
    address           TEXT NOT NULL DEFAULT '{}',  -- JSON Address
    occupation        TEXT,
    monthly_income    REAL,
    voter_status      INTEGER NOT NULL DEFAULT 0,
    registration_date TEXT NOT NULL,       -- RFC 3339 UTC
    qr_code           TEXT,
    status            TEXT NOT NULL DEFAULT 'Active',
    created_at        TEXT NOT NULL,
    updated_at        TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS residents_status_idx ON residents(status);

PRAGMA user_version = 1;
";
