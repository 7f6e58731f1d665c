//! Integration tests for `SqliteStore` against an in-memory database.

use balangay_core::{
  resident::{
    Address, CivilStatus, Gender, NewResident, Resident, ResidentStatus,
    new_resident_id,
  },
  store::ResidentStore,
  validate,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn resident(first: &str, last: &str) -> Resident {
  let input = NewResident {
    first_name:     Some(first.into()),
    last_name:      Some(last.into()),
    date_of_birth:  NaiveDate::from_ymd_opt(1990, 1, 1),
    gender:         Some("Female".into()),
    civil_status:   Some("Single".into()),
    contact_number: Some("09171234567".into()),
    address:        Some(Address {
      barangay: Some("San Isidro".into()),
      city:     Some("Quezon City".into()),
      ..Default::default()
    }),
    ..Default::default()
  };
  validate::build(input, Uuid::new_v4(), new_resident_id(), Utc::now()).unwrap()
}

// ─── Insert / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_get_roundtrip() {
  let s = store().await;
  let mut r = resident("Ana", "Cruz");
  r.qr_code = Some("data:image/png;base64,AAAA".into());
  r.monthly_income = Some(25000.0);
  r.voter_status = true;

  let stored = s.insert_resident(r.clone()).await.unwrap();
  assert_eq!(stored.resident_id, r.resident_id);

  let fetched = s.get_resident(r.id).await.unwrap().unwrap();
  assert_eq!(fetched.id, r.id);
  assert_eq!(fetched.resident_id, r.resident_id);
  assert_eq!(fetched.first_name, "Ana");
  assert_eq!(fetched.gender, Gender::Female);
  assert_eq!(fetched.civil_status, CivilStatus::Single);
  assert_eq!(fetched.status, ResidentStatus::Active);
  assert_eq!(fetched.address.barangay.as_deref(), Some("San Isidro"));
  assert_eq!(fetched.monthly_income, Some(25000.0));
  assert!(fetched.voter_status);
  assert_eq!(fetched.qr_code.as_deref(), Some("data:image/png;base64,AAAA"));
  assert_eq!(fetched.date_of_birth, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get_resident(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn insert_preserves_caller_timestamps() {
  let s = store().await;
  let mut r = resident("Ana", "Cruz");
  let past = "2020-06-01T00:00:00Z".parse().unwrap();
  r.created_at = past;
  r.updated_at = past;
  r.registration_date = past;

  s.insert_resident(r.clone()).await.unwrap();
  let fetched = s.get_resident(r.id).await.unwrap().unwrap();
  assert_eq!(fetched.created_at, past);
  assert_eq!(fetched.updated_at, past);
  assert_eq!(fetched.registration_date, past);
}

#[tokio::test]
async fn duplicate_resident_id_is_rejected() {
  let s = store().await;
  let a = resident("Ana", "Cruz");
  let mut b = resident("Ben", "Reyes");
  b.resident_id = a.resident_id.clone();

  s.insert_resident(a.clone()).await.unwrap();
  let err = s.insert_resident(b).await.unwrap_err();
  assert!(
    matches!(err, crate::Error::DuplicateResidentId(ref id) if *id == a.resident_id)
  );

  // The first record is untouched.
  assert_eq!(s.list_residents().await.unwrap().len(), 1);
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_returns_every_record() {
  let s = store().await;
  s.insert_resident(resident("Ana", "Cruz")).await.unwrap();
  s.insert_resident(resident("Ben", "Reyes")).await.unwrap();
  s.insert_resident(resident("Carla", "Santos")).await.unwrap();

  let all = s.list_residents().await.unwrap();
  assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn list_on_empty_store_is_empty() {
  let s = store().await;
  assert!(s.list_residents().await.unwrap().is_empty());
}

// ─── Replace ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn replace_overwrites_and_bumps_updated_at() {
  let s = store().await;
  let r = s.insert_resident(resident("Ana", "Cruz")).await.unwrap();
  let before = r.updated_at;

  let mut changed = r.clone();
  changed.civil_status = CivilStatus::Married;
  changed.status = ResidentStatus::Transferred;

  let stored = s.replace_resident(changed).await.unwrap().unwrap();
  assert_eq!(stored.civil_status, CivilStatus::Married);
  assert!(stored.updated_at >= before);

  let fetched = s.get_resident(r.id).await.unwrap().unwrap();
  assert_eq!(fetched.civil_status, CivilStatus::Married);
  assert_eq!(fetched.status, ResidentStatus::Transferred);
  assert_eq!(fetched.created_at, r.created_at);
}

#[tokio::test]
async fn replace_missing_returns_none() {
  let s = store().await;
  let r = resident("Ana", "Cruz");
  assert!(s.replace_resident(r).await.unwrap().is_none());
}

#[tokio::test]
async fn replace_never_changes_resident_id() {
  let s = store().await;
  let r = s.insert_resident(resident("Ana", "Cruz")).await.unwrap();

  // Even a tampered in-memory record cannot move the stored identifier.
  let mut tampered = r.clone();
  tampered.resident_id = new_resident_id();
  s.replace_resident(tampered).await.unwrap().unwrap();

  let fetched = s.get_resident(r.id).await.unwrap().unwrap();
  assert_eq!(fetched.resident_id, r.resident_id);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_record() {
  let s = store().await;
  let r = s.insert_resident(resident("Ana", "Cruz")).await.unwrap();

  assert!(s.delete_resident(r.id).await.unwrap());
  assert!(s.get_resident(r.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_returns_false() {
  let s = store().await;
  assert!(!s.delete_resident(Uuid::new_v4()).await.unwrap());
}

#[tokio::test]
async fn delete_twice_second_is_false() {
  let s = store().await;
  let r = s.insert_resident(resident("Ana", "Cruz")).await.unwrap();
  assert!(s.delete_resident(r.id).await.unwrap());
  assert!(!s.delete_resident(r.id).await.unwrap());
}
