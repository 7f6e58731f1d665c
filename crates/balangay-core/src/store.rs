//! The `ResidentStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `balangay-store-sqlite`). The HTTP layer depends on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::resident::Resident;

/// Abstraction over a resident-registry storage backend.
///
/// Records are mutable in place; all isolation and uniqueness enforcement
/// (notably the `resident_id` UNIQUE constraint) is the backend's concern.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ResidentStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new record exactly as given and return it.
  ///
  /// Timestamps are the caller's: registration stamps creation time, bulk
  /// import passes file values through. A duplicate `resident_id` must be
  /// rejected by the backend's uniqueness constraint.
  fn insert_resident(
    &self,
    resident: Resident,
  ) -> impl Future<Output = Result<Resident, Self::Error>> + Send + '_;

  /// Retrieve a record by its store-assigned id. Returns `None` if not found.
  fn get_resident(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Resident>, Self::Error>> + Send + '_;

  /// Return every persisted record. Full scan; no pagination or ordering
  /// guarantees.
  fn list_residents(
    &self,
  ) -> impl Future<Output = Result<Vec<Resident>, Self::Error>> + Send + '_;

  /// Overwrite the record whose store id matches `resident.id`.
  ///
  /// Refreshes `updated_at` and never writes the `resident_id` column (the
  /// identifier is immutable once assigned). Returns the stored record, or
  /// `None` if the id is unknown.
  fn replace_resident(
    &self,
    resident: Resident,
  ) -> impl Future<Output = Result<Option<Resident>, Self::Error>> + Send + '_;

  /// Remove the record matching `id`. Returns `false` if no such record
  /// exists.
  fn delete_resident(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
