//! JSON REST API for the Balangay resident registry.
//!
//! Exposes an axum [`Router`] backed by any
//! [`balangay_core::store::ResidentStore`]. TLS and transport concerns are
//! the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = balangay_api::api_router(ctx);
//! axum::serve(listener, app).await?;
//! ```

pub mod backup;
pub mod envelope;
pub mod error;
pub mod residents;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};

use balangay_core::store::ResidentStore;

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
///
/// The store client is a single injected instance — there is no process-wide
/// store handle anywhere in the crate.
pub struct ApiContext<S> {
  pub store:      Arc<S>,
  /// Directory that export files are written into.
  pub backup_dir: PathBuf,
}

impl<S> Clone for ApiContext<S> {
  fn clone(&self) -> Self {
    Self {
      store:      Arc::clone(&self.store),
      backup_dir: self.backup_dir.clone(),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `ctx`.
///
/// One canonical route table; the export/import pair lives under
/// `/residents` alongside the record routes.
pub fn api_router<S>(ctx: ApiContext<S>) -> Router<()>
where
  S: ResidentStore + 'static,
{
  Router::new()
    .route(
      "/residents",
      get(residents::list::<S>).post(residents::create::<S>),
    )
    .route("/residents/export", get(backup::export::<S>))
    .route("/residents/import", post(backup::import::<S>))
    .route(
      "/residents/{id}",
      get(residents::get_one::<S>)
        .put(residents::update::<S>)
        .delete(residents::delete_one::<S>),
    )
    .route("/residents/{id}/qrcode", get(residents::regenerate_qr::<S>))
    .with_state(ctx)
}
