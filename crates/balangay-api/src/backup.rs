//! Handlers for bulk export and import.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/residents/export` | Writes a timestamped backup file, returns it as a download |
//! | `POST` | `/residents/import` | Body: `{"residents": [...]}`; unordered bulk insert |

use axum::{
  Json,
  extract::State,
  http::header,
  response::{IntoResponse, Response},
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use uuid::Uuid;

use balangay_core::{resident::Resident, store::ResidentStore};

use crate::{
  ApiContext,
  envelope::{ImportFailure, ImportResponse},
  error::{ApiError, Operation},
};

/// Backup filename for an export taken at `now`. The timestamp is RFC 3339
/// with `:` and `.` replaced so the name is safe on every filesystem.
pub(crate) fn backup_filename(now: DateTime<Utc>) -> String {
  let stamp = now
    .to_rfc3339_opts(SecondsFormat::Millis, true)
    .replace([':', '.'], "-");
  format!("residents_backup_{stamp}.json")
}

// ─── Export ───────────────────────────────────────────────────────────────────

/// `GET /residents/export`
///
/// Serializes the full record set, writes it to a timestamped file under the
/// configured backup directory (old exports are never cleaned up), and
/// returns the content as a download.
pub async fn export<S>(
  State(ctx): State<ApiContext<S>>,
) -> Result<Response, ApiError>
where
  S: ResidentStore,
{
  let residents = ctx
    .store
    .list_residents()
    .await
    .map_err(|e| ApiError::store(Operation::Export, e))?;

  let body = serde_json::to_string_pretty(&residents)
    .map_err(|e| ApiError::store(Operation::Export, e))?;

  let filename = backup_filename(Utc::now());
  let path = ctx.backup_dir.join(&filename);

  tokio::fs::create_dir_all(&ctx.backup_dir)
    .await
    .map_err(|e| ApiError::store(Operation::Export, e))?;
  tokio::fs::write(&path, &body)
    .await
    .map_err(|e| ApiError::store(Operation::Export, e))?;

  tracing::info!(
    path = %path.display(),
    count = residents.len(),
    "wrote residents backup"
  );

  let headers = [
    (header::CONTENT_TYPE, "application/json".to_string()),
    (
      header::CONTENT_DISPOSITION,
      format!("attachment; filename=\"{filename}\""),
    ),
  ];
  Ok((headers, body).into_response())
}

// ─── Import ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ImportBody {
  #[serde(default)]
  residents: serde_json::Value,
}

/// `POST /residents/import` — body: `{"residents": [...]}`.
///
/// Unordered bulk insert. Existing records are neither cleared nor
/// deduplicated; each item fails or succeeds on its own (a duplicate
/// `residentId` is rejected by the store's uniqueness constraint). Every
/// failed item is reported with its index and reason.
pub async fn import<S>(
  State(ctx): State<ApiContext<S>>,
  Json(body): Json<ImportBody>,
) -> Result<Json<ImportResponse>, ApiError>
where
  S: ResidentStore,
{
  let Some(items) = body.residents.as_array() else {
    return Err(ApiError::InvalidImportFormat);
  };

  let mut inserted = 0usize;
  let mut failures = Vec::new();

  for (index, item) in items.iter().enumerate() {
    let mut resident: Resident = match serde_json::from_value(item.clone()) {
      Ok(r) => r,
      Err(e) => {
        failures.push(ImportFailure {
          index,
          resident_id: item
            .get("residentId")
            .and_then(|v| v.as_str())
            .map(String::from),
          reason: e.to_string(),
        });
        continue;
      }
    };

    // The file's store id is discarded; the round-trip contract is "same
    // records modulo store-assigned primary identifiers".
    resident.id = Uuid::new_v4();
    let resident_id = resident.resident_id.clone();

    match ctx.store.insert_resident(resident).await {
      Ok(_) => inserted += 1,
      Err(e) => failures.push(ImportFailure {
        index,
        resident_id: Some(resident_id),
        reason: e.to_string(),
      }),
    }
  }

  tracing::info!(
    count = inserted,
    failed = failures.len(),
    "residents import finished"
  );
  Ok(Json(ImportResponse::new(inserted, failures)))
}
