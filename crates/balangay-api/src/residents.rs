//! Handlers for `/residents` CRUD and QR endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/residents` | Body: partial record; 400 itemizes missing fields |
//! | `GET`    | `/residents` | Full scan with count |
//! | `GET`    | `/residents/:id` | 404 if not found |
//! | `PUT`    | `/residents/:id` | Partial overwrite, re-validated |
//! | `DELETE` | `/residents/:id` | Hard delete |
//! | `GET`    | `/residents/:id/qrcode` | Regenerates and persists the QR payload |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use chrono::Utc;
use uuid::Uuid;

use balangay_core::{
  resident::{NewResident, new_resident_id},
  store::ResidentStore,
  validate,
};
use balangay_qr::{IdentityPayload, RegistrationPayload};

use crate::{
  ApiContext,
  envelope::{ListResponse, MessageResponse, QrResponse, RecordResponse},
  error::{ApiError, Operation},
};

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /residents`
///
/// Generates the business identifier and the registration QR payload, then
/// persists the validated record.
pub async fn create<S>(
  State(ctx): State<ApiContext<S>>,
  Json(body): Json<NewResident>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ResidentStore,
{
  let missing = validate::missing_fields(&body);
  if missing.any() {
    return Err(ApiError::MissingFields(missing));
  }

  let mut resident =
    validate::build(body, Uuid::new_v4(), new_resident_id(), Utc::now())
      .map_err(ApiError::validation)?;

  let payload = RegistrationPayload::for_resident(&resident);
  let qr = balangay_qr::data_uri(&payload)
    .map_err(|e| ApiError::store(Operation::Create, e))?;
  resident.qr_code = Some(qr);

  validate::check(&resident).map_err(ApiError::validation)?;

  let stored = ctx
    .store
    .insert_resident(resident)
    .await
    .map_err(|e| ApiError::store(Operation::Create, e))?;

  tracing::info!(resident_id = %stored.resident_id, "resident created");
  Ok((StatusCode::CREATED, Json(RecordResponse::created(stored))))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /residents` — every record, with a count.
pub async fn list<S>(
  State(ctx): State<ApiContext<S>>,
) -> Result<Json<ListResponse>, ApiError>
where
  S: ResidentStore,
{
  let residents = ctx
    .store
    .list_residents()
    .await
    .map_err(|e| ApiError::store(Operation::List, e))?;
  Ok(Json(ListResponse::new(residents)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /residents/:id`
pub async fn get_one<S>(
  State(ctx): State<ApiContext<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<RecordResponse>, ApiError>
where
  S: ResidentStore,
{
  let resident = ctx
    .store
    .get_resident(id)
    .await
    .map_err(|e| ApiError::store(Operation::Fetch, e))?
    .ok_or(ApiError::NotFound)?;
  Ok(Json(RecordResponse::fetched(resident)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /residents/:id` — partial overwrite; `residentId` cannot change.
pub async fn update<S>(
  State(ctx): State<ApiContext<S>>,
  Path(id): Path<Uuid>,
  Json(patch): Json<NewResident>,
) -> Result<Json<RecordResponse>, ApiError>
where
  S: ResidentStore,
{
  let mut resident = ctx
    .store
    .get_resident(id)
    .await
    .map_err(|e| ApiError::store(Operation::Update, e))?
    .ok_or(ApiError::NotFound)?;

  validate::apply(&mut resident, patch).map_err(ApiError::validation)?;

  let stored = ctx
    .store
    .replace_resident(resident)
    .await
    .map_err(|e| ApiError::store(Operation::Update, e))?
    .ok_or(ApiError::NotFound)?;

  Ok(Json(RecordResponse::updated(stored)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /residents/:id` — hard delete, no data payload on success.
pub async fn delete_one<S>(
  State(ctx): State<ApiContext<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError>
where
  S: ResidentStore,
{
  let removed = ctx
    .store
    .delete_resident(id)
    .await
    .map_err(|e| ApiError::store(Operation::Delete, e))?;

  if !removed {
    return Err(ApiError::NotFound);
  }
  Ok(Json(MessageResponse::deleted()))
}

// ─── QR regeneration ──────────────────────────────────────────────────────────

/// `GET /residents/:id/qrcode`
///
/// Rebuilds the identity payload (a superset of the registration payload),
/// persists the fresh QR code on the record, and returns it.
pub async fn regenerate_qr<S>(
  State(ctx): State<ApiContext<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<QrResponse>, ApiError>
where
  S: ResidentStore,
{
  let mut resident = ctx
    .store
    .get_resident(id)
    .await
    .map_err(|e| ApiError::store(Operation::Qr, e))?
    .ok_or(ApiError::NotFound)?;

  let payload = IdentityPayload::for_resident(&resident);
  let qr = balangay_qr::data_uri(&payload)
    .map_err(|e| ApiError::store(Operation::Qr, e))?;
  resident.qr_code = Some(qr.clone());

  ctx
    .store
    .replace_resident(resident)
    .await
    .map_err(|e| ApiError::store(Operation::Qr, e))?
    .ok_or(ApiError::NotFound)?;

  Ok(Json(QrResponse::new(qr)))
}
