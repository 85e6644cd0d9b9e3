/**
 * Record Handlers
 *
 * CRUD over `/api/data`. Every handler runs behind the identity
 * middleware and only ever touches the caller's own records. A missing
 * record, a record owned by someone else, and an id that is not a UUID
 * all produce the same 404.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentUser;
use crate::backend::records::db::{
    create_record, delete_owned_record, get_owned_record, list_records, update_owned_record,
};
use crate::backend::records::types::{MessageResponse, RecordRequest, RecordResponse};
use crate::backend::server::state::AppState;
use crate::backend::validation::ValidJson;

/// Message for every unmatched record lookup
pub const RECORD_NOT_FOUND: &str = "Record not found";

/// Message returned after a successful delete
pub const RECORD_REMOVED: &str = "Record removed";

fn record_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| BackendError::not_found(RECORD_NOT_FOUND))
}

/// GET /api/data
pub async fn list(
    State(app_state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> Result<Json<Vec<RecordResponse>>, BackendError> {
    let records = list_records(&app_state.db_pool, identity.id).await?;
    Ok(Json(records.into_iter().map(RecordResponse::from).collect()))
}

/// POST /api/data
pub async fn create(
    State(app_state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    ValidJson(input): ValidJson<RecordRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), BackendError> {
    let record = create_record(&app_state.db_pool, identity.id, &input.title, &input.description).await?;

    tracing::debug!("Record {} created by {}", record.id, identity.id);
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// GET /api/data/{id}
pub async fn get_one(
    State(app_state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<RecordResponse>, BackendError> {
    let id = record_id(&id)?;

    get_owned_record(&app_state.db_pool, id, identity.id)
        .await?
        .map(|record| Json(record.into()))
        .ok_or_else(|| BackendError::not_found(RECORD_NOT_FOUND))
}

/// PUT /api/data/{id}
pub async fn update(
    State(app_state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<String>,
    ValidJson(input): ValidJson<RecordRequest>,
) -> Result<Json<RecordResponse>, BackendError> {
    let id = record_id(&id)?;

    let record = update_owned_record(
        &app_state.db_pool,
        id,
        identity.id,
        &input.title,
        &input.description,
    )
    .await?
    .ok_or_else(|| BackendError::not_found(RECORD_NOT_FOUND))?;

    tracing::debug!("Record {} updated by {}", record.id, identity.id);
    Ok(Json(record.into()))
}

/// DELETE /api/data/{id}
pub async fn remove(
    State(app_state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let id = record_id(&id)?;

    if !delete_owned_record(&app_state.db_pool, id, identity.id).await? {
        return Err(BackendError::not_found(RECORD_NOT_FOUND));
    }

    tracing::debug!("Record {} deleted by {}", id, identity.id);
    Ok(Json(MessageResponse {
        message: RECORD_REMOVED.to_string(),
    }))
}
