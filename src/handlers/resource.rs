//! Resource CRUD handlers, generic over [`Resource`]: list, read, create, update, delete.

use crate::error::{AppError, StorageOp};
use crate::extractors::{JsonBody, ResourceId};
use crate::models::Resource;
use crate::response;
use crate::service::{CrudService, RequestValidator};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};

pub async fn list<R: Resource>(State(state): State<AppState>) -> Result<Json<Vec<R>>, AppError> {
    let rows = CrudService::list::<R>(&state.pool).await?;
    tracing::debug!(resource = R::PATH, count = rows.len(), "listed");
    Ok(Json(rows))
}

pub async fn read<R: Resource>(State(state): State<AppState>, id: ResourceId) -> Result<Json<R>, AppError> {
    let id = id.valid().ok_or(AppError::InvalidId)?;
    let row = CrudService::read::<R>(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(R::LABEL))?;
    Ok(Json(row))
}

pub async fn create<R: Resource>(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<R::Payload>,
) -> Result<impl IntoResponse, AppError> {
    let record = R::validate(payload, 0)?;
    let id = CrudService::create(&state.pool, &record).await?;
    tracing::info!(resource = R::PATH, id, "created");
    Ok(response::created(id, R::LABEL))
}

/// PUT on the collection path: the id comes from the body.
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<R::Payload>,
) -> Result<impl IntoResponse, AppError> {
    replace::<R>(&state, None, payload).await
}

/// PUT on the item path: the id comes from the path; a body id, if given, must agree.
pub async fn update_by_id<R: Resource>(
    State(state): State<AppState>,
    id: ResourceId,
    JsonBody(payload): JsonBody<R::Payload>,
) -> Result<impl IntoResponse, AppError> {
    let id = id.valid().ok_or(AppError::InvalidId)?;
    replace::<R>(&state, Some(id), payload).await
}

async fn replace<R: Resource>(
    state: &AppState,
    path_id: Option<i64>,
    payload: R::Payload,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::update_id(path_id, R::payload_id(&payload))?;
    let record = R::validate(payload, id)?;
    let affected = CrudService::update(&state.pool, &record).await?;
    if affected == 0 {
        return Err(AppError::NotApplied {
            op: StorageOp::Update,
            resource: R::NOUN,
        });
    }
    tracing::info!(resource = R::PATH, id, "updated");
    Ok(response::updated(R::LABEL))
}

pub async fn delete<R: Resource>(State(state): State<AppState>, id: ResourceId) -> Result<impl IntoResponse, AppError> {
    let id = id.valid().ok_or(AppError::InvalidId)?;
    let affected = CrudService::delete::<R>(&state.pool, id).await?;
    if affected == 0 {
        return Err(AppError::NotApplied {
            op: StorageOp::Delete,
            resource: R::NOUN,
        });
    }
    tracing::info!(resource = R::PATH, id, "deleted");
    Ok(response::deleted(R::LABEL))
}

/// DELETE on the collection path carries no id.
pub async fn delete_without_id() -> AppError {
    AppError::InvalidId
}
