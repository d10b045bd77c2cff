//! Административные маршруты: проверка ключа и управление приложениями.

use crate::api::app_routes::EntryResponse;
use crate::api::middleware::AdminAccess;
use crate::api::AppState;
use crate::error::AppError;
use crate::services::entry_service;
use crate::services::validation::{self, EntryPayload};
use axum::body::Bytes;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/verify", post(verify_key))
        .route("/apps", get(list_apps).post(create_app))
        .route("/apps/{id}", put(update_app).delete(delete_app))
}

/// POST /api/admin/verify — проверка ключа, присланного в теле запроса.
///
/// Тело может быть как голой строкой, так и JSON-строкой в кавычках.
/// Всегда отвечает 200.
async fn verify_key(State(state): State<AppState>, body: Bytes) -> Json<VerifyResponse> {
    let candidate = validation::clean_candidate_key(&String::from_utf8_lossy(&body));
    let valid = state.admin_key.matches(&candidate);
    if !valid {
        tracing::debug!("Проверка ключа администратора не пройдена");
    }
    Json(VerifyResponse { valid })
}

/// GET /api/admin/apps — список приложений для панели управления.
async fn list_apps(
    State(state): State<AppState>,
    _admin: AdminAccess,
) -> Result<Json<Vec<EntryResponse>>, AppError> {
    let entries = entry_service::list_all_by_created_desc(&state.db).await?;
    Ok(Json(entries.into_iter().map(EntryResponse::from).collect()))
}

/// POST /api/admin/apps — создание приложения.
async fn create_app(
    State(state): State<AppState>,
    _admin: AdminAccess,
    payload: Result<Json<EntryPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<EntryResponse>), AppError> {
    let Json(payload) = payload?;
    let draft = validation::validate_entry(payload, None)?;

    let entry = entry_service::save(&state.db, draft).await?;
    tracing::info!("Приложение создано: {} ({})", entry.id, entry.name);

    Ok((StatusCode::CREATED, Json(entry.into())))
}

/// PUT /api/admin/apps/{id} — полная замена полей приложения.
async fn update_app(
    State(state): State<AppState>,
    _admin: AdminAccess,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EntryPayload>, JsonRejection>,
) -> Result<Json<EntryResponse>, AppError> {
    let Path(raw_id) = path?;
    let id = entry_id(raw_id)?;
    let Json(payload) = payload?;
    let draft = validation::validate_entry(payload, Some(id))?;

    if !entry_service::exists_by_id(&state.db, id).await? {
        return Err(entry_service::not_found(id));
    }

    let entry = entry_service::save(&state.db, draft).await?;
    tracing::info!("Приложение обновлено: {id}");

    Ok(Json(entry.into()))
}

/// DELETE /api/admin/apps/{id} — удаление приложения.
async fn delete_app(
    State(state): State<AppState>,
    _admin: AdminAccess,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Path(raw_id) = path?;
    let id = entry_id(raw_id)?;

    if !entry_service::exists_by_id(&state.db, id).await? {
        return Err(entry_service::not_found(id));
    }

    entry_service::delete_by_id(&state.db, id).await?;
    tracing::info!("Приложение удалено: {id}");

    Ok(Json(serde_json::json!({ "message": "deleted" })))
}

/// Идентификатор из пути вне диапазона ключей не может существовать в таблице.
fn entry_id(raw: i64) -> Result<i32, AppError> {
    i32::try_from(raw).map_err(|_| entry_service::not_found(raw))
}
