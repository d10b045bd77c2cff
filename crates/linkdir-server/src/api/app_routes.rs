//! Публичные маршруты: список приложений только для чтения.

use crate::api::AppState;
use crate::error::AppError;
use crate::services::entry_service;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use linkdir_entities::entries::Model;
use serde::Serialize;

/// Запись каталога в ответах API, вместе с вычисляемым `url`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub id: i32,
    pub name: String,
    pub ip_address: String,
    pub port: i32,
    pub description: Option<String>,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Model> for EntryResponse {
    fn from(m: Model) -> Self {
        let url = m.url();
        Self {
            id: m.id,
            name: m.name,
            ip_address: m.ip_address,
            port: m.port,
            description: m.description,
            url,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/apps", get(list_apps))
}

/// GET /api/apps — все приложения, новые первыми.
async fn list_apps(State(state): State<AppState>) -> Result<Json<Vec<EntryResponse>>, AppError> {
    let entries = entry_service::list_all_by_created_desc(&state.db).await?;
    Ok(Json(entries.into_iter().map(EntryResponse::from).collect()))
}
