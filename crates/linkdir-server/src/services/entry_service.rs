//! Хранилище записей каталога: создание, чтение, замена, удаление.

use crate::error::AppError;
use chrono::Utc;
use linkdir_entities::entries::{ActiveModel, Column, Entity as EntryEntity, Model};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder,
};

/// Проверенные данные записи, готовые к сохранению.
/// `id == None` — вставка новой записи, `Some(id)` — полная замена существующей.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub id: Option<i32>,
    pub name: String,
    pub ip_address: String,
    pub port: i32,
    pub description: Option<String>,
}

/// Все записи, новые первыми. При равном created_at первой идёт запись с большим id.
pub async fn list_all_by_created_desc(db: &DatabaseConnection) -> Result<Vec<Model>, AppError> {
    let entries = EntryEntity::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id)
        .all(db)
        .await?;
    Ok(entries)
}

/// Сохранить запись.
///
/// Без id запись вставляется, id и обе метки времени назначает сервер.
/// С id перезаписываются все изменяемые поля; id и created_at сохраняются,
/// updated_at обновляется и никогда не уходит назад.
pub async fn save(db: &DatabaseConnection, draft: EntryDraft) -> Result<Model, AppError> {
    let now = Utc::now();

    let Some(id) = draft.id else {
        let model = ActiveModel {
            id: NotSet,
            name: Set(draft.name),
            ip_address: Set(draft.ip_address),
            port: Set(draft.port),
            description: Set(draft.description),
            created_at: Set(now),
            updated_at: Set(now),
        };
        return Ok(model.insert(db).await?);
    };

    let record = find_by_id(db, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let updated_at = now.max(record.updated_at);
    let mut model: ActiveModel = record.into();
    model.name = Set(draft.name);
    model.ip_address = Set(draft.ip_address);
    model.port = Set(draft.port);
    model.description = Set(draft.description);
    model.updated_at = Set(updated_at);
    Ok(model.update(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, AppError> {
    Ok(EntryEntity::find_by_id(id).one(db).await?)
}

pub async fn exists_by_id(db: &DatabaseConnection, id: i32) -> Result<bool, AppError> {
    let count = EntryEntity::find_by_id(id).count(db).await?;
    Ok(count > 0)
}

/// Удалить запись без следа. Отсутствующий id — NotFound.
pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
    let result = EntryEntity::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(not_found(id));
    }
    Ok(())
}

pub(crate) fn not_found(id: impl std::fmt::Display) -> AppError {
    AppError::NotFound(format!("Приложение не существует: {id}"))
}
