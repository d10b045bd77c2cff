//! Entity для таблицы entries.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    /// Автоинкрементный первичный ключ
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Название приложения
    pub name: String,

    /// IP-адрес или хост (формат не проверяется)
    pub ip_address: String,

    /// Порт приложения
    pub port: i32,

    /// Описание, не длиннее 500 символов
    #[sea_orm(column_type = "String(StringLen::N(500))", nullable)]
    pub description: Option<String>,

    /// Время создания, после вставки не меняется
    pub created_at: DateTimeUtc,

    /// Время последнего изменения
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Адрес приложения: `http://{ip_address}:{port}`.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.ip_address, self.port)
    }
}
