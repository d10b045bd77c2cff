//! SeaORM-сущности каталога ссылок.

pub mod entries;
