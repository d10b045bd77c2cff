//! Сервисный слой: хранилище записей и валидация входных данных.

pub mod entry_service;
pub mod validation;
