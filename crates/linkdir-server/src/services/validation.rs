//! Явная валидация входных данных перед обращением к хранилищу.

use crate::error::AppError;
use crate::services::entry_service::EntryDraft;
use serde::Deserialize;

/// Максимальная длина описания в символах.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Тело запроса создания/обновления записи в том виде, как его прислал клиент.
/// Все поля необязательны на уровне JSON, обязательность проверяет `validate_entry`.
/// Лишние поля (`id`, `url`, метки времени) игнорируются.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPayload {
    pub name: Option<String>,
    pub ip_address: Option<String>,
    pub port: Option<i32>,
    pub description: Option<String>,
}

/// Проверить обязательные поля и собрать `EntryDraft`.
/// Сообщает обо всех нарушениях сразу, по одному сообщению на поле.
pub fn validate_entry(payload: EntryPayload, id: Option<i32>) -> Result<EntryDraft, AppError> {
    let mut violations = Vec::new();

    let name = payload.name.unwrap_or_default();
    if name.trim().is_empty() {
        violations.push("Название приложения не может быть пустым".to_string());
    }

    let ip_address = payload.ip_address.unwrap_or_default();
    if ip_address.trim().is_empty() {
        violations.push("IP-адрес не может быть пустым".to_string());
    }

    if payload.port.is_none() {
        violations.push("Порт не может быть пустым".to_string());
    }

    if let Some(description) = &payload.description {
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            violations.push(format!(
                "Описание не может быть длиннее {DESCRIPTION_MAX_CHARS} символов"
            ));
        }
    }

    match payload.port {
        Some(port) if violations.is_empty() => Ok(EntryDraft {
            id,
            name,
            ip_address,
            port,
            description: payload.description,
        }),
        _ => Err(AppError::BadRequest(violations.join("; "))),
    }
}

/// Очистить ключ, присланный на проверку: убрать все кавычки и пробелы по краям.
/// Клиенты присылают ключ то голой строкой, то JSON-строкой в кавычках.
/// По краям срезаются только управляющие символы и ASCII-пробел, Unicode-пробелы
/// (например U+00A0) остаются частью ключа.
pub fn clean_candidate_key(raw: &str) -> String {
    raw.replace('"', "")
        .trim_matches(|c: char| c <= ' ')
        .to_string()
}
