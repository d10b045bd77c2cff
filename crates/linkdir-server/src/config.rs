//! Конфигурация сервера каталога.

use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Адрес для прослушивания (например "0.0.0.0:8080")
    pub listen: String,

    /// URL подключения к БД (sqlite или postgres)
    pub db_url: String,

    /// Ключ администратора для изменяющих запросов
    pub admin_key: AdminKey,
}

impl ServerConfig {
    /// Проверить конфигурацию до запуска: ключ не пустой, адрес разбирается.
    pub fn validate(&self) -> Result<SocketAddr, String> {
        if self.admin_key.as_str().trim().is_empty() {
            return Err("Ключ администратора не может быть пустым (--admin-key / ADMIN_KEY)".into());
        }
        self.listen
            .parse()
            .map_err(|e| format!("Некорректный адрес прослушивания {}: {e}", self.listen))
    }

    /// URL БД для логов: пароль заменён на `***`.
    pub fn redacted_db_url(&self) -> String {
        match url::Url::parse(&self.db_url) {
            Ok(mut parsed) if parsed.password().is_some() => {
                if parsed.set_password(Some("***")).is_err() {
                    return "<URL базы данных скрыт>".to_string();
                }
                parsed.to_string()
            }
            Ok(_) => self.db_url.clone(),
            Err(_) => "<URL базы данных скрыт>".to_string(),
        }
    }
}

/// Общий секрет администратора. Задаётся один раз при старте и не меняется.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminKey(Arc<str>);

impl AdminKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Arc::from(key.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Точное посимвольное сравнение, без нормализации.
    pub fn matches(&self, candidate: &str) -> bool {
        self.as_str() == candidate
    }
}

impl fmt::Debug for AdminKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminKey(***)")
    }
}
