//! Проверка ключа администратора для защищённых маршрутов.

use crate::api::AppState;
use crate::error::AppError;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Заголовок, в котором клиент передаёт ключ администратора.
pub const ADMIN_KEY_HEADER: &str = "X-Admin-Key";

/// Экстрактор: запрос прошёл проверку ключа администратора.
///
/// В обработчиках стоит перед экстракторами пути и тела, поэтому неверный ключ
/// отклоняется с 401 ещё до разбора пути и тела запроса.
#[derive(Debug)]
pub struct AdminAccess;

impl FromRequestParts<AppState> for AdminAccess {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let provided = parts
            .headers
            .get(ADMIN_KEY_HEADER)
            .and_then(|v| v.to_str().ok());

        match provided {
            Some(key) if state.admin_key.matches(key) => Ok(AdminAccess),
            Some(_) => {
                tracing::warn!(
                    "Неверный ключ администратора: {} {}",
                    parts.method,
                    parts.uri.path()
                );
                Err(unauthorized())
            }
            None => Err(unauthorized()),
        }
    }
}

fn unauthorized() -> AppError {
    AppError::Unauthorized("Не авторизован".into())
}
