//! Ядро сервера каталога ссылок.

pub mod api;
pub mod config;
pub mod error;
pub mod serve;
pub mod services;


use api::AppState;
use config::ServerConfig;
use linkdir_migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tokio::sync::watch;
use tracing::info;

/// Запустить сервер каталога.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    // 0. Проверка конфигурации до любых побочных эффектов
    let addr = config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // 1. Подключение к БД
    info!("Подключение к базе данных: {}", config.redacted_db_url());
    let db: DatabaseConnection = Database::connect(&config.db_url).await?;

    // 2. Автоматические миграции
    info!("Выполнение миграций...");
    Migrator::up(&db, None).await?;

    // 3. Состояние приложения: ключ администратора передаётся один раз и больше не меняется
    let state = AppState {
        db,
        admin_key: config.admin_key,
    };

    // 4. Маршрутизатор
    let app = api::build_router(state);

    // 5. Graceful shutdown
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Получен сигнал завершения, останавливаю сервер...");
        let _ = shutdown_tx.send(true);
    });

    // 6. Запуск сервера
    info!("Сервер каталога запущен");
    serve::serve(addr, app, shutdown_rx).await?;

    info!("Сервер каталога остановлен");
    Ok(())
}
