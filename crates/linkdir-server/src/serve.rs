//! Запуск HTTP-сервера с корректным завершением.

use axum::Router;
use std::net::SocketAddr;
use tokio::sync::watch;
use tracing::info;

/// Слушать `addr` и обслуживать `app`, пока в `shutdown_rx` не придёт `true`.
pub async fn serve(
    addr: SocketAddr,
    app: Router,
    mut shutdown_rx: watch::Receiver<bool>,
) -> anyhow::Result<()> {
    info!("Запуск HTTP сервера на {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            while !*shutdown_rx.borrow_and_update() {
                if shutdown_rx.changed().await.is_err() {
                    break;
                }
            }
        })
        .await?;
    Ok(())
}
