//! Точка входа сервера каталога ссылок.

use clap::Parser;
use linkdir_server::config::{AdminKey, ServerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "linkdir-server",
    about = "Каталог ссылок на внутренние приложения (имя, IP, порт, описание)"
)]
struct Cli {
    /// Адрес для прослушивания (host:port)
    #[arg(long, default_value = "0.0.0.0:8080", env = "LISTEN_ADDR")]
    listen: String,

    /// URL базы данных
    #[arg(
        long,
        default_value = "sqlite:./linkdir.db?mode=rwc",
        env = "DATABASE_URL"
    )]
    db_url: String,

    /// Ключ администратора для изменяющих запросов
    #[arg(long, env = "ADMIN_KEY", hide_env_values = true)]
    admin_key: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Инициализация логгера
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig {
        listen: cli.listen,
        db_url: cli.db_url,
        admin_key: AdminKey::new(cli.admin_key),
    };

    linkdir_server::run(config).await
}
