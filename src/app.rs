use crate::infrastructure::config::AppConfig;
use crate::interfaces::http::start_server;
use tracing::info;

pub async fn run() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let config = AppConfig::load().map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!(host = %config.host, port = config.port, "Starting tablemap");

    start_server(config)?.await
}
