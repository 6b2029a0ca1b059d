use shelf_core::{AppConfig, AppConfigTrait};
use shelf_http::{init_logging, log_shutdown_info, log_startup_info, HttpConfig, LoggingConfig, Server};

const SERVICE_NAME: &str = "shelf";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_config = AppConfig::from_env()?;
    let http_config = HttpConfig::from_env()?;

    let logging = LoggingConfig::for_environment(app_config.environment)
        .with_level(app_config.log_level.clone())
        .with_service(SERVICE_NAME, env!("CARGO_PKG_VERSION"));
    init_logging(logging).map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    tracing::debug!(sources = ?app_config.config_sources(), "application config loaded");
    tracing::debug!(sources = ?http_config.config_sources(), "http config loaded");

    let server = Server::new(app_config, http_config)?;
    log_startup_info(SERVICE_NAME, env!("CARGO_PKG_VERSION"), &server.addr().to_string());

    server.run().await?;

    log_shutdown_info(SERVICE_NAME);
    Ok(())
}
