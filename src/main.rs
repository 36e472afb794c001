use anyhow::{Context, Result};
use arkaya_site::{config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("arkaya_site=info".parse()?),
        )
        .init();

    info!("Starting Arkaya website");

    // Load configuration from environment
    let config = config::Config::from_env()?;
    info!(
        "Default locale: {}, dictionaries: {}",
        config.default_locale,
        config
            .locales_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|| "built-in".to_string())
    );

    let addr = config.bind_addr();
    let state = server::AppState::from_config(config)?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    server::serve(listener, state).await
}
