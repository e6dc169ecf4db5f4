use std::sync::Arc;

use anyhow::Context;
use pawsbot_relay::{config::RelayConfig, logging::configure_logging, routes, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    configure_logging();

    let config = RelayConfig::from_env()?;
    if config.api_key.is_none() {
        tracing::warn!("LOVABLE_API_KEY is not set, every chat turn will get the fallback reply");
    }
    tracing::debug!(?config, "loaded configuration");

    let state = Arc::new(AppState::from_config(&config)?);
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;

    tracing::info!("🐾 PawsBot relay listening on http://{}", config.bind);
    axum::serve(listener, app).await?;
    Ok(())
}
