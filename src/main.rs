use std::sync::Arc;

use moviemood_api::{
    config::Config,
    routes::{create_router, AppState},
    services::{providers::TmdbClient, CatalogService},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("moviemood_api=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let provider = TmdbClient::from_config(&config)?;
    let catalog = CatalogService::new(
        Arc::new(provider),
        config.genre_page_size,
        config.mood_page_size,
    );

    let app = create_router(AppState { catalog });

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(
        address = %config.bind_address(),
        provider_url = %config.tmdb_api_url,
        timeout_secs = config.tmdb_timeout_secs,
        "Server running"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
