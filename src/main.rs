use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use leadbot::config::AppConfig;
use leadbot::state::AppState;
use leadbot::storage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let store = storage::init_store(&config.data_dir, &config.leads_file)?;
    tracing::info!(path = %store.path().display(), "using lead file");

    let state = Arc::new(AppState {
        config: config.clone(),
        leads: Box::new(store),
    });

    let app = leadbot::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
