use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use herald::config::Config;
use herald::infrastructure::github::AnnouncementStore;
use herald::routes::create_routes;
use herald::state::AppState;
use herald::utils::shutdown_signal;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let config = Arc::new(config);

    let store = AnnouncementStore::from_config(&config.github)?;

    let state = AppState::new(config.clone(), store);

    let app = create_routes(&config).with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("herald running on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
