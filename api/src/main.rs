use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use api::{
    config::Config,
    state::AppState,
    store::{MemoryStore, MongoStore, Store},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db: Arc<dyn Store> = if config.database.in_memory {
        info!("DATABASE__IN_MEMORY set, keeping documents in memory");
        Arc::new(MemoryStore::new())
    } else {
        let store = MongoStore::connect(&config.database.uri, &config.database.name)
            .await
            .context("failed to create MongoDB client")?;
        info!(database = %config.database.name, "using MongoDB");
        Arc::new(store)
    };

    let state = AppState { db };

    let app = api::app::build_app(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!("API listening on http://{addr}");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
