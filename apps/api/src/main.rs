mod analysis;
mod config;
mod drafts;
mod errors;
mod models;
mod routes;
mod shares;
mod state;
mod store;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StoreBackend};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{FileStore, KvStore, MemoryStore, RedisStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on invalid env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config).await?;
    info!("Store backend: {}", store.backend());

    if !config.analysis_delay.is_zero() {
        info!(
            "Simulated analysis latency: {}ms",
            config.analysis_delay.as_millis()
        );
    }

    let state = AppState::new(config.clone(), store);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs the configured key-value store.
async fn build_store(config: &Config) -> Result<Arc<dyn KvStore>> {
    let store: Arc<dyn KvStore> = match config.store_backend {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::File => Arc::new(
            FileStore::open(&config.data_dir)
                .await
                .with_context(|| format!("Failed to open data dir {}", config.data_dir.display()))?,
        ),
        StoreBackend::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL is required for the redis store")?;
            Arc::new(
                RedisStore::new(url, config.redis_key_prefix.clone())
                    .context("Failed to create Redis client")?,
            )
        }
    };
    Ok(store)
}
