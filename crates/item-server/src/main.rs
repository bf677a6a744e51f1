//! Item Server binary
//!
//! Reads configuration from the environment, opens the database and cache,
//! and serves the item API.

use anyhow::{Context, Result};
use item_core::CacheStore;
use item_server::config::{CacheBackend, ServerConfig};
use item_server::storage::{Database, MemoryCache, RedisCache};
use item_server::{build_router, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Item Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = ServerConfig::load().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, db={}, cache={:?}",
        config.bind_address, config.database_url, config.cache.backend
    );

    let db = Arc::new(
        Database::new(&config.database_url, config.max_connections)
            .await
            .context("Failed to initialize database")?,
    );

    let cache: Arc<dyn CacheStore> = match config.cache.backend {
        CacheBackend::Memory => {
            info!("Using in-memory cache");
            Arc::new(MemoryCache::new(config.cache.ttl()))
        }
        CacheBackend::Redis => Arc::new(
            RedisCache::connect(&config.cache.redis_url, config.cache.ttl())
                .await
                .context("Failed to initialize Redis cache")?,
        ),
    };

    if config.cache.strict {
        info!("Strict cache mode: cache errors will fail requests");
    }

    let state = AppState::new(db.clone(), cache, config.cache.strict);
    let app = build_router(state);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down, closing database pool");
    db.close().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
