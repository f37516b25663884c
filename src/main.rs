//! Task Store - a tasks REST service with a cache-aside read path

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use task_store::api::{create_router, AppState};
use task_store::cache::{CacheBackend, MemoryCache, RedisCache};
use task_store::config::Config;
use task_store::db::PgTaskRepository;
use task_store::spawn_cleanup_task;
use task_store::store::TaskStore;

/// Main entry point for the task service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect to PostgreSQL and the cache, failing fast if either is down
/// 4. Start the embedded cache sweeper when `memory://` is selected
/// 5. Serve the router until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "task_store=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting task service");

    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Configuration loaded: port={}, cache_ttl={}s, embedded_cache={}",
        config.server_port,
        config.cache_ttl,
        config.uses_memory_cache()
    );

    let repository = PgTaskRepository::connect(&config.database_url)
        .await
        .context("Failed to initialize PostgreSQL")?;

    let (cache, cleanup_handle): (Arc<dyn CacheBackend>, Option<JoinHandle<()>>) =
        if config.uses_memory_cache() {
            let cache = MemoryCache::new(config.max_entries);
            let handle = spawn_cleanup_task(cache.clone(), config.cleanup_interval);
            info!("Embedded cache initialized");
            (Arc::new(cache) as Arc<dyn CacheBackend>, Some(handle))
        } else {
            let cache = RedisCache::connect(&config.cache_url)
                .await
                .context("Failed to initialize Redis")?;
            (Arc::new(cache) as Arc<dyn CacheBackend>, None)
        };

    let store = TaskStore::new(Arc::new(repository.clone()), cache, config.cache_ttl());
    let app = create_router(AppState::new(store));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("Server error")?;

    repository.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// Aborts the embedded cache sweeper, if running, before returning.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cleanup task aborted");
    }
}
