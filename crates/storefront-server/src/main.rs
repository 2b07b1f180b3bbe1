//! Storefront Server
//!
//! REST API for the storefront: product catalog, brand and category
//! browsing, and session-scoped shopping carts.
//!
//! All data is held in memory and seeded with a sample catalog at startup.

mod error;
mod handlers;
mod routes;
mod services;
mod settings;
mod storage;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use settings::ServerConfig;
use services::{CartService, CatalogService};
use storage::{MemStorage, SharedStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub cart: Arc<CartService>,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(store.clone())),
            cart: Arc::new(CartService::new(store)),
        }
    }
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = routes::panic_message(info.payload());
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[FATAL] Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing; RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = FmtSubscriber::builder().with_env_filter(filter);
    let installed = if config.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    if let Err(e) = installed {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Storefront Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server(config).await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server(config: ServerConfig) -> Result<()> {
    info!(
        "Config loaded: bind={}, seed_catalog={}, static_dir={:?}",
        config.bind_address, config.seed_catalog, config.static_dir
    );

    let store = if config.seed_catalog {
        MemStorage::seeded()
    } else {
        MemStorage::new()
    };
    let state = AppState::new(storage::shared(store));
    info!("In-memory store initialized");

    let app = routes::router(state, config.static_dir.as_deref());

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
