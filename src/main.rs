//! Dribble - Application Entry Point

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, middleware};
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dribble::{
    config::{Config, StoreBackend},
    constants::API_BASE_PATH,
    handlers,
    middleware::logging_middleware,
    state::AppState,
    store::{MemoryStore, PgStore, Store},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Dribble server...");

    // Initialize the data store
    let store: Arc<dyn Store> = match config.store.backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory store");
            if config.store.seed_demo_data {
                tracing::info!("Seeding demo data...");
                Arc::new(MemoryStore::with_demo_data()?)
            } else {
                Arc::new(MemoryStore::new())
            }
        }
        StoreBackend::Postgres => {
            tracing::info!("Connecting to Postgres...");
            Arc::new(PgStore::connect(&config.store).await?)
        }
    };

    // Create application state
    let state = AppState::new(store, config.clone());

    // Build the router
    let app = Router::new()
        .nest(API_BASE_PATH, handlers::routes(state.clone()))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
