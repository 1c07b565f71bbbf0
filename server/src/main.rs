//! Depot Server - master-data service for the warehouse admin dashboard.
//!
//! Serves each record family (depots, doctors, drivers, vehicles, chemist
//! shops, products, routes) as a complete JSON array and assigns ids and
//! sequential codes to newly created records. Browsing those arrays is the
//! dashboard's job, through depot-engine.

mod catalog;
mod config;
mod error;
mod handlers;
mod registry;
mod routes;

use crate::config::Config;
use crate::registry::{Registry, UuidIds};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}

/// Build the router with middleware.
fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env first so RUST_LOG from it reaches the filter
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "depot_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting Depot Server on {}:{}", config.host, config.port);

    // Build the registry and load initial data
    let registry = Registry::new_shared(catalog::master_data_schema(), Arc::new(UuidIds));
    if let Some(path) = &config.seed_file {
        tracing::info!("Loading seed data from {}", path.display());
        let seed = crate::registry::load_seed(path)?;
        let loaded = crate::registry::apply_seed(&registry, seed)?;
        tracing::info!("Loaded {} seed records", loaded);
    }

    let app = build_app(AppState { registry });

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
