//! Liveness and a quick look at what the registry holds.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Number of record families served
    pub families: usize,
    /// Records across all families
    pub records: usize,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let summaries = state.registry.summaries();
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        families: summaries.len(),
        records: summaries.iter().map(|s| s.count).sum(),
    })
}

async fn root() -> &'static str {
    "Depot Master Data Server"
}
