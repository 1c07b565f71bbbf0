//! Master-data collection routes.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::error::Result;
use crate::handlers::{
    handle_create, handle_list, handle_list_families, handle_next_code, NextCodeResponse,
};
use crate::registry::FamilySummary;
use crate::AppState;

/// Create collection routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/collections", get(list_families_handler))
        .route(
            "/api/collections/{family}",
            get(list_handler).post(create_handler),
        )
        .route("/api/collections/{family}/next-code", get(next_code_handler))
}

/// GET /api/collections - Family summaries.
async fn list_families_handler(State(state): State<AppState>) -> Json<Vec<FamilySummary>> {
    Json(handle_list_families(&state.registry))
}

/// GET /api/collections/{family} - Every record of a family.
async fn list_handler(
    State(state): State<AppState>,
    Path(family): Path<String>,
) -> Result<Json<Vec<Value>>> {
    let records = handle_list(&state.registry, &family)?;
    Ok(Json(records))
}

/// GET /api/collections/{family}/next-code - Preview the next code.
async fn next_code_handler(
    State(state): State<AppState>,
    Path(family): Path<String>,
) -> Result<Json<NextCodeResponse>> {
    let response = handle_next_code(&state.registry, &family)?;
    Ok(Json(response))
}

/// POST /api/collections/{family} - Create a record.
async fn create_handler(
    State(state): State<AppState>,
    Path(family): Path<String>,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>)> {
    let Json(body) = body?;
    let record = handle_create(&state.registry, &family, body)?;
    Ok((StatusCode::CREATED, Json(record)))
}
