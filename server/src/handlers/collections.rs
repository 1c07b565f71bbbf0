//! Collection handlers - serve whole families and create records.
//!
//! Collections are always returned in full. Searching, sorting and paging
//! happen in the dashboard through the engine's table state.

use crate::error::{AppError, Result};
use crate::registry::{FamilySummary, Registry};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

/// Response for a code preview.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextCodeResponse {
    pub family: String,
    pub code: String,
}

/// List every family with its record count.
pub fn handle_list_families(registry: &Registry) -> Vec<FamilySummary> {
    registry.summaries()
}

/// Every record of one family.
pub fn handle_list(registry: &Registry, family: &str) -> Result<Vec<Value>> {
    Ok(registry.records(family)?)
}

/// Code the next created record will receive. Informational only; the
/// code is assigned when the record is actually created.
pub fn handle_next_code(registry: &Registry, family: &str) -> Result<NextCodeResponse> {
    let code = registry.peek_code(family)?;
    Ok(NextCodeResponse {
        family: family.to_string(),
        code,
    })
}

/// Create a record from a JSON object body.
pub fn handle_create(registry: &Registry, family: &str, body: Value) -> Result<Value> {
    let Value::Object(body) = body else {
        return Err(AppError::BadRequest("record must be a JSON object".into()));
    };

    let record = registry.create(family, body, Utc::now())?;
    tracing::info!(
        family,
        code = record["code"].as_str().unwrap_or_default(),
        "created record"
    );
    Ok(record)
}
