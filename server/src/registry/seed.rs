//! Initial records loaded at startup.

use super::Registry;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Records to load, keyed by family name.
pub type Seed = BTreeMap<String, Vec<Value>>;

/// Seed loading errors.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid seed record in '{family}': {source}")]
    Record {
        family: String,
        #[source]
        source: depot_engine::Error,
    },
}

/// Parse seed JSON of the form `{"doctors": [{...}, ...], ...}`.
pub fn parse_seed(json: &str) -> Result<Seed, SeedError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a seed file.
pub fn load_seed(path: &Path) -> Result<Seed, SeedError> {
    let json = std::fs::read_to_string(path)?;
    parse_seed(&json)
}

/// Import every seed record. Returns the number of records loaded.
///
/// Explicit codes of a family are reserved before any of its records is
/// imported, so records without a code never take one that a later record
/// carries.
pub fn apply_seed(registry: &Registry, seed: Seed) -> Result<usize, SeedError> {
    let mut loaded = 0;
    for (family, records) in seed {
        let count = records.len();
        let explicit = records
            .iter()
            .filter_map(|record| record.get("code").and_then(Value::as_str));
        registry
            .reserve_codes(&family, explicit)
            .map_err(|source| SeedError::Record {
                family: family.clone(),
                source,
            })?;

        for record in records {
            registry
                .import(&family, record)
                .map_err(|source| SeedError::Record {
                    family: family.clone(),
                    source,
                })?;
        }
        tracing::info!(family = %family, count, "seeded family");
        loaded += count;
    }
    Ok(loaded)
}
