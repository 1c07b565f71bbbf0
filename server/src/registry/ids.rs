//! Random record identifiers.

use depot_engine::IdAllocator;

/// UUID v4 record identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdAllocator for UuidIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
