//! In-memory master-data registry.

mod ids;
mod seed;
mod store;

pub use ids::*;
pub use seed::*;
pub use store::*;
