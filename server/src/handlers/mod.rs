//! Request handlers for master-data collections.

mod collections;

pub use collections::*;
