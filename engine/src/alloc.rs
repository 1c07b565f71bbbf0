//! Identifier allocation for newly created records.
//!
//! Creation paths take an [`IdAllocator`] instead of generating identifiers
//! themselves, so tests can use a deterministic allocator and services can
//! plug in random ones.

use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out record identifiers.
pub trait IdAllocator: Send + Sync {
    /// Allocate a fresh identifier.
    fn next_id(&self) -> String;
}

/// Deterministic identifiers `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_after(prefix, 0)
    }

    /// Continue after `last` (the next id is `last + 1`).
    pub fn starting_after(prefix: impl Into<String>, last: u64) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(last),
        }
    }
}

impl IdAllocator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}

impl<A: IdAllocator + ?Sized> IdAllocator for Box<A> {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}

impl<A: IdAllocator + ?Sized> IdAllocator for std::sync::Arc<A> {
    fn next_id(&self) -> String {
        (**self).next_id()
    }
}
