//! # Depot Engine
//!
//! Table browsing for the Depot warehouse admin dashboard.
//!
//! Every master-data screen (depots, doctors, drivers, vehicles, chemist
//! shops, products, routes) shows the same kind of table: a collection
//! fetched in full, narrowed by a search box, ordered by a clickable column
//! header and split into pages. This crate is that table, independent of
//! how rows are fetched or drawn.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine never fetches, stores or renders anything
//! - **Deterministic**: the same state and collection always give the same view
//! - **Total**: missing fields, odd values and out-of-range pages are handled,
//!   never rejected
//! - **Generic**: any row type implementing [`Record`] can be browsed;
//!   `serde_json::Value` objects work out of the box
//!
//! ## Core Concepts
//!
//! ### Table State
//!
//! A [`TableState`] holds the query, sort key, sort direction, requested page
//! and page size of one browsing session. [`TableState::recompute`] runs
//! the pipeline over a borrowed collection:
//!
//! 1. [`filter()`] keeps rows whose fields contain the query
//! 2. a stable sort by [`compare_values`] orders them when a key is set
//! 3. [`paginate`] picks the visible slice and the page navigation
//!
//! Changing the query always returns to page 1.
//!
//! ### Codes
//!
//! Master-data rows get human-readable codes such as `CHEM-0042`.
//! [`next_code`] derives the next code from existing ones;
//! [`CodeSequence`] hands out codes that never collide when kept behind a
//! single writer.
//!
//! ## Quick Start
//!
//! ```rust
//! use depot_engine::{next_code, PageMarker, TableState};
//! use serde_json::json;
//!
//! let shops = vec![
//!     json!({"id": "1", "code": "CHEM-0001", "name": "Green Pharmacy"}),
//!     json!({"id": "2", "code": "CHEM-0002", "name": "City Medical"}),
//! ];
//!
//! let mut table = TableState::new();
//! table.set_query("pharm");
//! table.set_sort("name");
//!
//! let view = table.recompute(&shops);
//! assert_eq!(view.rows.len(), 1);
//! assert_eq!(view.rows[0]["name"], "Green Pharmacy");
//! assert_eq!(view.pagination.window, vec![PageMarker::Page(1)]);
//! assert_eq!(view.label(), "Showing 1 to 1 of 1 items");
//!
//! let codes = shops.iter().filter_map(|s| s["code"].as_str());
//! assert_eq!(next_code("CHEM", codes), "CHEM-0003");
//! ```
//!
//! ## FFI
//!
//! The [`ffi`] module provides C-compatible functions for hosts written in
//! other languages. All data is exchanged as JSON strings.

pub mod alloc;
pub mod code;
pub mod compare;
pub mod error;
pub mod ffi;
pub mod filter;
pub mod pager;
pub mod record;
pub mod schema;
pub mod table;

// Re-export main types at crate root
pub use alloc::{IdAllocator, SequentialIds};
pub use code::{next_code, CodeSequence};
pub use compare::{compare_records, compare_values, SortDirection};
pub use error::Error;
pub use filter::{filter, SearchQuery};
pub use pager::{page_window, paginate, PageMarker, Pagination};
pub use record::{FieldValue, Record};
pub use schema::{FamilySchema, FieldDef, FieldType, Schema};
pub use table::{TableState, TableView, DEFAULT_PAGE_SIZE};

/// Name of a record family (`doctors`, `chemist_shops`, ...).
pub type FamilyName = String;
