//! FFI layer for the dashboard front end.
//!
//! This module provides C-compatible functions for hosts that render tables
//! but keep browsing logic here. All data crosses the boundary as JSON
//! strings.
//!
//! # Memory Management
//!
//! - Strings returned by `depot_*` functions are allocated by Rust
//! - Caller must free them with `depot_string_free`
//! - Table pointers must be freed with `depot_table_free`
//!
//! # Error Handling
//!
//! Functions return JSON with either:
//! - `{"ok": <result>}` on success
//! - `{"error": "<message>"}` on failure

use crate::{code::next_code, pager::PageMarker, TableState, TableView};
use serde::Serialize;
use serde_json::Value;
use std::ffi::{c_char, CStr, CString};
use std::ptr;

/// Result wrapper for FFI responses.
#[derive(Serialize)]
#[serde(untagged)]
enum FfiResult<T: Serialize> {
    Ok { ok: T },
    Err { error: String },
}

impl<T: Serialize> FfiResult<T> {
    fn ok(value: T) -> Self {
        FfiResult::Ok { ok: value }
    }

    fn err(message: impl Into<String>) -> Self {
        FfiResult::Err {
            error: message.into(),
        }
    }

    fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|e| format!(r#"{{"error":"serialization failed: {}"}}"#, e))
    }
}

/// Flattened view handed to the host.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewJson<'a> {
    rows: &'a [&'a Value],
    total_items: usize,
    total_filtered: usize,
    page: usize,
    total_pages: usize,
    start: usize,
    end: usize,
    window: &'a [PageMarker],
    show_controls: bool,
    label: String,
}

impl<'a> From<&'a TableView<'a, Value>> for ViewJson<'a> {
    fn from(view: &'a TableView<'a, Value>) -> Self {
        Self {
            rows: &view.rows,
            total_items: view.total_items,
            total_filtered: view.total_filtered,
            page: view.pagination.page,
            total_pages: view.pagination.total_pages,
            start: view.pagination.start,
            end: view.pagination.end,
            window: &view.pagination.window,
            show_controls: view.pagination.show_controls(),
            label: view.label(),
        }
    }
}

/// Convert a Rust string to a C string pointer.
/// Caller must free with `depot_string_free`.
fn to_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(cs) => cs.into_raw(),
        Err(_) => CString::new(r#"{"error":"string contained null bytes"}"#)
            .unwrap_or_default()
            .into_raw(),
    }
}

/// Convert a C string pointer to a Rust string.
/// Returns None if pointer is null or invalid UTF-8.
unsafe fn from_c_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

fn error_json(message: impl Into<String>) -> *mut c_char {
    to_c_string(FfiResult::<()>::err(message).to_json())
}

fn state_json(table: &TableState) -> *mut c_char {
    to_c_string(FfiResult::ok(table).to_json())
}

// ============================================================================
// Table Lifecycle
// ============================================================================

/// Create a new table state.
///
/// # Arguments
/// - `state_json`: JSON string of a TableState, or null for the defaults
///
/// # Returns
/// Pointer to TableState, or null on invalid input.
///
/// # Safety
/// - `state_json` must be a valid null-terminated C string or null
/// - Caller must free the returned pointer with `depot_table_free`
#[no_mangle]
pub unsafe extern "C" fn depot_table_new(state_json: *const c_char) -> *mut TableState {
    let state = match from_c_string(state_json) {
        None if state_json.is_null() => TableState::default(),
        None => return ptr::null_mut(),
        Some(s) => match serde_json::from_str::<TableState>(&s) {
            Ok(state) => state,
            Err(_) => return ptr::null_mut(),
        },
    };

    if state.validate().is_err() {
        return ptr::null_mut();
    }

    Box::into_raw(Box::new(state))
}

/// Free a table state.
///
/// # Safety
/// - `table` must be a valid pointer from `depot_table_new`
/// - Must not be called twice on the same pointer
#[no_mangle]
pub unsafe extern "C" fn depot_table_free(table: *mut TableState) {
    if !table.is_null() {
        drop(Box::from_raw(table));
    }
}

/// Free a string allocated by the engine.
///
/// # Safety
/// - `s` must be a valid pointer from a `depot_*` function
/// - Must not be called twice on the same pointer
#[no_mangle]
pub unsafe extern "C" fn depot_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

// ============================================================================
// Table State Changes
// ============================================================================
//
// Every setter returns `{"ok": TableState}` with the updated state.

/// Replace the search query and return to the first page.
///
/// # Safety
/// - `table` must be a valid pointer from `depot_table_new` or null
/// - `query` must be a valid null-terminated C string or null
/// - Caller must free the returned string with `depot_string_free`
#[no_mangle]
pub unsafe extern "C" fn depot_table_set_query(
    table: *mut TableState,
    query: *const c_char,
) -> *mut c_char {
    let table = match table.as_mut() {
        Some(t) => t,
        None => return error_json("null table pointer"),
    };

    let query = match from_c_string(query) {
        Some(q) => q,
        None => return error_json("invalid query string"),
    };

    table.set_query(query);
    state_json(table)
}

/// Sort by a field, toggling direction when it is already the sort key.
///
/// # Safety
/// - `table` must be a valid pointer from `depot_table_new` or null
/// - `key` must be a valid null-terminated C string or null
/// - Caller must free the returned string with `depot_string_free`
#[no_mangle]
pub unsafe extern "C" fn depot_table_set_sort(
    table: *mut TableState,
    key: *const c_char,
) -> *mut c_char {
    let table = match table.as_mut() {
        Some(t) => t,
        None => return error_json("null table pointer"),
    };

    let key = match from_c_string(key) {
        Some(k) => k,
        None => return error_json("invalid sort key"),
    };

    table.set_sort(key);
    state_json(table)
}

/// Remove any sort.
///
/// # Safety
/// - `table` must be a valid pointer from `depot_table_new` or null
/// - Caller must free the returned string with `depot_string_free`
#[no_mangle]
pub unsafe extern "C" fn depot_table_clear_sort(table: *mut TableState) -> *mut c_char {
    let table = match table.as_mut() {
        Some(t) => t,
        None => return error_json("null table pointer"),
    };

    table.clear_sort();
    state_json(table)
}

/// Request a page. Pages below 1 are clamped to 1 here; pages past the end
/// are clamped on recompute.
///
/// # Safety
/// - `table` must be a valid pointer from `depot_table_new` or null
/// - Caller must free the returned string with `depot_string_free`
#[no_mangle]
pub unsafe extern "C" fn depot_table_set_page(table: *mut TableState, page: i64) -> *mut c_char {
    let table = match table.as_mut() {
        Some(t) => t,
        None => return error_json("null table pointer"),
    };

    table.set_page(usize::try_from(page.max(1)).unwrap_or(usize::MAX));
    state_json(table)
}

/// Change the page size and return to the first page.
///
/// # Safety
/// - `table` must be a valid pointer from `depot_table_new` or null
/// - Caller must free the returned string with `depot_string_free`
#[no_mangle]
pub unsafe extern "C" fn depot_table_set_page_size(
    table: *mut TableState,
    page_size: u32,
) -> *mut c_char {
    let table = match table.as_mut() {
        Some(t) => t,
        None => return error_json("null table pointer"),
    };

    match table.set_page_size(page_size as usize) {
        Ok(()) => state_json(table),
        Err(e) => error_json(e.to_string()),
    }
}

/// Get the current state.
///
/// # Safety
/// - `table` must be a valid pointer from `depot_table_new` or null
/// - Caller must free the returned string with `depot_string_free`
#[no_mangle]
pub unsafe extern "C" fn depot_table_state(table: *const TableState) -> *mut c_char {
    match table.as_ref() {
        Some(t) => state_json(t),
        None => error_json("null table pointer"),
    }
}

// ============================================================================
// Views
// ============================================================================

/// Compute the visible page of a collection.
///
/// # Arguments
/// - `table`: TableState pointer
/// - `collection_json`: JSON array of records
///
/// # Returns
/// JSON string: `{"ok": {"rows": [...], "totalItems": n, ...}}` or `{"error": "message"}`
///
/// # Safety
/// - `table` must be a valid pointer from `depot_table_new` or null
/// - `collection_json` must be a valid null-terminated C string or null
/// - Caller must free the returned string with `depot_string_free`
#[no_mangle]
pub unsafe extern "C" fn depot_table_recompute(
    table: *const TableState,
    collection_json: *const c_char,
) -> *mut c_char {
    let table = match table.as_ref() {
        Some(t) => t,
        None => return error_json("null table pointer"),
    };

    let collection_str = match from_c_string(collection_json) {
        Some(s) => s,
        None => return error_json("invalid collection JSON"),
    };

    let collection: Vec<Value> = match serde_json::from_str(&collection_str) {
        Ok(c) => c,
        Err(e) => return error_json(format!("parse error: {}", e)),
    };

    let view = table.recompute(&collection);
    to_c_string(FfiResult::ok(ViewJson::from(&view)).to_json())
}

// ============================================================================
// Codes
// ============================================================================

/// Next sequential code for a prefix.
///
/// # Arguments
/// - `prefix`: code prefix, e.g. `CHEM`
/// - `codes_json`: JSON array of existing code strings
///
/// # Returns
/// JSON string: `{"ok": "CHEM-0042"}` or `{"error": "message"}`
///
/// # Safety
/// - `prefix` and `codes_json` must be valid null-terminated C strings or null
/// - Caller must free the returned string with `depot_string_free`
#[no_mangle]
pub unsafe extern "C" fn depot_next_code(
    prefix: *const c_char,
    codes_json: *const c_char,
) -> *mut c_char {
    let prefix = match from_c_string(prefix) {
        Some(p) => p,
        None => return error_json("invalid prefix"),
    };

    let codes_str = match from_c_string(codes_json) {
        Some(s) => s,
        None => return error_json("invalid codes JSON"),
    };

    let codes: Vec<String> = match serde_json::from_str(&codes_str) {
        Ok(c) => c,
        Err(e) => return error_json(format!("parse error: {}", e)),
    };

    to_c_string(FfiResult::ok(next_code(&prefix, &codes)).to_json())
}

/// Get the engine version.
#[no_mangle]
pub extern "C" fn depot_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
