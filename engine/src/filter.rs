//! Free-text search over a collection.

use crate::record::Record;

/// A normalized search query: trimmed and lowercased.
///
/// An empty query (including one made only of whitespace) matches every
/// record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Normalize a raw query string.
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    /// Whether this query filters nothing out.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// The normalized query text.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Whether `record` matches this query.
    ///
    /// With `fields`, only those fields are searched and a field the record
    /// lacks never matches. Without, every field the record enumerates is
    /// searched.
    pub fn matches<R: Record + ?Sized>(&self, record: &R, fields: Option<&[String]>) -> bool {
        if self.is_empty() {
            return true;
        }

        match fields {
            Some(fields) => fields.iter().any(|name| self.field_matches(record, name)),
            None => record
                .field_names()
                .iter()
                .any(|name| self.field_matches(record, name)),
        }
    }

    fn field_matches<R: Record + ?Sized>(&self, record: &R, name: &str) -> bool {
        record
            .field(name)
            .is_some_and(|value| value.to_string().to_lowercase().contains(&self.needle))
    }
}

/// Keep the records of `collection` that match `query`, in their original
/// order.
pub fn filter<'a, R: Record>(
    collection: &'a [R],
    query: &SearchQuery,
    fields: Option<&[String]>,
) -> Vec<&'a R> {
    if query.is_empty() {
        return collection.iter().collect();
    }

    collection
        .iter()
        .filter(|record| query.matches(*record, fields))
        .collect()
}
