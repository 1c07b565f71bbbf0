//! Table state: the query, sort and page of one browsing session, and the
//! derived view it produces over a collection.

use crate::{
    compare::{compare_records, SortDirection},
    error::Result,
    filter::{filter, SearchQuery},
    pager::{paginate, Pagination},
    Error, Record,
};
use serde::{Deserialize, Serialize};

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Browsing state of one table.
///
/// The state is small and owned by the caller. It never holds on to a
/// collection; [`TableState::recompute`] derives a fresh view each time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableState {
    query: String,
    sort_key: Option<String>,
    sort_direction: SortDirection,
    current_page: usize,
    page_size: usize,
    search_fields: Option<Vec<String>>,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort_key: None,
            sort_direction: SortDirection::Ascending,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search_fields: None,
        }
    }
}

impl TableState {
    /// Create a state with the default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with the given page size.
    pub fn with_page_size(page_size: usize) -> Result<Self> {
        let mut state = Self::default();
        state.set_page_size(page_size)?;
        Ok(state)
    }

    /// Restrict search to the given fields.
    pub fn with_search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Check a state that arrived from outside (e.g. deserialized).
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::InvalidPageSize(self.page_size));
        }
        Ok(())
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_key(&self) -> Option<&str> {
        self.sort_key.as_deref()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    /// The requested page. Views report the clamped page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn search_fields(&self) -> Option<&[String]> {
        self.search_fields.as_deref()
    }

    /// Replace the query. Always returns to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.current_page = 1;
    }

    /// Sort by `key`. Sorting by the current key again flips the direction;
    /// a new key starts ascending. The page is kept.
    pub fn set_sort(&mut self, key: impl Into<String>) {
        let key = key.into();
        if self.sort_key.as_deref() == Some(key.as_str()) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_key = Some(key);
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Return to the unsorted (original) order.
    pub fn clear_sort(&mut self) {
        self.sort_key = None;
        self.sort_direction = SortDirection::Ascending;
    }

    /// Request a page. Clamped against the data on recompute.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Change the page size and return to the first page.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(Error::InvalidPageSize(page_size));
        }
        self.page_size = page_size;
        self.current_page = 1;
        Ok(())
    }

    /// Change the searched fields and return to the first page.
    pub fn set_search_fields(&mut self, fields: Option<Vec<String>>) {
        self.search_fields = fields;
        self.current_page = 1;
    }

    /// Derive the view of `collection` for this state.
    ///
    /// Runs filter, then sort (only with a key set), then paginate. Each
    /// stage consumes the previous stage's output.
    pub fn recompute<'a, R: Record>(&self, collection: &'a [R]) -> TableView<'a, R> {
        let query = SearchQuery::new(&self.query);
        let mut rows = filter(collection, &query, self.search_fields.as_deref());

        if let Some(key) = &self.sort_key {
            let direction = self.sort_direction;
            // sort_by is stable: ties keep their collection order
            rows.sort_by(|a, b| direction.apply(compare_records(*a, *b, key)));
        }

        let total_filtered = rows.len();
        let pagination = paginate(total_filtered, self.page_size, self.current_page);
        let rows = rows[pagination.range()].to_vec();

        TableView {
            rows,
            total_items: collection.len(),
            total_filtered,
            pagination,
        }
    }
}

/// The visible result of a [`TableState`] over a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView<'a, R> {
    /// Rows on the current page, in display order
    pub rows: Vec<&'a R>,
    /// Size of the unfiltered collection
    pub total_items: usize,
    /// Number of rows matching the query
    pub total_filtered: usize,
    pub pagination: Pagination,
}

impl<R> TableView<'_, R> {
    /// The page being shown, after clamping.
    pub fn page(&self) -> usize {
        self.pagination.page
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages
    }

    /// "Showing X to Y of Z items" over the filtered rows.
    pub fn label(&self) -> String {
        self.pagination.label()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.total_filtered == 0
    }
}
