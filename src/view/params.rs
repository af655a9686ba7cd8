//! User-controlled filter and page parameters, and the reducer that edits them.

use std::collections::BTreeMap;

use crate::mvi::{Intent, Reducer, UiState};

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Filter, selector and page parameters of one list screen.
///
/// Every filter edit resets `page` to 1; only explicit navigation moves the
/// page on its own. `page` is 1-indexed and `page_size` is at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterParams {
    query: String,
    month: Option<String>,
    selectors: BTreeMap<String, String>,
    page: usize,
    page_size: usize,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl UiState for FilterParams {}

impl FilterParams {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            query: String::new(),
            month: None,
            selectors: BTreeMap::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Month filter as a `YYYY-MM` prefix of the item date.
    pub fn month(&self) -> Option<&str> {
        self.month.as_deref()
    }

    pub fn selector(&self, key: &str) -> Option<&str> {
        self.selectors.get(key).map(String::as_str)
    }

    pub fn selectors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selectors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// An empty month clears the month filter.
    pub fn set_month(&mut self, month: impl Into<String>) {
        let month = month.into();
        self.month = if month.trim().is_empty() {
            None
        } else {
            Some(month.trim().to_string())
        };
        self.page = 1;
    }

    /// An empty value clears the selector.
    pub fn set_selector(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.selectors.remove(&key);
        } else {
            self.selectors.insert(key, value);
        }
        self.page = 1;
    }

    /// Zero is treated as 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Page 0 is treated as 1. Pages past the end are allowed and render empty.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Clear the query, month and selectors; keeps the page size.
    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.month = None;
        self.selectors.clear();
        self.page = 1;
    }
}

/// Edits a list screen applies to its [`FilterParams`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterIntent {
    SearchChanged(String),
    MonthChanged(String),
    SelectorChanged { key: String, value: String },
    PageSizeChanged(usize),
    NextPage,
    PrevPage,
    GoToPage(usize),
    ClearFilters,
}

impl Intent for FilterIntent {}

/// Applies [`FilterIntent`]s to [`FilterParams`].
pub struct FilterReducer;

impl Reducer for FilterReducer {
    type State = FilterParams;
    type Intent = FilterIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FilterIntent::SearchChanged(query) => state.set_query(query),
            FilterIntent::MonthChanged(month) => state.set_month(month),
            FilterIntent::SelectorChanged { key, value } => state.set_selector(key, value),
            FilterIntent::PageSizeChanged(size) => state.set_page_size(size),
            FilterIntent::NextPage => state.next_page(),
            FilterIntent::PrevPage => state.prev_page(),
            FilterIntent::GoToPage(page) => state.go_to_page(page),
            FilterIntent::ClearFilters => state.clear_filters(),
        }
        state
    }
}
