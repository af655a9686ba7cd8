//! Filter-then-paginate.

use super::normalize::NormalizedQuery;
use super::params::FilterParams;
use super::spec::ViewSpec;

/// One page of filtered records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedView<T> {
    /// Records on the current page, in source order.
    pub items: Vec<T>,
    /// Records that passed the filters, across all pages.
    pub total_items: usize,
    /// `ceil(total_items / page_size)`; zero when nothing matched.
    pub total_pages: usize,
    /// The 1-indexed page this view was cut for.
    pub page: usize,
}

impl<T> PaginatedView<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Filter `data` with `params` as described by `spec`, then cut the page.
///
/// Absent data is treated as an empty list. A page past the end yields an
/// empty slice with correct totals.
pub fn compute_view<T: Clone>(
    data: Option<&[T]>,
    params: &FilterParams,
    spec: &ViewSpec<T>,
) -> PaginatedView<T> {
    let query = NormalizedQuery::new(params.query());
    let filtered: Vec<&T> = data
        .unwrap_or_default()
        .iter()
        .filter(|item| spec.matches(item, query.as_ref(), params))
        .collect();

    let page_size = params.page_size().max(1);
    let page = params.page().max(1);
    let total_items = filtered.len();
    let total_pages = total_items.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size);

    let items = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    PaginatedView {
        items,
        total_items,
        total_pages,
        page,
    }
}
