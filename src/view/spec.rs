//! Which fields of a record the filters look at.

use std::borrow::Cow;

use super::normalize::NormalizedQuery;
use super::params::FilterParams;

/// Extracts one text field from a record.
pub type FieldFn<T> = for<'a> fn(&'a T) -> Cow<'a, str>;

/// Describes how [`FilterParams`] apply to records of type `T`.
///
/// - The query matches if it is contained in ANY search field.
/// - The month matches on the prefix of the date field.
/// - Each selector set in the params must equal the record's value.
///
/// Dimensions combine with AND. A month with no date field, or a selector
/// key this `ViewSpec` does not declare, does not filter anything.
pub struct ViewSpec<T> {
    search_fields: Vec<FieldFn<T>>,
    date_field: Option<FieldFn<T>>,
    selectors: Vec<(&'static str, FieldFn<T>)>,
}

impl<T> Default for ViewSpec<T> {
    fn default() -> Self {
        Self {
            search_fields: Vec::new(),
            date_field: None,
            selectors: Vec::new(),
        }
    }
}

impl<T> ViewSpec<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, field: FieldFn<T>) -> Self {
        self.search_fields.push(field);
        self
    }

    pub fn date(mut self, field: FieldFn<T>) -> Self {
        self.date_field = Some(field);
        self
    }

    pub fn selector(mut self, key: &'static str, field: FieldFn<T>) -> Self {
        self.selectors.push((key, field));
        self
    }

    pub(crate) fn matches(
        &self,
        item: &T,
        query: Option<&NormalizedQuery>,
        params: &FilterParams,
    ) -> bool {
        self.matches_month(item, params.month())
            && self.matches_selectors(item, params)
            && self.matches_query(item, query)
    }

    fn matches_month(&self, item: &T, month: Option<&str>) -> bool {
        match (month, self.date_field) {
            (Some(month), Some(date)) => date(item).starts_with(month),
            _ => true,
        }
    }

    fn matches_selectors(&self, item: &T, params: &FilterParams) -> bool {
        params.selectors().all(|(key, wanted)| {
            match self.selectors.iter().find(|(name, _)| *name == key) {
                Some((_, field)) => field(item) == wanted,
                None => true,
            }
        })
    }

    fn matches_query(&self, item: &T, query: Option<&NormalizedQuery>) -> bool {
        let Some(query) = query else {
            return true;
        };
        self.search_fields
            .iter()
            .any(|field| query.matches(&field(item)))
    }
}
