//! Memoized derive-on-read.

use crate::resource::ResourceEngine;

use super::compute::{compute_view, PaginatedView};
use super::params::FilterParams;
use super::spec::ViewSpec;

struct Memo<T> {
    revision: u64,
    params: FilterParams,
    view: PaginatedView<T>,
}

/// Caches the last [`PaginatedView`] of a list engine.
///
/// The view is recomputed only when the engine revision or the params
/// differ from the previous call, so hosts may call [`ViewCache::view`]
/// on every render.
pub struct ViewCache<T> {
    spec: ViewSpec<T>,
    memo: Option<Memo<T>>,
}

impl<T: Clone> ViewCache<T> {
    pub fn new(spec: ViewSpec<T>) -> Self {
        Self { spec, memo: None }
    }

    pub fn view<E>(
        &mut self,
        engine: &ResourceEngine<Vec<T>, E>,
        params: &FilterParams,
    ) -> &PaginatedView<T> {
        let spec = &self.spec;
        let previous = self.memo.take();
        let memo = engine.with_data_at_revision(|data, revision| match previous {
            Some(memo) if memo.revision == revision && memo.params == *params => memo,
            _ => Memo {
                revision,
                params: params.clone(),
                view: compute_view(data.map(Vec::as_slice), params, spec),
            },
        });
        &self.memo.insert(memo).view
    }

    /// Whether the next [`ViewCache::view`] call will recompute.
    pub fn is_stale<E>(&self, engine: &ResourceEngine<Vec<T>, E>, params: &FilterParams) -> bool {
        match &self.memo {
            Some(memo) => memo.revision != engine.revision() || memo.params != *params,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    fn text(s: &String) -> Cow<'_, str> {
        Cow::Borrowed(s)
    }

    #[test]
    fn recomputes_only_on_change() {
        let engine: ResourceEngine<Vec<String>> = ResourceEngine::new("test");
        let mut cache = ViewCache::new(ViewSpec::new().search(text));
        let mut params = FilterParams::default();

        assert!(cache.is_stale(&engine, &params));
        assert_eq!(cache.view(&engine, &params).total_items, 0);
        assert!(!cache.is_stale(&engine, &params));

        engine.set_data(vec!["alpha".into(), "beta".into()]);
        assert!(cache.is_stale(&engine, &params));
        assert_eq!(cache.view(&engine, &params).total_items, 2);

        params.set_query("alp");
        assert!(cache.is_stale(&engine, &params));
        let view = cache.view(&engine, &params);
        assert_eq!(view.items, vec!["alpha".to_string()]);
    }
}
