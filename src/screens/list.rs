//! Shared plumbing of the list screens.

use std::future::Future;

use crate::api::ApiError;
use crate::config::ViewConfig;
use crate::mvi::Reducer;
use crate::resource::{LoadHandle, RequestState, ResourceEngine};
use crate::view::{FilterIntent, FilterParams, FilterReducer, PaginatedView, ViewCache, ViewSpec};

use super::notice::NoticeBoard;
use super::pending::{ActionOutcome, PendingActions};

/// One remote list with its filters, derived view, pending markers and
/// notices.
pub struct ListScreen<T> {
    engine: ResourceEngine<Vec<T>>,
    params: FilterParams,
    cache: ViewCache<T>,
    pending: PendingActions,
    notices: NoticeBoard,
}

impl<T: Clone + Send + 'static> ListScreen<T> {
    pub fn new(name: &'static str, spec: ViewSpec<T>, config: &ViewConfig) -> Self {
        Self {
            engine: ResourceEngine::new(name),
            params: FilterParams::with_page_size(config.page_size),
            cache: ViewCache::new(spec),
            pending: PendingActions::new(),
            notices: NoticeBoard::new(config.notice_ttl()),
        }
    }

    pub fn engine(&self) -> &ResourceEngine<Vec<T>> {
        &self.engine
    }

    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    pub fn pending(&self) -> &PendingActions {
        &self.pending
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn state(&self) -> RequestState<Vec<T>> {
        self.engine.snapshot()
    }

    /// List-level failure message, if the last load failed.
    pub fn error_message(&self) -> Option<String> {
        self.engine.error().map(|err| err.user_message())
    }

    pub fn dispatch(&mut self, intent: FilterIntent) {
        FilterReducer::apply(&mut self.params, intent);
    }

    /// Current page of the filtered list; recomputed only when needed.
    pub fn view(&mut self) -> &PaginatedView<T> {
        self.cache.view(&self.engine, &self.params)
    }

    pub(crate) fn load<F>(&self, call: F) -> LoadHandle
    where
        F: Future<Output = Result<Vec<T>, ApiError>> + Send + 'static,
    {
        self.engine.load(call)
    }

    /// Run a remote action on item `id` under its pending marker.
    ///
    /// Failures post an error notice (`fallback` when the server sent no
    /// message) and leave the list untouched.
    pub(crate) async fn run_action<R, F>(&self, id: &str, fallback: &str, call: F) -> ActionOutcome<R>
    where
        F: Future<Output = Result<R, ApiError>>,
    {
        let Some(_guard) = self.pending.begin(id) else {
            tracing::debug!(resource = self.engine.name(), id, "action already pending");
            return ActionOutcome::Rejected;
        };

        match call.await {
            Ok(value) => ActionOutcome::Completed(value),
            Err(err) => {
                tracing::warn!(
                    resource = self.engine.name(),
                    id,
                    kind = err.kind(),
                    error = %err,
                    "action failed"
                );
                self.notices.error(err.message_or(fallback));
                ActionOutcome::Failed(err)
            }
        }
    }
}
