//! Per-item action markers.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::ApiError;

/// Result of a per-item remote action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome<R = ()> {
    Completed(R),
    /// The call failed; a notice was posted and the list left as it was.
    Failed(ApiError),
    /// Another action on the same item was still pending. Nothing was sent.
    Rejected,
}

impl<R> ActionOutcome<R> {
    pub fn is_completed(&self) -> bool {
        matches!(self, ActionOutcome::Completed(_))
    }

    pub(crate) fn map<S>(self, f: impl FnOnce(R) -> S) -> ActionOutcome<S> {
        match self {
            ActionOutcome::Completed(value) => ActionOutcome::Completed(f(value)),
            ActionOutcome::Failed(err) => ActionOutcome::Failed(err),
            ActionOutcome::Rejected => ActionOutcome::Rejected,
        }
    }
}

/// Ids of items with an action in flight.
///
/// Each item moves `idle -> pending -> idle`. [`PendingActions::begin`]
/// refuses an id that is already pending; the returned guard puts the item
/// back to idle when dropped, whichever way the action ended.
#[derive(Debug, Clone, Default)]
pub struct PendingActions {
    ids: Arc<Mutex<HashSet<String>>>,
}

impl PendingActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` pending, or `None` if it already is.
    pub fn begin(&self, id: &str) -> Option<PendingGuard> {
        if !self.ids.lock().insert(id.to_string()) {
            return None;
        }
        Some(PendingGuard {
            ids: Arc::clone(&self.ids),
            id: id.to_string(),
        })
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.ids.lock().contains(id)
    }

    pub fn is_idle(&self) -> bool {
        self.ids.lock().is_empty()
    }
}

/// Keeps one item pending while alive.
#[must_use = "the item goes back to idle as soon as the guard is dropped"]
#[derive(Debug)]
pub struct PendingGuard {
    ids: Arc<Mutex<HashSet<String>>>,
    id: String,
}

impl PendingGuard {
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.ids.lock().remove(&self.id);
    }
}
