//! The engine that owns a [`RequestState`] and drives it from async calls.
//!
//! Every `load` takes a ticket from a monotonically increasing counter. When
//! a call settles, its result is applied only if no newer load was issued
//! (and no reset happened) in the meantime, so a slow stale response never
//! overwrites a fresh one regardless of arrival order.

use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::ApiError;

use super::state::RequestState;

/// Message of the failure a panicking call settles to.
pub const CALL_ABORTED: &str = "request aborted unexpectedly";

/// What happened to a settled load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result was written to the state.
    Applied,
    /// A newer load or a reset was issued first; the result was dropped.
    Superseded,
    /// The engine's task was cancelled before settling, e.g. by runtime
    /// shutdown.
    Aborted,
}

/// Handle to an issued load.
///
/// Dropping it does not cancel the call; the engine applies the result on
/// its own. Awaiting [`LoadHandle::settled`] is only needed when the caller
/// wants to know the outcome.
#[derive(Debug)]
pub struct LoadHandle {
    ticket: u64,
    task: JoinHandle<LoadOutcome>,
}

impl LoadHandle {
    /// Issuance ticket of this load.
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Wait for the call to settle.
    pub async fn settled(self) -> LoadOutcome {
        self.task.await.unwrap_or(LoadOutcome::Aborted)
    }
}

struct EngineInner<T, E> {
    state: RequestState<T, E>,
    /// Ticket of the most recently issued load; zero before the first.
    latest_ticket: u64,
    /// Bumped on every observable state change.
    revision: u64,
}

/// Observable tri-state wrapper around one remote resource.
///
/// Cloning is cheap and yields a handle to the same state, which is how
/// spawned calls report back. All mutation goes through the methods below.
pub struct ResourceEngine<T, E = ApiError> {
    name: &'static str,
    inner: Arc<Mutex<EngineInner<T, E>>>,
    changes: Arc<watch::Sender<u64>>,
}

impl<T, E> Clone for ResourceEngine<T, E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            inner: Arc::clone(&self.inner),
            changes: Arc::clone(&self.changes),
        }
    }
}

impl<T, E> ResourceEngine<T, E> {
    /// Create an engine in the initial state. `name` only labels log events.
    pub fn new(name: &'static str) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            name,
            inner: Arc::new(Mutex::new(EngineInner {
                state: RequestState::initial(),
                latest_ticket: 0,
                revision: 0,
            })),
            changes: Arc::new(changes),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Revision counter, incremented on every state change.
    pub fn revision(&self) -> u64 {
        self.inner.lock().revision
    }

    /// Receiver that observes the revision after every state change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.lock().state.loading
    }

    /// Run `f` against the current payload and the revision it belongs to.
    ///
    /// Both are read under the same lock, which is held while `f` runs: `f`
    /// must not call back into this engine.
    pub(crate) fn with_data_at_revision<R>(&self, f: impl FnOnce(Option<&T>, u64) -> R) -> R {
        let inner = self.inner.lock();
        f(inner.state.data.as_ref(), inner.revision)
    }

    pub fn has_data(&self) -> bool {
        self.inner.lock().state.data.is_some()
    }

    /// Replace the payload, leaving `loading` and `error` untouched.
    ///
    /// Used for optimistic local edits after a remote write succeeded.
    pub fn set_data(&self, value: T) {
        self.mutate(|state| state.data = Some(value));
    }

    /// Patch the payload in place. Does nothing when there is no payload.
    ///
    /// Returns whether a payload was present. The lock is held while `f`
    /// runs, so `f` must only touch the payload it is given; read anything
    /// else from the engine before or after the call.
    pub fn update_data(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut inner = self.inner.lock();
        let Some(data) = inner.state.data.as_mut() else {
            return false;
        };
        f(data);
        self.bump(&mut inner);
        true
    }

    /// Override the loading flag. Raising it clears any error.
    pub fn set_loading(&self, flag: bool) {
        self.mutate(|state| {
            state.loading = flag;
            if flag {
                state.error = None;
            }
        });
    }

    /// Report a failure without making a call. Clears the loading flag.
    pub fn set_error(&self, detail: E) {
        self.mutate(|state| {
            state.loading = false;
            state.error = Some(detail);
        });
    }

    /// Settle to a failure without making a call, as when a local guard
    /// refuses a load. Drops any in-flight result and the previous payload.
    pub fn fail(&self, detail: E) {
        let mut inner = self.inner.lock();
        inner.latest_ticket += 1;
        inner.state = RequestState::settled(Err(detail));
        self.bump(&mut inner);
        tracing::debug!(resource = self.name, "load refused");
    }

    /// Return to the initial state and drop any in-flight result.
    pub fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.latest_ticket += 1;
        inner.state = RequestState::initial();
        self.bump(&mut inner);
        tracing::debug!(resource = self.name, "resource reset");
    }

    fn mutate(&self, f: impl FnOnce(&mut RequestState<T, E>)) {
        let mut inner = self.inner.lock();
        f(&mut inner.state);
        self.bump(&mut inner);
    }

    fn bump(&self, inner: &mut EngineInner<T, E>) {
        inner.revision += 1;
        self.changes.send_replace(inner.revision);
    }

    fn settle(&self, ticket: u64, result: Result<T, E>) -> LoadOutcome {
        let mut inner = self.inner.lock();
        if ticket != inner.latest_ticket {
            tracing::debug!(
                resource = self.name,
                ticket,
                latest = inner.latest_ticket,
                "stale load result dropped"
            );
            return LoadOutcome::Superseded;
        }

        let failed = result.is_err();
        inner.state = RequestState::settled(result);
        self.bump(&mut inner);

        if failed {
            tracing::warn!(resource = self.name, ticket, "load failed");
        } else {
            tracing::debug!(resource = self.name, ticket, "load applied");
        }
        LoadOutcome::Applied
    }
}

impl<T, E> ResourceEngine<T, E>
where
    T: Send + 'static,
    E: From<ApiError> + Send + 'static,
{
    /// Start a load.
    ///
    /// The state switches to loading immediately (previous data is cleared)
    /// and `call` runs on the Tokio runtime; must be called from within one.
    /// A call that panics settles as a transport failure.
    pub fn load<F>(&self, call: F) -> LoadHandle
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let ticket = {
            let mut inner = self.inner.lock();
            inner.latest_ticket += 1;
            inner.state = RequestState::loading();
            self.bump(&mut inner);
            inner.latest_ticket
        };
        tracing::debug!(resource = self.name, ticket, "load issued");

        let engine = self.clone();
        let task = tokio::spawn(async move {
            let result = match tokio::spawn(call).await {
                Ok(result) => result,
                Err(err) => {
                    tracing::error!(resource = engine.name, ticket, error = %err, "load call aborted");
                    Err(E::from(ApiError::transport(CALL_ABORTED)))
                }
            };
            engine.settle(ticket, result)
        });

        LoadHandle { ticket, task }
    }
}

impl<T: Clone, E: Clone> ResourceEngine<T, E> {
    /// Clone of the current state.
    pub fn snapshot(&self) -> RequestState<T, E> {
        self.inner.lock().state.clone()
    }

    pub fn data(&self) -> Option<T> {
        self.inner.lock().state.data.clone()
    }

    pub fn error(&self) -> Option<E> {
        self.inner.lock().state.error.clone()
    }
}

impl<T, E> Default for ResourceEngine<T, E> {
    fn default() -> Self {
        Self::new("resource")
    }
}
