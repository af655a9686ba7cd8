use crate::api::ApiError;
use crate::mvi::UiState;

/// Coarse phase of a [`RequestState`], for hosts that render by phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Never loaded (or reset).
    Idle,
    Loading,
    /// Settled with data.
    Ready,
    /// Settled with an error.
    Failed,
}

/// Tri-state snapshot of one asynchronous resource.
///
/// `loading` and `error` are never set at the same time.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T, E = ApiError> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<E>,
}

impl<T, E> Default for RequestState<T, E> {
    fn default() -> Self {
        Self::initial()
    }
}

impl<T, E> RequestState<T, E> {
    pub fn initial() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }

    pub(crate) fn loading() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    pub(crate) fn settled(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self {
                data: Some(data),
                loading: false,
                error: None,
            },
            Err(error) => Self {
                data: None,
                loading: false,
                error: Some(error),
            },
        }
    }

    pub fn is_initial(&self) -> bool {
        self.data.is_none() && !self.loading && self.error.is_none()
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.data.is_some() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }
}

impl<T, E> UiState for RequestState<T, E>
where
    T: Clone + PartialEq + Send + 'static,
    E: Clone + PartialEq + Send + 'static,
{
}
