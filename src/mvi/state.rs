//! Base trait for reducer-owned state.

/// Marker for reducer-owned state.
///
/// - `Clone` and `PartialEq` let a host keep the previous value and skip
///   re-rendering when nothing changed.
/// - `Default` is the state a screen starts in, and what
///   [`Reducer::apply`](super::Reducer::apply) leaves behind while a
///   transition runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
