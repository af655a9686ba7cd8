//! Base trait for intents.

/// Marker for edits a reducer accepts.
///
/// Intents cover:
/// - user edits (search text, month, selectors, page navigation, form input)
/// - settled remote writes (`SaveSucceeded`, `SaveFailed`)
///
/// They are moved into [`Reducer::reduce`](super::Reducer::reduce), so they
/// must own their data.
pub trait Intent: Send + 'static {}
