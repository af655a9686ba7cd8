//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Pure `(State, Intent) -> State` transition.
///
/// Screens never edit a reducer-owned state directly; they hand every edit
/// to [`Reducer::apply`].
pub trait Reducer {
    /// The state this reducer owns, e.g. `FilterParams`.
    type State: UiState;

    /// The edits it accepts.
    type Intent: Intent;

    /// Produce the next state from `state` and one `intent`.
    ///
    /// No side effects: remote calls are issued by the screen, which feeds
    /// their outcome back as another intent.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Reduce `intent` into `state` in place.
    fn apply(state: &mut Self::State, intent: Self::Intent) {
        let current = std::mem::take(state);
        *state = Self::reduce(current, intent);
    }
}
