//! Reducer primitives shared by the screen controllers.
//!
//! Filter parameters and the edit-user dialog are plain values that change
//! only through a [`Reducer`]; screens keep the value and call
//! [`Reducer::apply`] with each [`Intent`].

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
