//! Authenticated identity shared by every screen.
//!
//! Screens only read it through the [`Session`] trait: the user id
//! parameterizes per-user loads and the token authorizes requests. The
//! login flow and the profile screen are the only writers.

mod secure;
mod store;

pub use secure::SecureString;
pub use store::{SessionError, SessionStore};

/// Read-only view of the current credential.
pub trait Session: Send + Sync {
    /// Id of the logged-in user, if any.
    fn current_user_id(&self) -> Option<String>;

    /// Bearer token of the logged-in user, if any.
    fn current_token(&self) -> Option<SecureString>;
}
