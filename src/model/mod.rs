//! Records exchanged with the document-management API.
//!
//! Field names on the wire are the backend's; the Rust side uses English
//! names and maps them with serde renames.

mod auth;
mod document;
mod user;

pub use auth::{AuthResponse, Credentials, Registration};
pub use document::{Document, DocumentKind, Owner};
pub use user::{NewUser, Role, User, UserUpdate};
