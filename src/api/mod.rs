//! HTTP access to the document-management API.
//!
//! [`ApiClient`] owns the `reqwest` client and turns every response into
//! `Result<T, ApiError>`; the endpoint wrappers only know paths and
//! envelopes. Their futures are the async calls handed to
//! [`ResourceEngine::load`](crate::resource::ResourceEngine::load).

mod auth;
mod client;
mod documents;
mod error;
mod uploads;
mod users;

pub use auth::AuthApi;
pub use client::ApiClient;
pub use documents::{DocumentChanges, DocumentsApi};
pub use error::{ApiError, GENERIC_FAILURE_MESSAGE};
pub use uploads::{UploadFile, UploadReceipt, UploadsApi};
pub use users::UsersApi;
