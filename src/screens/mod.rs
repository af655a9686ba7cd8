//! Screen controllers.
//!
//! Each list screen composes a [`ResourceEngine`](crate::resource::ResourceEngine)
//! with [`FilterParams`](crate::view::FilterParams), a
//! [`ViewCache`](crate::view::ViewCache), per-item [`PendingActions`] and a
//! [`NoticeBoard`]. Rendering is left to the host.

mod documents_admin;
mod edit_user;
mod form;
mod list;
mod login;
mod my_documents;
mod notice;
mod pending;
mod profile;
mod users;

pub use documents_admin::DocumentsAdminScreen;
pub use edit_user::{
    EditTarget, EditUserDialog, EditUserIntent, EditUserOutcome, EditUserReducer, EditUserState,
    UserDraft,
};
pub use form::{is_valid_email, FormError, PasswordStrength, MIN_PASSWORD_LEN};
pub use list::ListScreen;
pub use login::LoginScreen;
pub use my_documents::MyDocumentsScreen;
pub use notice::{Notice, NoticeBoard, NoticeKind};
pub use pending::{ActionOutcome, PendingActions, PendingGuard};
pub use profile::{PasswordForm, ProfileForm, ProfileScreen};
pub use users::{UploadPanel, UsersScreen, ROLE_SELECTOR, STATUS_SELECTOR};
