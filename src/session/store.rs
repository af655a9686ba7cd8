//! Session credential storage with optional file persistence.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SessionConfig;
use crate::model::{AuthResponse, Role, User};

use super::secure::SecureString;
use super::Session;

/// Errors raised while changing the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Authentication response did not include the account")]
    MissingUser,

    #[error("Authentication response did not include a token")]
    MissingToken,

    #[error("No user is logged in")]
    NotLoggedIn,
}

#[derive(Default)]
struct SessionInner {
    user: Option<User>,
    token: Option<SecureString>,
}

/// On-disk shape of a saved session.
#[derive(Serialize, Deserialize)]
struct SavedSession {
    user: User,
    token: String,
}

/// Thread-safe holder of the logged-in user and token.
///
/// Cloning yields a handle to the same session. When a file is configured,
/// every change is written through and the session is restored on start.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<SessionInner>>,
    file: Option<PathBuf>,
}

impl SessionStore {
    /// A session that lives only in memory.
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionInner::default())),
            file: None,
        }
    }

    /// A session persisted to `file`, restored from it if present.
    ///
    /// An unreadable or malformed file is removed and the session starts
    /// logged out.
    pub fn persistent(file: PathBuf) -> Self {
        let inner = restore(&file);
        Self {
            inner: Arc::new(RwLock::new(inner)),
            file: Some(file),
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        match config.session_file() {
            Some(file) => Self::persistent(file),
            None => Self::in_memory(),
        }
    }

    /// Start a session from a login or register response.
    ///
    /// Rejects responses without an account or with a blank token; the
    /// current session is left unchanged in that case.
    pub fn establish(&self, response: AuthResponse) -> Result<User, SessionError> {
        let user = response.user.ok_or(SessionError::MissingUser)?;
        let token = response
            .token
            .map(SecureString::new)
            .filter(|token| !token.is_blank())
            .ok_or(SessionError::MissingToken)?;

        let mut inner = self.inner.write();
        inner.user = Some(user.clone());
        inner.token = Some(token);
        self.save(&inner);

        tracing::info!(user = %user.uid, role = user.role.as_str(), "session established");
        Ok(user)
    }

    /// Replace the account of the current session, keeping the token.
    pub fn set_user(&self, user: User) -> Result<(), SessionError> {
        let mut inner = self.inner.write();
        if inner.token.is_none() {
            return Err(SessionError::NotLoggedIn);
        }
        inner.user = Some(user);
        self.save(&inner);
        Ok(())
    }

    pub fn logout(&self) {
        let mut inner = self.inner.write();
        inner.user = None;
        inner.token = None;
        self.save(&inner);
        tracing::info!("session closed");
    }

    pub fn user(&self) -> Option<User> {
        self.inner.read().user.clone()
    }

    /// Role of the current user; `User` when logged out.
    pub fn role(&self) -> Role {
        self.inner
            .read()
            .user
            .as_ref()
            .map(|user| user.role)
            .unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }

    pub fn is_logged_in(&self) -> bool {
        let inner = self.inner.read();
        inner.user.is_some() && inner.token.is_some()
    }

    /// Whether a logged-in user holds one of `roles`.
    pub fn can_access(&self, roles: &[Role]) -> bool {
        self.is_logged_in() && roles.contains(&self.role())
    }

    fn save(&self, inner: &SessionInner) {
        let Some(file) = &self.file else {
            return;
        };

        let result = match (&inner.user, &inner.token) {
            (Some(user), Some(token)) => write_saved(
                file,
                &SavedSession {
                    user: user.clone(),
                    token: token.expose().to_string(),
                },
            ),
            _ => remove_saved(file),
        };

        if let Err(e) = result {
            tracing::warn!(path = %file.display(), error = %e, "failed to save session");
        }
    }
}

impl Session for SessionStore {
    fn current_user_id(&self) -> Option<String> {
        self.inner.read().user.as_ref().map(|user| user.uid.clone())
    }

    fn current_token(&self) -> Option<SecureString> {
        self.inner.read().token.clone()
    }
}

fn write_saved(file: &Path, saved: &SavedSession) -> std::io::Result<()> {
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string(saved).map_err(std::io::Error::other)?;
    fs::write(file, json)
}

fn remove_saved(file: &Path) -> std::io::Result<()> {
    match fs::remove_file(file) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

fn restore(file: &Path) -> SessionInner {
    let content = match fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return SessionInner::default(),
        Err(e) => {
            tracing::warn!(path = %file.display(), error = %e, "failed to read session");
            return SessionInner::default();
        }
    };

    match serde_json::from_str::<SavedSession>(&content) {
        Ok(saved) if !saved.token.trim().is_empty() => SessionInner {
            user: Some(saved.user),
            token: Some(SecureString::new(saved.token)),
        },
        _ => {
            tracing::warn!(path = %file.display(), "discarding corrupt session file");
            if let Err(e) = remove_saved(file) {
                tracing::warn!(path = %file.display(), error = %e, "failed to remove session");
            }
            SessionInner::default()
        }
    }
}
