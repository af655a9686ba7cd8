use crate::api::UsersApi;
use crate::model::{User, UserUpdate};
use crate::resource::{LoadOutcome, ResourceEngine};
use crate::session::{Session, SessionStore};

use super::form::{is_valid_email, required, FormError, MIN_PASSWORD_LEN};

const PROFILE_FAILED: &str = "Could not update the profile";
const PASSWORD_FAILED: &str = "Could not change the password";

/// Editable profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }

    fn validate(&self) -> Result<UserUpdate, FormError> {
        let [name, email] = required([self.name.as_str(), self.email.as_str()])?;
        if !is_valid_email(&email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(UserUpdate {
            name: Some(name),
            email: Some(email),
            ..UserUpdate::default()
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    /// `(old, new)` after trimming.
    fn validate(&self) -> Result<(String, String), FormError> {
        let [old, new, confirm] = required([
            self.old_password.as_str(),
            self.new_password.as_str(),
            self.confirm_password.as_str(),
        ])?;
        if new.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort);
        }
        if new != confirm {
            return Err(FormError::PasswordMismatch);
        }
        if old == new {
            return Err(FormError::PasswordUnchanged);
        }
        Ok((old, new))
    }
}

/// The logged-in user's own account: profile fields and password.
///
/// Each form saves through its own engine, so "saving" is the engine's
/// loading flag and validation failures show up as its error.
pub struct ProfileScreen {
    api: UsersApi,
    session: SessionStore,
    profile: ResourceEngine<User>,
    password: ResourceEngine<String>,
}

impl ProfileScreen {
    pub fn new(api: UsersApi, session: SessionStore) -> Self {
        Self {
            api,
            session,
            profile: ResourceEngine::new("profile"),
            password: ResourceEngine::new("password"),
        }
    }

    /// Form prefilled with the current account.
    pub fn profile_form(&self) -> ProfileForm {
        self.session
            .user()
            .map(|user| ProfileForm::from_user(&user))
            .unwrap_or_default()
    }

    pub fn is_saving_profile(&self) -> bool {
        self.profile.is_loading()
    }

    pub fn is_saving_password(&self) -> bool {
        self.password.is_loading()
    }

    /// Save the profile and refresh the session's copy of the user.
    pub async fn save_profile(&self, form: &ProfileForm) -> Result<LoadOutcome, FormError> {
        let prepared = self
            .session
            .current_user_id()
            .ok_or(FormError::NotLoggedIn)
            .and_then(|id| form.validate().map(|update| (id, update)));
        let (id, update) = match prepared {
            Ok(prepared) => prepared,
            Err(err) => {
                self.profile.fail(err.clone().into());
                return Err(err);
            }
        };

        let api = self.api.clone();
        let outcome = self
            .profile
            .load(async move { api.update(&id, &update).await })
            .settled()
            .await;

        if outcome == LoadOutcome::Applied {
            if let Some(user) = self.profile.data() {
                if let Err(e) = self.session.set_user(user) {
                    tracing::warn!(error = %e, "profile saved after logout");
                }
            }
        }
        Ok(outcome)
    }

    pub fn profile_message(&self) -> Option<String> {
        message(&self.profile, "Profile updated", PROFILE_FAILED)
    }

    pub async fn change_password(&self, form: &PasswordForm) -> Result<LoadOutcome, FormError> {
        let prepared = self
            .session
            .current_user_id()
            .ok_or(FormError::NotLoggedIn)
            .and_then(|id| form.validate().map(|(old, new)| (id, old, new)));
        let (id, old, new) = match prepared {
            Ok(prepared) => prepared,
            Err(err) => {
                self.password.fail(err.clone().into());
                return Err(err);
            }
        };

        let api = self.api.clone();
        Ok(self
            .password
            .load(async move { api.change_password(&id, &old, &new).await })
            .settled()
            .await)
    }

    pub fn password_message(&self) -> Option<String> {
        message(&self.password, "Password changed", PASSWORD_FAILED)
    }
}

fn message<T: Clone>(engine: &ResourceEngine<T>, success: &str, fallback: &str) -> Option<String> {
    match engine.error() {
        Some(err) => Some(err.message_or(fallback)),
        None => engine.has_data().then(|| success.to_string()),
    }
}
