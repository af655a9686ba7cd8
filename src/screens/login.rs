use crate::api::{ApiError, AuthApi};
use crate::model::{AuthResponse, Credentials, Registration, User};
use crate::resource::{LoadOutcome, ResourceEngine};
use crate::session::SessionStore;

use super::form::{required, FormError};

const LOGIN_FAILED: &str = "Invalid credentials";
const REGISTER_FAILED: &str = "Could not complete the registration";

/// Login and self-registration.
///
/// A successful response establishes the session before the engine
/// reports success, so the user is logged in once the call settles.
pub struct LoginScreen {
    auth: AuthApi,
    session: SessionStore,
    request: ResourceEngine<User>,
}

impl LoginScreen {
    pub fn new(auth: AuthApi, session: SessionStore) -> Self {
        Self {
            auth,
            session,
            request: ResourceEngine::new("login"),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.request.is_loading()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoadOutcome, FormError> {
        let [email, password] = self.check(required([email, password]))?;
        let credentials = Credentials { email, password };
        let auth = self.auth.clone();
        let session = self.session.clone();

        Ok(self
            .request
            .load(async move { establish(&session, auth.login(&credentials).await?) })
            .settled()
            .await)
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<LoadOutcome, FormError> {
        let [name, email, password] = self.check(required([name, email, password]))?;
        let registration = Registration {
            name,
            email,
            password,
        };
        let auth = self.auth.clone();
        let session = self.session.clone();

        Ok(self
            .request
            .load(async move { establish(&session, auth.register(&registration).await?) })
            .settled()
            .await)
    }

    /// Message for the last failed attempt.
    pub fn error_message(&self, registering: bool) -> Option<String> {
        let fallback = if registering {
            REGISTER_FAILED
        } else {
            LOGIN_FAILED
        };
        self.request.error().map(|err| err.message_or(fallback))
    }

    fn check<V>(&self, result: Result<V, FormError>) -> Result<V, FormError> {
        if let Err(err) = &result {
            self.request.fail(err.clone().into());
        }
        result
    }
}

fn establish(session: &SessionStore, response: AuthResponse) -> Result<User, ApiError> {
    session.establish(response).map_err(|e| ApiError::Application {
        status: None,
        message: Some(e.to_string()),
    })
}
