use serde::Deserialize;

use crate::model::{AuthResponse, Credentials, Registration, User};

use super::client::ApiClient;
use super::error::ApiError;

#[derive(Deserialize)]
struct MeResponse {
    #[serde(alias = "usuario")]
    user: User,
}

/// Login, self-registration and the current-account endpoint.
#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.client.post("/login/login", credentials).await
    }

    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError> {
        self.client.post("/login/register", registration).await
    }

    /// Account behind the current token.
    pub async fn me(&self) -> Result<User, ApiError> {
        let response: MeResponse = self.client.get("/api/auth/me").await?;
        Ok(response.user)
    }
}
