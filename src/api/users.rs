use serde::{Deserialize, Serialize};

use crate::model::{NewUser, User, UserUpdate};

use super::client::ApiClient;
use super::error::ApiError;

#[derive(Deserialize)]
struct UserList {
    #[serde(default, rename = "usuarios")]
    users: Vec<User>,
}

#[derive(Deserialize)]
struct UserEnvelope {
    #[serde(rename = "usuario", alias = "user")]
    user: User,
}

#[derive(Deserialize)]
struct MessageResponse {
    #[serde(default)]
    msg: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordChange<'a> {
    old_password: &'a str,
    new_password: &'a str,
}

/// User administration endpoints.
#[derive(Clone)]
pub struct UsersApi {
    client: ApiClient,
}

impl UsersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        let list: UserList = self.client.get("/usuarios").await?;
        Ok(list.users)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self.client.get(&format!("/usuarios/{}", id)).await?;
        Ok(envelope.user)
    }

    pub async fn create(&self, user: &NewUser) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self.client.post("/usuarios", user).await?;
        Ok(envelope.user)
    }

    /// Partial update; only the `Some` fields are sent.
    pub async fn update(&self, id: &str, update: &UserUpdate) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self
            .client
            .put(&format!("/usuarios/{}", id), update)
            .await?;
        Ok(envelope.user)
    }

    /// Returns the server's confirmation message.
    pub async fn change_password(
        &self,
        id: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<String, ApiError> {
        let body = PasswordChange {
            old_password,
            new_password,
        };
        let response: MessageResponse = self
            .client
            .put(&format!("/usuarios/change-password/{}", id), &body)
            .await?;
        Ok(response.msg)
    }

    pub async fn delete(&self, id: &str) -> Result<String, ApiError> {
        let response: MessageResponse = self.client.delete(&format!("/usuarios/{}", id)).await?;
        Ok(response.msg)
    }

    /// Flip the active flag; returns the updated user.
    pub async fn toggle_status(&self, id: &str) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self
            .client
            .patch(&format!("/usuarios/{}/toggle-status", id), &serde_json::json!({}))
            .await?;
        Ok(envelope.user)
    }
}
