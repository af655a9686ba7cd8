use serde::{Deserialize, Serialize};

use super::user::User;

/// Login body.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Self-registration body; the backend assigns the default role.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response of the login and register endpoints.
///
/// The backend names the account either `usuario` or `user`, and may omit
/// either part on malformed responses; the session store rejects those.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default, alias = "usuario")]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
}
