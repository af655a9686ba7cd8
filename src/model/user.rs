use serde::{Deserialize, Serialize};

/// Authorization role of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMIN_ROLE")]
    Admin,
    #[default]
    #[serde(rename = "USER_ROLE")]
    User,
}

impl Role {
    /// Wire representation, also used as the `role` selector value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN_ROLE",
            Role::User => "USER_ROLE",
        }
    }

    /// The other role; used by the one-click role switch.
    pub fn toggled(&self) -> Role {
        match self {
            Role::Admin => Role::User,
            Role::User => Role::Admin,
        }
    }
}

fn default_active() -> bool {
    true
}

/// An account as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub uid: String,
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curp: Option<String>,
    #[serde(rename = "telefono", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Whether the account is enabled.
    #[serde(rename = "estado", default = "default_active")]
    pub active: bool,
}

impl User {
    /// Value of the `status` selector for this account.
    pub fn status_label(&self) -> &'static str {
        if self.active {
            "active"
        } else {
            "inactive"
        }
    }
}

/// Partial update body for `PUT /usuarios/:id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Body for `POST /usuarios`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewUser {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_maps_backend_field_names() {
        let json = r#"{
            "uid": "u1",
            "nombre": "José Pérez",
            "email": "jose@example.com",
            "role": "ADMIN_ROLE",
            "telefono": "555",
            "estado": false
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "José Pérez");
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.phone.as_deref(), Some("555"));
        assert!(!user.active);
        assert_eq!(user.status_label(), "inactive");
    }

    #[test]
    fn missing_role_and_status_use_defaults() {
        let json = r#"{"_id": "u2", "nombre": "Ana", "email": "ana@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.uid, "u2");
        assert_eq!(user.role, Role::User);
        assert!(user.active);
    }

    #[test]
    fn update_only_serializes_present_fields() {
        let update = UserUpdate {
            role: Some(Role::Admin),
            ..UserUpdate::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, serde_json::json!({"role": "ADMIN_ROLE"}));
    }

    #[test]
    fn role_toggles() {
        assert_eq!(Role::Admin.toggled(), Role::User);
        assert_eq!(Role::User.toggled(), Role::Admin);
    }
}
