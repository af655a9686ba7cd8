//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use std::sync::Arc;

use docdesk::api::{ApiClient, DocumentsApi, UploadsApi, UsersApi};
use docdesk::config::{ApiConfig, Config};
use docdesk::model::{AuthResponse, Role, User};
use docdesk::session::SessionStore;

pub use mock_api::{CapturedRequest, MockApi, MockResponse};

pub const TOKEN: &str = "test-token";

/// Config pointing at `base_url`, with short timeouts and no persistence.
pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api = ApiConfig {
        base_url: base_url.to_string(),
        public_base_url: "http://files.test".to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    };
    config.session.persist = false;
    config
}

pub fn user(uid: &str, name: &str, email: &str, role: Role, active: bool) -> User {
    User {
        uid: uid.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        curp: None,
        phone: None,
        active,
    }
}

/// Session logged in as `user` with [`TOKEN`].
pub fn session_for(user: User) -> SessionStore {
    let session = SessionStore::in_memory();
    session
        .establish(AuthResponse {
            ok: true,
            user: Some(user),
            token: Some(TOKEN.to_string()),
        })
        .expect("valid auth response");
    session
}

pub fn admin_session() -> SessionStore {
    session_for(user("admin-1", "Admin", "admin@example.com", Role::Admin, true))
}

pub fn client(config: &Config, session: &SessionStore) -> ApiClient {
    ApiClient::new(&config.api, Arc::new(session.clone())).expect("client builds")
}

pub fn documents_api(config: &Config, session: &SessionStore) -> DocumentsApi {
    DocumentsApi::new(client(config, session))
}

pub fn users_api(config: &Config, session: &SessionStore) -> UsersApi {
    UsersApi::new(client(config, session))
}

pub fn uploads_api(config: &Config, session: &SessionStore) -> UploadsApi {
    UploadsApi::new(client(config, session))
}

pub fn user_json(uid: &str, name: &str, email: &str, role: &str, active: bool) -> serde_json::Value {
    serde_json::json!({
        "uid": uid,
        "nombre": name,
        "email": email,
        "role": role,
        "estado": active,
    })
}

/// Document owned by a populated user.
pub fn document_json(id: &str, name: &str, owner: serde_json::Value, created_at: &str) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "nombre": name,
        "archivo": format!("{}.pdf", id),
        "rutaPublica": format!("/uploads/{}.pdf", id),
        "ext": "pdf",
        "mime": "application/pdf",
        "size": 1024,
        "usuario": owner,
        "createdAt": created_at,
    })
}

pub fn documents_body(docs: &[serde_json::Value]) -> String {
    serde_json::json!({ "ok": true, "documentos": docs }).to_string()
}

pub fn users_body(users: &[serde_json::Value]) -> String {
    serde_json::json!({ "ok": true, "usuarios": users }).to_string()
}

pub fn user_body(user: serde_json::Value) -> String {
    serde_json::json!({ "ok": true, "usuario": user }).to_string()
}
