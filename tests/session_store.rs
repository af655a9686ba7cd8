//! Session persistence across store instances.

use docdesk::model::{AuthResponse, Role, User};
use docdesk::session::{Session, SessionStore};
use tempfile::TempDir;

fn login(store: &SessionStore, role: Role) {
    store
        .establish(AuthResponse {
            ok: true,
            user: Some(User {
                uid: "u1".into(),
                name: "Ana".into(),
                email: "ana@example.com".into(),
                role,
                curp: Some("CURP123".into()),
                phone: None,
                active: true,
            }),
            token: Some("jwt-1".into()),
        })
        .unwrap();
}

#[test]
fn session_survives_restart() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("nested").join("session.json");

    let store = SessionStore::persistent(file.clone());
    login(&store, Role::Admin);
    assert!(file.exists());

    let restored = SessionStore::persistent(file);
    assert!(restored.is_logged_in());
    assert!(restored.is_admin());
    assert_eq!(restored.current_token().unwrap().expose(), "jwt-1");
    assert_eq!(restored.user().unwrap().curp.as_deref(), Some("CURP123"));
}

#[test]
fn logout_removes_the_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("session.json");

    let store = SessionStore::persistent(file.clone());
    login(&store, Role::User);
    store.logout();

    assert!(!file.exists());
    assert!(!SessionStore::persistent(file).is_logged_in());
}

#[test]
fn corrupt_file_is_discarded() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("session.json");
    std::fs::write(&file, r#"{"user": {"uid": "u1"}, "tok"#).unwrap();

    let store = SessionStore::persistent(file.clone());
    assert!(!store.is_logged_in());
    assert!(!file.exists());
}

#[test]
fn blank_token_in_file_is_discarded() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("session.json");
    std::fs::write(
        &file,
        r#"{"user": {"uid": "u1", "nombre": "Ana", "email": "a@x.io"}, "token": "  "}"#,
    )
    .unwrap();

    assert!(!SessionStore::persistent(file.clone()).is_logged_in());
    assert!(!file.exists());
}

#[test]
fn set_user_is_written_through() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("session.json");

    let store = SessionStore::persistent(file.clone());
    login(&store, Role::User);
    let mut user = store.user().unwrap();
    user.name = "Ana María".into();
    store.set_user(user).unwrap();

    assert_eq!(
        SessionStore::persistent(file).user().unwrap().name,
        "Ana María"
    );
}

#[test]
fn token_is_masked_in_debug_output() {
    let store = SessionStore::in_memory();
    login(&store, Role::User);
    let token = store.current_token().unwrap();
    assert!(!format!("{:?}", token).contains("jwt-1"));
    assert!(!format!("{}", token).contains("jwt-1"));
}
