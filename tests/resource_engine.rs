//! Resource engine driven by real HTTP calls against the mock API, plus
//! property tests over manual transitions.

mod common;

use common::{admin_session, test_config, users_api, users_body, user_json, MockApi, MockResponse};
use docdesk::api::{ApiError, GENERIC_FAILURE_MESSAGE};
use docdesk::model::User;
use docdesk::resource::{LoadOutcome, Phase, ResourceEngine};
use proptest::prelude::*;

fn one_user(name: &str) -> String {
    users_body(&[user_json("u1", name, "u1@example.com", "USER_ROLE", true)])
}

#[tokio::test]
async fn overlapping_loads_keep_the_newest_result() {
    let mock = MockApi::start().await;
    let config = test_config(&mock.base_url());
    let api = users_api(&config, &admin_session());
    let engine: ResourceEngine<Vec<User>> = ResourceEngine::new("users");

    // A answers late, B answers at once.
    mock.enqueue_response(MockResponse::json(&one_user("A")).with_delay(300))
        .await;
    mock.enqueue_response(MockResponse::json(&one_user("B"))).await;

    let api_a = api.clone();
    let load_a = engine.load(async move { api_a.list().await });
    // Let A reach the server first so it takes the delayed response.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    let api_b = api.clone();
    let load_b = engine.load(async move { api_b.list().await });

    assert_eq!(load_b.settled().await, LoadOutcome::Applied);
    assert_eq!(load_a.settled().await, LoadOutcome::Superseded);

    let state = engine.snapshot();
    let users = state.data.expect("data from B");
    assert_eq!(users[0].name, "B");
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn failure_without_message_uses_generic_text() {
    let mock = MockApi::start().await;
    let config = test_config(&mock.base_url());
    let api = users_api(&config, &admin_session());
    let engine: ResourceEngine<Vec<User>> = ResourceEngine::new("users");

    mock.enqueue_response(MockResponse::raw(500, "<html>Bad gateway</html>"))
        .await;
    let handle = engine.load(async move { api.list().await });
    handle.settled().await;

    let state = engine.snapshot();
    assert_eq!(state.phase(), Phase::Failed);
    assert!(state.data.is_none());
    let err = state.error.expect("error");
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn application_message_is_kept_verbatim() {
    let mock = MockApi::start().await;
    let config = test_config(&mock.base_url());
    let api = users_api(&config, &admin_session());
    let engine: ResourceEngine<Vec<User>> = ResourceEngine::new("users");

    mock.enqueue_response(MockResponse::failure(401, "Token no válido"))
        .await;
    engine.load(async move { api.list().await }).settled().await;

    assert_eq!(
        engine.error().map(|e| e.message_or("fallback")),
        Some("Token no válido".to_string())
    );
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Bind and drop to get a port nothing listens on.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let config = test_config(&format!("http://{}", addr));
    let api = users_api(&config, &admin_session());
    let engine: ResourceEngine<Vec<User>> = ResourceEngine::new("users");

    engine.load(async move { api.list().await }).settled().await;

    let err = engine.error().expect("error");
    assert_eq!(err.kind(), "transport");
    assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn reload_clears_previous_data_while_loading() {
    let mock = MockApi::start().await;
    let config = test_config(&mock.base_url());
    let api = users_api(&config, &admin_session());
    let engine: ResourceEngine<Vec<User>> = ResourceEngine::new("users");

    mock.enqueue_response(MockResponse::json(&one_user("first"))).await;
    mock.enqueue_response(MockResponse::json(&one_user("second")).with_delay(200))
        .await;

    let first_api = api.clone();
    engine.load(async move { first_api.list().await }).settled().await;
    assert_eq!(engine.snapshot().phase(), Phase::Ready);

    let mut changes = engine.subscribe();
    let handle = engine.load(async move { api.list().await });
    let state = engine.snapshot();
    assert_eq!(state.phase(), Phase::Loading);
    assert!(state.data.is_none());

    changes.changed().await.unwrap();
    handle.settled().await;
    assert_eq!(engine.snapshot().data.unwrap()[0].name, "second");
}

// ===== Properties =====

#[derive(Debug, Clone)]
enum Op {
    SetData(u8),
    SetLoading(bool),
    SetError,
    Fail,
    Reset,
    Update,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::SetData),
        any::<bool>().prop_map(Op::SetLoading),
        Just(Op::SetError),
        Just(Op::Fail),
        Just(Op::Reset),
        Just(Op::Update),
    ]
}

fn apply(engine: &ResourceEngine<u8>, op: &Op) {
    match op {
        Op::SetData(v) => engine.set_data(*v),
        Op::SetLoading(flag) => engine.set_loading(*flag),
        Op::SetError => engine.set_error(ApiError::precondition("no user")),
        Op::Fail => engine.fail(ApiError::precondition("refused")),
        Op::Reset => engine.reset(),
        Op::Update => {
            engine.update_data(|v| *v = v.wrapping_add(1));
        }
    }
}

proptest! {
    #[test]
    fn loading_never_coexists_with_error(ops in prop::collection::vec(arb_op(), 0..40)) {
        let engine: ResourceEngine<u8> = ResourceEngine::new("prop");
        for op in &ops {
            apply(&engine, op);
            let state = engine.snapshot();
            prop_assert!(!(state.loading && state.error.is_some()), "after {:?}", op);
        }
    }

    #[test]
    fn reset_is_idempotent(ops in prop::collection::vec(arb_op(), 0..20)) {
        let engine: ResourceEngine<u8> = ResourceEngine::new("prop");
        for op in &ops {
            apply(&engine, op);
        }
        engine.reset();
        let once = engine.snapshot();
        engine.reset();
        prop_assert_eq!(&once, &engine.snapshot());
        prop_assert!(once.is_initial());
    }

    #[test]
    fn every_change_bumps_the_revision(ops in prop::collection::vec(arb_op(), 1..20)) {
        let engine: ResourceEngine<u8> = ResourceEngine::new("prop");
        let mut last = engine.revision();
        for op in &ops {
            let had_data = engine.snapshot().data.is_some();
            apply(&engine, op);
            let now = engine.revision();
            match op {
                Op::Update if !had_data => prop_assert_eq!(now, last),
                _ => prop_assert!(now > last),
            }
            last = now;
        }
    }
}
