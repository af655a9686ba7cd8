//! In-process stand-in for the document-management API.
//!
//! Every request is recorded and answered with the next scripted response.
//! An empty script answers 500 so a missing `enqueue_response` shows up as
//! a failed call instead of a silent success.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{header, Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, Mutex};

const MAX_BODY: usize = 4 * 1024 * 1024;

/// A request as the server saw it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// One scripted answer.
#[derive(Debug, Clone)]
pub struct MockResponse {
    status: u16,
    content_type: &'static str,
    body: String,
    delay: Duration,
}

impl MockResponse {
    /// 200 with a JSON body.
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    /// The API's failure envelope, `{"ok": false, "msg": ...}`.
    pub fn failure(status: u16, msg: &str) -> Self {
        Self {
            status,
            ..Self::json(&serde_json::json!({ "ok": false, "msg": msg }).to_string())
        }
    }

    /// Non-JSON body, e.g. a gateway error page.
    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/html",
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }

    fn unscripted() -> Self {
        Self::failure(500, "no response queued")
    }
}

#[derive(Default)]
struct Script {
    pending: VecDeque<MockResponse>,
    seen: Vec<CapturedRequest>,
}

type Shared = Arc<Mutex<Script>>;

/// Running mock server; stops when dropped.
pub struct MockApi {
    base_url: String,
    script: Shared,
    stop: Option<oneshot::Sender<()>>,
}

impl MockApi {
    pub async fn start() -> Self {
        let script = Shared::default();
        let app = Router::new()
            .route("/{*path}", any(answer))
            .with_state(Arc::clone(&script));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock api");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));

        let (stop, stopped) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = stopped.await;
                })
                .await;
        });

        Self {
            base_url,
            script,
            stop: Some(stop),
        }
    }

    pub async fn enqueue_response(&self, response: MockResponse) {
        self.script.lock().await.pending.push_back(response);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.script.lock().await.seen.clone()
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}

async fn answer(State(script): State<Shared>, req: Request<Body>) -> Response<Body> {
    let (parts, body) = req.into_parts();
    let body = to_bytes(body, MAX_BODY).await.unwrap_or_default().to_vec();
    let headers = parts
        .headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();

    // Take the response in arrival order, before any scripted delay.
    let response = {
        let mut script = script.lock().await;
        script.seen.push(CapturedRequest {
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
            headers,
            body,
        });
        script
            .pending
            .pop_front()
            .unwrap_or_else(MockResponse::unscripted)
    };

    if !response.delay.is_zero() {
        tokio::time::sleep(response.delay).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(response.status).expect("valid status"))
        .header(header::CONTENT_TYPE, response.content_type)
        .body(Body::from(response.body))
        .expect("valid response")
}
