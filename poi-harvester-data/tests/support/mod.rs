//! Loopback `axum` servers for exercising the network adapters offline.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::IntoResponse,
};
use tokio::runtime::Runtime;

/// Request as seen by a [`CannedServer`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    /// Path and query, e.g. `/search?q=Berlin`.
    pub uri: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    /// Header value as text, empty when absent.
    pub fn header(&self, name: header::HeaderName) -> &str {
        self.headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
    }
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: &'static str,
    delay: Duration,
    seen: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Server answering every request with one canned JSON response.
///
/// The server runs on its own multi-threaded runtime so the blocking
/// adapters under test can drive their own runtime on the test thread.
pub struct CannedServer {
    /// Base URL, e.g. `http://127.0.0.1:41234`.
    pub url: String,
    seen: Arc<Mutex<Vec<RecordedRequest>>>,
    _runtime: Runtime,
}

impl CannedServer {
    /// Answer with `status` and `body`.
    pub fn respond(status: u16, body: &'static str) -> Self {
        Self::start(status, body, Duration::ZERO)
    }

    /// Hold every request for `delay` before answering with an empty list.
    pub fn stalled(delay: Duration) -> Self {
        Self::start(200, r#"{"elements": []}"#, delay)
    }

    fn start(status: u16, body: &'static str, delay: Duration) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = Canned {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body,
            delay,
            seen: Arc::clone(&seen),
        };
        let app = Router::new().fallback(answer).with_state(state);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("server runtime");
        let listener = runtime
            .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
            .expect("bind loopback listener");
        let url = format!("http://{}", listener.local_addr().expect("local address"));
        runtime.spawn(async move { axum::serve(listener, app).await });
        Self {
            url,
            seen,
            _runtime: runtime,
        }
    }

    /// The first request served.
    pub fn request(&self) -> RecordedRequest {
        self.seen
            .lock()
            .expect("request log lock")
            .first()
            .cloned()
            .expect("a request was served")
    }
}

async fn answer(
    State(canned): State<Canned>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    canned
        .seen
        .lock()
        .expect("request log lock")
        .push(RecordedRequest {
            method,
            uri: uri.to_string(),
            headers,
            body,
        });
    if !canned.delay.is_zero() {
        tokio::time::sleep(canned.delay).await;
    }
    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
}
