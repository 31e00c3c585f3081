#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use serde_json::{json, Value};
use smart_dashboard_api::{
    clients::{CompletionBackend, CompletionClient, CompletionError, CompletionRequest},
    config::DEFAULT_ALLOWED_ORIGINS,
    http::cors::CorsPolicy,
    models::Record,
    state::AppState,
};
use vercel_runtime::{Body, Request, Response};

/// Canned completion client that counts calls and remembers the last request.
pub struct StubClient {
    reply: Result<Option<String>, String>,
    calls: AtomicUsize,
    last: Mutex<Option<CompletionRequest>>,
}

impl StubClient {
    pub fn replying(text: &str) -> Self {
        Self::with(Ok(Some(text.to_string())))
    }

    pub fn empty() -> Self {
        Self::with(Ok(None))
    }

    pub fn failing(message: &str) -> Self {
        Self::with(Err(message.to_string()))
    }

    fn with(reply: Result<Option<String>, String>) -> Self {
        Self { reply, calls: AtomicUsize::new(0), last: Mutex::new(None) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for StubClient {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<Option<String>, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(request);
        self.reply.clone().map_err(CompletionError)
    }
}

pub fn cors() -> CorsPolicy {
    CorsPolicy::new(DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect())
}

pub fn ready(client: StubClient) -> AppState<StubClient> {
    AppState::new(CompletionBackend::Ready(client), cors())
}

pub fn unconfigured() -> AppState<StubClient> {
    AppState::new(CompletionBackend::Unconfigured, cors())
}

pub fn client(state: &AppState<StubClient>) -> &StubClient {
    state.backend.client().unwrap()
}

pub fn rows(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| json!({ "id": i, "revenue": 100 * (i + 1) }).as_object().cloned().unwrap())
        .collect()
}

pub fn request(method: &str, body: &Value) -> Request {
    let mut req = Request::new(body.to_string().into());
    *req.method_mut() = method.parse().unwrap();
    req
}

pub fn json_body(resp: &Response<Body>) -> Value {
    serde_json::from_slice(resp.body()).unwrap()
}
