#![allow(dead_code)]

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Stub shortener endpoint bound to an ephemeral port.
pub struct StubServer {
    /// Base URL of the stub, usable as `API_DOMAIN`.
    pub base_url: String,
    /// Request bodies the stub received, in order.
    pub requests: Arc<Mutex<Vec<Value>>>,
}

impl StubServer {
    /// The body of the only request received.
    ///
    /// Panics if the stub saw zero or more than one request.
    pub fn single_request(&self) -> Value {
        let requests = self.requests.lock().unwrap();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].clone()
    }
}

/// Spawns a stub `POST /api/v1/shortener` endpoint that replies with the
/// given status and JSON body to every request.
pub async fn spawn_stub(status: StatusCode, body: Value) -> StubServer {
    let requests: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();

    let app = Router::new().route(
        "/api/v1/shortener",
        post(move |Json(request): Json<Value>| {
            let seen = seen.clone();
            let body = body.clone();
            async move {
                seen.lock().unwrap().push(request);
                (status, Json(body))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubServer {
        base_url: format!("http://{addr}"),
        requests,
    }
}
