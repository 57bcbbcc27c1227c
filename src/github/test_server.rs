// src/github/test_server.rs
// =============================================================================
// A local axum server for tests, so nothing talks to the real API.
//
// Every request lands in one fallback handler that records the path and the
// Authorization header, then answers with the canned reply for that path.
// Unknown paths get a 404 just like GitHub does for unknown users.
// =============================================================================

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use url::Url;

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn json(status: u16, body: &str) -> Self {
        Reply {
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
}

#[derive(Clone)]
struct ServerState {
    routes: Arc<HashMap<String, Reply>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct TestServer {
    port: u16,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl TestServer {
    pub async fn start(routes: Vec<(&str, Reply)>) -> TestServer {
        let state = ServerState {
            routes: Arc::new(
                routes
                    .into_iter()
                    .map(|(path, reply)| (path.to_string(), reply))
                    .collect(),
            ),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let requests = state.requests.clone();

        let app = Router::new().fallback(respond).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestServer { port, requests }
    }

    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://127.0.0.1:{}", self.port)).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn respond(State(state): State<ServerState>, uri: Uri, headers: HeaderMap) -> Response {
    let path = uri.path().to_string();
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state.requests.lock().unwrap().push(RecordedRequest {
        path: path.clone(),
        authorization,
    });

    let reply = state
        .routes
        .get(&path)
        .cloned()
        .unwrap_or_else(|| Reply::json(404, r#"{"message":"Not Found"}"#));
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (status, [(CONTENT_TYPE, "application/json")], reply.body).into_response()
}
