//! In-process stand-in for the Link Haven backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::HavenApiClient;
use crate::config::ClientConfig;

#[derive(Default)]
pub struct StubData {
    pub users: HashMap<String, String>,
    pub tokens: HashMap<String, String>,
    /// Stored oldest first; served newest first
    pub links: Vec<Value>,
    pub opt_ins: Vec<String>,
    pub fail_link_reads: bool,
    pub fail_link_writes: bool,
    pub next_id: u64,
}

#[derive(Clone, Default)]
pub struct StubBackend {
    pub data: Arc<Mutex<StubData>>,
    pub base_url: String,
}

impl StubBackend {
    pub async fn start() -> Self {
        let data = Arc::new(Mutex::new(StubData::default()));
        let router = Router::new()
            .route("/api/login", post(login))
            .route("/api/signup", post(signup))
            .route("/api/links", post(create_link).get(list_links))
            .route("/api/twilio/opt-in", post(opt_in))
            .with_state(data.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            data,
            base_url: format!("http://{addr}"),
        }
    }

    pub fn client(&self) -> HavenApiClient {
        HavenApiClient::new(ClientConfig::new(&self.base_url).unwrap()).unwrap()
    }

    pub fn add_user(&self, email: &str, password: &str) {
        self.data
            .lock()
            .unwrap()
            .users
            .insert(email.to_string(), password.to_string());
    }

    /// Register a valid bearer token without going through login.
    pub fn issue_token(&self, email: &str) -> String {
        let token = format!("token-{email}");
        self.data
            .lock()
            .unwrap()
            .tokens
            .insert(token.clone(), email.to_string());
        token
    }

    pub fn revoke_tokens(&self) {
        self.data.lock().unwrap().tokens.clear();
    }

    pub fn seed_link(&self, url: &str, category: &str, created_at: &str) {
        let mut data = self.data.lock().unwrap();
        data.next_id += 1;
        let id = data.next_id;
        data.links.push(json!({
            "_id": id.to_string(),
            "url": url,
            "source": "web",
            "category": category,
            "createdAt": created_at,
        }));
    }

    pub fn set_fail_link_reads(&self, fail: bool) {
        self.data.lock().unwrap().fail_link_reads = fail;
    }

    pub fn set_fail_link_writes(&self, fail: bool) {
        self.data.lock().unwrap().fail_link_writes = fail;
    }

    pub fn link_count(&self) -> usize {
        self.data.lock().unwrap().links.len()
    }

    pub fn opt_ins(&self) -> Vec<String> {
        self.data.lock().unwrap().opt_ins.clone()
    }
}

type Shared = Arc<Mutex<StubData>>;

#[derive(Deserialize)]
struct CredentialsBody {
    email: String,
    password: String,
}

#[derive(Deserialize)]
struct LinkBody {
    url: String,
    source: String,
    category: String,
}

#[derive(Deserialize)]
struct OptInBody {
    phone: String,
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn authorized(data: &StubData, headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| data.tokens.contains_key(token))
}

async fn login(State(data): State<Shared>, Json(body): Json<CredentialsBody>) -> Response {
    let mut data = data.lock().unwrap();
    if data.users.get(&body.email) != Some(&body.password) {
        return error(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    let token = format!("token-{}", body.email);
    data.tokens.insert(token.clone(), body.email.clone());
    Json(json!({
        "token": token,
        "user": { "_id": "user-1", "email": body.email },
    }))
    .into_response()
}

async fn signup(State(data): State<Shared>, Json(body): Json<CredentialsBody>) -> Response {
    let mut data = data.lock().unwrap();
    if data.users.contains_key(&body.email) {
        return error(StatusCode::CONFLICT, "User already exists");
    }
    data.users.insert(body.email.clone(), body.password);
    Json(json!({ "token": format!("signup-{}", body.email) })).into_response()
}

async fn list_links(State(data): State<Shared>, headers: HeaderMap) -> Response {
    let data = data.lock().unwrap();
    if !authorized(&data, &headers) {
        return error(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    if data.fail_link_reads {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Database unavailable");
    }
    let newest_first = data.links.iter().rev().cloned().collect::<Vec<_>>();
    Json(Value::Array(newest_first)).into_response()
}

async fn create_link(
    State(data): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<LinkBody>,
) -> Response {
    let mut data = data.lock().unwrap();
    if !authorized(&data, &headers) {
        return error(StatusCode::UNAUTHORIZED, "Unauthorized");
    }
    if data.fail_link_writes {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Database unavailable");
    }
    data.next_id += 1;
    let link = json!({
        "_id": data.next_id.to_string(),
        "url": body.url,
        "source": body.source,
        "category": body.category,
        "createdAt": chrono::Utc::now().to_rfc3339(),
    });
    data.links.push(link.clone());
    (StatusCode::CREATED, Json(link)).into_response()
}

async fn opt_in(State(data): State<Shared>, Json(body): Json<OptInBody>) -> Response {
    if !body.phone.starts_with('+') {
        return error(StatusCode::BAD_REQUEST, "Phone number must be in E.164 format");
    }
    data.lock().unwrap().opt_ins.push(body.phone);
    Json(json!({ "success": true })).into_response()
}
