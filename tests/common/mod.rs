#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::{Path, Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};

use admin_console::api::HttpTransport;
use admin_console::notify::LogNotifier;
use admin_console::storage::MemoryStorage;
use admin_console::Console;

pub const PASSWORD: &str = "secret";
pub const REFRESH_TOKEN: &str = "refresh-7";

/// One request as the backend saw it
#[derive(Debug, Clone)]
pub struct Hit {
    pub method: String,
    pub uri: String,
    pub authorization: Option<String>,
}

#[derive(Default)]
pub struct BackendState {
    hits: Mutex<Vec<Hit>>,
    bodies: Mutex<Vec<Value>>,
    roles: Mutex<Vec<Value>>,
}

/// In-process stand-in for the console backend
pub struct TestBackend {
    pub port: u16,
    pub base_url: String,
    state: Arc<BackendState>,
}

impl TestBackend {
    pub async fn spawn() -> Result<Self> {
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);
        let state = Arc::new(BackendState::default());

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind mock backend")?;
        let app = router(state.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { port, base_url, state })
    }

    /// Console wired to this backend with in-memory token and session storage
    pub fn console(&self) -> Result<Console> {
        console_for(&self.base_url, Duration::from_secs(5))
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.state.hits.lock().unwrap().clone()
    }

    pub fn hits_to(&self, method: &str, uri: &str) -> usize {
        self.hits()
            .iter()
            .filter(|hit| hit.method == method && hit.uri == uri)
            .count()
    }

    /// JSON bodies received by `POST /api/transaction/table`
    pub fn table_bodies(&self) -> Vec<Value> {
        self.state.bodies.lock().unwrap().clone()
    }
}

/// Console against any base URL with in-memory storage
pub fn console_for(base_url: &str, timeout: Duration) -> Result<Console> {
    let transport = HttpTransport::new(base_url, timeout, "console-tests")?;
    Ok(Console::new(
        Arc::new(transport),
        Arc::new(MemoryStorage::new()),
        Arc::new(MemoryStorage::new()),
        Arc::new(LogNotifier),
    ))
}

/// Accepts connections and never answers
pub async fn spawn_silent_listener() -> Result<String> {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
        .await
        .context("failed to bind silent listener")?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    Ok(format!("http://{}", addr))
}

pub fn token_for(sub: &str) -> String {
    let claims = json!({ "sub": sub, "exp": 4_102_444_800i64 });
    encode(&Header::default(), &claims, &EncodingKey::from_secret(b"backend-secret"))
        .expect("failed to mint token")
}

fn envelope(result: Value) -> Value {
    json!({ "success": true, "message": "OK", "result": result })
}

fn router(state: Arc<BackendState>) -> Router {
    Router::new()
        .route("/api/user/login", post(login))
        .route("/api/user/token/refresh", get(refresh_token))
        .route("/api/user", get(employees).post(register))
        .route("/api/user/role", get(roles).post(create_role))
        .route("/api/user/:id", get(user_profile).put(update_user).delete(ok))
        .route("/api/transaction/table", post(transaction_table))
        .route("/api/dashboard/:figure", get(dashboard_figure))
        .route("/api/dashboard/monthly-revenue/:months", get(monthly_revenue))
        .route("/api/invoice/user", get(user_invoice))
        .route("/api/invoice/user/extra", get(user_extras).post(created))
        .route("/api/invoice/user/extra/:id", put(ok).delete(ok))
        .layer(middleware::from_fn_with_state(state.clone(), record))
        .with_state(state)
}

async fn record(State(state): State<Arc<BackendState>>, request: Request, next: Next) -> Response {
    let hit = Hit {
        method: request.method().to_string(),
        uri: request.uri().to_string(),
        authorization: request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };
    state.hits.lock().unwrap().push(hit);
    next.run(request).await
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    if body["password"] == PASSWORD {
        (
            StatusCode::OK,
            Json(json!({ "access_token": token_for("7"), "refresh_token": REFRESH_TOKEN })),
        )
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "invalid credentials" })))
    }
}

async fn refresh_token(headers: axum::http::HeaderMap) -> impl IntoResponse {
    let expected = format!("Bearer {}", REFRESH_TOKEN);
    match headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => {
            (StatusCode::OK, Json(json!({ "access_token": token_for("8") })))
        }
        _ => (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "invalid refresh token" }))),
    }
}

async fn employees() -> Json<Value> {
    Json(envelope(json!([
        { "id": 7, "name": "Kim", "role": "manager" },
        { "id": 9, "name": "Lee", "role": null },
    ])))
}

async fn register(Json(body): Json<Value>) -> impl IntoResponse {
    if body["email"] == "kim@example.com" {
        (StatusCode::BAD_REQUEST, Json(json!({ "success": false, "message": "이미 존재하는 이메일입니다!" })))
    } else {
        (StatusCode::CREATED, Json(json!({ "success": true, "message": "OK", "result": { "created_object_id": 10 } })))
    }
}

async fn roles(State(state): State<Arc<BackendState>>) -> Json<Value> {
    Json(envelope(Value::Array(state.roles.lock().unwrap().clone())))
}

async fn create_role(State(state): State<Arc<BackendState>>, Json(body): Json<Value>) -> impl IntoResponse {
    let mut roles = state.roles.lock().unwrap();
    let id = roles.len() + 1;
    roles.push(json!({ "id": id, "name": body["name"] }));
    (StatusCode::CREATED, Json(json!({ "success": true })))
}

async fn user_profile(Path(id): Path<i64>) -> impl IntoResponse {
    if id == 7 {
        (
            StatusCode::OK,
            Json(json!({ "success": true, "message": "OK", "result": { "id": 7, "name": "Kim" } })),
        )
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "detail": "user not found" })))
    }
}

async fn update_user(Path(_id): Path<i64>) -> Json<Value> {
    Json(json!({ "success": true }))
}

async fn transaction_table(State(state): State<Arc<BackendState>>, Json(body): Json<Value>) -> Json<Value> {
    state.bodies.lock().unwrap().push(body.clone());
    Json(json!({ "success": true, "result": [], "filter": body }))
}

async fn dashboard_figure(Path(figure): Path<String>) -> Json<Value> {
    Json(envelope(json!({ "figure": figure, "value": 1 })))
}

async fn monthly_revenue(Path(months): Path<u32>) -> impl IntoResponse {
    if months == 0 {
        return (StatusCode::BAD_REQUEST, Json(json!({ "success": false, "message": "존재하지 않는 데이터입니다!" })));
    }
    let revenue: Vec<Value> = (0..months).map(|i| json!({ "offset": i, "revenue": 1000 })).collect();
    (StatusCode::OK, Json(envelope(Value::Array(revenue))))
}

async fn user_invoice() -> Json<Value> {
    Json(json!({ "success": true, "result": { "total": 120000 } }))
}

async fn user_extras() -> Json<Value> {
    Json(json!({ "success": true, "result": [{ "id": 1, "name": "parking", "price": 20000 }] }))
}

async fn created() -> impl IntoResponse {
    (StatusCode::CREATED, Json(json!({ "success": true })))
}

async fn ok() -> Json<Value> {
    Json(json!({ "success": true }))
}
