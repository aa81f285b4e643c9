//! Axum-based mock of the Google endpoints the server talks to
//!
//! Each test starts its own instance on an ephemeral port, so tests can run
//! in parallel with independent profiles, listings and failure modes.

use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

pub const MOCK_ACCESS_TOKEN: &str = "mock_access_token";
pub const VALID_CODE: &str = "valid-auth-code";
pub const MAPS_QUERY: &str = "mimeType='application/vnd.google-apps.map'";

/// Shared state for the mock server
#[derive(Clone)]
pub struct MockGoogleState {
    pub token_calls: Arc<AtomicUsize>,
    pub people_calls: Arc<AtomicUsize>,
    pub drive_calls: Arc<AtomicUsize>,
    /// Body returned by `people/me`
    pub profile: Arc<Mutex<Value>>,
    /// One entry per Drive page
    pub drive_pages: Arc<Mutex<Vec<Value>>>,
    /// When set, the token endpoint answers 400 with this `error`
    pub token_error: Arc<Mutex<Option<String>>>,
    /// When set, the token endpoint answers 200 with this raw body
    pub token_raw_body: Arc<Mutex<Option<String>>>,
    /// When set, the last Drive page points back to the first
    pub drive_pages_loop: Arc<AtomicBool>,
    /// When set, `people/me` answers 403 with this message
    pub people_error: Arc<Mutex<Option<String>>>,
    /// When set, `files` answers 500 with this message
    pub drive_error: Arc<Mutex<Option<String>>>,
    pub last_code_verifier: Arc<Mutex<Option<String>>>,
}

impl Default for MockGoogleState {
    fn default() -> Self {
        Self {
            token_calls: Arc::default(),
            people_calls: Arc::default(),
            drive_calls: Arc::default(),
            profile: Arc::new(Mutex::new(json!({
                "resourceName": "people/123456789",
                "names": [ { "displayName": "Test User" } ],
                "emailAddresses": [ { "value": "test@example.com" } ]
            }))),
            drive_pages: Arc::new(Mutex::new(vec![json!([
                { "id": "map-1", "name": "Dinner spots" }
            ])])),
            token_error: Arc::default(),
            token_raw_body: Arc::default(),
            drive_pages_loop: Arc::default(),
            people_error: Arc::default(),
            drive_error: Arc::default(),
            last_code_verifier: Arc::default(),
        }
    }
}

pub struct MockGoogle {
    pub base_url: String,
    pub state: MockGoogleState,
}

impl MockGoogle {
    pub async fn start() -> Self {
        let state = MockGoogleState::default();
        let app = Router::new()
            .route("/token", post(token))
            .route("/v1/people/me", get(people_me))
            .route("/drive/v3/files", get(drive_files))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Mock server has an address");
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn set_profile(&self, profile: Value) {
        *self.state.profile.lock().unwrap() = profile;
    }

    pub fn set_drive_pages(&self, pages: Vec<Value>) {
        *self.state.drive_pages.lock().unwrap() = pages;
    }

    pub fn fail_token_exchange(&self, error: &str) {
        *self.state.token_error.lock().unwrap() = Some(error.to_string());
    }

    pub fn set_token_raw_body(&self, body: &str) {
        *self.state.token_raw_body.lock().unwrap() = Some(body.to_string());
    }

    pub fn loop_drive_pages(&self) {
        self.state.drive_pages_loop.store(true, Ordering::SeqCst);
    }

    pub fn fail_people(&self, error: &str) {
        *self.state.people_error.lock().unwrap() = Some(error.to_string());
    }

    pub fn fail_drive(&self, error: &str) {
        *self.state.drive_error.lock().unwrap() = Some(error.to_string());
    }

    pub fn token_calls(&self) -> usize {
        self.state.token_calls.load(Ordering::SeqCst)
    }

    pub fn people_calls(&self) -> usize {
        self.state.people_calls.load(Ordering::SeqCst)
    }

    pub fn drive_calls(&self) -> usize {
        self.state.drive_calls.load(Ordering::SeqCst)
    }

    pub fn last_code_verifier(&self) -> Option<String> {
        self.state.last_code_verifier.lock().unwrap().clone()
    }
}

fn google_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({
            "error": {
                "code": status.as_u16(),
                "message": message,
                "status": "PERMISSION_DENIED"
            }
        })),
    )
        .into_response()
}

fn has_mock_bearer(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {MOCK_ACCESS_TOKEN}"))
}

/// OAuth2 token endpoint
async fn token(
    State(state): State<MockGoogleState>,
    Form(params): Form<HashMap<String, String>>,
) -> Response {
    state.token_calls.fetch_add(1, Ordering::SeqCst);
    *state.last_code_verifier.lock().unwrap() = params.get("code_verifier").cloned();

    if let Some(error) = state.token_error.lock().unwrap().clone() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": error }))).into_response();
    }
    if let Some(body) = state.token_raw_body.lock().unwrap().clone() {
        return (
            StatusCode::OK,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response();
    }

    if params.get("grant_type").map(String::as_str) != Some("authorization_code")
        || params.get("code").map(String::as_str) != Some(VALID_CODE)
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_grant",
                "error_description": "Malformed auth code."
            })),
        )
            .into_response();
    }

    Json(json!({
        "access_token": MOCK_ACCESS_TOKEN,
        "expires_in": 3599,
        "token_type": "Bearer",
        "scope": "openid email profile https://www.googleapis.com/auth/drive.metadata.readonly"
    }))
    .into_response()
}

/// People API `people/me`
async fn people_me(
    State(state): State<MockGoogleState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    state.people_calls.fetch_add(1, Ordering::SeqCst);

    if !has_mock_bearer(&headers) {
        return google_error(StatusCode::UNAUTHORIZED, "Invalid Credentials");
    }
    if let Some(error) = state.people_error.lock().unwrap().clone() {
        return google_error(StatusCode::FORBIDDEN, &error);
    }
    if params.get("personFields").map(String::as_str) != Some("emailAddresses,names") {
        return google_error(StatusCode::BAD_REQUEST, "personMask is required");
    }

    Json(state.profile.lock().unwrap().clone()).into_response()
}

/// Drive API `files.list`, paged with tokens of the form `page-N`
async fn drive_files(
    State(state): State<MockGoogleState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    state.drive_calls.fetch_add(1, Ordering::SeqCst);

    if !has_mock_bearer(&headers) {
        return google_error(StatusCode::UNAUTHORIZED, "Invalid Credentials");
    }
    if let Some(error) = state.drive_error.lock().unwrap().clone() {
        return google_error(StatusCode::INTERNAL_SERVER_ERROR, &error);
    }
    if params.get("q").map(String::as_str) != Some(MAPS_QUERY) {
        return google_error(StatusCode::BAD_REQUEST, "Unexpected query");
    }

    let index: usize = params
        .get("pageToken")
        .and_then(|t| t.strip_prefix("page-"))
        .and_then(|n| n.parse().ok())
        .unwrap_or(0);

    let pages = state.drive_pages.lock().unwrap().clone();
    let files = pages.get(index).cloned().unwrap_or_else(|| json!([]));

    let mut body = json!({ "files": files });
    if index + 1 < pages.len() {
        body["nextPageToken"] = json!(format!("page-{}", index + 1));
    } else if state.drive_pages_loop.load(Ordering::SeqCst) {
        body["nextPageToken"] = json!("page-0");
    }
    Json(body).into_response()
}
