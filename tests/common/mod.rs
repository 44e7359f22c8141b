#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use jsonwebtoken::EncodingKey;
use notekeeper::{
    AppState,
    app::router::build_router,
    auth::token::issue_access_token,
    notes::{MemoryNoteStore, NewNote, Note, NotePatch, NoteStore, PgNoteStore},
    store::{StoreError, StoreResult},
    users::{MemoryUserStore, PgUserStore},
};
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &str = "integration-test-jwt-secret";

pub struct TestApp {
    app: Router,
}

pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub access_token: String,
}

/// Bearer token for `user_id`, without going through registration.
pub fn token_for(user_id: Uuid) -> String {
    issue_access_token(&EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()), user_id)
        .expect("failed to sign test token")
}

/// Note store whose every call fails like an unreachable database.
pub struct UnavailableNoteStore;

fn unavailable<T>() -> StoreResult<T> {
    Err(StoreError::Database(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl NoteStore for UnavailableNoteStore {
    async fn insert(&self, _note: NewNote) -> StoreResult<Note> {
        unavailable()
    }

    async fn find_by_owner(&self, _owner: Uuid) -> StoreResult<Vec<Note>> {
        unavailable()
    }

    async fn find_by_id(&self, _id: Uuid) -> StoreResult<Option<Note>> {
        unavailable()
    }

    async fn find_by_id_and_replace(
        &self,
        _id: Uuid,
        _patch: NotePatch,
    ) -> StoreResult<Option<Note>> {
        unavailable()
    }

    async fn find_by_id_and_remove(&self, _id: Uuid) -> StoreResult<Option<Note>> {
        unavailable()
    }
}

impl TestApp {
    /// Router over in-memory stores.
    pub fn new() -> Self {
        Self::with_state(AppState::new(
            Arc::new(MemoryNoteStore::new()),
            Arc::new(MemoryUserStore::new()),
            TEST_JWT_SECRET,
        ))
    }

    /// Router over the Postgres stores.
    pub fn with_pool(db: PgPool) -> Self {
        Self::with_state(AppState::new(
            Arc::new(PgNoteStore::new(db.clone())),
            Arc::new(PgUserStore::new(db)),
            TEST_JWT_SECRET,
        ))
    }

    /// Router over the given note store and an in-memory user store.
    pub fn with_note_store(notes: Arc<dyn NoteStore>) -> Self {
        Self::with_state(AppState::new(
            notes,
            Arc::new(MemoryUserStore::new()),
            TEST_JWT_SECRET,
        ))
    }

    fn with_state(state: AppState) -> Self {
        Self {
            app: build_router(state),
        }
    }

    pub async fn post_json(
        &self,
        path: &str,
        body: Value,
        bearer: Option<&str>,
    ) -> (StatusCode, Value) {
        self.request_json(Method::POST, path, Some(body), bearer)
            .await
    }

    pub async fn put_json(
        &self,
        path: &str,
        body: Value,
        bearer: Option<&str>,
    ) -> (StatusCode, Value) {
        self.request_json(Method::PUT, path, Some(body), bearer)
            .await
    }

    pub async fn get_json(&self, path: &str, bearer: Option<&str>) -> (StatusCode, Value) {
        self.request_json(Method::GET, path, None, bearer).await
    }

    pub async fn delete_json(&self, path: &str, bearer: Option<&str>) -> (StatusCode, Value) {
        self.request_json(Method::DELETE, path, None, bearer).await
    }

    pub async fn get_text(&self, path: &str, bearer: Option<&str>) -> (StatusCode, String) {
        let (status, bytes) = self.request(Method::GET, path, None, bearer).await;
        let text = String::from_utf8(bytes).expect("response is not valid utf-8 text");
        (status, text)
    }

    /// Sends a raw, possibly malformed, JSON body.
    pub async fn post_raw(&self, path: &str, body: &str, bearer: Option<&str>) -> (StatusCode, Value) {
        let mut req_builder = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = bearer {
            req_builder = req_builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let req = req_builder
            .body(Body::from(body.to_string()))
            .expect("failed to build request");
        let (status, bytes) = self.send(req).await;
        let value = serde_json::from_slice(&bytes).expect("response is not valid json");
        (status, value)
    }

    async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> (StatusCode, Value) {
        let (status, bytes) = self.request(method, path, body, bearer).await;

        if bytes.is_empty() {
            return (status, Value::Null);
        }

        let value = serde_json::from_slice(&bytes).expect("response is not valid json");
        (status, value)
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> (StatusCode, Vec<u8>) {
        let mut req_builder = Request::builder().method(method).uri(path);

        if let Some(token) = bearer {
            req_builder = req_builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let body = match body {
            Some(body) => {
                req_builder = req_builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&body).expect("failed to serialize request body"))
            }
            None => Body::empty(),
        };

        let req = req_builder.body(body).expect("failed to build request");
        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self
            .app
            .clone()
            .oneshot(req)
            .await
            .expect("request execution failed");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("failed to read response body");

        (status, bytes.to_vec())
    }

    pub async fn register_and_login(&self) -> TestUser {
        let email = format!("user-{}@example.test", Uuid::new_v4());
        let password = "strong-password-123";

        let (register_status, register_json) = self
            .post_json(
                "/auth/register",
                json!({
                    "name": "Test User",
                    "email": email,
                    "password": password
                }),
                None,
            )
            .await;
        assert_eq!(register_status, StatusCode::CREATED);

        let user_id = register_json
            .get("id")
            .and_then(Value::as_str)
            .expect("register response misses user id");
        let user_id = Uuid::parse_str(user_id).expect("invalid user id from register response");

        let (login_status, login_json) = self
            .post_json(
                "/auth/login",
                json!({
                    "email": email,
                    "password": password
                }),
                None,
            )
            .await;
        assert_eq!(login_status, StatusCode::OK);

        let access_token = login_json
            .get("access_token")
            .and_then(Value::as_str)
            .expect("login response misses access token")
            .to_string();

        TestUser {
            id: user_id,
            email,
            access_token,
        }
    }
}
