//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use userhub_api::{AppState, build_app};
use userhub_core::config::{AppConfig, DatabaseConfig};
use userhub_database::DatabasePool;
use userhub_database::migration::run_migrations;
use userhub_database::repositories::{MemoryUserStore, PgUserStore};
use userhub_database::store::UserStore;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The in-memory store behind the router, for direct inspection
    pub store: Arc<MemoryUserStore>,
}

/// Captured response: status plus the parsed JSON body
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Create a test application over an empty in-memory store
    pub fn new() -> Self {
        let store = Arc::new(MemoryUserStore::new());
        let router = router_with(Arc::clone(&store) as Arc<dyn UserStore>);
        Self { router, store }
    }

    /// Send a request with an optional JSON body
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");

        send(&self.router, request).await
    }

    /// Send a request with a raw body and explicit content type
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        content_type: &str,
        body: &str,
    ) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_owned()))
            .expect("valid request");

        send(&self.router, request).await
    }

    /// Create a user through the API and return its id
    pub async fn create_user(&self, name: &str, email: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/users",
                Some(serde_json::json!({ "name": name, "email": email, "password": "pw" })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["id"]
            .as_i64()
            .expect("created user has an id")
    }
}

/// Build the full application around any store
pub fn router_with(store: Arc<dyn UserStore>) -> Router {
    build_app(AppState::new(AppConfig::default(), store))
}

/// Drive one request through a router
pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };

    TestResponse { status, body }
}

/// Environment variable holding the PostgreSQL URL for database tests
pub const TEST_DATABASE_URL: &str = "USERHUB_TEST_DATABASE_URL";

/// Connect to the test database, apply migrations and wrap the pool
pub async fn pg_store() -> PgUserStore {
    let url = std::env::var(TEST_DATABASE_URL)
        .unwrap_or_else(|_| panic!("{TEST_DATABASE_URL} must point at a PostgreSQL database"));
    let config = DatabaseConfig {
        url,
        max_connections: 4,
        min_connections: 1,
        ..DatabaseConfig::default()
    };

    let pool = DatabasePool::connect(&config)
        .await
        .expect("Failed to connect to test database");
    run_migrations(pool.pool())
        .await
        .expect("Failed to run migrations");

    PgUserStore::new(pool.into_pool())
}

/// An email no other test run has used
pub fn unique_email(tag: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock after epoch")
        .as_nanos();
    format!("{tag}-{}-{nanos}@example.test", std::process::id())
}
