//! Integration tests for the health endpoint.

mod helpers;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;

use userhub_database::store::{StoreError, StoreResult, UserStore};
use userhub_entity::user::{NewUser, User, UserChanges, UserId};

#[tokio::test]
async fn test_health_ok() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "success");
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["store"], "connected");
    assert!(response.body["data"]["version"].is_string());
}

#[derive(Debug)]
struct UnreachableStore;

fn unreachable_store() -> StoreError {
    StoreError::backend(std::io::Error::other("connection refused"))
}

#[async_trait]
impl UserStore for UnreachableStore {
    async fn find_all(&self) -> StoreResult<Vec<User>> {
        Err(unreachable_store())
    }
    async fn find_by_id(&self, _id: UserId) -> StoreResult<Option<User>> {
        Err(unreachable_store())
    }
    async fn find_by_email(&self, _email: &str) -> StoreResult<Option<User>> {
        Err(unreachable_store())
    }
    async fn create(&self, _user: &NewUser) -> StoreResult<User> {
        Err(unreachable_store())
    }
    async fn update(&self, _id: UserId, _changes: &UserChanges) -> StoreResult<User> {
        Err(unreachable_store())
    }
    async fn delete(&self, _id: UserId) -> StoreResult<User> {
        Err(unreachable_store())
    }
    async fn ping(&self) -> StoreResult<()> {
        Err(unreachable_store())
    }
}

#[tokio::test]
async fn test_health_reports_unavailable_store() {
    let router = helpers::router_with(Arc::new(UnreachableStore));
    let request = axum::http::Request::builder()
        .uri("/health")
        .body(axum::body::Body::empty())
        .unwrap();

    let response = helpers::send(&router, request).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["status"], "error");
    assert_eq!(response.body["message"], "Record store unavailable");
}
