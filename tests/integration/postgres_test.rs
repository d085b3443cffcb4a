//! Integration tests for the PostgreSQL user store.
//!
//! Run with `USERHUB_TEST_DATABASE_URL` set and `cargo test -- --ignored`.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use userhub_database::store::{StoreError, UserStore};
use userhub_entity::user::{NewUser, UserChanges, UserId};

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser::new(
        name.to_string(),
        email.to_string(),
        Some("pw".to_string()),
        Some("555-0100".to_string()),
        Some("admin".to_string()),
    )
}

#[tokio::test]
#[ignore = "requires PostgreSQL at USERHUB_TEST_DATABASE_URL"]
async fn test_insert_returns_stored_row() {
    let store = helpers::pg_store().await;
    let email = helpers::unique_email("insert");

    let created = store
        .create(&NewUser::new("A".into(), email.clone(), None, None, None))
        .await
        .unwrap();

    assert!(created.id.into_inner() > 0);
    assert_eq!(created.email, email);
    assert_eq!(created.password, None);
    assert_eq!(created.tel, None);
    assert_eq!(created.role, "user");

    let fetched = store.find_by_id(created.id).await.unwrap();
    assert_eq!(fetched, Some(created.clone()));
    assert_eq!(store.find_by_email(&email).await.unwrap(), Some(created));
}

#[tokio::test]
#[ignore = "requires PostgreSQL at USERHUB_TEST_DATABASE_URL"]
async fn test_list_is_ordered_by_id() {
    let store = helpers::pg_store().await;
    let a = store
        .create(&new_user("A", &helpers::unique_email("order-a")))
        .await
        .unwrap();
    let b = store
        .create(&new_user("B", &helpers::unique_email("order-b")))
        .await
        .unwrap();

    let ids: Vec<UserId> = store
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .filter(|id| *id == a.id || *id == b.id)
        .collect();

    assert_eq!(ids, vec![a.id, b.id]);
}

#[tokio::test]
#[ignore = "requires PostgreSQL at USERHUB_TEST_DATABASE_URL"]
async fn test_update_keeps_email_and_password_resets_tel_and_role() {
    let store = helpers::pg_store().await;
    let email = helpers::unique_email("update");
    let created = store.create(&new_user("A", &email)).await.unwrap();

    let changes = UserChanges::new("B".into(), None, None, None, None);
    let updated = store.update(created.id, &changes).await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "B");
    assert_eq!(updated.email, email);
    assert_eq!(updated.password.as_deref(), Some("pw"));
    assert_eq!(updated.tel, None);
    assert_eq!(updated.role, "user");
    assert_eq!(store.find_by_id(created.id).await.unwrap(), Some(updated));
}

#[tokio::test]
#[ignore = "requires PostgreSQL at USERHUB_TEST_DATABASE_URL"]
async fn test_update_writes_supplied_email_and_password() {
    let store = helpers::pg_store().await;
    let created = store
        .create(&new_user("A", &helpers::unique_email("rewrite")))
        .await
        .unwrap();
    let email = helpers::unique_email("rewritten");

    let changes = UserChanges::new(
        "A".into(),
        Some(email.clone()),
        Some("new".into()),
        Some("555-0199".into()),
        Some("editor".into()),
    );
    let updated = store.update(created.id, &changes).await.unwrap();

    assert_eq!(updated.email, email);
    assert_eq!(updated.password.as_deref(), Some("new"));
    assert_eq!(updated.tel.as_deref(), Some("555-0199"));
    assert_eq!(updated.role, "editor");
}

#[tokio::test]
#[ignore = "requires PostgreSQL at USERHUB_TEST_DATABASE_URL"]
async fn test_update_missing_row_is_not_found() {
    let store = helpers::pg_store().await;
    let changes = UserChanges::new("A".into(), None, None, None, None);

    let err = store.update(UserId(i32::MAX), &changes).await.unwrap_err();

    assert!(matches!(err, StoreError::NotFound));
}

#[tokio::test]
#[ignore = "requires PostgreSQL at USERHUB_TEST_DATABASE_URL"]
async fn test_delete_twice() {
    let store = helpers::pg_store().await;
    let created = store
        .create(&new_user("A", &helpers::unique_email("delete")))
        .await
        .unwrap();

    let removed = store.delete(created.id).await.unwrap();
    assert_eq!(removed, created);

    let err = store.delete(created.id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound));
    assert_eq!(store.find_by_id(created.id).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires PostgreSQL at USERHUB_TEST_DATABASE_URL"]
async fn test_duplicate_email_is_unique_violation() {
    let store = helpers::pg_store().await;
    let email = helpers::unique_email("dup");
    let original = store.create(&new_user("Original", &email)).await.unwrap();

    let err = store
        .create(&new_user("Impostor", &email))
        .await
        .unwrap_err();

    match err {
        StoreError::Conflict { constraint } => assert_eq!(constraint, "users_email_key"),
        other => panic!("expected conflict, got {other:?}"),
    }
    assert_eq!(store.find_by_email(&email).await.unwrap(), Some(original));
}

#[tokio::test]
#[ignore = "requires PostgreSQL at USERHUB_TEST_DATABASE_URL"]
async fn test_update_to_taken_email_is_unique_violation() {
    let store = helpers::pg_store().await;
    let taken = helpers::unique_email("taken");
    store.create(&new_user("A", &taken)).await.unwrap();
    let b = store
        .create(&new_user("B", &helpers::unique_email("mover")))
        .await
        .unwrap();

    let changes = UserChanges::new("B".into(), Some(taken), None, None, None);
    let err = store.update(b.id, &changes).await.unwrap_err();

    assert!(matches!(err, StoreError::Conflict { .. }));
    assert_eq!(store.find_by_id(b.id).await.unwrap(), Some(b));
}

#[tokio::test]
#[ignore = "requires PostgreSQL at USERHUB_TEST_DATABASE_URL"]
async fn test_ping() {
    let store = helpers::pg_store().await;
    assert!(store.ping().await.is_ok());
}

#[tokio::test]
#[ignore = "requires PostgreSQL at USERHUB_TEST_DATABASE_URL"]
async fn test_http_round_trip_over_postgres() {
    let store: Arc<dyn UserStore> = Arc::new(helpers::pg_store().await);
    let router = helpers::router_with(store);
    let email = helpers::unique_email("http");
    let post = |body: serde_json::Value| {
        axum::http::Request::builder()
            .method("POST")
            .uri("/users")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(body.to_string()))
            .unwrap()
    };

    let created = helpers::send(&router, post(json!({ "name": "A", "email": email }))).await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["role"], "user");

    let duplicate = helpers::send(&router, post(json!({ "name": "B", "email": email }))).await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(
        duplicate.body,
        json!({ "status": "error", "message": "Email already exists" })
    );

    let id = created.body["data"]["id"].as_i64().unwrap();
    let delete = axum::http::Request::builder()
        .method("DELETE")
        .uri(format!("/users/{id}"))
        .body(axum::body::Body::empty())
        .unwrap();
    let deleted = helpers::send(&router, delete).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["data"]["email"], email);
}
