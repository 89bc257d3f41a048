//! HTTP-level integration tests for the `/clients` CRUD endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;

/// A well-formed client creation payload.
fn client_payload(national_id: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "Grace",
        "surname": "Hopper",
        "national_id": national_id,
        "city": "Arlington",
        "email": email,
        "address": "1 Navy Way",
        "phone": "+15550100200",
        "birth_date": "1906-12-09",
        "department": "Engineering",
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_and_get_client(pool: PgPool) {
    let (_, token) = common::seed_verified_account(&pool, "op@example.com").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/clients",
        &token,
        client_payload("0123456789", "grace@example.com"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["name"], "Grace");
    assert_eq!(created["national_id"], "0123456789");

    let id = created["id"].as_i64().unwrap();
    let response = get_auth(app, &format!("/api/clients/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["email"], "grace@example.com");
    assert_eq!(fetched["department"], "Engineering");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_clients_newest_first(pool: PgPool) {
    let (_, token) = common::seed_verified_account(&pool, "op@example.com").await;
    let app = common::build_test_app(pool);

    post_json_auth(
        app.clone(),
        "/api/clients",
        &token,
        client_payload("1111111111", "first@example.com"),
    )
    .await;
    post_json_auth(
        app.clone(),
        "/api/clients",
        &token,
        client_payload("2222222222", "second@example.com"),
    )
    .await;

    let response = get_auth(app, "/api/clients", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let list = json.as_array().expect("list response must be an array");
    assert_eq!(list.len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_client_validates_fields(pool: PgPool) {
    let (_, token) = common::seed_verified_account(&pool, "op@example.com").await;
    let app = common::build_test_app(pool);

    // national_id must be exactly 10 digits.
    let mut bad = client_payload("12345", "grace@example.com");
    bad["national_id"] = serde_json::json!("12345");
    let response = post_json_auth(app.clone(), "/api/clients", &token, bad).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // email must have a plausible shape.
    let mut bad = client_payload("0123456789", "not-an-email");
    bad["email"] = serde_json::json!("not-an-email");
    let response = post_json_auth(app.clone(), "/api/clients", &token, bad).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // phone must be 7 to 15 digits with an optional leading +.
    let mut bad = client_payload("0123456789", "grace@example.com");
    bad["phone"] = serde_json::json!("12");
    let response = post_json_auth(app, "/api/clients", &token, bad).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_national_id_conflicts(pool: PgPool) {
    let (_, token) = common::seed_verified_account(&pool, "op@example.com").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/clients",
        &token,
        client_payload("0123456789", "a@example.com"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(
        app,
        "/api/clients",
        &token,
        client_payload("0123456789", "b@example.com"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_client_is_partial_and_keeps_national_id(pool: PgPool) {
    let (_, token) = common::seed_verified_account(&pool, "op@example.com").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/clients",
        &token,
        client_payload("0123456789", "grace@example.com"),
    )
    .await;
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let patch = serde_json::json!({ "city": "New York" });
    let response = put_json_auth(app, &format!("/api/clients/{id}"), &token, patch).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;

    assert_eq!(updated["city"], "New York");
    // Untouched fields survive, and national_id cannot change.
    assert_eq!(updated["name"], "Grace");
    assert_eq!(updated["national_id"], "0123456789");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_client_then_404(pool: PgPool) {
    let (_, token) = common::seed_verified_account(&pool, "op@example.com").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app.clone(),
        "/api/clients",
        &token,
        client_payload("0123456789", "grace@example.com"),
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = delete_auth(app.clone(), &format!("/api/clients/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app.clone(), &format!("/api/clients/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(app, &format!("/api/clients/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn clients_require_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/clients").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
