//! HTTP-level integration tests for the `/tickets` CRUD endpoints.
//!
//! Tickets embed resolved technician and client projections in read
//! responses, so these tests seed both referenced entities first.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use sqlx::PgPool;

/// Seed one technician and one client via the API; returns their ids.
async fn seed_refs(app: axum::Router, token: &str) -> (i64, i64) {
    let technician = serde_json::json!({
        "name": "Alan",
        "surname": "Turing",
        "national_id": "1111111111",
    });
    let response = post_json_auth(app.clone(), "/api/technicians", token, technician).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let technician_id = body_json(response).await["id"].as_i64().unwrap();

    let client = serde_json::json!({
        "name": "Grace",
        "surname": "Hopper",
        "national_id": "2222222222",
        "email": "grace@example.com",
        "address": "1 Navy Way",
        "phone": "+15550100200",
        "birth_date": "1906-12-09",
        "department": "Engineering",
    });
    let response = post_json_auth(app, "/api/clients", token, client).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let client_id = body_json(response).await["id"].as_i64().unwrap();

    (technician_id, client_id)
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_ticket_resolves_references(pool: PgPool) {
    let (_, token) = common::seed_verified_account(&pool, "op@example.com").await;
    let app = common::build_test_app(pool);
    let (technician_id, client_id) = seed_refs(app.clone(), &token).await;

    let body = serde_json::json!({
        "code": "TCK-0001",
        "description": "Printer on fire",
        "technician_id": technician_id,
        "client_id": client_id,
    });
    let response = post_json_auth(app, "/api/tickets", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let ticket = body_json(response).await;

    assert_eq!(ticket["code"], "TCK-0001");
    assert_eq!(ticket["status"], "open", "status defaults to open");
    assert_eq!(ticket["technician"]["name"], "Alan");
    assert_eq!(ticket["technician"]["id"], technician_id);
    assert_eq!(ticket["client"]["email"], "grace@example.com");
    assert!(ticket["opened_at"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_ticket_with_missing_reference_404(pool: PgPool) {
    let (_, token) = common::seed_verified_account(&pool, "op@example.com").await;
    let app = common::build_test_app(pool);
    let (technician_id, client_id) = seed_refs(app.clone(), &token).await;

    let body = serde_json::json!({
        "code": "TCK-0001",
        "technician_id": 9999,
        "client_id": client_id,
    });
    let response = post_json_auth(app.clone(), "/api/tickets", &token, body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = serde_json::json!({
        "code": "TCK-0001",
        "technician_id": technician_id,
        "client_id": 9999,
    });
    let response = post_json_auth(app, "/api/tickets", &token, body).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_ticket_code_conflicts(pool: PgPool) {
    let (_, token) = common::seed_verified_account(&pool, "op@example.com").await;
    let app = common::build_test_app(pool);
    let (technician_id, client_id) = seed_refs(app.clone(), &token).await;

    let body = serde_json::json!({
        "code": "TCK-0001",
        "technician_id": technician_id,
        "client_id": client_id,
    });
    let response = post_json_auth(app.clone(), "/api/tickets", &token, body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(app, "/api/tickets", &token, body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_and_get_tickets_with_refs(pool: PgPool) {
    let (_, token) = common::seed_verified_account(&pool, "op@example.com").await;
    let app = common::build_test_app(pool);
    let (technician_id, client_id) = seed_refs(app.clone(), &token).await;

    let body = serde_json::json!({
        "code": "TCK-0001",
        "technician_id": technician_id,
        "client_id": client_id,
        "status": "in_progress",
    });
    let response = post_json_auth(app.clone(), "/api/tickets", &token, body).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = get_auth(app.clone(), "/api/tickets", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["status"], "in_progress");
    assert_eq!(list[0]["client"]["name"], "Grace");

    let response = get_auth(app, &format!("/api/tickets/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let ticket = body_json(response).await;
    assert_eq!(ticket["technician"]["surname"], "Turing");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_ticket_status_and_keep_code(pool: PgPool) {
    let (_, token) = common::seed_verified_account(&pool, "op@example.com").await;
    let app = common::build_test_app(pool);
    let (technician_id, client_id) = seed_refs(app.clone(), &token).await;

    let body = serde_json::json!({
        "code": "TCK-0001",
        "technician_id": technician_id,
        "client_id": client_id,
    });
    let response = post_json_auth(app.clone(), "/api/tickets", &token, body).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let patch = serde_json::json!({ "status": "closed", "description": "Fire out" });
    let response = put_json_auth(app, &format!("/api/tickets/{id}"), &token, patch).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;

    assert_eq!(updated["status"], "closed");
    assert_eq!(updated["description"], "Fire out");
    assert_eq!(updated["code"], "TCK-0001", "code is immutable");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_ticket_rejects_missing_reference(pool: PgPool) {
    let (_, token) = common::seed_verified_account(&pool, "op@example.com").await;
    let app = common::build_test_app(pool);
    let (technician_id, client_id) = seed_refs(app.clone(), &token).await;

    let body = serde_json::json!({
        "code": "TCK-0001",
        "technician_id": technician_id,
        "client_id": client_id,
    });
    let response = post_json_auth(app.clone(), "/api/tickets", &token, body).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let patch = serde_json::json!({ "technician_id": 9999 });
    let response = put_json_auth(app, &format!("/api/tickets/{id}"), &token, patch).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_ticket_then_404(pool: PgPool) {
    let (_, token) = common::seed_verified_account(&pool, "op@example.com").await;
    let app = common::build_test_app(pool);
    let (technician_id, client_id) = seed_refs(app.clone(), &token).await;

    let body = serde_json::json!({
        "code": "TCK-0001",
        "technician_id": technician_id,
        "client_id": client_id,
    });
    let response = post_json_auth(app.clone(), "/api/tickets", &token, body).await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = delete_auth(app.clone(), &format!("/api/tickets/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app, &format!("/api/tickets/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_referenced_entity_conflicts(pool: PgPool) {
    let (_, token) = common::seed_verified_account(&pool, "op@example.com").await;
    let app = common::build_test_app(pool);
    let (technician_id, client_id) = seed_refs(app.clone(), &token).await;

    let body = serde_json::json!({
        "code": "TCK-0001",
        "technician_id": technician_id,
        "client_id": client_id,
    });
    let response = post_json_auth(app.clone(), "/api/tickets", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Open tickets still reference the technician.
    let response =
        delete_auth(app, &format!("/api/technicians/{technician_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn tickets_require_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/tickets").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
