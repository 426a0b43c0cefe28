//! API Integration Tests

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    middleware, Router,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::util::ServiceExt;

use teller::api;

mod common;

fn test_app(pool: PgPool) -> Router {
    api::create_router()
        .layer(middleware::from_fn(api::middleware::logging_middleware))
        .with_state(pool)
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_account_lifecycle_e2e() {
    let pool = common::setup_test_db().await;
    let app = test_app(pool);

    // 1. Register a person
    let response = app
        .clone()
        .oneshot(post_json(
            "/people",
            json!({
                "name": "Carolina Maia",
                "cpf": "390.533.447-05",
                "born_at": "1992-07-21"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED, "Person creation failed");
    let person = json_body(response).await;
    let person_id = person["id"].as_i64().unwrap();

    // 2. Open an account
    let response = app
        .clone()
        .oneshot(post_json(
            "/accounts",
            json!({ "person_id": person_id, "type_id": 1 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED, "Account creation failed");
    let account = json_body(response).await;
    let account_id = account["id"].as_i64().unwrap();
    assert_eq!(account["balance"], "0.00");
    assert_eq!(account["daily_withdrawal_limit"], "1000.00");
    assert_eq!(account["active"], true);

    // 3. Deposit
    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/accounts/{account_id}/deposit"),
            json!({ "amount": "100.00" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK, "Deposit failed");
    let account = json_body(response).await;
    assert_eq!(account["balance"], "100.00");

    // 4. Withdraw with exact decimal arithmetic
    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/accounts/{account_id}/withdraw"),
            json!({ "amount": "11.01" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK, "Withdraw failed");
    let account = json_body(response).await;
    assert_eq!(account["balance"], "88.99");

    // 5. The committed balance is visible to a fresh fetch
    let response = app
        .clone()
        .oneshot(get(&format!("/accounts/{account_id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let account = json_body(response).await;
    assert_eq!(account["balance"], "88.99");

    // 6. Both movements are in the ledger
    let since = (Utc::now() - Duration::minutes(5))
        .to_rfc3339()
        .replace('+', "%2B");
    let response = app
        .clone()
        .oneshot(get(&format!(
            "/accounts/{account_id}/transactions?since={since}"
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let entries = json_body(response).await;
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["type"], "deposit");
    assert_eq!(entries[0]["value"], "100.00");
    assert_eq!(entries[1]["type"], "withdraw");
    assert_eq!(entries[1]["value"], "11.01");

    // 7. Block the account
    let response = app
        .clone()
        .oneshot(post_json(&format!("/accounts/{account_id}/block"), json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let account = json_body(response).await;
    assert_eq!(account["active"], false);
}

#[tokio::test]
async fn test_register_account_for_missing_person_returns_404() {
    let pool = common::setup_test_db().await;
    let app = test_app(pool);

    let response = app
        .oneshot(post_json(
            "/accounts",
            json!({ "person_id": 10001, "type_id": 1 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error_code"], "not_found");
}

#[tokio::test]
async fn test_non_numeric_deposit_returns_422_naming_the_value() {
    let pool = common::setup_test_db().await;
    let person_id = common::seed_person(&pool).await;
    let account_id =
        common::seed_account(&pool, person_id, rust_decimal_macros::dec!(10.00)).await;
    let app = test_app(pool);

    let response = app
        .oneshot(post_json(
            &format!("/accounts/{account_id}/deposit"),
            json!({ "amount": "@" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["error_code"], "invalid_amount");
    assert!(body["error"].as_str().unwrap().contains('@'));
}

#[tokio::test]
async fn test_overdraw_returns_422_insufficient_balance() {
    let pool = common::setup_test_db().await;
    let person_id = common::seed_person(&pool).await;
    let account_id =
        common::seed_account(&pool, person_id, rust_decimal_macros::dec!(50.00)).await;
    let app = test_app(pool);

    let response = app
        .oneshot(post_json(
            &format!("/accounts/{account_id}/withdraw"),
            json!({ "amount": "50.01" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["error_code"], "insufficient_balance");
}

#[tokio::test]
async fn test_fetch_missing_account_returns_404() {
    let pool = common::setup_test_db().await;
    let app = test_app(pool);

    let response = app.oneshot(get("/accounts/2")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_transactions_for_missing_account_returns_404() {
    let pool = common::setup_test_db().await;
    let app = test_app(pool);

    let since = Utc::now().to_rfc3339().replace('+', "%2B");
    let response = app
        .oneshot(get(&format!("/accounts/99/transactions?since={since}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
