//! Integration tests for the admin API surface.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The server running (cargo run -p keystash-server)
//! - An admin account (keystash-cli admin create), with its credentials in
//!   `KEYSTASH_TEST_ADMIN_EMAIL` / `KEYSTASH_TEST_ADMIN_PASSWORD`
//!
//! Run with: cargo test -p keystash-integration-tests -- --ignored

use keystash_integration_tests::{base_url, session_client, unique_email};
use reqwest::{Client, StatusCode, multipart};
use serde_json::{Value, json};

/// Log in as the admin account named by the environment.
async fn admin_client() -> Client {
    let email = std::env::var("KEYSTASH_TEST_ADMIN_EMAIL")
        .expect("KEYSTASH_TEST_ADMIN_EMAIL not set");
    let password = std::env::var("KEYSTASH_TEST_ADMIN_PASSWORD")
        .expect("KEYSTASH_TEST_ADMIN_PASSWORD not set");

    let client = session_client();
    let resp = client
        .post(format!("{}/login", base_url()))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to login as admin");
    assert_eq!(resp.status(), StatusCode::OK, "admin login failed");

    client
}

fn product_form(title: &str, keys: &str) -> multipart::Form {
    multipart::Form::new()
        .text("title", title.to_owned())
        .text("price", "49.99")
        .text("originalPrice", "59.99")
        .text("category", "RPG")
        .text("isNew", "true")
        .text("keys", keys.to_owned())
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_admin_endpoints_reject_anonymous_and_non_admin() {
    let anonymous = session_client();

    for path in ["/dashboard", "/users"] {
        let resp = anonymous
            .get(format!("{}{path}", base_url()))
            .send()
            .await
            .expect("Failed to reach endpoint");
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{path}");
    }

    // A regular registered user gets 403, not 401
    let user = session_client();
    let resp = user
        .post(format!("{}/register", base_url()))
        .json(&json!({
            "email": unique_email("regular"),
            "username": "regular",
            "password": "correct horse battery staple",
        }))
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.status(), StatusCode::CREATED);

    for path in ["/dashboard", "/users"] {
        let resp = user
            .get(format!("{}{path}", base_url()))
            .send()
            .await
            .expect("Failed to reach endpoint");
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{path}");
    }
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_product_ingestion_with_keys() {
    let admin = admin_client().await;

    let keys = r#"["ITEST-1\nITEST-2\n\nITEST-3"]"#;
    let resp = admin
        .post(format!("{}/products", base_url()))
        .multipart(product_form("Integration Test Game", keys))
        .send()
        .await
        .expect("Failed to ingest product");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Success");

    let created_keys = body["product"]["keys"]
        .as_array()
        .expect("keys missing from response");
    assert_eq!(created_keys.len(), 3);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_product_ingestion_rejects_malformed_keys() {
    let admin = admin_client().await;

    // Raw newline-delimited text instead of a JSON array
    let resp = admin
        .post(format!("{}/products", base_url()))
        .multipart(product_form("Bad Keys Game", "KEY-1\nKEY-2"))
        .send()
        .await
        .expect("Failed to ingest product");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Invalid keys format");
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_dashboard_shape() {
    let admin = admin_client().await;

    let resp = admin
        .get(format!("{}/dashboard", base_url()))
        .send()
        .await
        .expect("Failed to fetch dashboard");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to parse dashboard");
    let stats = &body["stats"];

    // Aggregates are always numbers, even on an empty store
    assert!(stats["totalUsers"].is_number());
    assert!(stats["totalProducts"].is_number());
    assert!(stats["totalOrders"].is_number());
    assert!(stats["totalRevenue"].is_number());

    for order in body["recentOrders"].as_array().expect("recentOrders missing") {
        assert!(order["user"]["username"].is_string());
        assert!(order["user"]["email"].is_string());
    }
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_user_list_never_exposes_passwords() {
    let admin = admin_client().await;

    let resp = admin
        .get(format!("{}/users", base_url()))
        .send()
        .await
        .expect("Failed to list users");
    assert_eq!(resp.status(), StatusCode::OK);

    let users: Vec<Value> = resp.json().await.expect("Failed to parse users");
    assert!(!users.is_empty());

    for user in &users {
        assert!(user.get("password").is_none());
        assert!(user.get("passwordHash").is_none());
    }
}
