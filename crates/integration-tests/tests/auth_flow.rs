//! Integration tests for registration, login, and sessions.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The server running (cargo run -p keystash-server)
//!
//! Run with: cargo test -p keystash-integration-tests -- --ignored

use keystash_integration_tests::{base_url, session_client, unique_email};
use reqwest::StatusCode;
use serde_json::{Value, json};

const PASSWORD: &str = "correct horse battery staple";

async fn register(client: &reqwest::Client, email: &str, username: &str) -> reqwest::Response {
    client
        .post(format!("{}/register", base_url()))
        .json(&json!({
            "email": email,
            "username": username,
            "password": PASSWORD,
        }))
        .send()
        .await
        .expect("Failed to register")
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_register_creates_account_and_session() {
    let client = session_client();
    let email = unique_email("register");

    let resp = register(&client, &email, "alice").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Registration successful");
    assert_eq!(body["user"]["email"], email.as_str());
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["role"], "USER");

    // Password material must never appear in any response
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_register_duplicate_email_rejected() {
    let client = session_client();
    let email = unique_email("dup");

    let first = register(&client, &email, "first").await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = register(&client, &email, "second").await;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let body: Value = second.json().await.expect("Failed to parse response");
    assert!(body.get("error").is_some());
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_register_missing_fields_rejected() {
    let client = session_client();

    let resp = client
        .post(format!("{}/register", base_url()))
        .json(&json!({ "email": unique_email("missing") }))
        .send()
        .await
        .expect("Failed to register");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_login_roundtrip() {
    let client = session_client();
    let email = unique_email("login");

    let resp = register(&client, &email, "bob").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // A fresh client has no session; log in from scratch
    let fresh = session_client();
    let resp = fresh
        .post(format!("{}/login", base_url()))
        .json(&json!({ "email": email, "password": PASSWORD }))
        .send()
        .await
        .expect("Failed to login");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["email"], email.as_str());
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_login_wrong_password_rejected() {
    let client = session_client();
    let email = unique_email("wrongpw");

    register(&client, &email, "carol").await;

    let resp = client
        .post(format!("{}/login", base_url()))
        .json(&json!({ "email": email, "password": "not the password" }))
        .send()
        .await
        .expect("Failed to login");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_login_unknown_email_rejected() {
    let client = session_client();

    let resp = client
        .post(format!("{}/login", base_url()))
        .json(&json!({ "email": unique_email("ghost"), "password": PASSWORD }))
        .send()
        .await
        .expect("Failed to login");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running server and database"]
async fn test_logout_ends_session() {
    let client = session_client();
    let email = unique_email("logout");

    register(&client, &email, "dave").await;

    let resp = client
        .post(format!("{}/logout", base_url()))
        .send()
        .await
        .expect("Failed to logout");
    assert_eq!(resp.status(), StatusCode::OK);

    // An admin-only endpoint must now reject us
    let resp = client
        .get(format!("{}/dashboard", base_url()))
        .send()
        .await
        .expect("Failed to reach dashboard");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
