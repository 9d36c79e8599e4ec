//! Integration tests for Keystash.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and apply migrations
//! keystash-cli migrate
//!
//! # Start the server
//! cargo run -p keystash-server
//!
//! # Run integration tests
//! cargo test -p keystash-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `auth_flow` - Registration, login, logout, sessions
//! - `catalog` - Public product listing and stock counts
//! - `admin_api` - Admin-only ingestion, dashboard, and user listing

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("KEYSTASH_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// A random email address that will not collide across test runs.
#[must_use]
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", uuid::Uuid::new_v4())
}

/// HTTP client with a cookie store, so sessions persist between requests.
#[must_use]
pub fn session_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
