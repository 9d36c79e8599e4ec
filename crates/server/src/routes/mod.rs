//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health              - Liveness check
//! GET  /health/ready        - Readiness check (verifies database)
//!
//! # Accounts
//! POST /register            - Register (establishes a session)
//! POST /login               - Login (establishes a session)
//! POST /logout              - Logout
//!
//! # Catalog
//! GET  /products            - All products with live unused-key counts
//! GET  /products/featured   - Up to six products for the featured view
//!
//! # Admin (ADMIN session required)
//! POST /products            - Ingest a product + keys + optional image
//! GET  /dashboard           - Aggregated stats and recent orders
//! GET  /users               - All users (passwords never included)
//!
//! # Static
//! GET  /uploads/*           - Uploaded product images (ServeDir, in main)
//! ```

pub mod auth;
pub mod dashboard;
pub mod products;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/products", get(products::list).post(products::create))
        .route("/products/featured", get(products::featured))
        .route("/dashboard", get(dashboard::summary))
        .route("/users", get(users::list))
}
