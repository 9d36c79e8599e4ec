//! HTTP middleware: sessions and authentication extractors.

pub mod auth;
pub mod session;

pub use auth::{OptionalAuth, RequireAdmin, RequireAuth};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
