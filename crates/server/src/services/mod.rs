//! Application services.
//!
//! Each service wraps the repositories it needs and owns one slice of the
//! API's behavior; route handlers stay thin.

pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod ingest;

pub use auth::{AuthError, AuthService};
pub use catalog::CatalogService;
pub use dashboard::DashboardService;
pub use ingest::{IngestError, IngestService};
