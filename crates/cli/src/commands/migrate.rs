//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! keystash-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `KEYSTASH_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection
//!   string
//!
//! Migration files live in `crates/server/migrations/` and are embedded
//! into this binary at compile time.

use super::{CommandError, connect};

/// Run database migrations.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the connection fails,
/// or a migration fails to apply.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
