//! Admin account management commands.
//!
//! # Usage
//!
//! ```bash
//! keystash-cli admin create -e admin@example.com -u admin -p 'strong password'
//! ```
//!
//! # Environment Variables
//!
//! - `KEYSTASH_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection
//!   string

use keystash_core::{Email, UserRole};
use thiserror::Error;

use super::{CommandError, connect};

/// Passwords are hashed at the same cost as the server uses.
const HASH_COST: u32 = 10;

/// Errors that can occur during admin account operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Invalid role.
    #[error("Invalid role: {0}. Valid roles: user, admin")]
    InvalidRole(String),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Account already exists.
    #[error("Account already exists with email: {0}")]
    UserExists(String),

    /// Password hashing failed.
    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Shared command failure (env, database).
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create a new account with the given role.
///
/// # Returns
///
/// The ID of the created account.
///
/// # Errors
///
/// Returns an error on invalid input, a duplicate email, or database
/// failure.
pub async fn create_user(
    email: &str,
    username: &str,
    password: &str,
    role: &str,
) -> Result<i32, AdminError> {
    let role: UserRole = role
        .parse()
        .map_err(|_| AdminError::InvalidRole(role.to_owned()))?;

    let email =
        Email::parse(email).map_err(|_| AdminError::InvalidEmail(email.to_owned()))?;

    let pool = connect().await?;

    tracing::info!("Creating account: {} ({})", email, role);

    let existing: Option<i32> =
        sqlx::query_scalar("SELECT id FROM users WHERE email = $1")
            .bind(email.as_str())
            .fetch_optional(&pool)
            .await?;

    if existing.is_some() {
        return Err(AdminError::UserExists(email.into_inner()));
    }

    let password_hash = bcrypt::hash(password, HASH_COST)?;

    let user_id: i32 = sqlx::query_scalar(
        r"
        INSERT INTO users (email, username, password_hash, role)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        ",
    )
    .bind(email.as_str())
    .bind(username)
    .bind(&password_hash)
    .bind(role)
    .fetch_one(&pool)
    .await?;

    tracing::info!(
        "Account created successfully! ID: {}, Email: {}, Role: {}",
        user_id,
        email,
        role
    );

    Ok(user_id)
}
