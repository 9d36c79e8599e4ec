//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during registration and login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required field was missing or empty.
    #[error("username, email and password are required")]
    MissingFields,

    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] keystash_core::EmailError),

    /// Registration attempted with an email that is already registered.
    #[error("email already in use")]
    EmailTaken,

    /// Login attempted with an email that has no account.
    ///
    /// Distinguished from [`Self::WrongPassword`] in message text only;
    /// both map to the same 401 status.
    #[error("no account found with this email")]
    UnknownEmail,

    /// Login attempted with the wrong password.
    #[error("incorrect password")]
    WrongPassword,

    /// Password hashing or verification failed internally.
    #[error("password hashing error")]
    PasswordHash,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}
