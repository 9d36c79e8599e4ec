//! Account service: registration and login.

mod error;

pub use error::AuthError;

use sqlx::PgPool;

use keystash_core::Email;

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::User;

/// bcrypt cost factor for stored credentials.
const HASH_COST: u32 = 10;

/// Account service.
///
/// Handles user registration and password login. Session establishment is
/// the route layer's job; this service only proves identity.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new account service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new user.
    ///
    /// All three fields are required; beyond presence and a structural email
    /// check there is no format validation. The plaintext password is hashed
    /// before it reaches the repository and is never stored or returned.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if any input is empty.
    /// Returns `AuthError::InvalidEmail` if the email does not parse.
    /// Returns `AuthError::EmailTaken` if the email is already registered.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let email = Email::parse(email)?;

        // Exact lookup first for the friendly error; the unique constraint
        // still backstops a concurrent registration.
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create(username, &email, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::EmailTaken,
                other => AuthError::Repository(other),
            })?;

        Ok(user)
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UnknownEmail` if no account has this email.
    /// Returns `AuthError::WrongPassword` if the password does not match.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let email = Email::parse(email)?;

        let (user, password_hash) = self
            .users
            .find_for_login(&email)
            .await?
            .ok_or(AuthError::UnknownEmail)?;

        if !verify_password(password, &password_hash)? {
            return Err(AuthError::WrongPassword);
        }

        Ok(user)
    }
}

/// Hash a password with bcrypt at [`HASH_COST`].
fn hash_password(password: &str) -> Result<String, AuthError> {
    bcrypt::hash(password, HASH_COST).map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored bcrypt hash.
fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    bcrypt::verify(password, hash).map_err(|_| AuthError::PasswordHash)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext() {
        let hash = hash_password("hunter2-but-longer").unwrap();
        assert_ne!(hash, "hunter2-but-longer");
        assert!(hash.starts_with("$2"));
    }

    #[test]
    fn test_verify_roundtrip() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hash).unwrap());
        assert!(!verify_password("wrong password", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same input").unwrap();
        let b = hash_password("same input").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_garbage_hash_is_an_error() {
        assert!(verify_password("anything", "not a bcrypt hash").is_err());
    }
}
