//! Session domain types.
//!
//! Authentication state is server-side only: the cookie carries an opaque
//! session ID and this record lives in the `PostgreSQL` session store. A
//! role claim supplied by the client is never consulted for access control.

use serde::{Deserialize, Serialize};

use keystash_core::{Email, UserId, UserRole};

use super::user::User;

/// Session keys used to store data in the session.
pub mod session_keys {
    /// Key for the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}

/// The logged-in user, as stored in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: Email,
    pub username: String,
    pub role: UserRole,
}

impl CurrentUser {
    /// Whether this session may call admin endpoints.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            role: user.role,
        }
    }
}
