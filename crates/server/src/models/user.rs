//! User domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use keystash_core::{Email, UserId, UserRole};

/// A registered user.
///
/// The password hash deliberately lives outside this type; it is only ever
/// surfaced by `UserRepository::find_for_login` and never serialized.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address (unique).
    pub email: Email,
    /// Display name chosen at registration.
    pub username: String,
    /// Authorization tier.
    pub role: UserRole,
    /// Store-credit balance.
    pub balance: Decimal,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}
