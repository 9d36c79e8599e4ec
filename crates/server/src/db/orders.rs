//! Order repository for database operations.
//!
//! Orders are written by the out-of-scope checkout flow; this repository
//! only reads them for the dashboard.

use rust_decimal::Decimal;
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::RecentOrder;

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Count all orders regardless of status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// Sum of `total_amount` over PAID orders.
    ///
    /// Coalesced to 0 when there are no paid orders, so the dashboard never
    /// reports null revenue.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn paid_revenue(&self) -> Result<Decimal, RepositoryError> {
        let revenue: Decimal = sqlx::query_scalar(
            "SELECT COALESCE(SUM(total_amount), 0) FROM orders WHERE status = 'PAID'",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(revenue)
    }

    /// The `limit` most recent orders, each joined with the purchaser's
    /// username and email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn recent_with_purchaser(
        &self,
        limit: i64,
    ) -> Result<Vec<RecentOrder>, RepositoryError> {
        let orders = sqlx::query_as::<_, RecentOrder>(
            "SELECT o.id, o.user_id, o.total_amount, o.status, o.created_at, \
                    u.username, u.email \
             FROM orders o \
             JOIN users u ON u.id = o.user_id \
             ORDER BY o.created_at DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(orders)
    }
}
