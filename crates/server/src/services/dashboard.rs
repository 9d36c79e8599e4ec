//! Dashboard aggregation service.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;

use crate::db::RepositoryError;
use crate::db::orders::OrderRepository;
use crate::db::products::ProductRepository;
use crate::db::users::UserRepository;
use crate::models::RecentOrder;

/// How many recent orders the dashboard shows.
const RECENT_ORDER_LIMIT: i64 = 5;

/// Summary counters for the admin dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_products: i64,
    pub total_orders: i64,
    /// Sum of PAID order totals; 0 when no order has been paid.
    pub total_revenue: Decimal,
}

/// The full dashboard payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub recent_orders: Vec<RecentOrder>,
}

/// Dashboard aggregation over users, products, and orders.
pub struct DashboardService<'a> {
    pool: &'a PgPool,
}

impl<'a> DashboardService<'a> {
    /// Create a new dashboard service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Compute the dashboard summary.
    ///
    /// The five sub-queries are independent and run concurrently; each sees
    /// its own snapshot, which is acceptable since nothing requires them to
    /// reflect the same instant. Any single failure aborts the whole
    /// summary; there is no partial dashboard.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any sub-query fails.
    pub async fn summary(&self) -> Result<DashboardSummary, RepositoryError> {
        let users = UserRepository::new(self.pool);
        let products = ProductRepository::new(self.pool);
        let orders = OrderRepository::new(self.pool);

        let (total_users, total_products, total_orders, total_revenue, recent_orders) = tokio::try_join!(
            users.count(),
            products.count(),
            orders.count(),
            orders.paid_revenue(),
            orders.recent_with_purchaser(RECENT_ORDER_LIMIT),
        )?;

        Ok(DashboardSummary {
            stats: DashboardStats {
                total_users,
                total_products,
                total_orders,
                total_revenue,
            },
            recent_orders,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_revenue_serializes_as_zero() {
        let summary = DashboardSummary {
            stats: DashboardStats {
                total_users: 0,
                total_products: 0,
                total_orders: 0,
                total_revenue: Decimal::ZERO,
            },
            recent_orders: Vec::new(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["stats"]["totalRevenue"], 0.0);
        assert!(!json["stats"]["totalRevenue"].is_null());
        assert!(json["recentOrders"].as_array().unwrap().is_empty());
    }
}
