//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use keystash_core::{OrderId, OrderStatus, UserId};

/// An order created by the checkout flow.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Purchaser identity joined onto a recent order for the dashboard.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OrderUser {
    pub username: String,
    pub email: String,
}

/// An order joined with its purchaser, for the dashboard's recent-orders list.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub order: Order,
    #[sqlx(flatten)]
    pub user: OrderUser,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_order_nests_purchaser() {
        let recent = RecentOrder {
            order: Order {
                id: OrderId::new(1),
                user_id: UserId::new(2),
                total_amount: Decimal::new(15_900, 2),
                status: OrderStatus::Paid,
                created_at: Utc::now(),
            },
            user: OrderUser {
                username: "player".to_owned(),
                email: "player@example.com".to_owned(),
            },
        };
        let json = serde_json::to_value(&recent).unwrap();
        assert_eq!(json["status"], "PAID");
        assert_eq!(json["user"]["username"], "player");
        assert_eq!(json["user"]["email"], "player@example.com");
    }
}
