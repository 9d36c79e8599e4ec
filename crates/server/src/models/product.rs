//! Product and redemption-key domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use keystash_core::{ProductId, ProductKeyId};

/// A catalog entry.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Optional long description.
    pub description: Option<String>,
    /// Current selling price.
    pub price: Decimal,
    /// Pre-discount price, when the product is on sale.
    pub original_price: Option<Decimal>,
    /// Category label (free text from a fixed admin-form set).
    pub category: String,
    /// Served path of the uploaded image, e.g. `/uploads/170055..._cover.png`.
    pub image: Option<String>,
    /// "New release" badge flag.
    pub is_new: bool,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
}

/// A single redeemable code belonging to a product.
///
/// Consumed (`is_used = true`) by the out-of-scope redemption step.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProductKey {
    pub id: ProductKeyId,
    pub product_id: ProductId,
    pub code: String,
    pub is_used: bool,
}

/// A product together with its key rows, as returned from ingestion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithKeys {
    #[serde(flatten)]
    pub product: Product,
    pub keys: Vec<ProductKey>,
}

/// Unused-key count nested under `_count`, mirroring the catalog payload
/// shape consumed by the shop views.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KeyCount {
    pub keys: i64,
}

/// A product annotated with its live unused-key count.
///
/// Stock is always computed at read time from `product_keys`; it is never
/// stored on the product row.
#[derive(Debug, Clone, Serialize)]
pub struct ProductWithStock {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "_count")]
    pub count: KeyCount,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use keystash_core::ProductId;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new(10),
            title: "Game A".to_owned(),
            description: None,
            price: Decimal::new(10_000, 2),
            original_price: None,
            category: "Action".to_owned(),
            image: None,
            is_new: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_stock_payload_shape() {
        let annotated = ProductWithStock {
            product: sample_product(),
            count: KeyCount { keys: 3 },
        };
        let json = serde_json::to_value(&annotated).unwrap();
        assert_eq!(json["_count"]["keys"], 3);
        // Flattened product fields sit at the top level, camelCased.
        assert_eq!(json["title"], "Game A");
        assert_eq!(json["isNew"], true);
        assert!(json.get("originalPrice").is_some());
    }

    #[test]
    fn test_zero_stock_is_zero_not_null() {
        let annotated = ProductWithStock {
            product: sample_product(),
            count: KeyCount { keys: 0 },
        };
        let json = serde_json::to_value(&annotated).unwrap();
        assert_eq!(json["_count"]["keys"], 0);
        assert!(!json["_count"]["keys"].is_null());
    }

    #[test]
    fn test_ingestion_payload_includes_keys() {
        let created = ProductWithKeys {
            product: sample_product(),
            keys: vec![ProductKey {
                id: ProductKeyId::new(1),
                product_id: ProductId::new(10),
                code: "AAAA-BBBB".to_owned(),
                is_used: false,
            }],
        };
        let json = serde_json::to_value(&created).unwrap();
        assert_eq!(json["keys"][0]["code"], "AAAA-BBBB");
        assert_eq!(json["keys"][0]["isUsed"], false);
    }
}
