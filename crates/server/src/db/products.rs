//! Product repository for database operations.

use rust_decimal::Decimal;
use sqlx::PgPool;

use super::RepositoryError;
use crate::models::product::{KeyCount, Product, ProductKey, ProductWithKeys, ProductWithStock};

const PRODUCT_COLUMNS: &str =
    "id, title, description, price, original_price, category, image, is_new, created_at";

/// Column values for a product to be created.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub category: String,
    pub image: Option<String>,
    pub is_new: bool,
}

/// Product row joined with its live unused-key count.
#[derive(sqlx::FromRow)]
struct ProductStockRow {
    #[sqlx(flatten)]
    product: Product,
    unused_keys: i64,
}

/// Repository for product and product-key database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a product and its redemption keys in one transaction.
    ///
    /// Duplicate codes are written as separate rows; nothing deduplicates
    /// the submission. A failure on either insert rolls back both.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any insert fails.
    pub async fn create_with_keys(
        &self,
        new: NewProduct,
        codes: &[String],
    ) -> Result<ProductWithKeys, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let product = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (title, description, price, original_price, category, image, is_new) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.price)
        .bind(new.original_price)
        .bind(&new.category)
        .bind(&new.image)
        .bind(new.is_new)
        .fetch_one(&mut *tx)
        .await?;

        let keys = sqlx::query_as::<_, ProductKey>(
            "INSERT INTO product_keys (product_id, code) \
             SELECT $1, code FROM UNNEST($2::text[]) AS t(code) \
             RETURNING id, product_id, code, is_used",
        )
        .bind(product.id)
        .bind(codes)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(ProductWithKeys { product, keys })
    }

    /// List all products, newest first, each annotated with its count of
    /// unused keys. Products with no keys report 0.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_with_stock(&self) -> Result<Vec<ProductWithStock>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductStockRow>(
            "SELECT p.id, p.title, p.description, p.price, p.original_price, \
                    p.category, p.image, p.is_new, p.created_at, \
                    COUNT(k.id) FILTER (WHERE NOT k.is_used) AS unused_keys \
             FROM products p \
             LEFT JOIN product_keys k ON k.product_id = p.id \
             GROUP BY p.id \
             ORDER BY p.created_at DESC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| ProductWithStock {
                product: r.product,
                count: KeyCount {
                    keys: r.unused_keys,
                },
            })
            .collect())
    }

    /// List up to `limit` products for the featured view.
    ///
    /// Selection is just the default catalog ordering; there is no ranking
    /// rule behind "featured".
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn featured(&self, limit: i64) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Count all products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
