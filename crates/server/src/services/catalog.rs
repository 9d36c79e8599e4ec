//! Catalog query service.

use sqlx::PgPool;

use crate::db::RepositoryError;
use crate::db::products::ProductRepository;
use crate::models::{Product, ProductWithStock};

/// Number of products in the featured view.
const FEATURED_LIMIT: i64 = 6;

/// Read-only catalog queries.
pub struct CatalogService<'a> {
    products: ProductRepository<'a>,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            products: ProductRepository::new(pool),
        }
    }

    /// All products, newest first, annotated with unused-key stock.
    ///
    /// No pagination or filtering; the consuming views filter client-side
    /// over the full set.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_with_stock(&self) -> Result<Vec<ProductWithStock>, RepositoryError> {
        self.products.list_with_stock().await
    }

    /// Up to six products for the featured view.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn featured(&self) -> Result<Vec<Product>, RepositoryError> {
        self.products.featured(FEATURED_LIMIT).await
    }
}
