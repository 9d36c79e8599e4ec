//! Seed the catalog with demo products and redemption keys.
//!
//! Intended for local development; refuses to run against a catalog that
//! already has products.

use rust_decimal::Decimal;
use sqlx::PgPool;

use super::{CommandError, connect};

struct DemoProduct {
    title: &'static str,
    description: &'static str,
    price: Decimal,
    original_price: Option<Decimal>,
    category: &'static str,
    is_new: bool,
    keys: &'static [&'static str],
}

fn demo_products() -> Vec<DemoProduct> {
    vec![
        DemoProduct {
            title: "Starfall Odyssey",
            description: "Open-world space exploration RPG.",
            price: Decimal::new(49_99, 2),
            original_price: Some(Decimal::new(59_99, 2)),
            category: "RPG",
            is_new: true,
            keys: &["SFO-AAAA-0001", "SFO-AAAA-0002", "SFO-AAAA-0003"],
        },
        DemoProduct {
            title: "Circuit Rally Championship",
            description: "Arcade rally racing with seasonal events.",
            price: Decimal::new(29_99, 2),
            original_price: None,
            category: "Racing",
            is_new: false,
            keys: &["CRC-BBBB-0001", "CRC-BBBB-0002"],
        },
        DemoProduct {
            title: "Dungeon Forge",
            description: "Co-op dungeon crawler and base builder.",
            price: Decimal::new(19_99, 2),
            original_price: Some(Decimal::new(24_99, 2)),
            category: "Strategy",
            is_new: true,
            keys: &[],
        },
    ]
}

/// Seed demo products and keys.
///
/// # Errors
///
/// Returns an error if the database URL is missing, the catalog is not
/// empty, or database writes fail.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let pool = connect().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&pool)
        .await
        .map_err(CommandError::from)?;

    if existing > 0 {
        return Err(format!("Catalog already has {existing} products; not seeding").into());
    }

    let products = demo_products();
    let mut total_keys = 0usize;

    for product in &products {
        total_keys += insert_product(&pool, product).await?;
    }

    tracing::info!(
        "Seeding complete! {} products, {} keys",
        products.len(),
        total_keys
    );

    Ok(())
}

async fn insert_product(pool: &PgPool, product: &DemoProduct) -> Result<usize, CommandError> {
    let mut tx = pool.begin().await?;

    let product_id: i32 = sqlx::query_scalar(
        r"
        INSERT INTO products (title, description, price, original_price, category, is_new)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        ",
    )
    .bind(product.title)
    .bind(product.description)
    .bind(product.price)
    .bind(product.original_price)
    .bind(product.category)
    .bind(product.is_new)
    .fetch_one(&mut *tx)
    .await?;

    for code in product.keys {
        sqlx::query("INSERT INTO product_keys (product_id, code) VALUES ($1, $2)")
            .bind(product_id)
            .bind(code)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    tracing::info!(
        "Seeded {:?} (id {}) with {} keys",
        product.title,
        product_id,
        product.keys.len()
    );

    Ok(product.keys.len())
}
