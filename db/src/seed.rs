use common::{
    error::{AppError, Res},
    money,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{dtos::product::ProductCreateRequest, product};

const CATALOG_JSON: &str = include_str!("../data/products.json");

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    price: Decimal,
    category: String,
    description: Option<String>,
    image_url: String,
}

/// The initial product catalog.
pub fn catalog() -> Res<Vec<ProductCreateRequest>> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(CATALOG_JSON)
        .map_err(|e| AppError::Internal(format!("Invalid seed catalog. {}", e)))?;

    entries
        .into_iter()
        .map(|entry| {
            let price_cents = money::to_cents(entry.price).ok_or_else(|| {
                AppError::Internal(format!("Price out of range for {}", entry.name))
            })?;
            Ok(ProductCreateRequest {
                name: entry.name,
                price_cents,
                description: entry.description,
                category: entry.category,
                image_url: entry.image_url,
            })
        })
        .collect()
}

/// Loads the catalog when the products table is empty. Returns the number of
/// products inserted, 0 when the catalog was already present.
pub async fn seed_products(pool: &SqlitePool) -> Res<usize> {
    let existing = product::count_products(pool).await?;
    if existing > 0 {
        log::debug!("Catalog already holds {} products, skipping seed", existing);
        return Ok(0);
    }

    let products = catalog()?;
    let count = products.len();

    let mut tx = pool.begin().await?;
    for data in products {
        product::insert_product(&mut *tx, data).await?;
    }
    tx.commit().await?;

    log::info!("Seeded catalog with {} products", count);
    Ok(count)
}
