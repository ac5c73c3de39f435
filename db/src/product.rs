use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};

use crate::{dtos::product::ProductCreateRequest, models::product::Product};

pub async fn get_all_products<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
) -> Res<Vec<Product>> {
    sqlx::query_as::<_, Product>("SELECT * FROM products ORDER BY id")
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_products_by_category<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    category: &str,
) -> Res<Vec<Product>> {
    sqlx::query_as::<_, Product>("SELECT * FROM products WHERE category = ? ORDER BY id")
        .bind(category)
        .fetch_all(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_product_by_id<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    product_id: i64,
) -> Res<Option<Product>> {
    sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = ?")
        .bind(product_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Categories in order of first appearance in the catalog.
pub async fn get_distinct_categories<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
) -> Res<Vec<String>> {
    sqlx::query_scalar::<_, String>(
        "SELECT category FROM products GROUP BY category ORDER BY MIN(id)",
    )
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn count_products<'e, E: Executor<'e, Database = Sqlite>>(executor: E) -> Res<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert_product<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: ProductCreateRequest,
) -> Res<Product> {
    sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (name, price_cents, description, category, image_url)
        VALUES (?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(data.name)
    .bind(data.price_cents)
    .bind(data.description)
    .bind(data.category)
    .bind(data.image_url)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
