use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};

use crate::models::cart::{CartItem, CartLine};

/// Lines of a user's cart in the order they were first added.
pub async fn get_cart_lines<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    user_id: i64,
) -> Res<Vec<CartLine>> {
    sqlx::query_as::<_, CartLine>(
        r#"
        SELECT ci.id AS cart_item_id, ci.quantity, p.*
        FROM cart_items ci
        JOIN products p ON p.id = ci.product_id
        WHERE ci.user_id = ?
        ORDER BY ci.id
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn get_cart_item_by_id<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    cart_item_id: i64,
) -> Res<Option<CartItem>> {
    sqlx::query_as::<_, CartItem>("SELECT * FROM cart_items WHERE id = ?")
        .bind(cart_item_id)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

/// Inserts the (user, product) line with quantity 1, or bumps the existing
/// line by one.
pub async fn upsert_cart_item<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    user_id: i64,
    product_id: i64,
) -> Res<CartItem> {
    sqlx::query_as::<_, CartItem>(
        r#"
        INSERT INTO cart_items (user_id, product_id, quantity)
        VALUES (?, ?, 1)
        ON CONFLICT (user_id, product_id) DO UPDATE SET quantity = cart_items.quantity + 1
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(product_id)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// Deletes the item only when it belongs to `user_id`.
pub async fn delete_cart_item_for_user<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    cart_item_id: i64,
    user_id: i64,
) -> Res<u64> {
    let result = sqlx::query("DELETE FROM cart_items WHERE id = ? AND user_id = ?")
        .bind(cart_item_id)
        .bind(user_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

/// Deletes a line consumed by checkout, only if its quantity is still the
/// one that was ordered.
pub async fn delete_consumed_cart_item<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    cart_item_id: i64,
    user_id: i64,
    quantity: i64,
) -> Res<u64> {
    let result =
        sqlx::query("DELETE FROM cart_items WHERE id = ? AND user_id = ? AND quantity = ?")
            .bind(cart_item_id)
            .bind(user_id)
            .bind(quantity)
            .execute(executor)
            .await?;
    Ok(result.rows_affected())
}
