use chrono::Utc;
use common::error::{AppError, Res};
use db::{
    dtos::order::{OrderCreateRequest, OrderItemCreateRequest},
    models::{
        cart::{CartSummary, total_cents},
        order::Order,
    },
};
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::{dtos::checkout::CheckoutForm, misc::locks::CheckoutLocks};

/// Quote for the current cart. Read-only.
pub async fn initiate_checkout(pool: &SqlitePool, user_id: i64) -> Res<CartSummary> {
    let lines = db::cart::get_cart_lines(pool, user_id).await?;
    if lines.is_empty() {
        return Err(AppError::EmptyCart);
    }
    Ok(CartSummary::from_lines(lines))
}

/// Turns the user's cart into an order.
///
/// Runs under the user's checkout lock and inside one transaction: either the
/// order, all of its items and the emptied cart are committed, or nothing is.
pub async fn commit_checkout(
    pool: &SqlitePool,
    locks: &CheckoutLocks,
    user_id: i64,
    form: &CheckoutForm,
) -> Res<Order> {
    let _guard = locks.acquire(user_id).await;

    let mut tx = begin_checkout(pool).await?;
    let order = place_order(&mut tx, user_id, form).await?;
    tx.commit().await?;

    log::info!(
        "User {} placed order {} totalling {}",
        user_id,
        order.id,
        order.total_amount()
    );
    Ok(order)
}

// `BEGIN IMMEDIATE` takes the write lock before the cart is read. Other
// writers wait on the busy timeout instead of invalidating the snapshot.
async fn begin_checkout(pool: &SqlitePool) -> Res<Transaction<'static, Sqlite>> {
    Ok(pool.begin_with("BEGIN IMMEDIATE").await?)
}

// Dropping `tx` on any error path rolls everything back.
async fn place_order(
    tx: &mut Transaction<'_, Sqlite>,
    user_id: i64,
    form: &CheckoutForm,
) -> Res<Order> {
    let lines = db::cart::get_cart_lines(&mut **tx, user_id).await?;
    if lines.is_empty() {
        return Err(AppError::EmptyCart);
    }
    let shipping = form.validate()?;

    let order = db::order::insert_order(
        &mut **tx,
        OrderCreateRequest {
            user_id,
            date_ordered: Utc::now().naive_utc(),
            total_amount_cents: total_cents(&lines),
            shipping,
        },
    )
    .await?;

    for line in &lines {
        db::order::insert_order_item(
            &mut **tx,
            OrderItemCreateRequest {
                order_id: order.id,
                product_id: line.product.id,
                quantity: line.quantity,
                price_cents: line.product.price_cents,
            },
        )
        .await?;

        let consumed =
            db::cart::delete_consumed_cart_item(&mut **tx, line.cart_item_id, user_id, line.quantity)
                .await?;
        if consumed != 1 {
            log::warn!(
                "Cart item {} of user {} changed during checkout",
                line.cart_item_id,
                user_id
            );
            return Err(AppError::CartChanged);
        }
    }

    Ok(order)
}
