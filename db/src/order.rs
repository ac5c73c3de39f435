use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};

use crate::{
    dtos::order::{OrderCreateRequest, OrderItemCreateRequest},
    models::order::{Order, OrderItem},
};

pub async fn insert_order<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: OrderCreateRequest,
) -> Res<Order> {
    sqlx::query_as::<_, Order>(
        r#"
        INSERT INTO orders (user_id, date_ordered, total_amount_cents, shipping_address, shipping_city, shipping_state, shipping_zip)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(data.user_id)
    .bind(data.date_ordered)
    .bind(data.total_amount_cents)
    .bind(data.shipping.address)
    .bind(data.shipping.city)
    .bind(data.shipping.state)
    .bind(data.shipping.zip)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn insert_order_item<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: OrderItemCreateRequest,
) -> Res<OrderItem> {
    sqlx::query_as::<_, OrderItem>(
        r#"
        INSERT INTO order_items (order_id, product_id, quantity, price_cents)
        VALUES (?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(data.order_id)
    .bind(data.product_id)
    .bind(data.quantity)
    .bind(data.price_cents)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
