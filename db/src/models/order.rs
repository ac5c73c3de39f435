use chrono::NaiveDateTime;
use common::money;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub date_ordered: NaiveDateTime,
    pub total_amount_cents: i64,
    pub shipping_address: String,
    pub shipping_city: String,
    pub shipping_state: String,
    pub shipping_zip: String,
}

impl Order {
    pub fn total_amount(&self) -> Decimal {
        money::from_cents(self.total_amount_cents)
    }
}

/// Price is the product price when the order was placed.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price_cents: i64,
}

