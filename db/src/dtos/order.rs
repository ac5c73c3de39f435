use chrono::NaiveDateTime;

/// Validated shipping destination of an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingAddress {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

pub struct OrderCreateRequest {
    pub user_id: i64,
    pub date_ordered: NaiveDateTime,
    pub total_amount_cents: i64,
    pub shipping: ShippingAddress,
}

pub struct OrderItemCreateRequest {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price_cents: i64,
}
