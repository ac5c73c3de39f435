use common::money;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price_cents: i64,
    pub description: Option<String>,
    pub category: String,
    pub image_url: String,
}

impl Product {
    pub fn price(&self) -> Decimal {
        money::from_cents(self.price_cents)
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}
