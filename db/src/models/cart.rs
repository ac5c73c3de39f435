use common::money;
use rust_decimal::Decimal;
use serde::Serialize;

use super::product::Product;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct CartItem {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

/// A cart item joined with the product it references.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct CartLine {
    pub cart_item_id: i64,
    pub quantity: i64,
    #[sqlx(flatten)]
    pub product: Product,
}

impl CartLine {
    pub fn line_total_cents(&self) -> i64 {
        self.product.price_cents * self.quantity
    }

    pub fn line_total(&self) -> Decimal {
        money::from_cents(self.line_total_cents())
    }
}

pub fn total_cents(lines: &[CartLine]) -> i64 {
    lines.iter().map(CartLine::line_total_cents).sum()
}

/// Cart contents with their running total. Doubles as the checkout quote.
#[derive(Debug, Clone, Serialize)]
pub struct CartSummary {
    pub items: Vec<CartLine>,
    pub total: Decimal,
}

impl CartSummary {
    pub fn from_lines(items: Vec<CartLine>) -> Self {
        let total = money::from_cents(total_cents(&items));
        CartSummary { items, total }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(cart_item_id: i64, price_cents: i64, quantity: i64) -> CartLine {
        CartLine {
            cart_item_id,
            quantity,
            product: Product {
                id: cart_item_id,
                name: format!("Product {}", cart_item_id),
                price_cents,
                description: None,
                category: "Electronics".to_string(),
                image_url: String::new(),
            },
        }
    }

    #[test]
    fn summary_sums_price_times_quantity() {
        let summary = CartSummary::from_lines(vec![line(1, 1000, 2), line(2, 500, 1)]);
        assert_eq!(summary.total.to_string(), "25.00");
        assert_eq!(summary.item_count(), 3);
        assert_eq!(summary.items[0].line_total().to_string(), "20.00");
    }

    #[test]
    fn cent_amounts_do_not_drift() {
        let lines: Vec<CartLine> = (1..=10).map(|id| line(id, 10, 1)).collect();
        let summary = CartSummary::from_lines(lines);
        assert_eq!(summary.total.to_string(), "1.00");
    }

    #[test]
    fn empty_summary() {
        let summary = CartSummary::from_lines(Vec::new());
        assert!(summary.is_empty());
        assert_eq!(summary.total.to_string(), "0.00");
    }
}
