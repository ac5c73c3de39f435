//! Page templates. Every page extends `base.html`, which needs the
//! [`Layout`] of the request.

use actix_web::HttpResponse;
use askama::Template;
use common::{error::Res, http::Success};
use db::models::{cart::CartSummary, product::Product};

/// Navigation state and pending flash messages shared by every page.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub logged_in: bool,
    pub flashes: Vec<String>,
}

impl Layout {
    pub fn new(logged_in: bool, flashes: Vec<String>) -> Self {
        Layout { logged_in, flashes }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub layout: Layout,
    pub products: Vec<Product>,
    pub categories: Vec<String>,
    pub current_category: String,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub layout: Layout,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPage {
    pub layout: Layout,
}

#[derive(Template)]
#[template(path = "cart.html")]
pub struct CartPage {
    pub layout: Layout,
    pub cart: CartSummary,
}

#[derive(Template)]
#[template(path = "checkout.html")]
pub struct CheckoutPage {
    pub layout: Layout,
    pub quote: CartSummary,
}

pub fn render<T: Template>(page: &T) -> Res<HttpResponse> {
    Success::html(page.render()?)
}

#[cfg(test)]
mod tests {
    use db::models::cart::CartLine;

    use super::*;

    fn product(id: i64, name: &str, price_cents: i64, category: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            price_cents,
            description: Some(format!("About {}", name)),
            category: category.to_string(),
            image_url: format!("https://picsum.photos/seed/{}/500/300", id),
        }
    }

    #[test]
    fn home_marks_selected_category() {
        let page = HomePage {
            layout: Layout::new(true, vec!["Order placed successfully!".to_string()]),
            products: vec![product(1, "Denim Jacket", 7999, "Clothing")],
            categories: vec!["All".to_string(), "Clothing".to_string()],
            current_category: "Clothing".to_string(),
        };
        let html = page.render().unwrap();
        assert!(html.contains("Denim Jacket"));
        assert!(html.contains("$79.99"));
        assert!(html.contains(r#"<option value="Clothing" selected>"#));
        assert!(html.contains("/add_to_cart/1"));
        assert!(html.contains("Order placed successfully!"));
    }

    #[test]
    fn anonymous_home_has_no_cart_buttons() {
        let page = HomePage {
            layout: Layout::default(),
            products: vec![product(1, "Yoga Mat", 2999, "Sports & Outdoors")],
            categories: vec!["All".to_string(), "Sports & Outdoors".to_string()],
            current_category: "All".to_string(),
        };
        let html = page.render().unwrap();
        assert!(!html.contains("/add_to_cart/"));
        assert!(html.contains("/login"));
        assert!(html.contains("Sports &amp; Outdoors") || html.contains("Sports &#38; Outdoors"));
    }

    #[test]
    fn cart_lists_lines_and_total() {
        let cart = CartSummary::from_lines(vec![
            CartLine {
                cart_item_id: 10,
                quantity: 2,
                product: product(1, "Mouse", 1000, "Electronics"),
            },
            CartLine {
                cart_item_id: 11,
                quantity: 1,
                product: product(2, "Cable", 500, "Electronics"),
            },
        ]);
        let html = CartPage {
            layout: Layout::new(true, Vec::new()),
            cart,
        }
        .render()
        .unwrap();
        assert!(html.contains("/remove_from_cart/10"));
        assert!(html.contains("$20.00"));
        assert!(html.contains("Total: $25.00 (3 items)"));
    }

    #[test]
    fn empty_cart_message() {
        let html = CartPage {
            layout: Layout::new(true, Vec::new()),
            cart: CartSummary::from_lines(Vec::new()),
        }
        .render()
        .unwrap();
        assert!(html.contains("Your cart is empty."));
        assert!(!html.contains("/checkout"));
    }
}
