use common::error::{AppError, Res};
use db::models::cart::{CartItem, CartSummary};
use sqlx::SqlitePool;

/// Puts one more unit of `product_id` in the user's cart. The first add
/// creates the line, later adds raise its quantity.
pub async fn add_to_cart(pool: &SqlitePool, user_id: i64, product_id: i64) -> Res<CartItem> {
    if db::product::get_product_by_id(pool, product_id).await?.is_none() {
        log::debug!("User {} tried to add unknown product {}", user_id, product_id);
        return Err(AppError::ProductNotFound);
    }

    let item = db::cart::upsert_cart_item(pool, user_id, product_id).await?;
    log::info!(
        "User {} cart: product {} quantity {}",
        user_id,
        product_id,
        item.quantity
    );
    Ok(item)
}

/// Removes the line when it belongs to `user_id`. Foreign or unknown ids
/// change nothing.
pub async fn remove_from_cart(pool: &SqlitePool, user_id: i64, cart_item_id: i64) -> Res<()> {
    let removed = db::cart::delete_cart_item_for_user(pool, cart_item_id, user_id).await?;
    if removed > 0 {
        return Ok(());
    }

    match db::cart::get_cart_item_by_id(pool, cart_item_id).await? {
        Some(item) => log::warn!(
            "User {} tried to remove cart item {} owned by user {}",
            user_id,
            cart_item_id,
            item.user_id
        ),
        None => log::debug!(
            "User {} tried to remove unknown cart item {}",
            user_id,
            cart_item_id
        ),
    }
    Ok(())
}

pub async fn view_cart(pool: &SqlitePool, user_id: i64) -> Res<CartSummary> {
    let lines = db::cart::get_cart_lines(pool, user_id).await?;
    Ok(CartSummary::from_lines(lines))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use db::dtos::{product::ProductCreateRequest, user::UserCreateRequest};
    use rust_decimal::Decimal;

    use super::*;

    async fn insert_user(pool: &SqlitePool, username: &str) -> i64 {
        db::user::insert_user(
            pool,
            UserCreateRequest {
                username: username.to_string(),
                password_hash: "x".to_string(),
                created_at: Utc::now().naive_utc(),
            },
        )
        .await
        .unwrap()
        .id
    }

    async fn insert_product(pool: &SqlitePool, name: &str, price_cents: i64) -> i64 {
        db::product::insert_product(
            pool,
            ProductCreateRequest {
                name: name.to_string(),
                price_cents,
                description: None,
                category: "Electronics".to_string(),
                image_url: "https://picsum.photos/500/300".to_string(),
            },
        )
        .await
        .unwrap()
        .id
    }

    #[actix_web::test]
    async fn repeated_adds_raise_quantity() {
        let pool = db::setup_in_memory().await.unwrap();
        let user = insert_user(&pool, "alice").await;
        let product = insert_product(&pool, "Mouse", 1000).await;

        for _ in 0..3 {
            add_to_cart(&pool, user, product).await.unwrap();
        }

        let cart = view_cart(&pool, user).await.unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 3);
        let item = db::cart::get_cart_item_by_id(&pool, cart.items[0].cart_item_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!((item.user_id, item.product_id), (user, product));
    }

    #[actix_web::test]
    async fn unknown_product_is_rejected() {
        let pool = db::setup_in_memory().await.unwrap();
        let user = insert_user(&pool, "alice").await;

        let err = add_to_cart(&pool, user, 9999).await.unwrap_err();
        assert!(matches!(err, AppError::ProductNotFound));
        assert!(view_cart(&pool, user).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn only_owner_can_remove() {
        let pool = db::setup_in_memory().await.unwrap();
        let alice = insert_user(&pool, "alice").await;
        let bob = insert_user(&pool, "bob").await;
        let product = insert_product(&pool, "Mouse", 1000).await;
        let item = add_to_cart(&pool, alice, product).await.unwrap();

        remove_from_cart(&pool, bob, item.id).await.unwrap();
        assert_eq!(view_cart(&pool, alice).await.unwrap().items.len(), 1);

        remove_from_cart(&pool, alice, item.id).await.unwrap();
        assert!(view_cart(&pool, alice).await.unwrap().is_empty());

        // removing it again is a no-op
        remove_from_cart(&pool, alice, item.id).await.unwrap();
    }

    #[actix_web::test]
    async fn unknown_item_is_ignored() {
        let pool = db::setup_in_memory().await.unwrap();
        let alice = insert_user(&pool, "alice").await;
        let product = insert_product(&pool, "Mouse", 1000).await;
        let item = add_to_cart(&pool, alice, product).await.unwrap();

        remove_from_cart(&pool, alice, item.id + 100).await.unwrap();
        assert!(
            db::cart::get_cart_item_by_id(&pool, item.id + 100)
                .await
                .unwrap()
                .is_none()
        );
        assert_eq!(view_cart(&pool, alice).await.unwrap().items.len(), 1);
    }

    #[actix_web::test]
    async fn cart_total_sums_lines() {
        let pool = db::setup_in_memory().await.unwrap();
        let user = insert_user(&pool, "alice").await;
        let a = insert_product(&pool, "Mouse", 1000).await;
        let b = insert_product(&pool, "Cable", 500).await;

        add_to_cart(&pool, user, a).await.unwrap();
        add_to_cart(&pool, user, a).await.unwrap();
        add_to_cart(&pool, user, b).await.unwrap();

        let cart = view_cart(&pool, user).await.unwrap();
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.items[0].product.name, "Mouse");
        assert_eq!(cart.items[0].line_total(), Decimal::new(2000, 2));
        assert_eq!(cart.total, Decimal::new(2500, 2));
        assert_eq!(cart.item_count(), 3);
    }

    #[actix_web::test]
    async fn carts_are_per_user() {
        let pool = db::setup_in_memory().await.unwrap();
        let alice = insert_user(&pool, "alice").await;
        let bob = insert_user(&pool, "bob").await;
        let product = insert_product(&pool, "Mouse", 1000).await;

        add_to_cart(&pool, alice, product).await.unwrap();
        assert!(view_cart(&pool, bob).await.unwrap().is_empty());
    }
}
