use actix_session::Session;
use actix_web::{HttpResponse, get, post, web};
use common::error::{AppError, Res};
use common::flash;
use common::http::Success;
use common::session::CurrentUser;
use sqlx::SqlitePool;
use views::{CartPage, Layout};

use crate::services;

/// Shows the cart lines with their subtotals and the cart total.
#[get("/cart")]
async fn get_cart(
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    session: Session,
) -> Res<HttpResponse> {
    let cart = services::cart::view_cart(&pool, user.user_id).await?;
    let page = CartPage {
        layout: Layout::new(true, flash::take(&session)?),
        cart,
    };
    views::render(&page)
}

/// Adds one unit of the product to the cart.
///
/// # Output
/// - Success: redirects to `/cart`
/// - Error: unknown products redirect back to the catalog
#[post("/add_to_cart/{product_id}")]
async fn post_add_to_cart(
    path: web::Path<i64>,
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    session: Session,
) -> Res<HttpResponse> {
    match services::cart::add_to_cart(&pool, user.user_id, path.into_inner()).await {
        Ok(_) => Success::redirect("/cart"),
        Err(err @ AppError::ProductNotFound) => flash::recover(&session, err, "/"),
        Err(err) => Err(err),
    }
}

/// Removes a cart line. Lines owned by someone else are left alone.
#[post("/remove_from_cart/{cart_item_id}")]
async fn post_remove_from_cart(
    path: web::Path<i64>,
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
) -> Res<HttpResponse> {
    services::cart::remove_from_cart(&pool, user.user_id, path.into_inner()).await?;
    Success::redirect("/cart")
}
