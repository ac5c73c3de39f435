use actix_session::Session;
use actix_web::{HttpResponse, get, post, web};
use common::error::{AppError, Res};
use common::flash;
use common::http::Success;
use common::session::CurrentUser;
use sqlx::SqlitePool;
use views::{CheckoutPage, Layout};

use crate::dtos::checkout::CheckoutForm;
use crate::misc::locks::CheckoutLocks;
use crate::services;

pub const ORDER_PLACED: &str = "Order placed successfully!";

/// Shows the quote and the shipping form. An empty cart goes back to `/cart`.
#[get("/checkout")]
async fn get_checkout(
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    session: Session,
) -> Res<HttpResponse> {
    let quote = match services::checkout::initiate_checkout(&pool, user.user_id).await {
        Ok(quote) => quote,
        Err(err) => return flash::recover(&session, err, "/cart"),
    };

    let page = CheckoutPage {
        layout: Layout::new(true, flash::take(&session)?),
        quote,
    };
    views::render(&page)
}

/// Places the order.
///
/// # Output
/// - Success: redirects to the catalog with "Order placed successfully!"
/// - Error: missing shipping fields go back to `/checkout`, an empty or
///   concurrently changed cart goes back to `/cart`
#[post("/process_checkout")]
async fn post_process_checkout(
    form: web::Form<CheckoutForm>,
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    locks: web::Data<CheckoutLocks>,
    session: Session,
) -> Res<HttpResponse> {
    match services::checkout::commit_checkout(&pool, &locks, user.user_id, &form).await {
        Ok(_) => {
            flash::push(&session, ORDER_PLACED)?;
            Success::redirect("/")
        }
        Err(err @ AppError::Validation(_)) => flash::recover(&session, err, "/checkout"),
        Err(err) => flash::recover(&session, err, "/cart"),
    }
}
