use actix_session::Session;
use actix_web::{HttpResponse, get, web};
use common::error::Res;
use common::flash;
use common::session::CurrentUser;
use sqlx::SqlitePool;
use views::{HomePage, Layout};

use crate::dtos::catalog::CatalogQuery;
use crate::services;

/// Lists the catalog, optionally narrowed with `?category=<name>`.
/// An unknown category renders an empty listing.
#[get("/")]
async fn get_home(
    query: web::Query<CatalogQuery>,
    pool: web::Data<SqlitePool>,
    session: Session,
    user: Option<CurrentUser>,
) -> Res<HttpResponse> {
    let current_category = query.selected().to_string();
    let products = services::catalog::list_products(&pool, Some(current_category.as_str())).await?;
    let categories = services::catalog::category_choices(&pool).await?;

    let page = HomePage {
        layout: Layout::new(user.is_some(), flash::take(&session)?),
        products,
        categories,
        current_category,
    };
    views::render(&page)
}
