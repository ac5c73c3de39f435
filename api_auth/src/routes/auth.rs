use actix_session::Session;
use actix_web::{HttpResponse, get, post, web};
use common::env_config::Config;
use common::error::Res;
use common::http::Success;
use common::flash;
use common::session::{self, CurrentUser};
use sqlx::SqlitePool;
use std::sync::Arc;
use views::{Layout, LoginPage, RegisterPage};

use crate::dtos::auth::{LoginRequest, RegisterRequest};
use crate::services;

/// Renders the login form.
#[get("/login")]
async fn get_login(session: Session, user: Option<CurrentUser>) -> Res<HttpResponse> {
    let layout = Layout::new(user.is_some(), flash::take(&session)?);
    views::render(&LoginPage { layout })
}

/// Checks the submitted credentials and starts a server-side session.
///
/// # Output
/// - Success: redirects to the catalog
/// - Error: redirects back to `/login` with "Invalid username or password"
#[post("/login")]
async fn post_login(
    form: web::Form<LoginRequest>,
    pool: web::Data<SqlitePool>,
    config: web::Data<Arc<Config>>,
    session: Session,
) -> Res<HttpResponse> {
    let pool: &SqlitePool = &pool;

    // a login replaces whatever session the browser still carries
    if let Some(previous) = session::token_from(&session)? {
        services::auth::logout(pool, &previous).await?;
    }

    match services::auth::login(pool, &form, config.session_ttl_hours).await {
        Ok(token) => {
            session.renew();
            session::store_token(&session, &token)?;
            Success::redirect("/")
        }
        Err(err) => flash::recover(&session, err, "/login"),
    }
}

/// Renders the registration form.
#[get("/register")]
async fn get_register(session: Session, user: Option<CurrentUser>) -> Res<HttpResponse> {
    let layout = Layout::new(user.is_some(), flash::take(&session)?);
    views::render(&RegisterPage { layout })
}

/// Creates an account. The user still has to log in afterwards.
///
/// # Output
/// - Success: redirects to `/login`
/// - Error: redirects back to `/register` with "Username already exists"
///   or a validation message
#[post("/register")]
async fn post_register(
    form: web::Form<RegisterRequest>,
    pool: web::Data<SqlitePool>,
    session: Session,
) -> Res<HttpResponse> {
    match services::auth::register(&pool, &form).await {
        Ok(_) => Success::redirect("/login"),
        Err(err) => flash::recover(&session, err, "/register"),
    }
}

/// Ends the session, both the server-side row and the cookie.
#[get("/logout")]
async fn get_logout(
    user: CurrentUser,
    pool: web::Data<SqlitePool>,
    session: Session,
) -> Res<HttpResponse> {
    services::auth::logout(&pool, &user.token).await?;
    session.purge();
    log::info!("User {} logged out", user.user_id);
    Success::redirect("/")
}
