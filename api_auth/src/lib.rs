use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{
    cookie::{Key, SameSite},
    web,
};
use common::session::SESSION_COOKIE_NAME;
use middleware::auth::AuthMiddleware;

pub mod routes {
    pub mod auth;
}
pub mod middleware {
    pub mod auth;
}
pub mod services {
    pub mod auth;
    pub mod user;
}
pub mod dtos {
    pub mod auth;
}

/// Public pages: login and registration.
pub fn mount_auth(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::auth::get_login)
        .service(routes::auth::post_login)
        .service(routes::auth::get_register)
        .service(routes::auth::post_register);
}

/// Routes that need a logged-in user.
pub fn mount_session(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::auth::get_logout);
}

// Signed cookie holding the session token and flash messages
pub fn session_middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE_NAME.to_string())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .build()
}

// Auth middleware
pub fn auth_middleware() -> AuthMiddleware {
    AuthMiddleware::new()
}
