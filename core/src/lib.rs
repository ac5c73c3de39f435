use actix_web::{cookie::Key, web};
use common::env_config::Config;

/// Every route of the storefront. Public pages are registered first, the
/// rest sits in one scope behind the auth middleware.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(api_catalog::mount_catalog)
        .configure(api_auth::mount_auth)
        .service(
            web::scope("")
                .wrap(api_auth::auth_middleware())
                .configure(api_auth::mount_session)
                .configure(api_cart::mount_cart)
                .configure(api_checkout::mount_checkout),
        );
}

/// Cookie signing key. Without `SESSION_SECRET` the key is random and
/// sessions end with the process.
pub fn session_key(config: &Config) -> Key {
    match &config.session_secret {
        Some(secret) => Key::derive_from(secret.as_bytes()),
        None => {
            log::warn!("SESSION_SECRET is not set, using a random cookie key");
            Key::generate()
        }
    }
}
