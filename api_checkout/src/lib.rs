use actix_web::web;

pub mod routes {
    pub mod checkout;
}
pub mod services {
    pub mod checkout;
}
pub mod dtos {
    pub mod checkout;
}
pub mod misc {
    pub mod locks;
}

pub use misc::locks::CheckoutLocks;

/// Quote and commit, behind the auth middleware. Needs `CheckoutLocks` in
/// the app data.
pub fn mount_checkout(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::checkout::get_checkout)
        .service(routes::checkout::post_process_checkout);
}
