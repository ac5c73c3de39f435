use actix_web::web;

pub mod routes {
    pub mod cart;
}
pub mod services {
    pub mod cart;
}

/// Cart pages, all of them behind the auth middleware.
pub fn mount_cart(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::cart::get_cart)
        .service(routes::cart::post_add_to_cart)
        .service(routes::cart::post_remove_from_cart);
}
