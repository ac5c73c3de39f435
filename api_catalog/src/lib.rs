use actix_web::web;

pub mod routes {
    pub mod catalog;
}
pub mod services {
    pub mod catalog;
}
pub mod dtos {
    pub mod catalog;
}

/// Public product listing.
pub fn mount_catalog(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::catalog::get_home);
}
