use actix_web::{App, HttpServer, web};
use api_checkout::CheckoutLocks;
use common::env_config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();
    let is_production = config.is_production();
    let request_logging = config.console_logging_enabled;

    // init logger
    if config.console_logging_enabled {
        logger::setup(config.log_level, &config.log_file).expect("Failed to set up logger");
    }

    // init db connection and catalog
    let pool = db::setup(&config.database_url)
        .await
        .expect("Failed to set up database");
    let seeded = db::seed::seed_products(&pool)
        .await
        .expect("Failed to seed the product catalog");
    if seeded > 0 {
        log::info!("Seeded {} products", seeded);
    }

    let key = storefront::session_key(&config);
    // shared by all workers
    let locks = web::Data::new(CheckoutLocks::new());

    log::info!(
        "Starting storefront on {}:{} ({})",
        config.server_host,
        config.server_port,
        config.environment
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .app_data(locks.clone())
            .wrap(logger::middleware(request_logging)) // 3rd
            .wrap(extractor::middleware()) // 2nd
            .wrap(api_auth::session_middleware(key.clone(), is_production)) // 1st
            .configure(storefront::routes)
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
