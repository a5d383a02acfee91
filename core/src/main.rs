mod cors;

use actix_web::{
    App, HttpServer,
    web::{self},
};
use common::env_config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let is_production = config.environment == "production";
    let origin = config.cors_allowed_origin.clone();
    let rate_limit = config.rate_limit_per_sec;

    // init logger
    if config.console_logging_enabled {
        logger::setup().expect("Failed to set up logger");
    }

    // init db connection
    let pool = db::setup(&config.database_url, is_production)
        .await
        .expect("Failed to set up database");

    // init object storage client
    let storage = storage::Storage::setup(&config.storage).await;

    // start the outbox worker delivering order notifications to the AI server
    tokio::spawn(notifier::run(pool.clone(), config.ai_server.clone()));

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .app_data(web::Data::new(storage.clone()))
            .wrap(limiter::global_middleware(rate_limit))
            .wrap(logger::middleware()) // 3rd
            .wrap(extractor::middleware()) // 2nd
            .wrap(cors::middleware(&origin)) // 1st
            .service(
                web::scope("/api")
                    .service(api_auth::mount_auth())
                    .service(
                        web::scope("")
                            .wrap(api_auth::auth_middleware())
                            .service(api_auth::mount_users())
                            .service(api_orders::mount_upload())
                            .service(api_orders::mount_status())
                            .service(api_billing::mount_services())
                            .service(api_billing::mount_transactions())
                            .service(api_billing::mount_plans())
                            .service(api_billing::mount_payment()),
                    ),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
