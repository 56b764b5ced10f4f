use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local;
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use nro_admin_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    handlers,
    middlewares::create_cors,
    services::*,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config = Config::from_toml().expect("Failed to load configuration file");

    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let account_service = AccountService::new(pool.clone());
    let gift_code_service = GiftCodeService::new(pool.clone());
    let milestone_service = MilestoneService::new(pool.clone());
    let shop_service = ShopService::new(pool.clone());
    let catalog_service = CatalogService::new(pool.clone());

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(account_service.clone()))
            .app_data(web::Data::new(gift_code_service.clone()))
            .app_data(web::Data::new(milestone_service.clone()))
            .app_data(web::Data::new(shop_service.clone()))
            .app_data(web::Data::new(catalog_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api/admin")
                    .configure(handlers::accounts_config)
                    .configure(handlers::gift_codes_config)
                    .configure(handlers::milestones_config)
                    .configure(handlers::shop_config)
                    .configure(handlers::catalog_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
