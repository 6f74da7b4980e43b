use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use ams_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    external::{AnomalyService, GeocodeService, MailerService},
    handlers,
    middlewares::{AuthMiddleware, create_cors},
    services::*,
    swagger::swagger_config,
    utils::JwtService,
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

    // 加载配置
    let config = Config::from_toml().expect("Failed to load configuration file");

    // 创建数据库连接池
    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    // 运行数据库迁移
    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // 创建JWT服务
    let jwt_service = JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expires_in,
        config.jwt.refresh_token_expires_in,
    );

    // 创建外部服务
    let mailer_service = MailerService::new(config.mailer.clone());
    let geocode_service = GeocodeService::new(config.geocode.clone());
    let anomaly_service = AnomalyService::new(config.anomaly.clone());

    // 创建服务
    let auth_service = AuthService::new(
        pool.clone(),
        jwt_service.clone(),
        mailer_service,
        anomaly_service,
    );
    let rfq_service = RfqService::new(pool.clone());
    let delivery_service = DeliveryService::new(pool.clone());
    let cart_service = CartService::new(pool.clone());
    let product_service = ProductService::new(pool.clone());
    let review_service = ReviewService::new(pool.clone());
    let security_service = SecurityService::new(pool.clone(), geocode_service);

    // 启动HTTP服务器
    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .wrap(AuthMiddleware::new(jwt_service.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(rfq_service.clone()))
            .app_data(web::Data::new(delivery_service.clone()))
            .app_data(web::Data::new(cart_service.clone()))
            .app_data(web::Data::new(product_service.clone()))
            .app_data(web::Data::new(review_service.clone()))
            .app_data(web::Data::new(security_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api/v1")
                    .configure(handlers::auth_config)
                    .configure(handlers::customer_config)
                    .configure(handlers::cart_config)
                    .configure(handlers::rfq_config)
                    .configure(handlers::delivery_config)
                    .configure(handlers::product_config)
                    .configure(handlers::review_config)
                    .configure(handlers::staff_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
