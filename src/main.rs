use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Result;

use venue_catalog::database::{init_database, run_migrations};
use venue_catalog::middleware::RequestIdMiddleware;
use venue_catalog::{Config, VenueCatalogService, routes};

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    log::info!("Starting Venue Catalog API server...");

    let config = Config::from_env()?;
    log::info!(
        "Configuration loaded (environment: {})",
        config.environment
    );

    let pool = init_database(&config.database_url, config.database_max_connections).await?;
    if config.run_migrations {
        run_migrations(&pool).await?;
    }
    log::info!("Database initialized");

    let catalog_data = web::Data::new(VenueCatalogService::new(pool.clone()));
    let pool_data = web::Data::new(pool);

    if config.is_production() && config.allowed_origin.contains("localhost") {
        log::warn!(
            "CORS_ALLOWED_ORIGIN is {} in production; browsers elsewhere will be rejected",
            config.allowed_origin
        );
    }

    let server_address = config.server_address();
    log::info!("Server starting on http://{}", server_address);

    HttpServer::new(move || {
        let cors = if config.is_development() {
            Cors::permissive()
        } else {
            Cors::default()
                .allowed_origin(&config.allowed_origin)
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allowed_headers(vec!["Content-Type", "Accept", "X-Correlation-ID"])
                .max_age(3600)
        };

        App::new()
            .app_data(catalog_data.clone())
            .app_data(pool_data.clone())
            .wrap(cors)
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T correlation_id=%{x-correlation-id}o"#,
            ))
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
