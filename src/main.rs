use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chargetax::config::Config;
use chargetax::middleware::{RateLimiter, RequestId, SessionAuth};
use chargetax::modules::health::controllers::configure_health_routes;
use chargetax::modules::notifications::controllers::configure_notification_routes;
use chargetax::modules::notifications::services::OverdueChecker;
use chargetax::modules::reminders::controllers::configure_reminder_routes;
use chargetax::modules::stations::controllers::configure_station_routes;
use chargetax::modules::statistics::controllers::configure_statistics_routes;
use chargetax::modules::tax_types::controllers::configure_tax_type_routes;
use chargetax::modules::taxes::controllers::configure_tax_routes;
use chargetax::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chargetax=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting ChargeTax Tax Obligation Management");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    let state = AppState::new(db_pool, &config);

    // Background overdue-notice scanner
    let checker = Arc::new(OverdueChecker::new(
        state.notifications.clone(),
        Duration::from_secs(config.app.overdue_check_secs),
    ));
    tokio::spawn(checker.start());

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let rate_limit = config.security.rate_limit_per_minute;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(SessionAuth::new(state.users.clone()))
            .wrap(RateLimiter::new(rate_limit))
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .configure(configure_health_routes)
            .configure(configure_station_routes)
            .configure(configure_tax_type_routes)
            .configure(configure_tax_routes)
            .configure(configure_reminder_routes)
            .configure(configure_notification_routes)
            .configure(configure_statistics_routes)
    })
    .workers(workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
