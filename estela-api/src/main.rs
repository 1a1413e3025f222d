use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod adapters;
mod app_state;
mod auth;
mod config;
mod domain;
mod i18n;
mod repositories;
mod router;
mod routes;
mod utils;
mod views;

#[tokio::main]
async fn main() {
    dotenvy::from_filename(".env.local").ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "estela_api=debug,tower_http=debug,axum::rejection=trace".into()
        }))
        .with(tracing_subscriber::fmt::layer().with_timer(
            tracing_subscriber::fmt::time::LocalTime::rfc_3339(),
        ))
        .init();

    let config = config::read_config().expect("Failed to read configuration");

    let connection_pool = PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_with(config.database.with_db())
        .await
        .expect("Failed to connect to Postgres");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to run migrations");

    let address = format!("{}:{}", config.application.host, config.application.port);
    let app = router::create(connection_pool, config).await;

    let listener = TcpListener::bind(&address)
        .await
        .expect("Failed to bind address");
    tracing::info!("Listening on {}", address);

    axum::serve(listener, app).await.expect("Server failed");
}
