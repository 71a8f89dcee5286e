mod model;
mod server;

use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config,
    error::AppError,
    scheduler::inventory_expiry,
    service::{
        access::AccessPolicy,
        notification::{DbNotificationGateway, NotificationGateway},
    },
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    let notifications: Arc<dyn NotificationGateway> =
        Arc::new(DbNotificationGateway::new(db.clone()));

    let _scheduler = inventory_expiry::start_scheduler(
        db.clone(),
        notifications.clone(),
        config.low_stock_threshold,
        &config.expiry_sweep_cron,
    )
    .await?;

    let state = AppState::new(
        db,
        notifications,
        AccessPolicy::new(config.allow_recipient_matching),
        config.low_stock_threshold,
    );

    let app = server::router::router()
        .with_state(state)
        .layer(session)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
}
