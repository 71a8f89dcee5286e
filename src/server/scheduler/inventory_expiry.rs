use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::{inventory::InventoryService, notification::NotificationGateway},
};

/// Starts the expired stock sweep.
///
/// On every tick of `cron` the sweep deletes inventory records whose expiry date has
/// passed at every hospital and alerts each affected hospital's admin. A failed sweep
/// is logged and retried on the next tick.
///
/// # Arguments
/// - `db`: Database connection
/// - `gateway`: Delivery channel for expiry alerts
/// - `low_stock_threshold`: Alert threshold passed through to the inventory service
/// - `cron`: Six-field cron expression
pub async fn start_scheduler(
    db: DatabaseConnection,
    gateway: Arc<dyn NotificationGateway>,
    low_stock_threshold: i32,
    cron: &str,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let db = db.clone();
        let gateway = gateway.clone();

        Box::pin(async move {
            if let Err(e) = sweep_expired_stock(&db, gateway.as_ref(), low_stock_threshold).await
            {
                tracing::error!("Error sweeping expired inventory: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Inventory expiry scheduler started ({})", cron);

    Ok(scheduler)
}

async fn sweep_expired_stock(
    db: &DatabaseConnection,
    gateway: &dyn NotificationGateway,
    low_stock_threshold: i32,
) -> Result<(), AppError> {
    let removed = InventoryService::new(db, gateway, low_stock_threshold)
        .expire_all(Utc::now())
        .await?;

    tracing::debug!("Expiry sweep removed {} record(s)", removed);

    Ok(())
}
