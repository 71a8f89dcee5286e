//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through
//! Axum's state extraction. Every field is cheap to clone: the database connection
//! is a pool and the notification gateway sits behind an `Arc`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::service::{access::AccessPolicy, notification::NotificationGateway};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Delivery channel for user notifications.
    ///
    /// Services borrow it for the duration of a request; swapping the
    /// implementation changes how every notification is delivered.
    pub notifications: Arc<dyn NotificationGateway>,

    /// Who may trigger donor matching.
    pub access_policy: AccessPolicy,

    /// Stock level in millilitres below which low stock alerts are sent.
    pub low_stock_threshold: i32,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `notifications` - Gateway used to deliver notifications
    /// - `access_policy` - Matching access rules from configuration
    /// - `low_stock_threshold` - Low stock alert threshold in millilitres
    pub fn new(
        db: DatabaseConnection,
        notifications: Arc<dyn NotificationGateway>,
        access_policy: AccessPolicy,
        low_stock_threshold: i32,
    ) -> Self {
        Self {
            db,
            notifications,
            access_policy,
            low_stock_threshold,
        }
    }
}
