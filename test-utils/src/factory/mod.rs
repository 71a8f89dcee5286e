//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let donor = factory::user::create_donor(&db, BloodType::ONegative).await?;
//!
//!     // Create a hospital together with its first admin
//!     let (admin, hospital) = factory::helpers::create_hospital_with_admin(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let donor = factory::user::UserFactory::new(&db)
//!     .blood_type(BloodType::ONegative)
//!     .last_donation_date(Some(Utc::now() - Duration::days(100)))
//!     .location(0.1, 0.1)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create donors, recipients and admins
//! - `hospital` - Create hospitals and attach ordered admins
//! - `blood_request` - Create blood requests
//! - `blood_inventory` - Create inventory records
//! - `notification` - Create notifications
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod blood_inventory;
pub mod blood_request;
pub mod helpers;
pub mod hospital;
pub mod notification;
pub mod user;

pub use blood_inventory::create_inventory;
pub use blood_request::create_request;
pub use hospital::{add_hospital_admin, create_hospital};
pub use notification::create_notification;
pub use user::{create_donor, create_user};
