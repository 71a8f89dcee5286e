//! Serializable API types shared by the HTTP layer.
//!
//! These DTOs are what handlers accept and return as JSON. Enum-valued fields travel
//! as their wire labels (`"O-"`, `"critical"`, `"matched"`) and are parsed into the
//! database enums at the controller boundary.

pub mod api;
pub mod inventory;
pub mod notification;
pub mod request;
