//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Matching, the request lifecycle and the inventory ledger
//! - **Orchestration**: Coordinating repository calls and notification delivery
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Authorization**: Capability checks through [`access::AccessPolicy`]

pub mod access;
pub mod inventory;
pub mod matching;
pub mod notification;
pub mod request;

#[cfg(test)]
mod test;
