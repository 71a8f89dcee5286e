//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: API endpoints, business rules, data
//! access and background jobs. The backend uses Axum as the web framework and SeaORM
//! for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, authentication and DTO conversion
//! - **Service Layer** (`service/`) - Matching, request lifecycle, inventory and notification rules
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, operation parameters and pure state rules
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database, notification gateway, policy)
//! - **Startup** (`startup`) - Database and session initialization
//! - **Router** (`router`) - Route table and OpenAPI documentation
//! - **Scheduler** (`scheduler/`) - Cron jobs such as the expired stock sweep
//!
//! # Request Flow
//!
//! 1. **Router** routes the HTTP request to a controller
//! 2. **Controller** authenticates through `AuthGuard` and converts the DTO to params
//! 3. **Service** applies business rules and calls the data layer
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model back to a DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
