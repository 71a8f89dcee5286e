//! HTTP handlers.
//!
//! Each handler authenticates through `AuthGuard`, converts the request DTO into
//! domain parameters, delegates to a service and converts the result back into a
//! DTO. Handlers carry `utoipa` annotations that feed the generated OpenAPI
//! document served at `/api/docs`.

pub mod inventory;
pub mod notification;
pub mod request;
