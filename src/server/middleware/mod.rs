//! Request-level authentication helpers.
//!
//! - `session` - Typed access to the user id stored in the server-side session
//! - `auth` - `AuthGuard`, which resolves the session user and checks permissions

pub mod auth;
pub mod session;
