//! API middleware components

pub mod auth;
pub mod logging;

pub use auth::AuthUser;
pub use logging::request_logging;
