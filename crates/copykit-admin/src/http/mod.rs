//! HTTP adapter translating web requests into admin page method calls.

/// Capability resolution middleware.
pub mod auth;
/// Error responses for handler failures.
pub mod errors;
/// Request handlers.
pub mod handlers;
/// Router construction and server host.
pub mod router;
