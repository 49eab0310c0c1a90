//! Capability resolution for the admin HTTP surface.
//!
//! # Design
//! - A matching `x-copykit-admin-key` header grants the manage capability;
//!   anything else degrades to read-only. With no key configured the surface
//!   runs in single-operator local mode and every caller may manage.
//! - The resolved capability travels as a request extension; the page core
//!   makes the actual guard decision.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::http::router::AdminState;
use crate::request::Capability;

/// Header carrying the shared admin key.
pub(crate) const ADMIN_KEY_HEADER: &str = "x-copykit-admin-key";

pub(crate) async fn resolve_capability(
    State(state): State<Arc<AdminState>>,
    mut req: Request,
    next: Next,
) -> Response {
    let presented = req
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|value| value.to_str().ok());
    let capability = match (state.admin_key.as_deref(), presented) {
        (Some(expected), Some(given)) if expected == given => Capability::ManageOptions,
        (None, _) => Capability::ManageOptions,
        _ => Capability::Read,
    };
    req.extensions_mut().insert(capability);
    next.run(req).await
}
