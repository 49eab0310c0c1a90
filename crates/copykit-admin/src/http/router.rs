//! Router construction and server host for the admin surface.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::http::auth::resolve_capability;
use crate::http::handlers::{boot_payload, settings_page, settings_submit};
use crate::page::{ADMIN_PAGE_PATH, AdminPage};

/// Path serving the client hand-off payload.
pub const BOOT_PAYLOAD_PATH: &str = "/copykit/boot.json";

/// Errors raised while hosting the admin surface.
#[derive(Debug, Error)]
pub enum AdminServerError {
    /// Binding the listen address failed.
    #[error("failed to bind admin listener")]
    Bind {
        /// Source IO error.
        source: io::Error,
    },
    /// Serving HTTP traffic failed.
    #[error("admin server terminated with an error")]
    Serve {
        /// Source IO error.
        source: io::Error,
    },
}

/// Shared state handed to handlers.
pub(crate) struct AdminState {
    pub(crate) page: AdminPage,
    pub(crate) admin_key: Option<String>,
}

/// Axum router wrapper hosting the admin surface.
pub struct AdminServer {
    router: Router,
}

impl AdminServer {
    /// Wire the admin page into a router with capability resolution and
    /// request tracing.
    #[must_use]
    pub fn new(page: AdminPage, admin_key: Option<String>) -> Self {
        let state = Arc::new(AdminState { page, admin_key });
        let router = Router::new()
            .route(ADMIN_PAGE_PATH, get(settings_page).post(settings_submit))
            .route(BOOT_PAYLOAD_PATH, get(boot_payload))
            .layer(middleware::from_fn_with_state(
                Arc::clone(&state),
                resolve_capability,
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(state);
        Self { router }
    }

    /// Serve the admin surface until the process shuts down.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server fails.
    pub async fn serve(self, addr: SocketAddr) -> Result<(), AdminServerError> {
        info!(%addr, "admin surface listening");
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|err| AdminServerError::Bind { source: err })?;
        axum::serve(listener, self.router.into_make_service())
            .await
            .map_err(|err| AdminServerError::Serve { source: err })?;
        Ok(())
    }
}
