//! # Design
//!
//! - Centralize application-level errors for bootstrap.
//! - Keep error messages constant while carrying context fields for
//!   debugging; preserve source errors without re-logging at call sites.

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Settings store operations failed.
    #[error("settings operation failed")]
    Settings {
        /// Operation identifier.
        operation: &'static str,
        /// Source settings error.
        source: copykit_settings::SettingsError,
    },
    /// Admin server operations failed.
    #[error("admin server operation failed")]
    Server {
        /// Operation identifier.
        operation: &'static str,
        /// Source server error.
        source: copykit_admin::AdminServerError,
    },
    /// The tracing subscriber could not be installed.
    #[error("telemetry initialization failed")]
    Telemetry {
        /// Failure detail.
        detail: String,
    },
    /// An environment value failed to parse.
    #[error("invalid configuration")]
    InvalidConfig {
        /// Environment variable that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}

impl AppError {
    pub(crate) const fn settings(
        operation: &'static str,
        source: copykit_settings::SettingsError,
    ) -> Self {
        Self::Settings { operation, source }
    }

    pub(crate) const fn server(
        operation: &'static str,
        source: copykit_admin::AdminServerError,
    ) -> Self {
        Self::Server { operation, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn app_error_helpers_build_variants() {
        let server = AppError::server(
            "admin.serve",
            copykit_admin::AdminServerError::Serve {
                source: io::Error::other("io"),
            },
        );
        assert!(matches!(server, AppError::Server { .. }));

        let Err(json_error) = serde_json::from_str::<serde_json::Value>("invalid") else {
            panic!("expected invalid json");
        };
        let settings = AppError::settings(
            "kv.put",
            copykit_settings::SettingsError::Serialize { source: json_error },
        );
        assert!(matches!(settings, AppError::Settings { .. }));
    }
}
