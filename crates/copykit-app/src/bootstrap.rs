//! Application bootstrap and environment loading.
//!
//! # Design
//! - All dependencies are constructed here and injected; no ambient globals.
//! - Every environment variable has a default so local runs are zero-config.

use std::net::SocketAddr;
use std::sync::Arc;

use copykit_admin::{AdminPage, AdminServer, MenuRegistry};
use copykit_settings::{SettingsService, SqliteKeyValueStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};

const ENV_DATABASE_URL: &str = "COPYKIT_DATABASE_URL";
const ENV_BIND: &str = "COPYKIT_BIND";
const ENV_ADMIN_KEY: &str = "COPYKIT_ADMIN_KEY";

const DEFAULT_DATABASE_URL: &str = "sqlite://copykit.db";
const DEFAULT_BIND: &str = "127.0.0.1:8752";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration resolved from the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite database URL holding the settings record.
    pub database_url: String,
    /// Socket address the admin surface binds to.
    pub bind: SocketAddr,
    /// Shared admin key; absent means single-operator local mode.
    pub admin_key: Option<String>,
}

impl AppConfig {
    /// Resolve configuration from the environment, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the bind address cannot be parsed.
    pub fn from_env() -> AppResult<Self> {
        let database_url = std::env::var(ENV_DATABASE_URL)
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let bind_raw = std::env::var(ENV_BIND).unwrap_or_else(|_| DEFAULT_BIND.to_string());
        let bind = bind_raw.parse().map_err(|_| AppError::InvalidConfig {
            field: ENV_BIND,
            value: bind_raw.clone(),
        })?;
        let admin_key = std::env::var(ENV_ADMIN_KEY)
            .ok()
            .filter(|key| !key.is_empty());
        Ok(Self {
            database_url,
            bind,
            admin_key,
        })
    }
}

fn init_logging() -> AppResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .map_err(|err| AppError::Telemetry {
            detail: err.to_string(),
        })
}

/// Boot the service from the environment and serve until shutdown.
///
/// # Errors
///
/// Returns an error if configuration, storage, or the server fail.
pub async fn run_app() -> AppResult<()> {
    init_logging()?;
    let config = AppConfig::from_env()?;
    run_app_with(config).await
}

/// Boot sequence that relies entirely on injected configuration to simplify
/// testing.
///
/// # Errors
///
/// Returns an error if the settings store or the server fail.
pub async fn run_app_with(config: AppConfig) -> AppResult<()> {
    let store = SqliteKeyValueStore::connect(&config.database_url)
        .await
        .map_err(|err| AppError::settings("kv.connect", err))?;
    let settings = SettingsService::new(Arc::new(store));
    let page = AdminPage::new(settings);

    let mut menu = MenuRegistry::new();
    page.register_menu_entry(&mut menu);
    for entry in menu.entries() {
        info!(slug = %entry.slug, title = %entry.menu_title, "registered admin menu entry");
    }

    let server = AdminServer::new(page, config.admin_key);
    server
        .serve(config.bind)
        .await
        .map_err(|err| AppError::server("admin.serve", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_address_parses() {
        let bind: SocketAddr = DEFAULT_BIND.parse().expect("default bind");
        assert_eq!(bind.port(), 8752);
    }
}
