use std::path::PathBuf;

use anyhow::{Result, anyhow};
use axum_extra::extract::cookie::Key;

/// Fallback used when SECRET_KEY is not set; fine for local runs, not for
/// anything reachable from outside.
const DEV_SECRET_KEY: &str = "miniblog-dev-secret-change-me-before-deploy";

const DEFAULT_DATA_FILE: &str = "data/data.json";
const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:5001";

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) secret_key: String,
    pub(crate) data_file: PathBuf,
    pub(crate) http_addr: String,
    pub(crate) log_level: String,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        let secret_key =
            std::env::var("SECRET_KEY").unwrap_or_else(|_| DEV_SECRET_KEY.to_string());
        if secret_key.chars().count() < 32 {
            return Err(anyhow!("SECRET_KEY must be at least 32 characters"));
        }

        let data_file = PathBuf::from(
            std::env::var("DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string()),
        );
        let http_addr =
            std::env::var("HTTP_ADDR").unwrap_or_else(|_| DEFAULT_HTTP_ADDR.to_string());
        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            secret_key,
            data_file,
            http_addr,
            log_level,
        })
    }

    pub(crate) fn uses_dev_secret(&self) -> bool {
        self.secret_key == DEV_SECRET_KEY
    }

    /// Key that signs the flash cookie, derived from SECRET_KEY.
    pub(crate) fn cookie_key(&self) -> Key {
        Key::derive_from(self.secret_key.as_bytes())
    }
}
