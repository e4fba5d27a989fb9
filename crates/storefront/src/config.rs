//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CAREWELL_DATA_DIR` - Directory for persisted state (default: `./data`)
//! - `CAREWELL_CATALOG` - Path to a JSON catalog file
//! - `CAREWELL_PAGE_SIZE` - Products per catalog page (default: 9)
//! - `CAREWELL_CURRENCY` - ISO 4217 display currency (default: INR)

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use carewell_core::CurrencyCode;

/// Products per page when the environment does not override it.
const DEFAULT_PAGE_SIZE: usize = 9;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory the file-backed key-value store writes into.
    pub data_dir: PathBuf,
    /// JSON catalog file to load, if any.
    pub catalog_path: Option<PathBuf>,
    /// Products per catalog page.
    pub page_size: usize,
    /// Display currency for prices.
    pub currency: CurrencyCode,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            catalog_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            currency: CurrencyCode::INR,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    /// Every variable is optional; missing ones take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(dir) = env::var("CAREWELL_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Ok(path) = env::var("CAREWELL_CATALOG") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Ok(raw) = env::var("CAREWELL_PAGE_SIZE") {
            let page_size: usize = raw.parse().map_err(|_| {
                ConfigError::InvalidEnvVar(
                    "CAREWELL_PAGE_SIZE".to_owned(),
                    format!("expected a positive integer, got {raw:?}"),
                )
            })?;
            if page_size == 0 {
                return Err(ConfigError::InvalidEnvVar(
                    "CAREWELL_PAGE_SIZE".to_owned(),
                    "page size must be at least 1".to_owned(),
                ));
            }
            config.page_size = page_size;
        }

        if let Ok(raw) = env::var("CAREWELL_CURRENCY") {
            config.currency = raw.parse().map_err(|e| {
                ConfigError::InvalidEnvVar("CAREWELL_CURRENCY".to_owned(), format!("{e}"))
            })?;
        }

        Ok(config)
    }
}
