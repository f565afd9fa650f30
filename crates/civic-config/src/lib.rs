//! # civic-config
//!
//! Layered configuration loading for the civic issue portal using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CIVIC_*` prefix, `__` as separator)
//! 2. Project-level `.civic/config.toml`
//! 3. User-level `~/.config/civic/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CIVIC_STORAGE__DB_PATH` -> `storage.db_path`,
//! `CIVIC_PORTAL__ITEMS_PER_PAGE` -> `portal.items_per_page`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use civic_config::CivicConfig;
//!
//! let config = CivicConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.storage.db_path);
//! ```

mod access;
mod error;
mod portal;
mod storage;

pub use access::AccessConfig;
pub use error::ConfigError;
pub use portal::PortalSettings;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CivicConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub portal: PortalSettings,
    #[serde(default)]
    pub access: AccessConfig,
}

impl CivicConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`. Use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is out
    /// of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".civic/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("CIVIC_").split("__"))
    }

    /// Reject values that would make list paging or analytics meaningless.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.portal.items_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                field: "portal.items_per_page".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.storage.db_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.db_path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("civic").join("config.toml"))
    }
}
