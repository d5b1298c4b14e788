//! # grade-config
//!
//! Layered configuration loading for the gradebook using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GRADEBOOK_*` prefix, `__` as separator)
//! 2. Project-level `./gradebook.toml`
//! 3. User-level `~/.config/gradebook/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `GRADEBOOK_DATABASE__URL` -> `database.url`,
//! `GRADEBOOK_DATABASE__AUTH_TOKEN` -> `database.auth_token`, etc.
//!
//! ```no_run
//! use grade_config::GradebookConfig;
//!
//! let config = GradebookConfig::load_with_dotenv().expect("config");
//! if config.database.is_remote() {
//!     println!("remote store: {}", config.database.url);
//! }
//! ```

mod database;
mod error;

pub use database::DatabaseConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, resolved against the current directory.
pub const LOCAL_CONFIG_FILE: &str = "gradebook.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GradebookConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl GradebookConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or the result is inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or the result is inconsistent.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or the result is inconsistent.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and callers can add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("GRADEBOOK_").split("__"))
    }

    /// Override the local database path (e.g., from a `--db` flag).
    #[must_use]
    pub fn with_database_path(mut self, path: impl Into<String>) -> Self {
        self.database.path = path.into();
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let db = &self.database;
        if !db.url.is_empty() && db.auth_token.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.auth_token".into(),
                reason: "required when database.url is set".into(),
            });
        }
        if db.url.is_empty() && db.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty for a local store".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gradebook").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_local() {
        let config = GradebookConfig::default();
        assert!(!config.database.is_remote());
        assert_eq!(config.database.path, "gradebook.db");
    }

    #[test]
    fn path_override() {
        let config = GradebookConfig::default().with_database_path(":memory:");
        assert_eq!(config.database.path, ":memory:");
    }

    #[test]
    fn url_without_token_is_rejected() {
        let mut config = GradebookConfig::default();
        config.database.url = "libsql://grades.turso.io".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("database.auth_token"));
    }

    #[test]
    fn blank_local_path_is_rejected() {
        let config = GradebookConfig::default().with_database_path("  ");
        assert!(config.validate().is_err());
    }
}
