//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! a TOML file merged with `BACKOFFICE__`-prefixed environment variables.
//! Every section has defaults so an absent file still yields a usable
//! configuration.

pub mod database;
pub mod logging;
pub mod query;
pub mod tenancy;

use serde::{Deserialize, Serialize};

pub use self::database::{DatabaseConfig, StoreBackend};
pub use self::logging::LoggingConfig;
pub use self::query::{InvalidIdPolicy, QueryConfig, ReferenceScope};
pub use self::tenancy::{TenancyConfig, TenancyMode};

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Document store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// List/query engine settings.
    #[serde(default)]
    pub query: QueryConfig,
    /// Tenant namespace settings.
    #[serde(default)]
    pub tenancy: TenancyConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// The file is optional. Environment variables of the form
    /// `BACKOFFICE__DATABASE__URL` override file values.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("BACKOFFICE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.query.default_limit == 0 || self.query.max_limit == 0 {
            return Err(AppError::configuration(
                "query.default_limit and query.max_limit must be positive",
            ));
        }
        if self.query.default_limit > self.query.max_limit {
            return Err(AppError::configuration(format!(
                "query.default_limit ({}) exceeds query.max_limit ({})",
                self.query.default_limit, self.query.max_limit
            )));
        }
        if self.database.backend == StoreBackend::Postgres && self.database.url.is_empty() {
            return Err(AppError::configuration(
                "database.url is required for the postgres backend",
            ));
        }
        if self.tenancy.mode == TenancyMode::Standalone
            && self.tenancy.standalone_merchant_id.is_empty()
        {
            return Err(AppError::configuration(
                "tenancy.standalone_merchant_id is required in standalone mode",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.database.backend, StoreBackend::Memory);
        assert_eq!(config.query.reference_scope, ReferenceScope::Tenant);
        assert_eq!(config.query.invalid_id_policy, InvalidIdPolicy::Skip);
    }

    #[test]
    fn test_default_limit_above_max_rejected() {
        let mut config = AppConfig::default();
        config.query.default_limit = 500;
        config.query.max_limit = 100;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_postgres_requires_url() {
        let mut config = AppConfig::default();
        config.database.backend = StoreBackend::Postgres;
        config.database.url.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load("does/not/exist").expect("defaults should load");
        assert_eq!(config.query.default_limit, QueryConfig::default().default_limit);
    }
}
