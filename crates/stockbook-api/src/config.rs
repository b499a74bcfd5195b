//! Boundary configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, so the demo binary and any adapter share one mechanism.

use std::env;

use serde::{Deserialize, Serialize};

/// Boundary configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Username of the bootstrap admin account.
    pub admin_username: String,

    /// Password of the bootstrap admin account (hashed before storage).
    ///
    /// The default matches the reference system's seeded operator account;
    /// a real deployment MUST override it via environment variable.
    pub admin_password: String,

    /// Whether to seed the sample catalog and movements on startup.
    pub seed_demo_data: bool,

    /// Tracing filter directive, e.g. "info" or "stockbook_store=debug".
    pub log_filter: String,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let config = ApiConfig {
            admin_username: env::var("STOCKBOOK_ADMIN_USERNAME")
                .unwrap_or_else(|_| "admin".to_string()),

            admin_password: env::var("STOCKBOOK_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "password".to_string()),

            seed_demo_data: env::var("STOCKBOOK_SEED_DEMO_DATA")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOCKBOOK_SEED_DEMO_DATA".to_string()))?,

            log_filter: env::var("STOCKBOOK_LOG_FILTER").unwrap_or_else(|_| "info".to_string()),
        };

        if config.admin_username.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "STOCKBOOK_ADMIN_USERNAME".to_string(),
            ));
        }

        Ok(config)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            admin_username: "admin".to_string(),
            admin_password: "password".to_string(),
            seed_demo_data: false,
            log_filter: "info".to_string(),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_admin() {
        let config = ApiConfig::default();
        assert_eq!(config.admin_username, "admin");
        assert_eq!(config.admin_password, "password");
        assert!(!config.seed_demo_data);
    }
}
