//! Configuration module for the users admin core.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST server exposing `/users`
    pub api_base_url: String,
    /// Per-request timeout for the store client
    pub request_timeout: Duration,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("USERS_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3001".to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = env::var("USERS_API_TIMEOUT_SECS").unwrap_or_else(|_| "10".to_string());
        let timeout_secs: u64 = timeout_secs.parse().map_err(|_| {
            AppError::Config(format!("Invalid USERS_API_TIMEOUT_SECS: {}", timeout_secs))
        })?;
        if timeout_secs == 0 {
            return Err(AppError::Config(
                "USERS_API_TIMEOUT_SECS must be positive".to_string(),
            ));
        }

        let log_level = env::var("USERS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            api_base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            log_level,
        })
    }
}
