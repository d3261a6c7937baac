//! Application configuration

use anyhow::{Context, Result};
use passguard_core::breach::hibp;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Status-check store URL
    pub database_url: String,
    /// Database name overriding the one in `database_url`
    pub db_name: Option<String>,
    /// Allowed cross-origin sources; `None` allows any origin
    pub cors_origins: Option<Vec<String>>,
    /// Range-lookup base URL
    pub hibp_api_url: String,
    /// Range-lookup timeout in seconds
    pub hibp_timeout_secs: u64,
    /// Client identifier sent to the range-lookup service
    pub hibp_user_agent: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("Invalid PORT")?,
            database_url: std::env::var("DATABASE_URL").context("DATABASE_URL is required")?,
            db_name: std::env::var("DB_NAME").ok().filter(|s| !s.is_empty()),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            ),
            hibp_api_url: std::env::var("HIBP_API_URL")
                .unwrap_or_else(|_| hibp::DEFAULT_BASE_URL.to_string()),
            hibp_timeout_secs: std::env::var("HIBP_TIMEOUT_SECS")
                .unwrap_or_else(|_| hibp::DEFAULT_TIMEOUT.as_secs().to_string())
                .parse()
                .context("Invalid HIBP_TIMEOUT_SECS")?,
            hibp_user_agent: std::env::var("HIBP_USER_AGENT")
                .unwrap_or_else(|_| hibp::DEFAULT_USER_AGENT.to_string()),
        })
    }
}

/// Split a comma-separated origin list; `*` anywhere means any origin
fn parse_origins(raw: &str) -> Option<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        None
    } else {
        Some(origins)
    }
}
