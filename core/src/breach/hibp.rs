//! HaveIBeenPwned Pwned Passwords range client

use async_trait::async_trait;
use std::time::Duration;
use tracing::warn;

use crate::breach::RangeLookup;
use crate::error::{CoreError, Result};

/// Public range API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.pwnedpasswords.com";

/// Client identifier sent with every request
pub const DEFAULT_USER_AGENT: &str = "PassGuard-AI-Password-Checker";

/// Outbound request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP range-lookup client for the Pwned Passwords API
///
/// Every request asks for padded responses so body size does not reveal
/// whether the prefix had real matches.
#[derive(Clone)]
pub struct HibpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HibpClient {
    /// Create a client against `base_url` with the given timeout and user agent
    pub fn new(base_url: impl Into<String>, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Client with the public API defaults
    pub fn with_defaults() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    fn range_url(&self, prefix: &str) -> String {
        format!("{}/range/{}", self.base_url, prefix)
    }
}

#[async_trait]
impl RangeLookup for HibpClient {
    async fn fetch_range(&self, prefix: &str) -> Result<String> {
        let response = self
            .client
            .get(self.range_url(prefix))
            .header("Add-Padding", "true")
            .send()
            .await
            .map_err(unavailable)?
            .error_for_status()
            .map_err(unavailable)?;

        response.text().await.map_err(unavailable)
    }
}

// The request URL carries the fingerprint prefix, so it is stripped before
// the error is logged or surfaced.
fn unavailable(err: reqwest::Error) -> CoreError {
    let err = err.without_url();
    let reason = if err.is_timeout() {
        "request timed out".to_string()
    } else if let Some(status) = err.status() {
        format!("upstream returned {}", status)
    } else {
        err.to_string()
    };

    warn!("Error querying HaveIBeenPwned API: {}", reason);
    CoreError::DependencyUnavailable(reason)
}
