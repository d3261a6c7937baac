//! k-anonymity password breach checking
//!
//! The password is hashed locally with SHA-1. Only the first five hex
//! characters of the fingerprint are sent to the range-lookup service; the
//! remaining suffix is matched against the returned `SUFFIX:COUNT` lines
//! without leaving the process.

use async_trait::async_trait;
use sha1::{Digest, Sha1};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::domain::PasswordCheckResponse;
use crate::error::{CoreError, Result};

pub mod hibp;

pub use hibp::HibpClient;

/// Number of fingerprint characters disclosed to the lookup service
pub const PREFIX_LEN: usize = 5;

/// Provenance label reported with every result
pub const BREACH_SOURCE: &str = "HaveIBeenPwned";

/// Remote range-lookup provider
///
/// Given a fingerprint prefix, returns the raw `SUFFIX:COUNT` body for
/// every known fingerprint sharing that prefix.
#[async_trait]
pub trait RangeLookup: Send + Sync {
    async fn fetch_range(&self, prefix: &str) -> Result<String>;
}

/// SHA-1 fingerprint of a password, split for k-anonymity lookups
#[derive(Clone, PartialEq, Eq)]
pub struct Fingerprint {
    hex: String,
}

impl Fingerprint {
    /// Hash the UTF-8 bytes of `password` into an uppercase hex fingerprint
    pub fn of(password: &str) -> Self {
        let digest = Sha1::digest(password.as_bytes());
        Self {
            hex: hex::encode_upper(digest),
        }
    }

    /// The part that may be disclosed
    pub fn prefix(&self) -> &str {
        &self.hex[..PREFIX_LEN]
    }

    /// The part that stays local
    pub fn suffix(&self) -> &str {
        &self.hex[PREFIX_LEN..]
    }

    pub fn as_str(&self) -> &str {
        &self.hex
    }
}

// Only the disclosable prefix is ever printed.
impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({}…)", self.prefix())
    }
}

/// Outcome of a breach check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreachOutcome {
    pub is_breached: bool,
    pub breach_count: u64,
}

impl BreachOutcome {
    pub fn found(count: u64) -> Self {
        Self {
            is_breached: count > 0,
            breach_count: count,
        }
    }

    pub fn not_found() -> Self {
        Self::found(0)
    }

    /// Human-readable summary
    pub fn message(&self) -> String {
        if self.is_breached {
            format!(
                "⚠️ This password has been found {} times in data breaches. Do not use this password!",
                group_thousands(self.breach_count)
            )
        } else {
            "✓ This password was not found in any known data breaches.".to_string()
        }
    }

    pub fn into_response(self) -> PasswordCheckResponse {
        PasswordCheckResponse {
            is_breached: self.is_breached,
            breach_count: self.breach_count,
            message: self.message(),
            source: BREACH_SOURCE.to_string(),
        }
    }
}

/// Reject passwords that cannot be checked
pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(CoreError::InvalidInput("Password cannot be empty".to_string()));
    }
    Ok(())
}

/// Scan a range body for `suffix` and return its occurrence count.
///
/// Lines look like `SUFFIX:COUNT` and are CRLF separated. A matching entry
/// with a count of zero is a padding entry and counts as not found.
pub fn find_breach_count(body: &str, suffix: &str) -> Result<u64> {
    for line in body.lines() {
        let Some((entry_suffix, count)) = line.trim().split_once(':') else {
            continue;
        };

        if !entry_suffix.eq_ignore_ascii_case(suffix) {
            continue;
        }

        let count: u64 = count.trim().parse().map_err(|_| {
            CoreError::UnexpectedResponse("Malformed count in range response".to_string())
        })?;

        if count > 0 {
            return Ok(count);
        }
    }

    Ok(0)
}

/// Breach checker backed by a range-lookup provider
#[derive(Clone)]
pub struct BreachChecker {
    lookup: Arc<dyn RangeLookup>,
}

impl BreachChecker {
    pub fn new(lookup: Arc<dyn RangeLookup>) -> Self {
        Self { lookup }
    }

    /// Check whether `password` appears in the breach corpus.
    ///
    /// Empty passwords are rejected before any hashing or network call.
    /// Lookup failures propagate as errors and are never reported as
    /// "not breached".
    pub async fn check(&self, password: &str) -> Result<BreachOutcome> {
        validate_password(password)?;

        let fingerprint = Fingerprint::of(password);
        let body = self.lookup.fetch_range(fingerprint.prefix()).await?;
        let count = find_breach_count(&body, fingerprint.suffix())?;

        debug!(breached = count > 0, "Breach range lookup complete");
        Ok(BreachOutcome::found(count))
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
