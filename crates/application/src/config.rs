//! Harness configuration.
//!
//! The harness takes no command-line flags. The target service and the
//! per-request timeout come from the environment:
//!
//! | variable | default |
//! |---|---|
//! | `FLOWCHECK_BASE_URL` | [`DEFAULT_BASE_URL`] |
//! | `FLOWCHECK_TIMEOUT_SECS` | `10` |

use std::time::Duration;

use flowcheck_domain::{DomainError, DomainResult};
use url::Url;

/// Deployment probed when no override is set.
pub const DEFAULT_BASE_URL: &str = "https://focusflow-study-2.preview.emergentagent.com";

/// Per-request timeout used when no override is set.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable holding the service root URL.
pub const BASE_URL_VAR: &str = "FLOWCHECK_BASE_URL";

/// Environment variable holding the per-request timeout in seconds.
pub const TIMEOUT_VAR: &str = "FLOWCHECK_TIMEOUT_SECS";

/// Settings for one harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    base_url: Url,
    timeout: Duration,
}

impl HarnessConfig {
    /// Creates a configuration for the given service root.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` unless `base_url` is an absolute
    /// `http` or `https` URL without query or fragment.
    pub fn new(base_url: &str, timeout: Duration) -> DomainResult<Self> {
        let parsed = Url::parse(base_url.trim())
            .map_err(|e| DomainError::InvalidUrl(format!("{e}: {base_url}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(format!(
                "unsupported scheme '{}': {base_url}",
                parsed.scheme()
            )));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(DomainError::InvalidUrl(format!(
                "base URL must not carry a query or fragment: {base_url}"
            )));
        }
        if timeout.is_zero() {
            return Err(DomainError::InvalidConfig {
                key: TIMEOUT_VAR.to_string(),
                reason: "timeout must be greater than zero".to_string(),
            });
        }
        Ok(Self {
            base_url: parsed,
            timeout,
        })
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unusable value.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Unset and blank variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = read(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = match read(TIMEOUT_VAR) {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| DomainError::InvalidConfig {
                        key: TIMEOUT_VAR.to_string(),
                        reason: format!("'{raw}' is not a whole number of seconds: {e}"),
                    })?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Self::new(&base_url, timeout)
    }

    /// The service root, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// The API base every request path is joined onto (`<root>/api`).
    #[must_use]
    pub fn api_base(&self) -> String {
        format!("{}/api", self.base_url())
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
