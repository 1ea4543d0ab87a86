//! Request specification type

use url::Url;

use super::HttpMethod;
use crate::error::{DomainError, DomainResult};

/// A single HTTP call against the API under test.
///
/// Paths are relative to the API base (for example `/health`) and are
/// resolved with [`RequestSpec::url_for`] at send time.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    /// HTTP method.
    pub method: HttpMethod,
    /// Path relative to the API base, starting with `/`.
    pub path: String,
    /// Optional JSON body, sent with `Content-Type: application/json`.
    pub json: Option<serde_json::Value>,
}

impl RequestSpec {
    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            json: None,
        }
    }

    /// Creates an OPTIONS request.
    #[must_use]
    pub fn options(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Options,
            path: path.into(),
            json: None,
        }
    }

    /// Creates a POST request carrying a JSON body.
    #[must_use]
    pub fn post_json(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            json: Some(body),
        }
    }

    /// Joins this request's path onto the API base URL.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrl` if the joined URL does not parse.
    pub fn url_for(&self, api_base: &str) -> DomainResult<Url> {
        let joined = format!(
            "{}/{}",
            api_base.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| DomainError::InvalidUrl(format!("{e}: {joined}")))
    }
}
