//! HTTP Client port

use async_trait::async_trait;
use flowcheck_domain::{RequestSpec, ResponseSpec};
use thiserror::Error;

/// Transport-level failures. None of these carry an HTTP status; a
/// response with any status code is a successful round trip.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpClientError {
    /// The request URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout that elapsed, in milliseconds.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("could not resolve host '{host}': {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Resolver message.
        message: String,
    },

    /// The remote end refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// Any other connection failure (TLS, reset, ...).
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The response body could not be read.
    #[error("failed to read body: {0}")]
    Body(String),

    /// Anything else reported by the HTTP stack.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests against the service under test.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Executes a request and returns the response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns an error only when no HTTP response was obtained.
    async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, HttpClientError>;
}
