//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.

use std::collections::HashMap;
use std::error::Error as _;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use flowcheck_application::HarnessConfig;
use flowcheck_application::ports::{HttpClient, HttpClientError};
use flowcheck_domain::{HttpMethod, RequestSpec, ResponseSpec};
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};

const USER_AGENT: &str = concat!("flowcheck/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 10;

/// HTTP client implementation using reqwest.
///
/// Request paths are resolved against the API base taken from the
/// configuration; every request is bounded by the configured timeout.
pub struct ReqwestHttpClient {
    client: Client,
    api_base: String,
    timeout: Duration,
}

impl ReqwestHttpClient {
    /// Creates a client for the API described by `config`.
    ///
    /// Default configuration:
    /// - Per-request timeout: from `config` (10 seconds unless overridden)
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(config: &HarnessConfig) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| HttpClientError::Other(error_chain(&e)))?;

        Ok(Self {
            client,
            api_base: config.api_base(),
            timeout: config.timeout(),
        })
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Options => Method::OPTIONS,
        }
    }

    /// Maps reqwest errors to the port's `HttpClientError`.
    fn map_error(&self, error: &reqwest::Error) -> HttpClientError {
        #[allow(clippy::cast_possible_truncation)]
        let timeout_ms = self.timeout.as_millis() as u64;
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        let message = error_chain(error);
        let host = error
            .url()
            .and_then(|u| u.host_str())
            .unwrap_or("unknown")
            .to_string();

        if error.is_connect() {
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") || lower.contains("lookup") {
                return HttpClientError::DnsError { host, message };
            }
            if lower.contains("refused") {
                let port = error
                    .url()
                    .and_then(reqwest::Url::port_or_known_default)
                    .unwrap_or(80);
                return HttpClientError::ConnectionRefused { host, port };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::Other(format!(
                "too many redirects (max {MAX_REDIRECTS}): {message}"
            ));
        }

        if error.is_body() || error.is_decode() {
            return HttpClientError::Body(message);
        }

        HttpClientError::Other(message)
    }
}

/// Flattens an error and its sources into one line.
///
/// reqwest keeps the useful part ("Connection refused", "dns error") in the
/// source chain, not in the top-level message.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Collects response headers, joining repeated names with `", "`.
///
/// Header names arrive lowercased, so the fold is case-insensitive.
fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut collected: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        let value = value.to_str().unwrap_or("<binary>");
        collected
            .entry(name.as_str().to_string())
            .and_modify(|joined| {
                joined.push_str(", ");
                joined.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }
    collected
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: &RequestSpec) -> Result<ResponseSpec, HttpClientError> {
        let url = request
            .url_for(&self.api_base)
            .map_err(|e| HttpClientError::InvalidUrl(e.to_string()))?;

        let start = Instant::now();

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url);
        if let Some(body) = &request.json {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.map_error(&e))?;

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());

        let body = response.bytes().await.map_err(|e| self.map_error(&e))?;

        Ok(ResponseSpec::new(status, headers, &body, start.elapsed()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(base: &str) -> HarnessConfig {
        HarnessConfig::new(base, Duration::from_secs(2)).unwrap()
    }

    #[test]
    fn test_to_reqwest_method() {
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Get),
            Method::GET
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Post),
            Method::POST
        );
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(HttpMethod::Options),
            Method::OPTIONS
        );
    }

    #[test]
    fn test_client_creation() {
        let client = ReqwestHttpClient::new(&config("http://127.0.0.1:3000")).unwrap();
        assert_eq!(client.api_base, "http://127.0.0.1:3000/api");
        assert_eq!(client.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_collect_headers_joins_repeated_names() {
        let mut headers = HeaderMap::new();
        headers.append("access-control-allow-origin", "https://evil.example".parse().unwrap());
        headers.append("access-control-allow-origin", "*".parse().unwrap());
        headers.append("content-type", "application/json".parse().unwrap());

        let collected = collect_headers(&headers);

        assert_eq!(
            collected.get("access-control-allow-origin").map(String::as_str),
            Some("https://evil.example, *")
        );
        assert_eq!(
            collected.get("content-type").map(String::as_str),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_execute_keeps_every_value_of_a_repeated_header() {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut chunk = [0_u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let read = stream.read(&mut chunk).unwrap();
                if read == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..read]);
            }
            stream
                .write_all(
                    b"HTTP/1.1 200 OK\r\n\
                      Access-Control-Allow-Origin: https://evil.example\r\n\
                      Access-Control-Allow-Origin: *\r\n\
                      Content-Length: 0\r\n\
                      Connection: close\r\n\r\n",
                )
                .unwrap();
        });
        let client =
            ReqwestHttpClient::new(&config(&format!("http://127.0.0.1:{port}"))).unwrap();

        let response = client
            .execute(&RequestSpec::options("/tasks/breakdown"))
            .await
            .unwrap();
        server.join().unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(
            response.get_header("Access-Control-Allow-Origin"),
            Some("https://evil.example, *")
        );
    }

    #[tokio::test]
    async fn test_closed_port_is_a_transport_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client =
            ReqwestHttpClient::new(&config(&format!("http://127.0.0.1:{port}"))).unwrap();

        let result = client.execute(&RequestSpec::get("/health")).await;

        assert!(
            matches!(
                result,
                Err(HttpClientError::ConnectionRefused { .. }
                    | HttpClientError::ConnectionFailed(_))
            ),
            "unexpected result: {result:?}"
        );
    }
}
