//! Response specification type
//!
//! Holds what the harness needs from an HTTP reply: status code, headers,
//! body text and timing.

use std::collections::HashMap;
use std::time::Duration;

/// HTTP response received from the service under test.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: u16,
    /// Response headers as received.
    pub headers: HashMap<String, String>,
    /// Response body decoded as UTF-8 (lossy).
    pub body: String,
    /// Round-trip time.
    pub duration: Duration,
}

impl ResponseSpec {
    /// Creates a new `ResponseSpec` from raw response data.
    #[must_use]
    pub fn new(
        status: u16,
        headers: HashMap<String, String>,
        body: &[u8],
        duration: Duration,
    ) -> Self {
        Self {
            status,
            headers,
            body: String::from_utf8_lossy(body).into_owned(),
            duration,
        }
    }

    /// Gets a header value by name (case-insensitive).
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the parser error when the body is not a JSON document.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Returns a human-readable duration string (e.g., "124 ms").
    #[must_use]
    pub fn duration_display(&self) -> String {
        let millis = self.duration.as_millis();
        if millis < 1000 {
            format!("{millis} ms")
        } else {
            format!("{:.2} s", self.duration.as_secs_f64())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_get_header_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert(
            "access-control-allow-origin".to_string(),
            "*".to_string(),
        );
        let response = ResponseSpec::new(200, headers, b"", Duration::ZERO);

        assert_eq!(response.get_header("Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(response.get_header("Missing"), None);
    }

    #[test]
    fn test_json_parses_body() {
        let response = ResponseSpec::new(
            200,
            HashMap::new(),
            br#"{"status":"ok"}"#,
            Duration::ZERO,
        );
        assert_eq!(response.json().unwrap()["status"], "ok");
    }

    #[test]
    fn test_json_rejects_html() {
        let response = ResponseSpec::new(
            502,
            HashMap::new(),
            b"<html>Bad Gateway</html>",
            Duration::ZERO,
        );
        assert!(response.json().is_err());
    }

    #[test]
    fn test_duration_display() {
        let response = ResponseSpec {
            duration: Duration::from_millis(150),
            ..Default::default()
        };
        assert_eq!(response.duration_display(), "150 ms");

        let response = ResponseSpec {
            duration: Duration::from_millis(1500),
            ..Default::default()
        };
        assert_eq!(response.duration_display(), "1.50 s");
    }
}
