//! OPTIONS /tasks/breakdown

use flowcheck_domain::RequestSpec;

use super::TestRunner;
use crate::ports::{HttpClient, RunObserver};

/// Headers the preflight must carry, with their exact values.
pub(super) const EXPECTED_CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type, Authorization"),
];

impl<C: HttpClient> TestRunner<C> {
    /// CORS preflight: status and each header are checked independently.
    pub(super) async fn check_cors_preflight<O: RunObserver>(&mut self, observer: &mut O) {
        observer.on_section("Testing CORS OPTIONS...");

        let response = match self.send(&RequestSpec::options("/tasks/breakdown")).await {
            Ok(response) => response,
            Err(e) => {
                self.request_failed(observer, "OPTIONS endpoint accessible", &e);
                return;
            }
        };

        if response.status == 200 {
            self.pass(observer, "OPTIONS /api/tasks/breakdown returns 200");
        } else {
            self.fail(
                observer,
                "OPTIONS /api/tasks/breakdown returns 200",
                format!("Got status {}", response.status),
            );
        }

        for (header, expected) in EXPECTED_CORS_HEADERS {
            let name = format!("CORS header {header} correct");
            match response.get_header(header) {
                Some(actual) if actual == expected => self.pass(observer, name),
                actual => self.fail(
                    observer,
                    name,
                    format!(
                        "Expected: {expected}, Got: {}",
                        actual.unwrap_or("<missing>")
                    ),
                ),
            }
        }
    }
}
