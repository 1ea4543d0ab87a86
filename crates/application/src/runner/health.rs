//! GET /health

use flowcheck_domain::RequestSpec;
use serde_json::Value;

use super::{TestRunner, show};
use crate::ports::{HttpClient, RunObserver};

const REQUIRED: [&str; 3] = ["status", "app", "version"];
const EXPECTED_STATUS: &str = "ok";
const EXPECTED_APP: &str = "FocusFlow API";

impl<C: HttpClient> TestRunner<C> {
    /// Health check: 200, JSON, required fields, then the expected values.
    ///
    /// Presence and value assertions are independent of each other, so a
    /// `{"status": "degraded"}` body fails only the status value check.
    pub(super) async fn check_health<O: RunObserver>(&mut self, observer: &mut O) {
        observer.on_section("Testing Health Endpoint...");

        let response = match self.send(&RequestSpec::get("/health")).await {
            Ok(response) => response,
            Err(e) => {
                self.request_failed(observer, "Health endpoint accessible", &e);
                return;
            }
        };

        if response.status != 200 {
            self.fail(
                observer,
                "Health endpoint returns 200",
                format!("Got status {}", response.status),
            );
            return;
        }
        self.pass(observer, "Health endpoint returns 200");

        let Ok(data) = response.json() else {
            self.fail(
                observer,
                "Health endpoint returns valid JSON",
                "Response is not valid JSON",
            );
            return;
        };
        self.pass(observer, "Health endpoint returns valid JSON");

        for field in REQUIRED {
            let name = format!("Health response has '{field}' field");
            match data.get(field) {
                Some(value) => self.pass_with(observer, name, format!("Value: {}", show(Some(value)))),
                None => self.fail(observer, name, format!("Missing field: {field}")),
            }
        }

        let status = data.get("status");
        if status.and_then(Value::as_str) == Some(EXPECTED_STATUS) {
            self.pass(observer, "Health status is 'ok'");
        } else {
            self.fail(
                observer,
                "Health status is 'ok'",
                format!("Got status: {}", show(status)),
            );
        }

        let app = data.get("app");
        if app.and_then(Value::as_str) == Some(EXPECTED_APP) {
            self.pass(observer, "App name is 'FocusFlow API'");
        } else {
            self.fail(
                observer,
                "App name is 'FocusFlow API'",
                format!("Got app: {}", show(app)),
            );
        }
    }
}
