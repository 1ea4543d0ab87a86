//! Contract test runner.
//!
//! Runs the five FocusFlow API checks one after another and records every
//! assertion into a [`ResultLog`]. A check never aborts the run: transport
//! errors, unexpected statuses and malformed bodies all become failed
//! assertions and the next check starts regardless.

mod breakdown;
mod cors;
mod health;
mod not_found;

#[cfg(test)]
mod fake;

use flowcheck_domain::{RequestSpec, ResponseSpec, ResultLog, RunSummary, TestResult};
use serde_json::Value;
use tracing::{debug, warn};

use crate::ports::{HttpClient, HttpClientError, RunObserver};

/// Sequential runner for the FocusFlow API contract.
pub struct TestRunner<C> {
    client: C,
    api_base: String,
    log: ResultLog,
}

impl<C: HttpClient> TestRunner<C> {
    /// Create a runner that sends requests through `client`.
    ///
    /// `api_base` is only used for reporting; the client resolves paths.
    pub fn new(client: C, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            log: ResultLog::new(),
        }
    }

    /// Run every check in order and report whether all assertions passed.
    ///
    /// Results accumulate across calls; use a fresh runner per run.
    pub async fn run_all_tests<O: RunObserver>(&mut self, observer: &mut O) -> bool {
        observer.on_start(&self.api_base);

        self.check_health(observer).await;
        self.check_cors_preflight(observer).await;
        self.check_breakdown_valid(observer).await;
        self.check_breakdown_invalid(observer).await;
        self.check_unknown_route(observer).await;

        let summary = self.summary();
        observer.on_finish(&summary);
        summary.all_passed()
    }

    /// Results recorded so far, in order.
    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        self.log.results()
    }

    /// Summary of the results recorded so far.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        self.log.summary()
    }

    async fn send(&self, request: &RequestSpec) -> Result<ResponseSpec, HttpClientError> {
        let result = self.client.execute(request).await;
        match &result {
            Ok(response) => debug!(
                method = %request.method,
                path = %request.path,
                status = response.status,
                elapsed = %response.duration_display(),
                "response received"
            ),
            Err(e) => warn!(
                method = %request.method,
                path = %request.path,
                error = %e,
                "request failed"
            ),
        }
        result
    }

    fn record<O: RunObserver>(&mut self, observer: &mut O, result: TestResult) {
        if !result.passed {
            debug!(name = %result.name, details = %result.details, "assertion failed");
        }
        observer.on_result(&result);
        self.log.push(result);
    }

    fn pass<O: RunObserver>(&mut self, observer: &mut O, name: impl Into<String>) {
        self.record(observer, TestResult::pass(name));
    }

    fn pass_with<O: RunObserver>(
        &mut self,
        observer: &mut O,
        name: impl Into<String>,
        details: impl Into<String>,
    ) {
        self.record(observer, TestResult::pass_with(name, details));
    }

    fn fail<O: RunObserver>(
        &mut self,
        observer: &mut O,
        name: impl Into<String>,
        details: impl Into<String>,
    ) {
        self.record(observer, TestResult::fail(name, details));
    }

    fn request_failed<O: RunObserver>(
        &mut self,
        observer: &mut O,
        name: impl Into<String>,
        error: &HttpClientError,
    ) {
        self.fail(observer, name, format!("Request failed: {error}"));
    }
}

/// Renders an observed JSON value for result details. Strings print bare,
/// absent values print as `<missing>`.
fn show(value: Option<&Value>) -> String {
    match value {
        None => "<missing>".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
