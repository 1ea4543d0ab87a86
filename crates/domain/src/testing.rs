//! Assertion results and run summaries.
//!
//! Every assertion the harness makes becomes one [`TestResult`], appended to
//! a [`ResultLog`] in invocation order. The [`RunSummary`] is derived from the
//! log on demand and is never stored separately.

use serde::{Deserialize, Serialize};

/// Detail text used when a failure is recorded without any explanation.
const MISSING_DETAILS: &str = "no details provided";

/// Outcome of a single named assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Human-readable assertion name, e.g. "Health endpoint returns 200".
    pub name: String,
    /// Whether the assertion held.
    pub passed: bool,
    /// Optional context: observed value on pass, reason on failure.
    pub details: String,
}

impl TestResult {
    /// Create a passed result without details.
    #[must_use]
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            details: String::new(),
        }
    }

    /// Create a passed result carrying the observed value.
    #[must_use]
    pub fn pass_with(name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            details: details.into(),
        }
    }

    /// Create a failed result.
    ///
    /// Failures always carry details; an empty string is replaced with a
    /// generic placeholder.
    #[must_use]
    pub fn fail(name: impl Into<String>, details: impl Into<String>) -> Self {
        let mut details = details.into();
        if details.trim().is_empty() {
            details = MISSING_DETAILS.to_string();
        }
        Self {
            name: name.into(),
            passed: false,
            details,
        }
    }

    /// The failure line used in summaries: `"name: details"`.
    #[must_use]
    pub fn failure_line(&self) -> String {
        format!("{}: {}", self.name, self.details)
    }
}

/// Append-only log of assertion results plus the parallel failure list.
#[derive(Debug, Clone, Default)]
pub struct ResultLog {
    results: Vec<TestResult>,
    failures: Vec<String>,
}

impl ResultLog {
    /// Create an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            results: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Append a result, keeping the failure list in step.
    pub fn push(&mut self, result: TestResult) {
        if !result.passed {
            self.failures.push(result.failure_line());
        }
        self.results.push(result);
    }

    /// All results in the order they were recorded.
    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Derive the run summary.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        let total = self.results.len();
        let passed = self.results.iter().filter(|r| r.passed).count();
        RunSummary {
            total,
            passed,
            failed: total - passed,
            failures: self.failures.clone(),
        }
    }
}

/// Totals for a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of recorded assertions.
    pub total: usize,
    /// Number of passed assertions.
    pub passed: usize,
    /// Number of failed assertions.
    pub failed: usize,
    /// Failure lines (`"name: details"`) in recording order.
    pub failures: Vec<String>,
}

impl RunSummary {
    /// True when at least one assertion ran and none failed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.total > 0 && self.failed == 0
    }

    /// Pass rate as a percentage in `0.0..=100.0`. An empty run reports 0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fail_without_details_gets_placeholder() {
        let result = TestResult::fail("Health status is 'ok'", "  ");
        assert!(!result.passed);
        assert_eq!(result.details, MISSING_DETAILS);
    }

    #[test]
    fn test_failure_line() {
        let failed = TestResult::fail("b", "Got status 500");
        assert_eq!(failed.failure_line(), "b: Got status 500");
    }

    #[test]
    fn test_log_keeps_failures_in_order() {
        let mut log = ResultLog::new();
        log.push(TestResult::fail("first", "one"));
        log.push(TestResult::pass("second"));
        log.push(TestResult::fail("third", "three"));

        assert_eq!(log.results().len(), 3);
        assert_eq!(
            log.summary().failures,
            vec!["first: one".to_string(), "third: three".to_string()]
        );
    }

    #[test]
    fn test_summary_counts_add_up() {
        let mut log = ResultLog::new();
        log.push(TestResult::pass("a"));
        log.push(TestResult::pass("b"));
        log.push(TestResult::pass("c"));
        log.push(TestResult::fail("d", "bad"));

        let summary = log.summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.passed, 3);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.passed + summary.failed, summary.total);
        assert_eq!(summary.success_rate(), 75.0);
        assert!(!summary.all_passed());
    }

    #[test]
    fn test_empty_run_is_not_a_pass() {
        let summary = ResultLog::new().summary();
        assert_eq!(summary.success_rate(), 0.0);
        assert!(!summary.all_passed());
    }

    #[test]
    fn test_summary_serializes() {
        let mut log = ResultLog::new();
        log.push(TestResult::fail("x", "y"));
        let json = serde_json::to_value(log.summary()).unwrap_or_default();
        assert_eq!(json["failed"], 1);
        assert_eq!(json["failures"][0], "x: y");
    }
}
