//! Run observer port
//!
//! The runner announces progress through this trait so results can be
//! printed as they happen rather than after the whole suite finishes.

use flowcheck_domain::{RunSummary, TestResult};

/// Receives progress events from a running suite. All methods default to
/// doing nothing.
pub trait RunObserver {
    /// Called once before the first check, with the API base being probed.
    fn on_start(&mut self, _api_base: &str) {}

    /// Called when a check begins, e.g. "Testing Health Endpoint...".
    fn on_section(&mut self, _title: &str) {}

    /// Called for every recorded assertion, in recording order.
    fn on_result(&mut self, _result: &TestResult) {}

    /// Called once after the last check.
    fn on_finish(&mut self, _summary: &RunSummary) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl RunObserver for SilentObserver {}
