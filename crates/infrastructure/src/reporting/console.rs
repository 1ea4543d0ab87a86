//! Human-readable console report.
//!
//! Lines are written as the runner produces them, so a slow endpoint shows up
//! as a pause after its section heading rather than as a silent run.

use std::fmt;
use std::io::{self, Write};

use flowcheck_application::ports::RunObserver;
use flowcheck_domain::{RunSummary, TestResult};
use tracing::warn;

const RULE_WIDTH: usize = 60;

/// Prints progress and the final summary to a writer (stdout by default).
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleReporter {
    /// Reporter writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Reporter writing to an arbitrary sink.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Gives back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.out.write_fmt(args).and_then(|()| self.out.write_all(b"\n")) {
            warn!(error = %e, "failed to write report line");
        }
    }

    fn rule(&mut self) {
        self.line(format_args!("{}", "=".repeat(RULE_WIDTH)));
    }
}

impl<W: Write> RunObserver for ConsoleReporter<W> {
    fn on_start(&mut self, api_base: &str) {
        self.line(format_args!("🚀 Starting FocusFlow API Tests"));
        self.line(format_args!("🌐 Testing against: {api_base}"));
        self.rule();
    }

    fn on_section(&mut self, title: &str) {
        self.line(format_args!("\n🔍 {title}"));
    }

    fn on_result(&mut self, result: &TestResult) {
        let status = if result.passed { "✅ PASS" } else { "❌ FAIL" };
        self.line(format_args!("{status}: {}", result.name));
        if !result.details.is_empty() {
            self.line(format_args!("   Details: {}", result.details));
        }
    }

    fn on_finish(&mut self, summary: &RunSummary) {
        self.line(format_args!(""));
        self.rule();
        self.line(format_args!("📊 TEST SUMMARY"));
        self.rule();

        self.line(format_args!("Total Tests: {}", summary.total));
        self.line(format_args!("✅ Passed: {}", summary.passed));
        self.line(format_args!("❌ Failed: {}", summary.failed));
        self.line(format_args!("Success Rate: {:.1}%", summary.success_rate()));

        if !summary.failures.is_empty() {
            self.line(format_args!("\n🚨 FAILED TESTS:"));
            for failure in &summary.failures {
                self.line(format_args!("   • {failure}"));
            }
        }

        self.line(format_args!(""));
        self.rule();

        if summary.all_passed() {
            self.line(format_args!("🎉 ALL TESTS PASSED!"));
        } else {
            self.line(format_args!("💥 SOME TESTS FAILED!"));
        }
        if let Err(e) = self.out.flush() {
            warn!(error = %e, "failed to flush report");
        }
    }
}
