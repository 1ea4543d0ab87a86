//! Flowcheck Infrastructure - Adapters
//!
//! Concrete implementations of the ports defined in the application layer:
//! a reqwest-backed HTTP client and a console report printer.

pub mod adapters;
pub mod reporting;

pub use adapters::ReqwestHttpClient;
pub use reporting::ConsoleReporter;
