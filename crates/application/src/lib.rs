//! Flowcheck Application - Contract checks
//!
//! This crate holds the test runner and the five contract checks it runs
//! against the FocusFlow API, together with the ports (HTTP client, run
//! observer) the infrastructure layer implements.

pub mod config;
pub mod error;
pub mod ports;
pub mod runner;

pub use config::HarnessConfig;
pub use error::{ApplicationError, ApplicationResult};
pub use runner::TestRunner;
