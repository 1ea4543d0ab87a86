//! Flowcheck Domain - Core harness types
//!
//! This crate defines the result model and the request/response shapes used
//! by the FocusFlow API contract harness. All types here are pure Rust with
//! no I/O dependencies.

pub mod error;
pub mod micro_task;
pub mod request;
pub mod response;
pub mod testing;

pub use error::{DomainError, DomainResult};
pub use micro_task::{Difficulty, REQUIRED_FIELDS, is_positive_integer, missing_fields};
pub use request::{HttpMethod, RequestSpec};
pub use response::ResponseSpec;
pub use testing::{ResultLog, RunSummary, TestResult};
