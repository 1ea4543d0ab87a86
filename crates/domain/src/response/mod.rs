//! Response types observed by the harness.

mod spec;

pub use spec::ResponseSpec;
