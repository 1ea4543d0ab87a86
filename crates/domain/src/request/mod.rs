//! Request types issued by the harness.

mod method;
mod spec;

pub use method::HttpMethod;
pub use spec::RequestSpec;
