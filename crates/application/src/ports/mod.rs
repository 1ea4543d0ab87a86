//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the runner and the outside world.
//! Each port is a trait implemented by adapters in the infrastructure layer.

mod http_client;
mod observer;

pub use http_client::{HttpClient, HttpClientError};
pub use observer::{RunObserver, SilentObserver};
