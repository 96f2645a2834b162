//! REST transport client: route table, request construction and response
//! interpretation.

pub mod api;
pub mod route;
pub mod transport;

pub use api::MonitoringClient;
pub use route::{Resource, Route};
pub use transport::{ApiRequest, HttpTransport, RawResponse, Transport};
