//! Glue between the orchestration host and the client: lifecycle callbacks,
//! search data sources and secret retention.

mod lifecycle;
mod search;
mod secrets;

pub use lifecycle::ResourceAdapter;
pub use search::DataSource;
pub use secrets::{RetainSecrets, merge_secrets};
