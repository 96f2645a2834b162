//! Core of a declarative configuration provider for a synthetic-monitoring
//! service.
//!
//! The crate translates between two shapes of the same resources: the
//! declarative [`model`] tracked by an orchestration host, and the wire
//! [`domain`] spoken by the service's REST API. [`mapping`] converts between
//! them, [`client`] talks to the service and [`adapter`] ties both together
//! into lifecycle callbacks and search data sources.

pub mod adapter;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod mapping;
pub mod model;

pub use client::MonitoringClient;
pub use config::{ProviderConfig, load_config};
