//! Wire-format entities exchanged with the monitoring service.
//!
//! Field names follow the remote JSON (camelCase). Identity fields are
//! `Option<i64>`: absent until the service assigns them on create.
//! Variant families (page checks, alert suppressions, actions) are genuine
//! enums here; the tag-plus-nullable-slots shape of the wire only exists in
//! the private `*Wire` structs used at the serde boundary.

pub mod check;
pub mod group;
pub mod host;
pub mod journey;
pub mod maintenance;

use serde::{Deserialize, Serialize};

pub use check::{
    AndroidJourneySpec, BodyAssertion, CertificateSpec, Check, CheckKind, CheckSpec, DnsSpec,
    Header, PingSpec, SocketSpec, UrlSpec, WebJourneySpec,
};
pub use group::{CheckGroup, DashboardGroup, HostGroup};
pub use host::{CheckHost, ProxyHost};
pub use journey::{
    Action, ActionBody, ActionKind, AlertSuppression, Android, CommonStep, ConsoleSuppression,
    ElementAction, ForElement, ForText, NetworkSuppression, PageCheck, PageCheckBody,
    PageCheckKind, Platform, Selector, Step, StepType, Web,
};
pub use maintenance::MaintenancePeriod;

/// Reference to another object on the service, embedded as `{"id": n}`.
///
/// The service also echoes a display name on reads; it is informational only
/// and never sent back.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef {
    pub id: i64,
    #[serde(default, skip_serializing)]
    pub name: Option<String>,
}

impl IdRef {
    pub fn new(id: i64) -> Self {
        Self { id, name: None }
    }
}

/// One entry of a `list` response. Only the identity is consumed.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct SearchHit {
    pub id: i64,
}

/// Page returned by the `list` endpoints.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub content: Vec<SearchHit>,
}

impl SearchPage {
    pub fn ids(&self) -> Vec<i64> {
        self.content.iter().map(|hit| hit.id).collect()
    }
}
