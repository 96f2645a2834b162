use serde::{Deserialize, Serialize};

use super::IdRef;

/// Scheduled window during which alerts for the linked checks and groups are
/// suppressed.
///
/// `start` and `end` are RFC 3339 timestamps kept as the service formats
/// them, so a read never produces a spurious diff.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenancePeriod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: String,
    pub end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<String>,
    #[serde(default)]
    pub checks: Vec<IdRef>,
    #[serde(default)]
    pub check_groups: Vec<IdRef>,
}
