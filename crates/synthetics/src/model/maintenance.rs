use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaintenancePeriodModel {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub start: String,
    pub end: String,
    pub recurrence: Option<String>,
    pub check_ids: Vec<i64>,
    pub check_group_ids: Vec<i64>,
}
