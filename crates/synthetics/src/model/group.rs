use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckGroupModel {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub frequency: Option<i64>,
    pub dashboard_group_id: Option<i64>,
    pub enabled: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardGroupModel {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostGroupModel {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub check_host_ids: Vec<i64>,
}
