use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckHostModel {
    pub id: Option<i64>,
    pub name: String,
    pub address: String,
    pub location: Option<String>,
    pub enabled: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyHostModel {
    pub id: Option<i64>,
    pub name: String,
    pub host: String,
    pub port: i64,
    pub username: Option<String>,
}
