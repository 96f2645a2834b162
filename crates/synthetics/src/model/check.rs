use serde::{Deserialize, Serialize};

use super::journey::StepModel;

/// Base fields every check model carries; `settings` holds the subtype's
/// own attributes.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "C: Deserialize<'de> + Default"))]
pub struct CheckModel<C> {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub enabled: bool,
    pub maintenance_override: bool,
    pub frequency: Option<i64>,
    pub trigger_count: Option<i64>,
    pub result_retention: Option<i64>,
    pub check_host_id: Option<i64>,
    pub host_group_id: Option<i64>,
    pub check_group_id: i64,
    pub proxy_host_id: Option<i64>,
    #[serde(flatten)]
    pub settings: C,
}

/// Where a check is scheduled to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Host(i64),
    HostGroup(i64),
    Both { check_host_id: i64, host_group_id: i64 },
    Neither,
}

impl<C> CheckModel<C> {
    /// Reports whether a check host, a host group, both or neither are set.
    ///
    /// Neither mapping nor the client rejects `Both` or `Neither`; callers
    /// that want to enforce a single placement check it here.
    pub fn placement(&self) -> Placement {
        match (self.check_host_id, self.host_group_id) {
            (Some(check_host_id), Some(host_group_id)) => Placement::Both {
                check_host_id,
                host_group_id,
            },
            (Some(id), None) => Placement::Host(id),
            (None, Some(id)) => Placement::HostGroup(id),
            (None, None) => Placement::Neither,
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateModel {
    pub host: String,
    pub port: Option<i64>,
    pub warning_days: Option<i64>,
    pub error_days: Option<i64>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DnsModel {
    pub hostname: String,
    pub record_type: String,
    pub dns_server: Option<String>,
    pub expected_addresses: Vec<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PingModel {
    pub host: String,
    pub packet_count: Option<i64>,
    pub max_packet_loss: Option<i64>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocketModel {
    pub host: String,
    pub port: i64,
    pub send_string: Option<String>,
    pub expected_response: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderModel {
    pub name: String,
    pub value: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyAssertionModel {
    pub text: String,
    pub present: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlModel {
    pub url: String,
    pub request_method: String,
    pub expected_response_code: Option<i64>,
    pub request_headers: Vec<HeaderModel>,
    pub request_body: Option<String>,
    pub body_assertions: Vec<BodyAssertionModel>,
    pub follow_redirects: Option<bool>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebJourneyModel {
    pub start_url: String,
    pub browser: Option<String>,
    pub monitored_domains: Vec<String>,
    pub steps: Vec<StepModel>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AndroidJourneyModel {
    pub app_binary_id: i64,
    pub device: Option<String>,
    pub monitored_domains: Vec<String>,
    pub steps: Vec<StepModel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_reports_every_combination() {
        let mut model = CheckModel::<PingModel>::default();
        assert_eq!(model.placement(), Placement::Neither);

        model.check_host_id = Some(4);
        assert_eq!(model.placement(), Placement::Host(4));

        model.host_group_id = Some(9);
        assert_eq!(
            model.placement(),
            Placement::Both {
                check_host_id: 4,
                host_group_id: 9
            }
        );

        model.check_host_id = None;
        assert_eq!(model.placement(), Placement::HostGroup(9));
    }
}
