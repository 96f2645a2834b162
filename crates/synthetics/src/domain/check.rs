use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::IdRef;
use super::journey::Step;

/// Check subtype. Selects the wire `type` tag and the add/update path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    Certificate,
    Dns,
    Ping,
    Socket,
    Url,
    WebJourney,
    AndroidJourney,
}

impl CheckKind {
    pub const ALL: [CheckKind; 7] = [
        CheckKind::Certificate,
        CheckKind::Dns,
        CheckKind::Ping,
        CheckKind::Socket,
        CheckKind::Url,
        CheckKind::WebJourney,
        CheckKind::AndroidJourney,
    ];

    pub const fn tag(self) -> &'static str {
        match self {
            CheckKind::Certificate => "CERTIFICATE",
            CheckKind::Dns => "DNS",
            CheckKind::Ping => "PING",
            CheckKind::Socket => "SOCKET",
            CheckKind::Url => "URL",
            CheckKind::WebJourney => "WEB_JOURNEY",
            CheckKind::AndroidJourney => "ANDROID_JOURNEY",
        }
    }

    pub const fn segment(self) -> &'static str {
        match self {
            CheckKind::Certificate => "certificate",
            CheckKind::Dns => "dns",
            CheckKind::Ping => "ping",
            CheckKind::Socket => "socket",
            CheckKind::Url => "url",
            CheckKind::WebJourney => "webJourney",
            CheckKind::AndroidJourney => "androidJourney",
        }
    }

    /// Writes of these checks upload app binaries and need the extended timeout.
    pub const fn is_long_running(self) -> bool {
        matches!(self, CheckKind::AndroidJourney)
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

/// Subtype-specific fields of a [`Check`].
pub trait CheckSpec: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: CheckKind;
}

/// A monitored assertion. Base fields are shared by every subtype; `spec`
/// is flattened into the same JSON object.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Check<S> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub maintenance_override: bool,
    #[serde(rename = "type")]
    pub check_type: String,
    /// Seconds between runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<i64>,
    /// Consecutive failures before the check alerts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_count: Option<i64>,
    /// Days results are kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_retention: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_host: Option<IdRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_group: Option<IdRef>,
    pub check_group: IdRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_host: Option<IdRef>,
    #[serde(flatten)]
    pub spec: S,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateSpec {
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_days: Option<i64>,
}

impl CheckSpec for CertificateSpec {
    const KIND: CheckKind = CheckKind::Certificate;
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsSpec {
    pub hostname: String,
    pub record_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_server: Option<String>,
    #[serde(default)]
    pub expected_addresses: Vec<String>,
}

impl CheckSpec for DnsSpec {
    const KIND: CheckKind = CheckKind::Dns;
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PingSpec {
    pub host: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packet_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_packet_loss: Option<i64>,
}

impl CheckSpec for PingSpec {
    const KIND: CheckKind = CheckKind::Ping;
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocketSpec {
    pub host: String,
    pub port: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_response: Option<String>,
}

impl CheckSpec for SocketSpec {
    const KIND: CheckKind = CheckKind::Socket;
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// Substring the response body must (or must not) contain.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyAssertion {
    pub text: String,
    #[serde(default)]
    pub present: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlSpec {
    pub url: String,
    pub request_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_response_code: Option<i64>,
    #[serde(default)]
    pub request_headers: Vec<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<String>,
    #[serde(default)]
    pub body_assertions: Vec<BodyAssertion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_redirects: Option<bool>,
}

impl CheckSpec for UrlSpec {
    const KIND: CheckKind = CheckKind::Url;
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebJourneySpec {
    pub start_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,
    #[serde(default)]
    pub monitored_domains: Vec<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl CheckSpec for WebJourneySpec {
    const KIND: CheckKind = CheckKind::WebJourney;
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidJourneySpec {
    pub app_binary_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(default)]
    pub monitored_domains: Vec<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl CheckSpec for AndroidJourneySpec {
    const KIND: CheckKind = CheckKind::AndroidJourney;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn url_check_flattens_spec_fields() {
        let check = Check {
            name: "Home".into(),
            check_type: UrlSpec::KIND.tag().into(),
            check_group: IdRef::new(5),
            spec: UrlSpec {
                url: "https://example.com".into(),
                request_method: "GET".into(),
                expected_response_code: Some(200),
                ..Default::default()
            },
            ..Default::default()
        };

        let value = serde_json::to_value(&check).unwrap();
        assert_eq!(value["type"], "URL");
        assert_eq!(value["url"], "https://example.com");
        assert_eq!(value["checkGroup"], json!({ "id": 5 }));
        assert!(value.get("id").is_none());
        assert!(value.get("checkHost").is_none());
    }

    #[test]
    fn reference_names_are_read_but_not_written() {
        let check: Check<PingSpec> = serde_json::from_value(json!({
            "id": 3,
            "name": "gateway",
            "type": "PING",
            "checkGroup": { "id": 1, "name": "Core" },
            "host": "10.0.0.1"
        }))
        .unwrap();
        assert_eq!(check.check_group.name.as_deref(), Some("Core"));

        let value = serde_json::to_value(&check).unwrap();
        assert_eq!(value["checkGroup"], json!({ "id": 1 }));
    }

    #[test]
    fn kind_tables_agree() {
        for kind in CheckKind::ALL {
            assert_eq!(CheckKind::from_tag(kind.tag()), Some(kind));
        }
        assert!(CheckKind::AndroidJourney.is_long_running());
        assert!(!CheckKind::WebJourney.is_long_running());
        assert_eq!(CheckKind::AndroidJourney.segment(), "androidJourney");
    }
}
