use std::time::Duration;

use serde_json::json;
use synthetics::client::MonitoringClient;
use synthetics::config::ProviderConfig;
use synthetics::domain::{
    AndroidJourneySpec, Check, CheckGroup, CheckHost, CommonStep, IdRef, PingSpec, UrlSpec, Web,
};
use synthetics::error::{ClientError, TransportError};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-api-key";

fn client_for(server: &MockServer) -> MonitoringClient {
    let config = ProviderConfig::new(format!("{}/v3", server.uri()), API_KEY);
    MonitoringClient::from_config(&config).expect("client should build")
}

#[tokio::test]
async fn test_get_sends_auth_and_content_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/hosts/12"))
        .and(header("x-epm-auth", API_KEY))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "name": "Frankfurt",
            "address": "10.0.0.12",
            "enabled": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let host = client_for(&server)
        .get::<CheckHost>(12)
        .await
        .expect("get should succeed")
        .expect("host should exist");
    assert_eq!(host.id, Some(12));
    assert_eq!(host.name, "Frankfurt");
    assert!(host.enabled);
}

#[tokio::test]
async fn test_get_404_means_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/checkGroups/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let result = client_for(&server).get::<CheckGroup>(99).await;
    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn test_non_200_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v3/checkGroups/add"))
        .respond_with(ResponseTemplate::new(422).set_body_string("name already taken"))
        .mount(&server)
        .await;

    let desired = CheckGroup {
        name: "core".into(),
        ..Default::default()
    };
    match client_for(&server).create(&desired).await {
        Err(ClientError::Remote { status, body, .. }) => {
            assert_eq!(status.as_u16(), 422);
            assert_eq!(body, "name already taken");
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_check_posts_to_kind_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/v3/checks/add/url"))
        .and(body_json(json!({
            "name": "homepage",
            "enabled": true,
            "maintenanceOverride": false,
            "type": "URL",
            "checkGroup": {"id": 7},
            "url": "https://shop.example.com",
            "requestMethod": "GET",
            "requestHeaders": [],
            "bodyAssertions": []
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "name": "homepage",
            "enabled": true,
            "type": "URL",
            "checkGroup": {"id": 7, "name": "web"},
            "url": "https://shop.example.com",
            "requestMethod": "GET"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let desired = Check {
        name: "homepage".into(),
        enabled: true,
        check_type: "URL".into(),
        check_group: IdRef::new(7),
        spec: UrlSpec {
            url: "https://shop.example.com".into(),
            request_method: "GET".into(),
            ..Default::default()
        },
        ..Default::default()
    };
    let stored = client_for(&server).create(&desired).await.unwrap();
    assert_eq!(stored.id, Some(42));
    assert_eq!(stored.check_group.id, 7);
    assert_eq!(stored.check_group.name.as_deref(), Some("web"));
}

#[tokio::test]
async fn test_update_404_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/hosts/update"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let desired = CheckHost {
        id: Some(3),
        name: "gone".into(),
        address: "10.0.0.3".into(),
        ..Default::default()
    };
    let err = client_for(&server).update(&desired).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFoundOnMutation { ref path } if path == "hosts/update"));
}

#[tokio::test]
async fn test_get_check_of_another_kind_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/checks/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "name": "smtp",
            "type": "SOCKET",
            "checkGroup": {"id": 1},
            "host": "mail.example.com",
            "port": 25
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get::<Check<PingSpec>>(7)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClientError::KindMismatch { expected: "PING", ref found } if found == "SOCKET"
    ));
}

#[test]
fn test_from_config_validates() {
    let mut config = ProviderConfig::new("https://api.monitoring.example/v3", API_KEY);
    config.extended_timeout_secs = 0;
    let err = MonitoringClient::from_config(&config).unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
    assert!(err.to_string().starts_with("Invalid configuration"));
}

#[tokio::test]
async fn test_delete_sentinel_is_byte_exact() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v3/checks/commonSteps/web/remove/5"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success":true}"#))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v3/checks/commonSteps/web/remove/6"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success": true}"#))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .delete::<CommonStep<Web>>(5)
        .await
        .expect("exact sentinel is success");

    let err = client.delete::<CommonStep<Web>>(6).await.unwrap_err();
    assert!(matches!(err, ClientError::DeleteRejected(ref body) if body == r#"{"success": true}"#));
}

#[tokio::test]
async fn test_search_percent_encodes_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/checkGroups/list"))
        .and(query_param("page", "0"))
        .and(query_param("search", "shop & checkout/eu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"id": 3, "name": "shop & checkout/eu"}, {"id": 4}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ids = client_for(&server)
        .search::<CheckGroup>("shop & checkout/eu")
        .await
        .unwrap();
    assert_eq!(ids, Some(vec![3, 4]));
}

#[tokio::test]
async fn test_search_404_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/hosts/list"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert_eq!(client_for(&server).search::<CheckHost>("x").await.unwrap(), None);
}

#[tokio::test]
async fn test_long_running_create_gets_extended_timeout() {
    let server = MockServer::start().await;
    let slow = |body: serde_json::Value| {
        ResponseTemplate::new(200)
            .set_body_json(body)
            .set_delay(Duration::from_millis(1500))
    };
    Mock::given(method("PUT"))
        .and(path("/v3/checks/add/androidJourney"))
        .respond_with(slow(json!({
            "id": 8,
            "name": "app",
            "type": "ANDROID_JOURNEY",
            "checkGroup": {"id": 1},
            "appBinaryId": 77
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v3/checks/add/url"))
        .respond_with(slow(json!({})))
        .mount(&server)
        .await;

    let mut config = ProviderConfig::new(format!("{}/v3", server.uri()), API_KEY);
    config.timeout_secs = 1;
    config.extended_timeout_secs = 5;
    let client = MonitoringClient::from_config(&config).unwrap();

    let android = Check::<AndroidJourneySpec> {
        name: "app".into(),
        check_type: "ANDROID_JOURNEY".into(),
        check_group: IdRef::new(1),
        spec: AndroidJourneySpec {
            app_binary_id: 77,
            ..Default::default()
        },
        ..Default::default()
    };
    let stored = client.create(&android).await.expect("extended timeout applies");
    assert_eq!(stored.id, Some(8));

    let url = Check::<UrlSpec> {
        name: "homepage".into(),
        check_type: "URL".into(),
        check_group: IdRef::new(1),
        ..Default::default()
    };
    let err = client.create(&url).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Transport(TransportError::Timeout(timeout)) if timeout == Duration::from_secs(1)
    ));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    // Port 9 (discard) is closed on test machines.
    let config = ProviderConfig::new("http://127.0.0.1:9/", API_KEY);
    let client = MonitoringClient::from_config(&config).unwrap();
    let err = client.get::<CheckGroup>(1).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}
