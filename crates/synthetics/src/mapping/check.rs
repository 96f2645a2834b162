//! One mapper for the fields every check shares, parameterized over the
//! subtype's own settings mapper.

use super::{ToDomain, ToModel, all_to_domain, all_to_model, reference, referenced_id};
use crate::domain::{
    AndroidJourneySpec, BodyAssertion, CertificateSpec, Check, CheckSpec, DnsSpec, Header, IdRef,
    PingSpec, SocketSpec, UrlSpec, WebJourneySpec,
};
use crate::model::{
    AndroidJourneyModel, BodyAssertionModel, CertificateModel, CheckModel, DnsModel,
    HeaderModel, PingModel, SocketModel, UrlModel, WebJourneyModel,
};

impl<C> ToDomain for CheckModel<C>
where
    C: ToDomain,
    C::Domain: CheckSpec,
{
    type Domain = Check<C::Domain>;

    fn to_domain(&self) -> Self::Domain {
        Check {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            enabled: self.enabled,
            maintenance_override: self.maintenance_override,
            check_type: <C::Domain as CheckSpec>::KIND.tag().to_string(),
            frequency: self.frequency,
            trigger_count: self.trigger_count,
            result_retention: self.result_retention,
            check_host: reference(self.check_host_id),
            host_group: reference(self.host_group_id),
            check_group: IdRef::new(self.check_group_id),
            proxy_host: reference(self.proxy_host_id),
            spec: self.settings.to_domain(),
        }
    }
}

impl<S> ToModel for Check<S>
where
    S: CheckSpec + ToModel,
{
    type Model = CheckModel<S::Model>;

    fn to_model(&self) -> Self::Model {
        CheckModel {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            enabled: self.enabled,
            maintenance_override: self.maintenance_override,
            frequency: self.frequency,
            trigger_count: self.trigger_count,
            result_retention: self.result_retention,
            check_host_id: referenced_id(self.check_host.as_ref()),
            host_group_id: referenced_id(self.host_group.as_ref()),
            check_group_id: self.check_group.id,
            proxy_host_id: referenced_id(self.proxy_host.as_ref()),
            settings: self.spec.to_model(),
        }
    }
}

impl ToDomain for CertificateModel {
    type Domain = CertificateSpec;

    fn to_domain(&self) -> CertificateSpec {
        CertificateSpec {
            host: self.host.clone(),
            port: self.port,
            warning_days: self.warning_days,
            error_days: self.error_days,
        }
    }
}

impl ToModel for CertificateSpec {
    type Model = CertificateModel;

    fn to_model(&self) -> CertificateModel {
        CertificateModel {
            host: self.host.clone(),
            port: self.port,
            warning_days: self.warning_days,
            error_days: self.error_days,
        }
    }
}

impl ToDomain for DnsModel {
    type Domain = DnsSpec;

    fn to_domain(&self) -> DnsSpec {
        DnsSpec {
            hostname: self.hostname.clone(),
            record_type: self.record_type.clone(),
            dns_server: self.dns_server.clone(),
            expected_addresses: self.expected_addresses.clone(),
        }
    }
}

impl ToModel for DnsSpec {
    type Model = DnsModel;

    fn to_model(&self) -> DnsModel {
        DnsModel {
            hostname: self.hostname.clone(),
            record_type: self.record_type.clone(),
            dns_server: self.dns_server.clone(),
            expected_addresses: self.expected_addresses.clone(),
        }
    }
}

impl ToDomain for PingModel {
    type Domain = PingSpec;

    fn to_domain(&self) -> PingSpec {
        PingSpec {
            host: self.host.clone(),
            packet_count: self.packet_count,
            max_packet_loss: self.max_packet_loss,
        }
    }
}

impl ToModel for PingSpec {
    type Model = PingModel;

    fn to_model(&self) -> PingModel {
        PingModel {
            host: self.host.clone(),
            packet_count: self.packet_count,
            max_packet_loss: self.max_packet_loss,
        }
    }
}

impl ToDomain for SocketModel {
    type Domain = SocketSpec;

    fn to_domain(&self) -> SocketSpec {
        SocketSpec {
            host: self.host.clone(),
            port: self.port,
            send_string: self.send_string.clone(),
            expected_response: self.expected_response.clone(),
        }
    }
}

impl ToModel for SocketSpec {
    type Model = SocketModel;

    fn to_model(&self) -> SocketModel {
        SocketModel {
            host: self.host.clone(),
            port: self.port,
            send_string: self.send_string.clone(),
            expected_response: self.expected_response.clone(),
        }
    }
}

impl ToDomain for HeaderModel {
    type Domain = Header;

    fn to_domain(&self) -> Header {
        Header {
            name: self.name.clone(),
            value: self.value.clone(),
        }
    }
}

impl ToModel for Header {
    type Model = HeaderModel;

    fn to_model(&self) -> HeaderModel {
        HeaderModel {
            name: self.name.clone(),
            value: self.value.clone(),
        }
    }
}

impl ToDomain for BodyAssertionModel {
    type Domain = BodyAssertion;

    fn to_domain(&self) -> BodyAssertion {
        BodyAssertion {
            text: self.text.clone(),
            present: self.present,
        }
    }
}

impl ToModel for BodyAssertion {
    type Model = BodyAssertionModel;

    fn to_model(&self) -> BodyAssertionModel {
        BodyAssertionModel {
            text: self.text.clone(),
            present: self.present,
        }
    }
}

impl ToDomain for UrlModel {
    type Domain = UrlSpec;

    fn to_domain(&self) -> UrlSpec {
        UrlSpec {
            url: self.url.clone(),
            request_method: self.request_method.clone(),
            expected_response_code: self.expected_response_code,
            request_headers: all_to_domain(&self.request_headers),
            request_body: self.request_body.clone(),
            body_assertions: all_to_domain(&self.body_assertions),
            follow_redirects: self.follow_redirects,
        }
    }
}

impl ToModel for UrlSpec {
    type Model = UrlModel;

    fn to_model(&self) -> UrlModel {
        UrlModel {
            url: self.url.clone(),
            request_method: self.request_method.clone(),
            expected_response_code: self.expected_response_code,
            request_headers: all_to_model(&self.request_headers),
            request_body: self.request_body.clone(),
            body_assertions: all_to_model(&self.body_assertions),
            follow_redirects: self.follow_redirects,
        }
    }
}

impl ToDomain for WebJourneyModel {
    type Domain = WebJourneySpec;

    fn to_domain(&self) -> WebJourneySpec {
        WebJourneySpec {
            start_url: self.start_url.clone(),
            browser: self.browser.clone(),
            monitored_domains: self.monitored_domains.clone(),
            steps: all_to_domain(&self.steps),
        }
    }
}

impl ToModel for WebJourneySpec {
    type Model = WebJourneyModel;

    fn to_model(&self) -> WebJourneyModel {
        WebJourneyModel {
            start_url: self.start_url.clone(),
            browser: self.browser.clone(),
            monitored_domains: self.monitored_domains.clone(),
            steps: all_to_model(&self.steps),
        }
    }
}

impl ToDomain for AndroidJourneyModel {
    type Domain = AndroidJourneySpec;

    fn to_domain(&self) -> AndroidJourneySpec {
        AndroidJourneySpec {
            app_binary_id: self.app_binary_id,
            device: self.device.clone(),
            monitored_domains: self.monitored_domains.clone(),
            steps: all_to_domain(&self.steps),
        }
    }
}

impl ToModel for AndroidJourneySpec {
    type Model = AndroidJourneyModel;

    fn to_model(&self) -> AndroidJourneyModel {
        AndroidJourneyModel {
            app_binary_id: self.app_binary_id,
            device: self.device.clone(),
            monitored_domains: self.monitored_domains.clone(),
            steps: all_to_model(&self.steps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CheckKind, StepType};
    use crate::model::StepModel;
    use crate::model::journey::{ActionModel, PasswordInputModel, SelectorModel};

    fn url_check() -> CheckModel<UrlModel> {
        CheckModel {
            id: Some(42),
            name: "Home".into(),
            description: Some("landing page".into()),
            enabled: true,
            maintenance_override: false,
            frequency: Some(60),
            trigger_count: Some(2),
            result_retention: None,
            check_host_id: Some(3),
            host_group_id: None,
            check_group_id: 5,
            proxy_host_id: None,
            settings: UrlModel {
                url: "https://example.com".into(),
                request_method: "GET".into(),
                expected_response_code: Some(200),
                request_headers: vec![
                    HeaderModel {
                        name: "Accept-Language".into(),
                        value: "en".into(),
                    },
                    HeaderModel {
                        name: "X-Probe".into(),
                        value: "1".into(),
                    },
                ],
                request_body: None,
                body_assertions: vec![BodyAssertionModel {
                    text: "Welcome".into(),
                    present: true,
                }],
                follow_redirects: Some(true),
            },
        }
    }

    #[test]
    fn url_check_round_trips() {
        let model = url_check();
        let domain = model.to_domain();
        assert_eq!(domain.check_type, "URL");
        assert_eq!(domain.check_group.id, 5);
        assert_eq!(domain.check_host.as_ref().map(|r| r.id), Some(3));
        assert_eq!(domain.host_group, None);
        assert_eq!(domain.proxy_host, None);
        assert_eq!(domain.spec.request_headers[1].name, "X-Probe");
        assert_eq!(domain.to_model(), model);
    }

    #[test]
    fn subtype_selects_type_tag() {
        let ping = CheckModel {
            name: "gw".into(),
            check_group_id: 1,
            settings: PingModel {
                host: "10.0.0.1".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(ping.to_domain().check_type, CheckKind::Ping.tag());

        let dns = CheckModel {
            name: "mx".into(),
            check_group_id: 1,
            settings: DnsModel {
                hostname: "example.com".into(),
                record_type: "MX".into(),
                dns_server: None,
                expected_addresses: vec!["mx1.example.com".into(), "mx2.example.com".into()],
            },
            ..Default::default()
        };
        let domain = dns.to_domain();
        assert_eq!(domain.check_type, "DNS");
        assert_eq!(domain.to_model(), dns);
    }

    #[test]
    fn scalar_subtypes_round_trip() {
        let certificate = CheckModel {
            name: "tls".into(),
            check_group_id: 2,
            host_group_id: Some(6),
            settings: CertificateModel {
                host: "example.com".into(),
                port: Some(443),
                warning_days: Some(21),
                error_days: Some(7),
            },
            ..Default::default()
        };
        assert_eq!(certificate.to_domain().to_model(), certificate);

        let socket = CheckModel {
            name: "smtp".into(),
            check_group_id: 2,
            proxy_host_id: Some(11),
            settings: SocketModel {
                host: "mail.example.com".into(),
                port: 25,
                send_string: Some("EHLO probe".into()),
                expected_response: Some("250".into()),
            },
            ..Default::default()
        };
        let domain = socket.to_domain();
        assert_eq!(domain.proxy_host.as_ref().map(|r| r.id), Some(11));
        assert_eq!(domain.to_model(), socket);
    }

    #[test]
    fn journeys_share_step_mapping() {
        let step = StepModel {
            sequence: 1,
            step_type: StepType::Custom,
            actions: vec![ActionModel {
                sequence: 1,
                action_type: "PASSWORD_INPUT".into(),
                password_input: Some(PasswordInputModel {
                    selectors: vec![SelectorModel {
                        selector_type: "ID".into(),
                        value: "pin".into(),
                    }],
                    value: Some("0000".into()),
                }),
                ..Default::default()
            }],
            ..Default::default()
        };

        let web = CheckModel {
            name: "checkout".into(),
            check_group_id: 1,
            settings: WebJourneyModel {
                start_url: "https://shop.example".into(),
                browser: Some("CHROME".into()),
                monitored_domains: vec!["shop.example".into()],
                steps: vec![step.clone()],
            },
            ..Default::default()
        };
        let android = CheckModel {
            name: "app login".into(),
            check_group_id: 1,
            settings: AndroidJourneyModel {
                app_binary_id: 900,
                device: None,
                monitored_domains: vec![],
                steps: vec![step],
            },
            ..Default::default()
        };

        let web_back = web.to_domain().to_model();
        let android_back = android.to_domain().to_model();
        assert_eq!(web_back.settings.steps, android_back.settings.steps);

        let password = web_back.settings.steps[0].actions[0]
            .password_input
            .as_ref()
            .unwrap();
        assert_eq!(password.value, None);
        assert_eq!(android_back.settings.app_binary_id, 900);
        assert_eq!(web_back.settings.monitored_domains, vec!["shop.example"]);
    }
}
