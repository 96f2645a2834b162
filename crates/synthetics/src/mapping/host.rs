use super::{ToDomain, ToModel};
use crate::domain::{CheckHost, ProxyHost};
use crate::model::{CheckHostModel, ProxyHostModel};

impl ToDomain for CheckHostModel {
    type Domain = CheckHost;

    fn to_domain(&self) -> CheckHost {
        CheckHost {
            id: self.id,
            name: self.name.clone(),
            address: self.address.clone(),
            location: self.location.clone(),
            enabled: self.enabled,
        }
    }
}

impl ToModel for CheckHost {
    type Model = CheckHostModel;

    fn to_model(&self) -> CheckHostModel {
        CheckHostModel {
            id: self.id,
            name: self.name.clone(),
            address: self.address.clone(),
            location: self.location.clone(),
            enabled: self.enabled,
        }
    }
}

impl ToDomain for ProxyHostModel {
    type Domain = ProxyHost;

    fn to_domain(&self) -> ProxyHost {
        ProxyHost {
            id: self.id,
            name: self.name.clone(),
            host: self.host.clone(),
            port: self.port,
            username: self.username.clone(),
        }
    }
}

impl ToModel for ProxyHost {
    type Model = ProxyHostModel;

    fn to_model(&self) -> ProxyHostModel {
        ProxyHostModel {
            id: self.id,
            name: self.name.clone(),
            host: self.host.clone(),
            port: self.port,
            username: self.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hosts_round_trip() {
        let host = CheckHostModel {
            id: Some(1),
            name: "fra-1".into(),
            address: "192.0.2.10".into(),
            location: Some("Frankfurt".into()),
            enabled: true,
        };
        assert_eq!(host.to_domain().to_model(), host);

        let proxy = ProxyHostModel {
            id: None,
            name: "egress".into(),
            host: "proxy.internal".into(),
            port: 3128,
            username: None,
        };
        assert_eq!(proxy.to_domain().to_model(), proxy);
    }
}
