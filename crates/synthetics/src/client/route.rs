use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{
    Check, CheckGroup, CheckHost, CheckKind, CheckSpec, CommonStep, DashboardGroup, HostGroup,
    MaintenancePeriod, Platform, ProxyHost,
};
use crate::error::ClientError;

/// Static verb-to-path table of one entity family.
///
/// Paths are relative; the client joins them onto the configured host URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    root: &'static str,
    scope: Option<&'static str>,
    kind: Option<CheckKind>,
}

impl Route {
    pub const fn new(root: &'static str) -> Self {
        Self {
            root,
            scope: None,
            kind: None,
        }
    }

    /// `root/scope` becomes the collection, e.g. `checks/commonSteps/web`.
    pub const fn scoped(root: &'static str, scope: &'static str) -> Self {
        Self {
            root,
            scope: Some(scope),
            kind: None,
        }
    }

    /// Add and update carry the check kind as a trailing segment.
    pub const fn with_kind(mut self, kind: CheckKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub const fn kind(&self) -> Option<CheckKind> {
        self.kind
    }

    /// Writes on this route need the extended timeout.
    pub const fn is_long_running(&self) -> bool {
        match self.kind {
            Some(kind) => kind.is_long_running(),
            None => false,
        }
    }

    fn collection(&self) -> String {
        match self.scope {
            Some(scope) => format!("{}/{}", self.root, scope),
            None => self.root.to_string(),
        }
    }

    fn with_kind_segment(&self, verb: &str) -> String {
        match self.kind {
            Some(kind) => format!("{}/{}/{}", self.collection(), verb, kind.segment()),
            None => format!("{}/{}", self.collection(), verb),
        }
    }

    pub fn get_path(&self, id: i64) -> String {
        format!("{}/{}", self.collection(), id)
    }

    pub fn create_path(&self) -> String {
        self.with_kind_segment("add")
    }

    pub fn update_path(&self) -> String {
        self.with_kind_segment("update")
    }

    pub fn delete_path(&self, id: i64) -> String {
        format!("{}/remove/{}", self.collection(), id)
    }

    pub fn list_path(&self) -> String {
        format!("{}/list", self.collection())
    }
}

/// An entity the client can get, create, update, delete and search.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync {
    const ROUTE: Route;
    /// Human-readable name used in logs and adapter errors.
    const NAME: &'static str;

    fn id(&self) -> Option<i64>;

    /// Rejects a decoded object whose wire tag belongs to another route.
    fn ensure_kind(&self) -> Result<(), ClientError> {
        Ok(())
    }
}

macro_rules! plain_resource {
    ($ty:ty, $root:literal, $name:literal) => {
        impl Resource for $ty {
            const ROUTE: Route = Route::new($root);
            const NAME: &'static str = $name;

            fn id(&self) -> Option<i64> {
                self.id
            }
        }
    };
}

plain_resource!(CheckGroup, "checkGroups", "check group");
plain_resource!(CheckHost, "hosts", "check host");
plain_resource!(HostGroup, "hostGroups", "host group");
plain_resource!(DashboardGroup, "dashboardGroups", "dashboard group");
plain_resource!(MaintenancePeriod, "maintenancePeriods", "maintenance period");
plain_resource!(ProxyHost, "proxies", "proxy host");

impl<S: CheckSpec> Resource for Check<S> {
    const ROUTE: Route = Route::new("checks").with_kind(S::KIND);
    const NAME: &'static str = "check";

    fn id(&self) -> Option<i64> {
        self.id
    }

    // Any check whose required fields fit `S` would decode, so the tag
    // decides.
    fn ensure_kind(&self) -> Result<(), ClientError> {
        if CheckKind::from_tag(&self.check_type) == Some(S::KIND) {
            return Ok(());
        }
        Err(ClientError::KindMismatch {
            expected: S::KIND.tag(),
            found: self.check_type.clone(),
        })
    }
}

impl<P: Platform> Resource for CommonStep<P> {
    const ROUTE: Route = Route::scoped("checks", P::COMMON_STEP_SCOPE);
    const NAME: &'static str = "common step";

    fn id(&self) -> Option<i64> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Android, AndroidJourneySpec, UrlSpec, Web};

    #[test]
    fn plain_paths() {
        let route = <CheckGroup as Resource>::ROUTE;
        assert_eq!(route.get_path(7), "checkGroups/7");
        assert_eq!(route.create_path(), "checkGroups/add");
        assert_eq!(route.update_path(), "checkGroups/update");
        assert_eq!(route.delete_path(7), "checkGroups/remove/7");
        assert_eq!(route.list_path(), "checkGroups/list");
        assert!(!route.is_long_running());

        assert_eq!(<ProxyHost as Resource>::ROUTE.get_path(1), "proxies/1");
        assert_eq!(<CheckHost as Resource>::ROUTE.list_path(), "hosts/list");
    }

    #[test]
    fn check_paths_carry_kind_on_writes_only() {
        let route = <Check<UrlSpec> as Resource>::ROUTE;
        assert_eq!(route.get_path(42), "checks/42");
        assert_eq!(route.create_path(), "checks/add/url");
        assert_eq!(route.update_path(), "checks/update/url");
        assert_eq!(route.delete_path(42), "checks/remove/42");
        assert_eq!(route.list_path(), "checks/list");
        assert!(!route.is_long_running());

        let android = <Check<AndroidJourneySpec> as Resource>::ROUTE;
        assert_eq!(android.create_path(), "checks/add/androidJourney");
        assert!(android.is_long_running());
    }

    #[test]
    fn common_step_paths_are_scoped_by_platform() {
        let web = <CommonStep<Web> as Resource>::ROUTE;
        assert_eq!(web.get_path(3), "checks/commonSteps/web/3");
        assert_eq!(web.create_path(), "checks/commonSteps/web/add");
        assert_eq!(web.delete_path(3), "checks/commonSteps/web/remove/3");

        let android = <CommonStep<Android> as Resource>::ROUTE;
        assert_eq!(android.list_path(), "checks/commonSteps/android/list");
    }
}
