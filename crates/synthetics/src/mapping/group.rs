use super::{ToDomain, ToModel, reference, referenced_id, referenced_ids, references};
use crate::domain::{CheckGroup, DashboardGroup, HostGroup};
use crate::model::{CheckGroupModel, DashboardGroupModel, HostGroupModel};

impl ToDomain for CheckGroupModel {
    type Domain = CheckGroup;

    fn to_domain(&self) -> CheckGroup {
        CheckGroup {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            frequency: self.frequency,
            dashboard_group: reference(self.dashboard_group_id),
            enabled: self.enabled,
        }
    }
}

impl ToModel for CheckGroup {
    type Model = CheckGroupModel;

    fn to_model(&self) -> CheckGroupModel {
        CheckGroupModel {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            frequency: self.frequency,
            dashboard_group_id: referenced_id(self.dashboard_group.as_ref()),
            enabled: self.enabled,
        }
    }
}

impl ToDomain for DashboardGroupModel {
    type Domain = DashboardGroup;

    fn to_domain(&self) -> DashboardGroup {
        DashboardGroup {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

impl ToModel for DashboardGroup {
    type Model = DashboardGroupModel;

    fn to_model(&self) -> DashboardGroupModel {
        DashboardGroupModel {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

impl ToDomain for HostGroupModel {
    type Domain = HostGroup;

    fn to_domain(&self) -> HostGroup {
        HostGroup {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            check_hosts: references(&self.check_host_ids),
        }
    }
}

impl ToModel for HostGroup {
    type Model = HostGroupModel;

    fn to_model(&self) -> HostGroupModel {
        HostGroupModel {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            check_host_ids: referenced_ids(&self.check_hosts),
        }
    }
}
