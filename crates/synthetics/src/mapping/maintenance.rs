use super::{ToDomain, ToModel, referenced_ids, references};
use crate::domain::MaintenancePeriod;
use crate::model::MaintenancePeriodModel;

impl ToDomain for MaintenancePeriodModel {
    type Domain = MaintenancePeriod;

    fn to_domain(&self) -> MaintenancePeriod {
        MaintenancePeriod {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
            recurrence: self.recurrence.clone(),
            checks: references(&self.check_ids),
            check_groups: references(&self.check_group_ids),
        }
    }
}

impl ToModel for MaintenancePeriod {
    type Model = MaintenancePeriodModel;

    fn to_model(&self) -> MaintenancePeriodModel {
        MaintenancePeriodModel {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
            recurrence: self.recurrence.clone(),
            check_ids: referenced_ids(&self.checks),
            check_group_ids: referenced_ids(&self.check_groups),
        }
    }
}
