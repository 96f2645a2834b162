use crate::domain::Platform;
use crate::model::{
    ActionModel, AndroidJourneyModel, CertificateModel, CheckGroupModel, CheckHostModel,
    CheckModel, CommonStepModel, DashboardGroupModel, DnsModel, HostGroupModel,
    MaintenancePeriodModel, PingModel, ProxyHostModel, SocketModel, StepModel, UrlModel,
    WebJourneyModel,
};

/// Restores write-only values the service never echoes back.
///
/// Implemented by every model; most carry no secrets and keep the default.
pub trait RetainSecrets {
    /// Copies secrets from `prior` into `self` wherever `self` lacks them.
    fn retain_secrets(&mut self, _prior: &Self) {}
}

/// `fresh` as read from the service, with secrets carried over from `prior`.
pub fn merge_secrets<M: RetainSecrets>(mut fresh: M, prior: &M) -> M {
    fresh.retain_secrets(prior);
    fresh
}

impl RetainSecrets for CheckGroupModel {}
impl RetainSecrets for DashboardGroupModel {}
impl RetainSecrets for HostGroupModel {}
impl RetainSecrets for CheckHostModel {}
impl RetainSecrets for ProxyHostModel {}
impl RetainSecrets for MaintenancePeriodModel {}
impl RetainSecrets for CertificateModel {}
impl RetainSecrets for DnsModel {}
impl RetainSecrets for PingModel {}
impl RetainSecrets for SocketModel {}
impl RetainSecrets for UrlModel {}

impl<C: RetainSecrets> RetainSecrets for CheckModel<C> {
    fn retain_secrets(&mut self, prior: &Self) {
        self.settings.retain_secrets(&prior.settings);
    }
}

impl RetainSecrets for WebJourneyModel {
    fn retain_secrets(&mut self, prior: &Self) {
        retain_all(&mut self.steps, &prior.steps);
    }
}

impl RetainSecrets for AndroidJourneyModel {
    fn retain_secrets(&mut self, prior: &Self) {
        retain_all(&mut self.steps, &prior.steps);
    }
}

impl RetainSecrets for StepModel {
    fn retain_secrets(&mut self, prior: &Self) {
        retain_all(&mut self.actions, &prior.actions);
    }
}

impl<P: Platform> RetainSecrets for CommonStepModel<P> {
    fn retain_secrets(&mut self, prior: &Self) {
        retain_all(&mut self.actions, &prior.actions);
    }
}

impl RetainSecrets for ActionModel {
    fn retain_secrets(&mut self, prior: &Self) {
        let (Some(fresh), Some(old)) = (self.password_input.as_mut(), &prior.password_input)
        else {
            return;
        };
        if fresh.value.as_deref().is_none_or(str::is_empty) {
            fresh.value.clone_from(&old.value);
        }
    }
}

/// Items of an ordered list that may or may not have a service id yet.
trait Sequenced {
    fn id(&self) -> Option<i64>;
    fn sequence(&self) -> i64;
}

impl Sequenced for StepModel {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn sequence(&self) -> i64 {
        self.sequence
    }
}

impl Sequenced for ActionModel {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn sequence(&self) -> i64 {
        self.sequence
    }
}

/// Prior item with the same id; failing that, one with the same sequence
/// where at least one side has no id yet.
fn counterpart<'p, T: Sequenced>(item: &T, prior: &'p [T]) -> Option<&'p T> {
    if let Some(id) = item.id() {
        if let Some(found) = prior.iter().find(|p| p.id() == Some(id)) {
            return Some(found);
        }
    }
    prior.iter().find(|p| {
        (item.id().is_none() || p.id().is_none()) && p.sequence() == item.sequence()
    })
}

fn retain_all<T: Sequenced + RetainSecrets>(fresh: &mut [T], prior: &[T]) {
    for item in fresh.iter_mut() {
        if let Some(old) = counterpart(item, prior) {
            item.retain_secrets(old);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActionKind;
    use crate::model::{PasswordInputModel, SelectorModel};

    fn password(id: Option<i64>, sequence: i64, value: Option<&str>) -> ActionModel {
        ActionModel {
            id,
            sequence,
            action_type: ActionKind::PasswordInput.tag().to_string(),
            password_input: Some(PasswordInputModel {
                selectors: vec![SelectorModel {
                    selector_type: "CSS".into(),
                    value: "#pw".into(),
                }],
                value: value.map(str::to_string),
            }),
            ..Default::default()
        }
    }

    fn step(id: Option<i64>, sequence: i64, actions: Vec<ActionModel>) -> StepModel {
        StepModel {
            id,
            sequence,
            actions,
            ..Default::default()
        }
    }

    fn journey(steps: Vec<StepModel>) -> CheckModel<WebJourneyModel> {
        CheckModel {
            settings: WebJourneyModel {
                start_url: "https://shop.example.com".into(),
                steps,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn secret_of(model: &CheckModel<WebJourneyModel>, step: usize, action: usize) -> Option<&str> {
        model.settings.steps[step].actions[action]
            .password_input
            .as_ref()
            .and_then(|p| p.value.as_deref())
    }

    #[test]
    fn secrets_follow_sequence_when_prior_has_no_ids() {
        let prior = journey(vec![
            step(None, 1, vec![password(None, 1, Some("hunter2"))]),
            step(None, 2, vec![password(None, 1, Some("s3cret"))]),
        ]);
        let fresh = journey(vec![
            step(Some(20), 2, vec![password(Some(200), 1, None)]),
            step(Some(10), 1, vec![password(Some(100), 1, None)]),
        ]);

        let merged = merge_secrets(fresh, &prior);
        assert_eq!(secret_of(&merged, 0, 0), Some("s3cret"));
        assert_eq!(secret_of(&merged, 1, 0), Some("hunter2"));
    }

    #[test]
    fn ids_win_over_sequence() {
        let prior = journey(vec![step(
            Some(10),
            1,
            vec![
                password(Some(100), 1, Some("first")),
                password(Some(101), 2, Some("second")),
            ],
        )]);
        // Actions were reordered on the service.
        let fresh = journey(vec![step(
            Some(10),
            1,
            vec![password(Some(101), 1, None), password(Some(100), 2, None)],
        )]);

        let merged = merge_secrets(fresh, &prior);
        assert_eq!(secret_of(&merged, 0, 0), Some("second"));
        assert_eq!(secret_of(&merged, 0, 1), Some("first"));
    }

    #[test]
    fn mismatched_ids_do_not_leak_secrets() {
        let prior = journey(vec![step(Some(10), 1, vec![password(Some(100), 1, Some("x"))])]);
        let fresh = journey(vec![step(Some(11), 1, vec![password(Some(100), 1, None)])]);

        let merged = merge_secrets(fresh, &prior);
        assert_eq!(secret_of(&merged, 0, 0), None);
    }

    #[test]
    fn present_value_is_kept() {
        let prior = journey(vec![step(None, 1, vec![password(None, 1, Some("old"))])]);
        let fresh = journey(vec![step(None, 1, vec![password(None, 1, Some("new"))])]);

        let merged = merge_secrets(fresh, &prior);
        assert_eq!(secret_of(&merged, 0, 0), Some("new"));
    }

    #[test]
    fn common_step_actions_are_merged() {
        let prior = CommonStepModel::<crate::domain::Web> {
            name: "login".into(),
            actions: vec![password(None, 1, Some("pw"))],
            ..Default::default()
        };
        let fresh = CommonStepModel::<crate::domain::Web> {
            id: Some(4),
            name: "login".into(),
            actions: vec![password(Some(40), 1, Some(""))],
            ..Default::default()
        };

        let merged = merge_secrets(fresh, &prior);
        assert_eq!(
            merged.actions[0].password_input.as_ref().unwrap().value.as_deref(),
            Some("pw")
        );
    }
}
