use std::marker::PhantomData;

use super::{ToDomain, ToModel, all_to_domain, all_to_model};
use crate::domain::journey::{
    ConsoleLog, CurrentUrl, IframeByOrder, IframeByXpath, NavigateToUrl, PasswordInput,
    SelectOption, TextInput, UrlResponse, Wait, WindowByOrder, WindowByTitle,
};
use crate::domain::{
    Action, ActionBody, ActionKind, AlertSuppression, CommonStep, ConsoleSuppression,
    ElementAction, ForElement, ForText, NetworkSuppression, PageCheck, PageCheckBody,
    PageCheckKind, Platform, Selector, Step,
};
use crate::model::journey::{
    ConsoleLogModel, CurrentUrlModel, ElementActionModel, ForElementModel, ForTextModel,
    IframeByOrderModel, IframeByXpathModel, NavigateToUrlModel, PasswordInputModel,
    SelectOptionModel, TextInputModel, UrlResponseModel, WaitModel, WindowByOrderModel,
    WindowByTitleModel,
};
use crate::model::{
    ActionModel, CommonStepModel, ConsoleSuppressionModel, NetworkSuppressionModel,
    PageCheckModel, SelectorModel, StepModel,
};

impl ToDomain for StepModel {
    type Domain = Step;

    fn to_domain(&self) -> Step {
        Step {
            id: self.id,
            sequence: self.sequence,
            step_type: self.step_type,
            common_step_id: self.common_step_id,
            name: self.name.clone(),
            max_wait_time: self.max_wait_time,
            page_load_time_warning: self.page_load_time_warning,
            page_load_time_error: self.page_load_time_error,
            page_checks: all_to_domain(&self.page_checks),
            alert_suppressions: fan_in_suppressions(
                &self.network_suppressions,
                &self.console_suppressions,
            ),
            actions: all_to_domain(&self.actions),
        }
    }
}

impl ToModel for Step {
    type Model = StepModel;

    fn to_model(&self) -> StepModel {
        let (network_suppressions, console_suppressions) =
            fan_out_suppressions(&self.alert_suppressions);
        StepModel {
            id: self.id,
            sequence: self.sequence,
            step_type: self.step_type,
            common_step_id: self.common_step_id,
            name: self.name.clone(),
            max_wait_time: self.max_wait_time,
            page_load_time_warning: self.page_load_time_warning,
            page_load_time_error: self.page_load_time_error,
            page_checks: all_to_model(&self.page_checks),
            network_suppressions,
            console_suppressions,
            actions: all_to_model(&self.actions),
        }
    }
}

impl<P: Platform> ToDomain for CommonStepModel<P> {
    type Domain = CommonStep<P>;

    fn to_domain(&self) -> CommonStep<P> {
        CommonStep {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            page_checks: all_to_domain(&self.page_checks),
            alert_suppressions: fan_in_suppressions(
                &self.network_suppressions,
                &self.console_suppressions,
            ),
            actions: all_to_domain(&self.actions),
            platform: PhantomData,
        }
    }
}

impl<P: Platform> ToModel for CommonStep<P> {
    type Model = CommonStepModel<P>;

    fn to_model(&self) -> CommonStepModel<P> {
        let (network_suppressions, console_suppressions) =
            fan_out_suppressions(&self.alert_suppressions);
        CommonStepModel {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            page_checks: all_to_model(&self.page_checks),
            network_suppressions,
            console_suppressions,
            actions: all_to_model(&self.actions),
            platform: PhantomData,
        }
    }
}

impl ToDomain for SelectorModel {
    type Domain = Selector;

    fn to_domain(&self) -> Selector {
        Selector {
            selector_type: self.selector_type.clone(),
            value: self.value.clone(),
        }
    }
}

impl ToModel for Selector {
    type Model = SelectorModel;

    fn to_model(&self) -> SelectorModel {
        SelectorModel {
            selector_type: self.selector_type.clone(),
            value: self.value.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Alert suppressions
// ---------------------------------------------------------------------------

/// Merges the two model lists into the single list the service stores.
/// Network rules come first; order inside each list is kept.
pub fn fan_in_suppressions(
    network: &[NetworkSuppressionModel],
    console: &[ConsoleSuppressionModel],
) -> Vec<AlertSuppression> {
    let network = network.iter().map(|n| AlertSuppression::Network {
        id: n.id,
        rule: NetworkSuppression {
            url_pattern: n.url_pattern.clone(),
            method: n.method.clone(),
            status_code: n.status_code,
        },
    });
    let console = console.iter().map(|c| AlertSuppression::Console {
        id: c.id,
        rule: ConsoleSuppression {
            level: c.level.clone(),
            text_pattern: c.text_pattern.clone(),
        },
    });
    network.chain(console).collect()
}

/// Splits the service's mixed list by kind, keeping relative order.
/// Records without a rule are dropped.
pub fn fan_out_suppressions(
    suppressions: &[AlertSuppression],
) -> (Vec<NetworkSuppressionModel>, Vec<ConsoleSuppressionModel>) {
    let mut network = Vec::new();
    let mut console = Vec::new();
    for suppression in suppressions {
        match suppression {
            AlertSuppression::Network { id, rule } => network.push(NetworkSuppressionModel {
                id: *id,
                url_pattern: rule.url_pattern.clone(),
                method: rule.method.clone(),
                status_code: rule.status_code,
            }),
            AlertSuppression::Console { id, rule } => console.push(ConsoleSuppressionModel {
                id: *id,
                level: rule.level.clone(),
                text_pattern: rule.text_pattern.clone(),
            }),
            AlertSuppression::Unpopulated { .. } => {}
        }
    }
    (network, console)
}

// ---------------------------------------------------------------------------
// Page checks
// ---------------------------------------------------------------------------

fn page_check_payload(model: &PageCheckModel, kind: PageCheckKind) -> Option<PageCheckBody> {
    match kind {
        PageCheckKind::ForText => model.for_text.as_ref().map(|p| {
            PageCheckBody::ForText(ForText {
                text: p.text.clone(),
                present: p.present,
            })
        }),
        PageCheckKind::ForElement => model.for_element.as_ref().map(|p| {
            PageCheckBody::ForElement(ForElement {
                selectors: all_to_domain(&p.selectors),
                present: p.present,
            })
        }),
        PageCheckKind::CurrentUrl => model.current_url.as_ref().map(|p| {
            PageCheckBody::CurrentUrl(CurrentUrl {
                url: p.url.clone(),
                partial_match: p.partial_match,
            })
        }),
        PageCheckKind::UrlResponse => model.url_response.as_ref().map(|p| {
            PageCheckBody::UrlResponse(UrlResponse {
                url: p.url.clone(),
                expected_status: p.expected_status,
                max_duration: p.max_duration,
            })
        }),
        PageCheckKind::ConsoleLog => model.console_log.as_ref().map(|p| {
            PageCheckBody::ConsoleLog(ConsoleLog {
                level: p.level.clone(),
                text: p.text.clone(),
            })
        }),
    }
}

impl ToDomain for PageCheckModel {
    type Domain = PageCheck;

    fn to_domain(&self) -> PageCheck {
        let body = PageCheckKind::ALL
            .into_iter()
            .find_map(|kind| page_check_payload(self, kind))
            .unwrap_or_else(|| PageCheckBody::Unpopulated(self.check_type.clone()));
        PageCheck { id: self.id, body }
    }
}

impl ToModel for PageCheck {
    type Model = PageCheckModel;

    fn to_model(&self) -> PageCheckModel {
        let mut model = PageCheckModel {
            id: self.id,
            check_type: self.body.tag().to_string(),
            ..Default::default()
        };
        match &self.body {
            PageCheckBody::ForText(p) => {
                model.for_text = Some(ForTextModel {
                    text: p.text.clone(),
                    present: p.present,
                })
            }
            PageCheckBody::ForElement(p) => {
                model.for_element = Some(ForElementModel {
                    selectors: all_to_model(&p.selectors),
                    present: p.present,
                })
            }
            PageCheckBody::CurrentUrl(p) => {
                model.current_url = Some(CurrentUrlModel {
                    url: p.url.clone(),
                    partial_match: p.partial_match,
                })
            }
            PageCheckBody::UrlResponse(p) => {
                model.url_response = Some(UrlResponseModel {
                    url: p.url.clone(),
                    expected_status: p.expected_status,
                    max_duration: p.max_duration,
                })
            }
            PageCheckBody::ConsoleLog(p) => {
                model.console_log = Some(ConsoleLogModel {
                    level: p.level.clone(),
                    text: p.text.clone(),
                })
            }
            PageCheckBody::Unpopulated(_) => {}
        }
        model
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

fn element_action(model: &ElementActionModel) -> ElementAction {
    ElementAction {
        selectors: all_to_domain(&model.selectors),
    }
}

fn element_action_model(action: &ElementAction) -> ElementActionModel {
    ElementActionModel {
        selectors: all_to_model(&action.selectors),
    }
}

fn action_payload(model: &ActionModel, kind: ActionKind) -> Option<ActionBody> {
    match kind {
        ActionKind::Click => model
            .click
            .as_ref()
            .map(|p| ActionBody::Click(element_action(p))),
        ActionKind::DoubleClick => model
            .double_click
            .as_ref()
            .map(|p| ActionBody::DoubleClick(element_action(p))),
        ActionKind::RightClick => model
            .right_click
            .as_ref()
            .map(|p| ActionBody::RightClick(element_action(p))),
        ActionKind::TextInput => model.text_input.as_ref().map(|p| {
            ActionBody::TextInput(TextInput {
                selectors: all_to_domain(&p.selectors),
                value: p.value.clone(),
            })
        }),
        ActionKind::PasswordInput => model.password_input.as_ref().map(|p| {
            ActionBody::PasswordInput(PasswordInput {
                selectors: all_to_domain(&p.selectors),
                value: p.value.clone().unwrap_or_default(),
            })
        }),
        ActionKind::ChangeWindowByOrder => model
            .change_window_by_order
            .as_ref()
            .map(|p| ActionBody::ChangeWindowByOrder(WindowByOrder { order: p.order })),
        ActionKind::ChangeWindowByTitle => model.change_window_by_title.as_ref().map(|p| {
            ActionBody::ChangeWindowByTitle(WindowByTitle {
                title: p.title.clone(),
            })
        }),
        ActionKind::NavigateToUrl => model
            .navigate_to_url
            .as_ref()
            .map(|p| ActionBody::NavigateToUrl(NavigateToUrl { url: p.url.clone() })),
        ActionKind::Wait => model.wait.as_ref().map(|p| {
            ActionBody::Wait(Wait {
                duration: p.duration,
            })
        }),
        ActionKind::SelectIframeByOrder => model
            .select_iframe_by_order
            .as_ref()
            .map(|p| ActionBody::SelectIframeByOrder(IframeByOrder { order: p.order })),
        ActionKind::SelectIframeByXpath => model.select_iframe_by_xpath.as_ref().map(|p| {
            ActionBody::SelectIframeByXpath(IframeByXpath {
                xpath: p.xpath.clone(),
            })
        }),
        ActionKind::ScrollToElement => model
            .scroll_to_element
            .as_ref()
            .map(|p| ActionBody::ScrollToElement(element_action(p))),
        ActionKind::SelectOption => model.select_option.as_ref().map(|p| {
            ActionBody::SelectOption(SelectOption {
                selectors: all_to_domain(&p.selectors),
                select_by: p.select_by.clone(),
                option: p.option.clone(),
            })
        }),
    }
}

impl ToDomain for ActionModel {
    type Domain = Action;

    /// The first populated slot in [`ActionKind::ALL`] order decides the
    /// variant; the model's own `type` string is only kept when no slot is set.
    fn to_domain(&self) -> Action {
        let body = ActionKind::ALL
            .into_iter()
            .find_map(|kind| action_payload(self, kind))
            .unwrap_or_else(|| ActionBody::Unpopulated(self.action_type.clone()));
        Action {
            id: self.id,
            sequence: self.sequence,
            description: self.description.clone(),
            body,
        }
    }
}

impl ToModel for Action {
    type Model = ActionModel;

    fn to_model(&self) -> ActionModel {
        let mut model = ActionModel {
            id: self.id,
            sequence: self.sequence,
            description: self.description.clone(),
            action_type: self.body.tag().to_string(),
            ..Default::default()
        };
        match &self.body {
            ActionBody::Click(p) => model.click = Some(element_action_model(p)),
            ActionBody::DoubleClick(p) => model.double_click = Some(element_action_model(p)),
            ActionBody::RightClick(p) => model.right_click = Some(element_action_model(p)),
            ActionBody::TextInput(p) => {
                model.text_input = Some(TextInputModel {
                    selectors: all_to_model(&p.selectors),
                    value: p.value.clone(),
                })
            }
            // Write-only on the service; the adapter restores it from prior state.
            ActionBody::PasswordInput(p) => {
                model.password_input = Some(PasswordInputModel {
                    selectors: all_to_model(&p.selectors),
                    value: None,
                })
            }
            ActionBody::ChangeWindowByOrder(p) => {
                model.change_window_by_order = Some(WindowByOrderModel { order: p.order })
            }
            ActionBody::ChangeWindowByTitle(p) => {
                model.change_window_by_title = Some(WindowByTitleModel {
                    title: p.title.clone(),
                })
            }
            ActionBody::NavigateToUrl(p) => {
                model.navigate_to_url = Some(NavigateToUrlModel { url: p.url.clone() })
            }
            ActionBody::Wait(p) => {
                model.wait = Some(WaitModel {
                    duration: p.duration,
                })
            }
            ActionBody::SelectIframeByOrder(p) => {
                model.select_iframe_by_order = Some(IframeByOrderModel { order: p.order })
            }
            ActionBody::SelectIframeByXpath(p) => {
                model.select_iframe_by_xpath = Some(IframeByXpathModel {
                    xpath: p.xpath.clone(),
                })
            }
            ActionBody::ScrollToElement(p) => {
                model.scroll_to_element = Some(element_action_model(p))
            }
            ActionBody::SelectOption(p) => {
                model.select_option = Some(SelectOptionModel {
                    selectors: all_to_model(&p.selectors),
                    select_by: p.select_by.clone(),
                    option: p.option.clone(),
                })
            }
            ActionBody::Unpopulated(_) => {}
        }
        model
    }
}
