use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::domain::{Platform, StepType};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepModel {
    pub id: Option<i64>,
    pub sequence: i64,
    #[serde(rename = "type")]
    pub step_type: StepType,
    pub common_step_id: Option<i64>,
    pub name: Option<String>,
    pub max_wait_time: Option<i64>,
    pub page_load_time_warning: Option<i64>,
    pub page_load_time_error: Option<i64>,
    pub page_checks: Vec<PageCheckModel>,
    pub network_suppressions: Vec<NetworkSuppressionModel>,
    pub console_suppressions: Vec<ConsoleSuppressionModel>,
    pub actions: Vec<ActionModel>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, bound = "")]
pub struct CommonStepModel<P: Platform> {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub page_checks: Vec<PageCheckModel>,
    pub network_suppressions: Vec<NetworkSuppressionModel>,
    pub console_suppressions: Vec<ConsoleSuppressionModel>,
    pub actions: Vec<ActionModel>,
    #[serde(skip)]
    pub platform: PhantomData<P>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorModel {
    #[serde(rename = "type")]
    pub selector_type: String,
    pub value: String,
}

// Page checks

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageCheckModel {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub check_type: String,
    pub for_text: Option<ForTextModel>,
    pub for_element: Option<ForElementModel>,
    pub current_url: Option<CurrentUrlModel>,
    pub url_response: Option<UrlResponseModel>,
    pub console_log: Option<ConsoleLogModel>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForTextModel {
    pub text: String,
    pub present: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForElementModel {
    pub selectors: Vec<SelectorModel>,
    pub present: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentUrlModel {
    pub url: String,
    pub partial_match: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlResponseModel {
    pub url: String,
    pub expected_status: Option<i64>,
    pub max_duration: Option<i64>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleLogModel {
    pub level: String,
    pub text: Option<String>,
}

// Alert suppressions

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSuppressionModel {
    pub id: Option<i64>,
    pub url_pattern: String,
    pub method: Option<String>,
    pub status_code: Option<i64>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleSuppressionModel {
    pub id: Option<i64>,
    pub level: String,
    pub text_pattern: String,
}

// Actions

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionModel {
    pub id: Option<i64>,
    pub sequence: i64,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub action_type: String,
    pub click: Option<ElementActionModel>,
    pub double_click: Option<ElementActionModel>,
    pub right_click: Option<ElementActionModel>,
    pub text_input: Option<TextInputModel>,
    pub password_input: Option<PasswordInputModel>,
    pub change_window_by_order: Option<WindowByOrderModel>,
    pub change_window_by_title: Option<WindowByTitleModel>,
    pub navigate_to_url: Option<NavigateToUrlModel>,
    pub wait: Option<WaitModel>,
    pub select_iframe_by_order: Option<IframeByOrderModel>,
    pub select_iframe_by_xpath: Option<IframeByXpathModel>,
    pub scroll_to_element: Option<ElementActionModel>,
    pub select_option: Option<SelectOptionModel>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementActionModel {
    pub selectors: Vec<SelectorModel>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextInputModel {
    pub selectors: Vec<SelectorModel>,
    pub value: String,
}

/// `value` is write-only on the service and comes back `None` after a read.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordInputModel {
    pub selectors: Vec<SelectorModel>,
    pub value: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowByOrderModel {
    pub order: i64,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowByTitleModel {
    pub title: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigateToUrlModel {
    pub url: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitModel {
    pub duration: i64,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IframeByOrderModel {
    pub order: i64,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IframeByXpathModel {
    pub xpath: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectOptionModel {
    pub selectors: Vec<SelectorModel>,
    pub select_by: String,
    pub option: String,
}
