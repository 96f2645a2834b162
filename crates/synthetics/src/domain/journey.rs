//! Journey scripts: steps, page checks, alert suppressions and actions.
//!
//! The service encodes every variant family as a `type` tag plus one nullable
//! object per variant. Here each family is an enum; conversion to and from the
//! slot layout happens in `From` impls on the private wire structs, so nothing
//! outside this module ever sees an inconsistent tag/payload pair except as
//! the explicit `Unpopulated` variant.

use std::fmt::Debug;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

/// Journey platform. Selects the common-step collection on the service.
pub trait Platform: Debug + Clone + Copy + Default + PartialEq + Send + Sync + 'static {
    /// Collection path below `checks/` holding this platform's common steps.
    const COMMON_STEP_SCOPE: &'static str;
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Web;

impl Platform for Web {
    const COMMON_STEP_SCOPE: &'static str = "commonSteps/web";
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Android;

impl Platform for Android {
    const COMMON_STEP_SCOPE: &'static str = "commonSteps/android";
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepType {
    /// References a shared [`CommonStep`] by `commonStepId`.
    Common,
    /// Content is defined inline on the step.
    #[default]
    Custom,
}

/// One stage of a journey. `sequence` orders execution; gaps and duplicates
/// are accepted by the service.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub sequence: i64,
    #[serde(rename = "type")]
    pub step_type: StepType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_step_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_wait_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_load_time_warning: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_load_time_error: Option<i64>,
    #[serde(default)]
    pub page_checks: Vec<PageCheck>,
    #[serde(default)]
    pub alert_suppressions: Vec<AlertSuppression>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// Step content shared across journeys of one platform.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct CommonStep<P: Platform> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub page_checks: Vec<PageCheck>,
    #[serde(default)]
    pub alert_suppressions: Vec<AlertSuppression>,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(skip)]
    pub platform: PhantomData<P>,
}

/// Locates an element on the page or screen.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    /// `XPATH`, `CSS`, `ID`, `NAME`, ...
    #[serde(rename = "type")]
    pub selector_type: String,
    pub value: String,
}

// ---------------------------------------------------------------------------
// Page checks
// ---------------------------------------------------------------------------

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForText {
    pub text: String,
    #[serde(default)]
    pub present: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForElement {
    #[serde(default)]
    pub selectors: Vec<Selector>,
    #[serde(default)]
    pub present: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUrl {
    pub url: String,
    #[serde(default)]
    pub partial_match: bool,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlResponse {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_status: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<i64>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleLog {
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageCheckKind {
    ForText,
    ForElement,
    CurrentUrl,
    UrlResponse,
    ConsoleLog,
}

impl PageCheckKind {
    /// Dispatch order used when reading the slot layout.
    pub const ALL: [PageCheckKind; 5] = [
        PageCheckKind::ForText,
        PageCheckKind::ForElement,
        PageCheckKind::CurrentUrl,
        PageCheckKind::UrlResponse,
        PageCheckKind::ConsoleLog,
    ];

    pub const fn tag(self) -> &'static str {
        match self {
            PageCheckKind::ForText => "FOR_TEXT",
            PageCheckKind::ForElement => "FOR_ELEMENT",
            PageCheckKind::CurrentUrl => "CURRENT_URL",
            PageCheckKind::UrlResponse => "URL_RESPONSE",
            PageCheckKind::ConsoleLog => "CONSOLE_LOG",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCheckBody {
    ForText(ForText),
    ForElement(ForElement),
    CurrentUrl(CurrentUrl),
    UrlResponse(UrlResponse),
    ConsoleLog(ConsoleLog),
    /// Tag with no matching payload. Carried through untouched.
    Unpopulated(String),
}

impl PageCheckBody {
    pub fn kind(&self) -> Option<PageCheckKind> {
        match self {
            PageCheckBody::ForText(_) => Some(PageCheckKind::ForText),
            PageCheckBody::ForElement(_) => Some(PageCheckKind::ForElement),
            PageCheckBody::CurrentUrl(_) => Some(PageCheckKind::CurrentUrl),
            PageCheckBody::UrlResponse(_) => Some(PageCheckKind::UrlResponse),
            PageCheckBody::ConsoleLog(_) => Some(PageCheckKind::ConsoleLog),
            PageCheckBody::Unpopulated(_) => None,
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            PageCheckBody::Unpopulated(tag) => tag,
            other => other.kind().map(PageCheckKind::tag).unwrap_or_default(),
        }
    }
}

/// Assertion evaluated against the current page at a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PageCheckWire", into = "PageCheckWire")]
pub struct PageCheck {
    pub id: Option<i64>,
    pub body: PageCheckBody,
}

#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageCheckWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    #[serde(rename = "type")]
    check_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    for_text: Option<ForText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    for_element: Option<ForElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current_url: Option<CurrentUrl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url_response: Option<UrlResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    console_log: Option<ConsoleLog>,
}

impl From<PageCheckWire> for PageCheck {
    fn from(wire: PageCheckWire) -> Self {
        let body = match PageCheckKind::from_tag(&wire.check_type) {
            Some(PageCheckKind::ForText) => wire.for_text.map(PageCheckBody::ForText),
            Some(PageCheckKind::ForElement) => wire.for_element.map(PageCheckBody::ForElement),
            Some(PageCheckKind::CurrentUrl) => wire.current_url.map(PageCheckBody::CurrentUrl),
            Some(PageCheckKind::UrlResponse) => wire.url_response.map(PageCheckBody::UrlResponse),
            Some(PageCheckKind::ConsoleLog) => wire.console_log.map(PageCheckBody::ConsoleLog),
            None => None,
        };
        PageCheck {
            id: wire.id,
            body: body.unwrap_or(PageCheckBody::Unpopulated(wire.check_type)),
        }
    }
}

impl From<PageCheck> for PageCheckWire {
    fn from(check: PageCheck) -> Self {
        let mut wire = PageCheckWire {
            id: check.id,
            check_type: check.body.tag().to_string(),
            ..Default::default()
        };
        match check.body {
            PageCheckBody::ForText(p) => wire.for_text = Some(p),
            PageCheckBody::ForElement(p) => wire.for_element = Some(p),
            PageCheckBody::CurrentUrl(p) => wire.current_url = Some(p),
            PageCheckBody::UrlResponse(p) => wire.url_response = Some(p),
            PageCheckBody::ConsoleLog(p) => wire.console_log = Some(p),
            PageCheckBody::Unpopulated(_) => {}
        }
        wire
    }
}

// ---------------------------------------------------------------------------
// Alert suppressions
// ---------------------------------------------------------------------------

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSuppression {
    pub url_pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleSuppression {
    pub level: String,
    pub text_pattern: String,
}

/// Rule that keeps a matching network call or console message from raising
/// a warning.
///
/// The service keeps both kinds in one list with no tag; the kind is implied
/// by which object is present. A record with both is read as a network
/// suppression, a record with neither as [`AlertSuppression::Unpopulated`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AlertSuppressionWire", into = "AlertSuppressionWire")]
pub enum AlertSuppression {
    Network {
        id: Option<i64>,
        rule: NetworkSuppression,
    },
    Console {
        id: Option<i64>,
        rule: ConsoleSuppression,
    },
    /// Carries no rule; it has no place in either model list.
    Unpopulated { id: Option<i64> },
}

impl AlertSuppression {
    pub fn id(&self) -> Option<i64> {
        match self {
            AlertSuppression::Network { id, .. }
            | AlertSuppression::Console { id, .. }
            | AlertSuppression::Unpopulated { id } => *id,
        }
    }
}

#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AlertSuppressionWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    network_suppression: Option<NetworkSuppression>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    console_suppression: Option<ConsoleSuppression>,
}

impl From<AlertSuppressionWire> for AlertSuppression {
    fn from(wire: AlertSuppressionWire) -> Self {
        match (wire.network_suppression, wire.console_suppression) {
            (Some(rule), _) => AlertSuppression::Network { id: wire.id, rule },
            (None, Some(rule)) => AlertSuppression::Console { id: wire.id, rule },
            (None, None) => AlertSuppression::Unpopulated { id: wire.id },
        }
    }
}

impl From<AlertSuppression> for AlertSuppressionWire {
    fn from(suppression: AlertSuppression) -> Self {
        match suppression {
            AlertSuppression::Network { id, rule } => AlertSuppressionWire {
                id,
                network_suppression: Some(rule),
                console_suppression: None,
            },
            AlertSuppression::Console { id, rule } => AlertSuppressionWire {
                id,
                network_suppression: None,
                console_suppression: Some(rule),
            },
            AlertSuppression::Unpopulated { id } => AlertSuppressionWire {
                id,
                ..Default::default()
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// Shared payload of click, double click, right click and scroll actions.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementAction {
    #[serde(default)]
    pub selectors: Vec<Selector>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInput {
    #[serde(default)]
    pub selectors: Vec<Selector>,
    pub value: String,
}

/// The service never returns `value`; it reads back as an empty string.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordInput {
    #[serde(default)]
    pub selectors: Vec<Selector>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowByOrder {
    pub order: i64,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowByTitle {
    pub title: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateToUrl {
    pub url: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wait {
    /// Milliseconds.
    pub duration: i64,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IframeByOrder {
    pub order: i64,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IframeByXpath {
    pub xpath: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    #[serde(default)]
    pub selectors: Vec<Selector>,
    /// `VALUE`, `TEXT` or `INDEX`.
    pub select_by: String,
    pub option: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Click,
    DoubleClick,
    RightClick,
    TextInput,
    PasswordInput,
    ChangeWindowByOrder,
    ChangeWindowByTitle,
    NavigateToUrl,
    Wait,
    SelectIframeByOrder,
    SelectIframeByXpath,
    ScrollToElement,
    SelectOption,
}

impl ActionKind {
    /// Dispatch order used when reading the slot layout.
    pub const ALL: [ActionKind; 13] = [
        ActionKind::Click,
        ActionKind::DoubleClick,
        ActionKind::RightClick,
        ActionKind::TextInput,
        ActionKind::PasswordInput,
        ActionKind::ChangeWindowByOrder,
        ActionKind::ChangeWindowByTitle,
        ActionKind::NavigateToUrl,
        ActionKind::Wait,
        ActionKind::SelectIframeByOrder,
        ActionKind::SelectIframeByXpath,
        ActionKind::ScrollToElement,
        ActionKind::SelectOption,
    ];

    pub const fn tag(self) -> &'static str {
        match self {
            ActionKind::Click => "CLICK",
            ActionKind::DoubleClick => "DOUBLE_CLICK",
            ActionKind::RightClick => "RIGHT_CLICK",
            ActionKind::TextInput => "TEXT_INPUT",
            ActionKind::PasswordInput => "PASSWORD_INPUT",
            ActionKind::ChangeWindowByOrder => "CHANGE_WINDOW_BY_ORDER",
            ActionKind::ChangeWindowByTitle => "CHANGE_WINDOW_BY_TITLE",
            ActionKind::NavigateToUrl => "NAVIGATE_TO_URL",
            ActionKind::Wait => "WAIT",
            ActionKind::SelectIframeByOrder => "SELECT_IFRAME_BY_ORDER",
            ActionKind::SelectIframeByXpath => "SELECT_IFRAME_BY_XPATH",
            ActionKind::ScrollToElement => "SCROLL_TO_ELEMENT",
            ActionKind::SelectOption => "SELECT_OPTION",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionBody {
    Click(ElementAction),
    DoubleClick(ElementAction),
    RightClick(ElementAction),
    TextInput(TextInput),
    PasswordInput(PasswordInput),
    ChangeWindowByOrder(WindowByOrder),
    ChangeWindowByTitle(WindowByTitle),
    NavigateToUrl(NavigateToUrl),
    Wait(Wait),
    SelectIframeByOrder(IframeByOrder),
    SelectIframeByXpath(IframeByXpath),
    ScrollToElement(ElementAction),
    SelectOption(SelectOption),
    /// Tag with no matching payload. Carried through untouched.
    Unpopulated(String),
}

impl ActionBody {
    pub fn kind(&self) -> Option<ActionKind> {
        Some(match self {
            ActionBody::Click(_) => ActionKind::Click,
            ActionBody::DoubleClick(_) => ActionKind::DoubleClick,
            ActionBody::RightClick(_) => ActionKind::RightClick,
            ActionBody::TextInput(_) => ActionKind::TextInput,
            ActionBody::PasswordInput(_) => ActionKind::PasswordInput,
            ActionBody::ChangeWindowByOrder(_) => ActionKind::ChangeWindowByOrder,
            ActionBody::ChangeWindowByTitle(_) => ActionKind::ChangeWindowByTitle,
            ActionBody::NavigateToUrl(_) => ActionKind::NavigateToUrl,
            ActionBody::Wait(_) => ActionKind::Wait,
            ActionBody::SelectIframeByOrder(_) => ActionKind::SelectIframeByOrder,
            ActionBody::SelectIframeByXpath(_) => ActionKind::SelectIframeByXpath,
            ActionBody::ScrollToElement(_) => ActionKind::ScrollToElement,
            ActionBody::SelectOption(_) => ActionKind::SelectOption,
            ActionBody::Unpopulated(_) => return None,
        })
    }

    pub fn tag(&self) -> &str {
        match self {
            ActionBody::Unpopulated(tag) => tag,
            other => other.kind().map(ActionKind::tag).unwrap_or_default(),
        }
    }
}

/// One scripted interaction within a step, ordered by `sequence`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ActionWire", into = "ActionWire")]
pub struct Action {
    pub id: Option<i64>,
    pub sequence: i64,
    pub description: Option<String>,
    pub body: ActionBody,
}

#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActionWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    #[serde(default)]
    sequence: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "type")]
    action_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    click: Option<ElementAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    double_click: Option<ElementAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    right_click: Option<ElementAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text_input: Option<TextInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    password_input: Option<PasswordInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    change_window_by_order: Option<WindowByOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    change_window_by_title: Option<WindowByTitle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    navigate_to_url: Option<NavigateToUrl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wait: Option<Wait>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    select_iframe_by_order: Option<IframeByOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    select_iframe_by_xpath: Option<IframeByXpath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scroll_to_element: Option<ElementAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    select_option: Option<SelectOption>,
}

impl From<ActionWire> for Action {
    fn from(wire: ActionWire) -> Self {
        let body = match ActionKind::from_tag(&wire.action_type) {
            Some(ActionKind::Click) => wire.click.map(ActionBody::Click),
            Some(ActionKind::DoubleClick) => wire.double_click.map(ActionBody::DoubleClick),
            Some(ActionKind::RightClick) => wire.right_click.map(ActionBody::RightClick),
            Some(ActionKind::TextInput) => wire.text_input.map(ActionBody::TextInput),
            Some(ActionKind::PasswordInput) => wire.password_input.map(ActionBody::PasswordInput),
            Some(ActionKind::ChangeWindowByOrder) => wire
                .change_window_by_order
                .map(ActionBody::ChangeWindowByOrder),
            Some(ActionKind::ChangeWindowByTitle) => wire
                .change_window_by_title
                .map(ActionBody::ChangeWindowByTitle),
            Some(ActionKind::NavigateToUrl) => wire.navigate_to_url.map(ActionBody::NavigateToUrl),
            Some(ActionKind::Wait) => wire.wait.map(ActionBody::Wait),
            Some(ActionKind::SelectIframeByOrder) => wire
                .select_iframe_by_order
                .map(ActionBody::SelectIframeByOrder),
            Some(ActionKind::SelectIframeByXpath) => wire
                .select_iframe_by_xpath
                .map(ActionBody::SelectIframeByXpath),
            Some(ActionKind::ScrollToElement) => {
                wire.scroll_to_element.map(ActionBody::ScrollToElement)
            }
            Some(ActionKind::SelectOption) => wire.select_option.map(ActionBody::SelectOption),
            None => None,
        };
        Action {
            id: wire.id,
            sequence: wire.sequence,
            description: wire.description,
            body: body.unwrap_or(ActionBody::Unpopulated(wire.action_type)),
        }
    }
}

impl From<Action> for ActionWire {
    fn from(action: Action) -> Self {
        let mut wire = ActionWire {
            id: action.id,
            sequence: action.sequence,
            description: action.description,
            action_type: action.body.tag().to_string(),
            ..Default::default()
        };
        match action.body {
            ActionBody::Click(p) => wire.click = Some(p),
            ActionBody::DoubleClick(p) => wire.double_click = Some(p),
            ActionBody::RightClick(p) => wire.right_click = Some(p),
            ActionBody::TextInput(p) => wire.text_input = Some(p),
            ActionBody::PasswordInput(p) => wire.password_input = Some(p),
            ActionBody::ChangeWindowByOrder(p) => wire.change_window_by_order = Some(p),
            ActionBody::ChangeWindowByTitle(p) => wire.change_window_by_title = Some(p),
            ActionBody::NavigateToUrl(p) => wire.navigate_to_url = Some(p),
            ActionBody::Wait(p) => wire.wait = Some(p),
            ActionBody::SelectIframeByOrder(p) => wire.select_iframe_by_order = Some(p),
            ActionBody::SelectIframeByXpath(p) => wire.select_iframe_by_xpath = Some(p),
            ActionBody::ScrollToElement(p) => wire.scroll_to_element = Some(p),
            ActionBody::SelectOption(p) => wire.select_option = Some(p),
            ActionBody::Unpopulated(_) => {}
        }
        wire
    }
}
