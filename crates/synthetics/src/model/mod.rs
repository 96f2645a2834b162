//! Declarative-facing shapes, as the orchestration host hands them over.
//!
//! Compared to [`crate::domain`]: references are flat ids, optional scalars are
//! `None` rather than zero, repeated fields are always present, and variant
//! families are a `type` string plus one optional slot per variant. Alert
//! suppressions are split into separate network and console lists.

pub mod check;
pub mod group;
pub mod host;
pub mod journey;
pub mod maintenance;

pub use check::{
    AndroidJourneyModel, BodyAssertionModel, CertificateModel, CheckModel, DnsModel,
    HeaderModel, PingModel, Placement, SocketModel, UrlModel, WebJourneyModel,
};
pub use group::{CheckGroupModel, DashboardGroupModel, HostGroupModel};
pub use host::{CheckHostModel, ProxyHostModel};
pub use journey::{
    ActionModel, CommonStepModel, ConsoleLogModel, ConsoleSuppressionModel, CurrentUrlModel,
    ElementActionModel, ForElementModel, ForTextModel, IframeByOrderModel, IframeByXpathModel,
    NavigateToUrlModel, NetworkSuppressionModel, PageCheckModel, PasswordInputModel,
    SelectOptionModel, SelectorModel, StepModel, TextInputModel, UrlResponseModel, WaitModel,
    WindowByOrderModel, WindowByTitleModel,
};
pub use maintenance::MaintenancePeriodModel;
