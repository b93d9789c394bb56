//! Development-management handlers.

mod add_report_section;
mod create_officer_report;
mod get_officer_report;
mod reasoning;

pub use add_report_section::{AddReportSectionCommand, AddReportSectionHandler};
pub use create_officer_report::{CreateOfficerReportCommand, CreateOfficerReportHandler};
pub use get_officer_report::{
    GetOfficerReportError, GetOfficerReportHandler, GetOfficerReportQuery, OfficerReportView,
};
pub use reasoning::{
    AddReasoningStepCommand, AddReasoningStepHandler, GetReasoningHandler, GetReasoningQuery,
    ReasoningView,
};
