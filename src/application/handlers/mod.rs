//! Command and query handlers, grouped by record area.

pub mod development;
pub mod document;
pub mod paging;
pub mod policy;
pub mod scenario;

pub use development::{
    AddReasoningStepCommand, AddReasoningStepHandler, AddReportSectionCommand,
    AddReportSectionHandler, CreateOfficerReportCommand, CreateOfficerReportHandler,
    GetOfficerReportError, GetOfficerReportHandler, GetOfficerReportQuery, GetReasoningHandler,
    GetReasoningQuery, OfficerReportView, ReasoningView,
};
pub use document::{
    AddDocumentNodeCommand, AddDocumentNodeHandler, DocumentNodeSummary, DocumentNodeView,
    GetDocumentNodeError, GetDocumentNodeHandler, GetDocumentNodeQuery, ListDocumentNodesHandler,
    ListDocumentNodesQuery,
};
pub use paging::{Page, PageRequest};
pub use policy::{
    GetPolicyRelationsHandler, GetPolicyRelationsQuery, ListPoliciesHandler, ListPoliciesQuery,
    ListPoliciesResult, PolicySortField, SortOrder,
};
pub use scenario::{DuplicateScenarioCommand, DuplicateScenarioHandler};
