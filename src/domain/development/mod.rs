//! Development-management records: applications, precedents, reports.

mod application;
mod assessment;
mod officer_report;
mod precedent;

pub use application::{
    ApplicationStatus, ApplicationType, CompetingGoals, Decision, PlanningApplication,
    ReasoningStep, TradeOffAnalysis,
};
pub use assessment::{ReasoningOutput, SiteAssessment};
pub use officer_report::{
    ComplianceFlag, EvidenceLink, OfficerReport, OfficerReportSection, ReportStatus,
};
pub use precedent::{DecisionType, PrecedentCase, PrecedentOutcome, SimilarityCriteria};
