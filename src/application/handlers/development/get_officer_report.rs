//! GetOfficerReportHandler - Query handler for an application's officer report.
//!
//! Returns the report with its sections in `order`. An application without
//! a report is reported as not found, separately from an unknown application.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::development::{OfficerReport, OfficerReportSection, PlanningApplication, ReportStatus};
use crate::domain::foundation::{ApplicationId, DomainError, ErrorCode};
use crate::ports::RecordRepository;

#[derive(Debug, Clone)]
pub struct GetOfficerReportQuery {
    pub application_id: ApplicationId,
}

/// Officer report with sections already sorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficerReportView {
    pub application_id: ApplicationId,
    pub reference_number: String,
    pub version: String,
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    pub sections: Vec<OfficerReportSection>,
    /// Compliance flags not yet met.
    pub unmet_flags: Vec<String>,
}

impl OfficerReportView {
    fn new(application: &PlanningApplication, report: &OfficerReport) -> Self {
        Self {
            application_id: application.id.clone(),
            reference_number: application.reference_number.clone(),
            version: report.version.clone(),
            status: report.status,
            recommendation: report.recommendation.clone(),
            sections: report.sorted_sections().into_iter().cloned().collect(),
            unmet_flags: report.unmet_flags().map(|f| f.flag.clone()).collect(),
        }
    }
}

/// Error type for getting an officer report.
#[derive(Debug, Clone)]
pub enum GetOfficerReportError {
    /// Application not found.
    ApplicationNotFound(ApplicationId),
    /// Application has no officer report yet.
    ReportNotFound(ApplicationId),
    /// Infrastructure error.
    Infrastructure(String),
}

impl std::fmt::Display for GetOfficerReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetOfficerReportError::ApplicationNotFound(id) => {
                write!(f, "PlanningApplication not found: {}", id)
            }
            GetOfficerReportError::ReportNotFound(id) => {
                write!(f, "No officer report for application: {}", id)
            }
            GetOfficerReportError::Infrastructure(msg) => write!(f, "Infrastructure error: {}", msg),
        }
    }
}

impl std::error::Error for GetOfficerReportError {}

impl From<DomainError> for GetOfficerReportError {
    fn from(err: DomainError) -> Self {
        GetOfficerReportError::Infrastructure(err.message)
    }
}

impl From<GetOfficerReportError> for DomainError {
    fn from(err: GetOfficerReportError) -> Self {
        let code = match &err {
            GetOfficerReportError::ApplicationNotFound(_) | GetOfficerReportError::ReportNotFound(_) => {
                ErrorCode::NotFound
            }
            GetOfficerReportError::Infrastructure(_) => ErrorCode::InternalError,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Handler for retrieving an officer report.
pub struct GetOfficerReportHandler {
    applications: Arc<dyn RecordRepository<PlanningApplication>>,
}

impl GetOfficerReportHandler {
    pub fn new(applications: Arc<dyn RecordRepository<PlanningApplication>>) -> Self {
        Self { applications }
    }

    pub async fn handle(
        &self,
        query: GetOfficerReportQuery,
    ) -> Result<OfficerReportView, GetOfficerReportError> {
        let application = self
            .applications
            .find_by_id(&query.application_id)
            .await?
            .ok_or_else(|| GetOfficerReportError::ApplicationNotFound(query.application_id.clone()))?;

        let report = application
            .officer_report
            .as_ref()
            .ok_or_else(|| GetOfficerReportError::ReportNotFound(query.application_id.clone()))?;

        Ok(OfficerReportView::new(&application, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRepository;
    use crate::domain::development::{ApplicationType, ComplianceFlag};
    use crate::domain::foundation::ReportSectionId;
    use chrono::NaiveDate;

    fn application(id: &str) -> PlanningApplication {
        PlanningApplication::new(
            ApplicationId::new(id).unwrap(),
            "25/00123/FUL",
            "Land North of Old Mill Lane",
            "Erection of 145 dwellings",
            ApplicationType::Full,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
    }

    fn section(id: &str, title: &str, order: u32) -> OfficerReportSection {
        OfficerReportSection::new(ReportSectionId::new(id).unwrap(), title, order)
    }

    fn handler() -> GetOfficerReportHandler {
        let mut report = OfficerReport::new("0.1")
            .with_section(section("sec-2", "Site Context", 2))
            .with_section(section("sec-1", "Introduction", 1));
        report.compliance_flags.push(ComplianceFlag {
            flag: "Design quality (DM12)".to_string(),
            met: false,
        });

        let repo = InMemoryRepository::with_records(vec![
            application("app-1").with_officer_report(report),
            application("app-2"),
        ]);
        GetOfficerReportHandler::new(Arc::new(repo))
    }

    fn query(id: &str) -> GetOfficerReportQuery {
        GetOfficerReportQuery {
            application_id: ApplicationId::new(id).unwrap(),
        }
    }

    #[tokio::test]
    async fn returns_sections_in_order() {
        let view = handler().handle(query("app-1")).await.unwrap();
        let titles: Vec<_> = view.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Introduction", "Site Context"]);
        assert_eq!(view.unmet_flags, vec!["Design quality (DM12)"]);
        assert_eq!(view.status, ReportStatus::Draft);
    }

    #[tokio::test]
    async fn application_without_report() {
        let err = handler().handle(query("app-2")).await.unwrap_err();
        assert!(matches!(err, GetOfficerReportError::ReportNotFound(_)));
        assert_eq!(DomainError::from(err).code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn unknown_application() {
        let err = handler().handle(query("app-9")).await.unwrap_err();
        assert!(matches!(err, GetOfficerReportError::ApplicationNotFound(_)));
    }
}
