//! CreateOfficerReportHandler - Command handler for starting an application's report.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::development::{OfficerReport, PlanningApplication};
use crate::domain::foundation::{ApplicationId, DomainError, ErrorCode};
use crate::ports::RecordRepository;

/// Command to attach a new officer report to an application.
#[derive(Debug, Clone)]
pub struct CreateOfficerReportCommand {
    pub application_id: ApplicationId,
    pub report: OfficerReport,
}

/// Handler for creating officer reports.
pub struct CreateOfficerReportHandler {
    applications: Arc<dyn RecordRepository<PlanningApplication>>,
}

impl CreateOfficerReportHandler {
    pub fn new(applications: Arc<dyn RecordRepository<PlanningApplication>>) -> Self {
        Self { applications }
    }

    /// Fails with `AlreadyExists` when the application already has a report.
    pub async fn handle(&self, cmd: CreateOfficerReportCommand) -> Result<OfficerReport, DomainError> {
        // 1. Load application
        let mut application = self
            .applications
            .find_by_id(&cmd.application_id)
            .await?
            .ok_or_else(|| DomainError::not_found("PlanningApplication", &cmd.application_id))?;

        // 2. One report per application
        if application.officer_report.is_some() {
            return Err(DomainError::new(
                ErrorCode::AlreadyExists,
                format!("Officer report already exists for application: {}", cmd.application_id),
            )
            .with_detail("application_id", cmd.application_id.to_string()));
        }

        // 3. Stamp and attach
        let mut report = cmd.report;
        report.last_modified = Some(Utc::now());
        application.officer_report = Some(report.clone());

        // 4. Persist
        self.applications.update(&application).await?;

        info!(
            application_id = %cmd.application_id,
            sections = report.sections.len(),
            "Officer report created"
        );
        Ok(report)
    }
}
