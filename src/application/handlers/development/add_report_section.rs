//! AddReportSectionHandler - Command handler for appending a report section.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::domain::development::{OfficerReportSection, PlanningApplication};
use crate::domain::foundation::{ApplicationId, DomainError, ReportSectionId};
use crate::ports::RecordRepository;

/// Command to add a section to an application's officer report.
#[derive(Debug, Clone)]
pub struct AddReportSectionCommand {
    pub application_id: ApplicationId,
    /// Generated when absent.
    pub section_id: Option<ReportSectionId>,
    pub title: String,
    pub content: String,
    pub order: u32,
}

/// Handler for adding officer report sections.
pub struct AddReportSectionHandler {
    applications: Arc<dyn RecordRepository<PlanningApplication>>,
}

impl AddReportSectionHandler {
    pub fn new(applications: Arc<dyn RecordRepository<PlanningApplication>>) -> Self {
        Self { applications }
    }

    pub async fn handle(&self, cmd: AddReportSectionCommand) -> Result<OfficerReportSection, DomainError> {
        let mut application = self
            .applications
            .find_by_id(&cmd.application_id)
            .await?
            .ok_or_else(|| DomainError::not_found("PlanningApplication", &cmd.application_id))?;

        let report = application
            .officer_report
            .as_mut()
            .ok_or_else(|| DomainError::not_found("OfficerReport", &cmd.application_id))?;

        let section_id = cmd.section_id.unwrap_or_else(ReportSectionId::generate);
        if report.find_section(&section_id).is_some() {
            return Err(DomainError::already_exists("OfficerReportSection", &section_id));
        }

        let section =
            OfficerReportSection::new(section_id, cmd.title, cmd.order).with_content(cmd.content);
        report.sections.push(section.clone());
        report.last_modified = Some(Utc::now());

        self.applications.update(&application).await?;

        debug!(
            application_id = %cmd.application_id,
            section_id = %section.id,
            "Officer report section added"
        );
        Ok(section)
    }
}
