//! Officer reports attached to planning applications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ReportSectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReportStatus {
    #[default]
    Draft,
    Review,
    Final,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficerReportSection {
    pub id: ReportSectionId,
    pub title: String,
    pub content: String,
    pub order: u32,
}

impl OfficerReportSection {
    pub fn new(id: ReportSectionId, title: impl Into<String>, order: u32) -> Self {
        Self {
            id,
            title: title.into(),
            content: String::new(),
            order,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceLink {
    pub name: String,
    #[serde(rename = "url_or_id")]
    pub url_or_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceFlag {
    pub flag: String,
    pub met: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficerReport {
    pub version: String,
    #[serde(default)]
    pub sections: Vec<OfficerReportSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub supporting_evidence_links: Vec<EvidenceLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_summary: Option<String>,
    #[serde(default)]
    pub compliance_flags: Vec<ComplianceFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: ReportStatus,
}

impl OfficerReport {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            sections: Vec::new(),
            recommendation: None,
            supporting_evidence_links: Vec::new(),
            conflict_summary: None,
            compliance_flags: Vec::new(),
            last_modified: None,
            status: ReportStatus::default(),
        }
    }

    pub fn with_section(mut self, section: OfficerReportSection) -> Self {
        self.sections.push(section);
        self
    }

    /// Sections ordered by `order`; ties keep their stored order.
    pub fn sorted_sections(&self) -> Vec<&OfficerReportSection> {
        let mut sections: Vec<_> = self.sections.iter().collect();
        sections.sort_by_key(|s| s.order);
        sections
    }

    pub fn find_section(&self, id: &ReportSectionId) -> Option<&OfficerReportSection> {
        self.sections.iter().find(|s| &s.id == id)
    }

    /// Flags that were assessed and not met.
    pub fn unmet_flags(&self) -> impl Iterator<Item = &ComplianceFlag> {
        self.compliance_flags.iter().filter(|f| !f.met)
    }

    pub fn is_final(&self) -> bool {
        self.status == ReportStatus::Final
    }
}
