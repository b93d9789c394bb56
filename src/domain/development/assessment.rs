//! The active development-management site assessment.

use serde::{Deserialize, Serialize};

use crate::domain::planning::{Constraint, Policy, Site};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningOutput {
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Snapshot assembled for the site-assessment mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteAssessment {
    pub site: Site,
    #[serde(default)]
    pub constraints_affecting_site: Vec<Constraint>,
    #[serde(default)]
    pub applicable_policies: Vec<Policy>,
    pub ai_reasoning_output: ReasoningOutput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_off_matrix: Option<serde_json::Value>,
}

impl SiteAssessment {
    pub fn new(site: Site, summary: impl Into<String>) -> Self {
        Self {
            site,
            constraints_affecting_site: Vec::new(),
            applicable_policies: Vec::new(),
            ai_reasoning_output: ReasoningOutput {
                summary: summary.into(),
                details: None,
            },
            trade_off_matrix: None,
        }
    }

    pub fn has_high_severity_constraint(&self) -> bool {
        self.constraints_affecting_site
            .iter()
            .any(Constraint::is_high_severity)
    }
}
