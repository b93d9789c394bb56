//! Sites shared by plan-making and development management.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::constraint::Constraint;
use super::policy::GoalAlignment;
use crate::domain::foundation::{impl_record, GoalId, PolicyId, SiteId};

/// Allocation status of a site in plan-making.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanMakingStatus {
    Considered,
    #[serde(rename = "Draft Allocation")]
    DraftAllocation,
    #[serde(rename = "Adopted Allocation")]
    AdoptedAllocation,
    Rejected,
    Promoted,
    #[serde(rename = "Previously Allocated")]
    PreviouslyAllocated,
}

/// Where a site came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteSource {
    #[serde(rename = "SHLAA")]
    Shlaa,
    #[serde(rename = "Call For Sites")]
    CallForSites,
    #[serde(rename = "Strategic Proposal")]
    StrategicProposal,
    #[serde(rename = "Officer Generated")]
    OfficerGenerated,
    #[serde(rename = "Planning Application")]
    PlanningApplication,
}

/// Outcome of a soundness test against one criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SoundnessStatus {
    #[serde(rename = "🟢 Sound")]
    Sound,
    #[serde(rename = "🟡 Minor Issues")]
    MinorIssues,
    #[serde(rename = "🔴 Major Issues")]
    MajorIssues,
    #[default]
    #[serde(rename = "⚪ Not Assessed")]
    NotAssessed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundnessCheck {
    pub criterion: String,
    pub status: SoundnessStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRequirement {
    pub policy_id: PolicyId,
    pub policy_ref: String,
    pub requirement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalContribution {
    pub goal_id: GoalId,
    pub goal_name: String,
    pub alignment: GoalAlignment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverabilityScore {
    pub name: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

/// A parcel of land considered for allocation or subject to an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: SiteId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uprn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lpa_code: Option<String>,
    /// Point or boundary; either `{lat, lon}` or GeoJSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_ha: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parish: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_making_status: Option<PlanMakingStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SiteSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposed_use_plan_making: Option<String>,
    #[serde(default)]
    pub planning_history_summary: Vec<String>,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    #[serde(default)]
    pub policy_requirements_summary: Vec<PolicyRequirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation_justification: Option<String>,
    #[serde(default)]
    pub strategic_goal_contributions: Vec<GoalContribution>,
    #[serde(default)]
    pub deliverability_assessment: Vec<DeliverabilityScore>,
    #[serde(default)]
    pub soundness_checks_plan_making: Vec<SoundnessCheck>,
}

impl_record!(Site, SiteId, "Site");

impl Site {
    pub fn new(id: SiteId) -> Self {
        Self {
            id,
            name: None,
            address: None,
            uprn: None,
            lpa_code: None,
            coordinates: None,
            area_ha: None,
            parish: None,
            plan_making_status: None,
            submission_date: None,
            source: None,
            proposed_use_plan_making: None,
            planning_history_summary: Vec::new(),
            constraints: Vec::new(),
            policy_requirements_summary: Vec::new(),
            allocation_justification: None,
            strategic_goal_contributions: Vec::new(),
            deliverability_assessment: Vec::new(),
            soundness_checks_plan_making: Vec::new(),
        }
    }

    /// Name if present, otherwise address, otherwise the id.
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.address.as_deref())
            .unwrap_or_else(|| self.id.as_str())
    }

    /// True when any soundness check found major issues.
    pub fn has_major_soundness_issue(&self) -> bool {
        self.soundness_checks_plan_making
            .iter()
            .any(|c| c.status == SoundnessStatus::MajorIssues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_falls_back_to_address_then_id() {
        let mut site = Site::new(SiteId::new("site-1").unwrap());
        assert_eq!(site.label(), "site-1");

        site.address = Some("Land North of Old Mill Lane".to_string());
        assert_eq!(site.label(), "Land North of Old Mill Lane");

        site.name = Some("Greenfield North".to_string());
        assert_eq!(site.label(), "Greenfield North");
    }

    #[test]
    fn soundness_status_uses_original_labels() {
        let json = serde_json::to_string(&SoundnessStatus::MinorIssues).unwrap();
        assert_eq!(json, "\"🟡 Minor Issues\"");
        assert_eq!(SoundnessStatus::default(), SoundnessStatus::NotAssessed);
    }

    #[test]
    fn detects_major_soundness_issue() {
        let mut site = Site::new(SiteId::new("site-2").unwrap());
        assert!(!site.has_major_soundness_issue());
        site.soundness_checks_plan_making.push(SoundnessCheck {
            criterion: "Green Belt release justified".to_string(),
            status: SoundnessStatus::MajorIssues,
            rationale: None,
        });
        assert!(site.has_major_soundness_issue());
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "id": "site-1",
            "areaHa": 10.5,
            "planMakingStatus": "Draft Allocation",
            "source": "SHLAA",
            "coordinates": {"lat": 51.5, "lon": -0.15},
            "constraints": [{"id": "con-1", "name": "Flood Zone 1", "type": "Flood Risk"}]
        }"#;
        let site: Site = serde_json::from_str(json).unwrap();
        assert_eq!(site.area_ha, Some(10.5));
        assert_eq!(site.plan_making_status, Some(PlanMakingStatus::DraftAllocation));
        assert_eq!(site.source, Some(SiteSource::Shlaa));
        assert_eq!(site.constraints.len(), 1);
    }
}
