//! Planning applications handled in development management.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::officer_report::OfficerReport;
use crate::domain::foundation::{impl_record, ApplicationId, PrecedentId, SiteId};
use crate::domain::planning::Constraint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ApplicationStatus {
    #[default]
    Received,
    Validated,
    #[serde(rename = "Under Assessment")]
    UnderAssessment,
    #[serde(rename = "Pending Decision")]
    PendingDecision,
    Approved,
    Refused,
    Withdrawn,
    Appealed,
}

impl ApplicationStatus {
    /// True once a decision has been issued or the application has left the LPA.
    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            Self::Approved | Self::Refused | Self::Withdrawn | Self::Appealed
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationType {
    Full,
    Outline,
    #[serde(rename = "Reserved Matters")]
    ReservedMatters,
    #[serde(rename = "Listed Building Consent")]
    ListedBuildingConsent,
    #[serde(rename = "Advertisement Consent")]
    AdvertisementConsent,
    #[serde(rename = "Lawful Development Certificate")]
    LawfulDevelopmentCertificate,
    #[serde(rename = "Prior Approval")]
    PriorApproval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Approved,
    Refused,
    #[serde(rename = "Approved with Conditions")]
    ApprovedWithConditions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasoningStep {
    pub step: u32,
    pub description: String,
    #[serde(default)]
    pub policy_references: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetingGoals {
    pub goal_a: String,
    pub goal_b: String,
    pub tension: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeOffAnalysis {
    #[serde(default)]
    pub competing_goals: Vec<CompetingGoals>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_narrative: Option<String>,
    /// Weight per goal or policy id.
    #[serde(default)]
    pub planner_weightings: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningApplication {
    pub id: ApplicationId,
    pub reference_number: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<SiteId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_description: Option<String>,
    pub proposal_details: String,
    pub application_type: ApplicationType,
    #[serde(default)]
    pub status: ApplicationStatus,
    pub received_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validated_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<Decision>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_officer: Option<String>,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    /// Ranked policy references (e.g. "H1", "DM12").
    #[serde(default)]
    pub relevant_policy_refs: Vec<String>,
    #[serde(default)]
    pub reasoning_steps: Vec<ReasoningStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_off_analysis: Option<TradeOffAnalysis>,
    #[serde(default)]
    pub linked_precedent_ids: Vec<PrecedentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub officer_report: Option<OfficerReport>,
}

impl_record!(PlanningApplication, ApplicationId, "PlanningApplication");

impl PlanningApplication {
    pub fn new(
        id: ApplicationId,
        reference_number: impl Into<String>,
        address: impl Into<String>,
        proposal_details: impl Into<String>,
        application_type: ApplicationType,
        received_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            reference_number: reference_number.into(),
            address: address.into(),
            site_id: None,
            site_description: None,
            proposal_details: proposal_details.into(),
            application_type,
            status: ApplicationStatus::default(),
            received_date,
            validated_date: None,
            decision_date: None,
            decision: None,
            applicant_name: None,
            agent_name: None,
            case_officer: None,
            constraints: Vec::new(),
            relevant_policy_refs: Vec::new(),
            reasoning_steps: Vec::new(),
            trade_off_analysis: None,
            linked_precedent_ids: Vec::new(),
            officer_report: None,
        }
    }

    pub fn with_site(mut self, site_id: SiteId) -> Self {
        self.site_id = Some(site_id);
        self
    }

    pub fn with_status(mut self, status: ApplicationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_officer_report(mut self, report: OfficerReport) -> Self {
        self.officer_report = Some(report);
        self
    }

    /// Reasoning steps ordered by step number.
    pub fn ordered_reasoning(&self) -> Vec<&ReasoningStep> {
        let mut steps: Vec<_> = self.reasoning_steps.iter().collect();
        steps.sort_by_key(|s| s.step);
        steps
    }

    /// Days from receipt to decision, when decided.
    pub fn days_to_decision(&self) -> Option<i64> {
        self.decision_date
            .map(|d| (d - self.received_date).num_days())
    }
}
