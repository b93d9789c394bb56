//! Plan-making scenarios: a bundle of sites and policies to compare.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::goal::GoalStatus;
use super::site::SoundnessCheck;
use crate::domain::foundation::{impl_record, GoalId, PolicyId, ScenarioId, SiteId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioMetrics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_homes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs_enabled: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infrastructure_need: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_flags: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_off_index: Option<f64>,
}

/// Measured or projected value is either numeric or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPerformance {
    pub goal_id: GoalId,
    pub status: GoalStatus,
    pub value: MetricValue,
}

/// Changes a scenario applies to one policy, as a partial JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyModification {
    pub policy_id: PolicyId,
    pub changes: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_scenario_id: Option<ScenarioId>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub summary_metrics: ScenarioMetrics,
    #[serde(default)]
    pub included_site_ids: Vec<SiteId>,
    #[serde(default)]
    pub excluded_site_ids: Vec<SiteId>,
    #[serde(default)]
    pub active_policy_ids: Vec<PolicyId>,
    #[serde(default)]
    pub modified_policies: Vec<PolicyModification>,
    #[serde(default)]
    pub goal_performance: Vec<GoalPerformance>,
    #[serde(default)]
    pub soundness_flags: Vec<SoundnessCheck>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_commentary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

impl_record!(Scenario, ScenarioId, "Scenario");

impl Scenario {
    pub fn new(id: ScenarioId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            baseline_scenario_id: None,
            tags: Vec::new(),
            summary_metrics: ScenarioMetrics::default(),
            included_site_ids: Vec::new(),
            excluded_site_ids: Vec::new(),
            active_policy_ids: Vec::new(),
            modified_policies: Vec::new(),
            goal_performance: Vec::new(),
            soundness_flags: Vec::new(),
            ai_commentary: None,
            created_at: None,
            last_modified: None,
        }
    }

    /// A site is in the scenario when included and not also excluded.
    pub fn includes_site(&self, site: &SiteId) -> bool {
        self.included_site_ids.contains(site) && !self.excluded_site_ids.contains(site)
    }

    pub fn is_baseline(&self) -> bool {
        self.baseline_scenario_id.is_none()
    }
}
