//! Strategic goals tracked by the goal tracker.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{impl_record, GoalId, Percentage, PolicyId, SiteId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GoalStatus {
    #[serde(rename = "On Track")]
    OnTrack,
    Partial,
    Failing,
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    Achieved,
    Superseded,
}

impl GoalStatus {
    /// Statuses that need officer attention.
    pub fn is_at_risk(&self) -> bool {
        matches!(self, GoalStatus::Partial | GoalStatus::Failing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalType {
    Legal,
    Policy,
    Monitoring,
    Political,
    Aspirational,
}

/// A measurable strategic goal (e.g. a housing delivery target).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: GoalId,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub target_metric: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub status: GoalStatus,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    #[serde(default)]
    pub contributing_policy_ids: Vec<PolicyId>,
    #[serde(default)]
    pub contributing_site_ids: Vec<SiteId>,
    #[serde(default)]
    pub related_goal_ids: Vec<GoalId>,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl_record!(Goal, GoalId, "Goal");

impl Goal {
    pub fn new(
        id: GoalId,
        name: impl Into<String>,
        category: impl Into<String>,
        target_metric: impl Into<String>,
        goal_type: GoalType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            description: None,
            target_metric: target_metric.into(),
            target_value: None,
            current_value: None,
            unit: None,
            source: None,
            status: GoalStatus::default(),
            goal_type,
            contributing_policy_ids: Vec::new(),
            contributing_site_ids: Vec::new(),
            related_goal_ids: Vec::new(),
            risks: Vec::new(),
            notes: None,
        }
    }

    /// Progress towards the target, when both values are known.
    pub fn progress(&self) -> Option<Percentage> {
        Percentage::from_ratio(self.current_value?, self.target_value?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn housing_goal() -> Goal {
        let mut goal = Goal::new(
            GoalId::new("goal-1").unwrap(),
            "Housing Delivery Target",
            "Policy",
            "homes",
            GoalType::Policy,
        );
        goal.target_value = Some(150.0);
        goal
    }

    #[test]
    fn progress_requires_both_values() {
        let goal = housing_goal();
        assert_eq!(goal.progress(), None);
    }

    #[test]
    fn progress_is_share_of_target() {
        let mut goal = housing_goal();
        goal.current_value = Some(75.0);
        assert_eq!(goal.progress().map(|p| p.value()), Some(50));

        goal.current_value = Some(150.0);
        assert!(goal.progress().unwrap().is_complete());
    }

    #[test]
    fn at_risk_statuses() {
        assert!(GoalStatus::Failing.is_at_risk());
        assert!(GoalStatus::Partial.is_at_risk());
        assert!(!GoalStatus::OnTrack.is_at_risk());
    }

    #[test]
    fn status_serializes_with_spaces() {
        assert_eq!(serde_json::to_string(&GoalStatus::OnTrack).unwrap(), "\"On Track\"");
        let s: GoalStatus = serde_json::from_str("\"Not Started\"").unwrap();
        assert_eq!(s, GoalStatus::NotStarted);
    }
}
