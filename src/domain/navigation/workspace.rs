//! Workspace and mode enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Top-level UI context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Workspace {
    PlanMaking,
    DevelopmentManagement,
    Dashboard,
}

impl Workspace {
    /// Returns all workspaces.
    pub fn all() -> &'static [Workspace] {
        &[
            Workspace::PlanMaking,
            Workspace::DevelopmentManagement,
            Workspace::Dashboard,
        ]
    }

    /// Modes valid inside this workspace. Dashboard has none.
    pub fn modes(&self) -> &'static [Mode] {
        match self {
            Workspace::PlanMaking => &[
                Mode::Policy,
                Mode::SiteAllocation,
                Mode::Scenario,
                Mode::GoalTracker,
                Mode::Document,
            ],
            Workspace::DevelopmentManagement => &[
                Mode::DmSiteAssessment,
                Mode::DmReasoning,
                Mode::DmPrecedentReview,
                Mode::DmReportGeneration,
            ],
            Workspace::Dashboard => &[],
        }
    }

    pub fn has_modes(&self) -> bool {
        !self.modes().is_empty()
    }

    /// Kebab-case name as used in URLs and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Workspace::PlanMaking => "plan-making",
            Workspace::DevelopmentManagement => "development-management",
            Workspace::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Workspace {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Workspace::all()
            .iter()
            .copied()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format("workspace", format!("unknown workspace '{}'", s)))
    }
}

/// Sub-context within a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    // Plan-making
    Policy,
    SiteAllocation,
    Scenario,
    GoalTracker,
    Document,

    // Development management
    DmSiteAssessment,
    DmReasoning,
    DmPrecedentReview,
    DmReportGeneration,
}

impl Mode {
    /// Returns all modes, plan-making first.
    pub fn all() -> &'static [Mode] {
        &[
            Mode::Policy,
            Mode::SiteAllocation,
            Mode::Scenario,
            Mode::GoalTracker,
            Mode::Document,
            Mode::DmSiteAssessment,
            Mode::DmReasoning,
            Mode::DmPrecedentReview,
            Mode::DmReportGeneration,
        ]
    }

    /// The workspace this mode belongs to.
    pub fn workspace(&self) -> Workspace {
        match self {
            Mode::Policy
            | Mode::SiteAllocation
            | Mode::Scenario
            | Mode::GoalTracker
            | Mode::Document => Workspace::PlanMaking,
            Mode::DmSiteAssessment
            | Mode::DmReasoning
            | Mode::DmPrecedentReview
            | Mode::DmReportGeneration => Workspace::DevelopmentManagement,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Policy => "policy",
            Mode::SiteAllocation => "site-allocation",
            Mode::Scenario => "scenario",
            Mode::GoalTracker => "goal-tracker",
            Mode::Document => "document",
            Mode::DmSiteAssessment => "dm-site-assessment",
            Mode::DmReasoning => "dm-reasoning",
            Mode::DmPrecedentReview => "dm-precedent-review",
            Mode::DmReportGeneration => "dm-report-generation",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::all()
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ValidationError::invalid_format("mode", format!("unknown mode '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_is_listed_by_its_workspace() {
        for mode in Mode::all() {
            assert!(
                mode.workspace().modes().contains(mode),
                "{} missing from {}",
                mode,
                mode.workspace()
            );
        }
    }

    #[test]
    fn dashboard_has_no_modes() {
        assert!(!Workspace::Dashboard.has_modes());
        assert_eq!(Workspace::PlanMaking.modes().len(), 5);
        assert_eq!(Workspace::DevelopmentManagement.modes().len(), 4);
    }

    #[test]
    fn parses_kebab_case_names() {
        assert_eq!(
            "development-management".parse::<Workspace>().unwrap(),
            Workspace::DevelopmentManagement
        );
        assert_eq!("goal-tracker".parse::<Mode>().unwrap(), Mode::GoalTracker);
        assert!("reports".parse::<Mode>().is_err());
        assert!("Dashboard".parse::<Workspace>().is_err());
    }

    #[test]
    fn serde_matches_display() {
        for mode in Mode::all() {
            let json = serde_json::to_string(mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode));
        }
        for workspace in Workspace::all() {
            let json = serde_json::to_string(workspace).unwrap();
            assert_eq!(json, format!("\"{}\"", workspace));
        }
    }
}
