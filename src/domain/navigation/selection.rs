//! Selection slots: which record each view is focused on.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ApplicationId, DocumentId, GoalId, NodeId, PolicyId, PrecedentId, ReportSectionId,
    ScenarioId, SiteId,
};

/// The nine independent selection slots.
///
/// Each slot is an optional identifier. Slots do not constrain each other;
/// a selected document node is interpreted relative to the selected document
/// by whoever resolves it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selections {
    pub policy: Option<PolicyId>,
    pub site: Option<SiteId>,
    pub scenario: Option<ScenarioId>,
    pub goal: Option<GoalId>,
    pub document: Option<DocumentId>,
    pub document_node: Option<NodeId>,
    pub application: Option<ApplicationId>,
    pub precedent: Option<PrecedentId>,
    pub report_section: Option<ReportSectionId>,
}

impl Selections {
    /// Unsets every slot.
    pub fn clear(&mut self) {
        *self = Selections::default();
    }

    /// True when no slot holds an identifier.
    pub fn is_empty(&self) -> bool {
        self.set_count() == 0
    }

    /// Number of slots currently holding an identifier.
    pub fn set_count(&self) -> usize {
        [
            self.policy.is_some(),
            self.site.is_some(),
            self.scenario.is_some(),
            self.goal.is_some(),
            self.document.is_some(),
            self.document_node.is_some(),
            self.application.is_some(),
            self.precedent.is_some(),
            self.report_section.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}
