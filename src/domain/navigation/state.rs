//! Navigation state container.

use serde::{Deserialize, Serialize};

use super::selection::Selections;
use super::workspace::{Mode, Workspace};
use crate::domain::foundation::{
    ApplicationId, DocumentId, GoalId, NodeId, PolicyId, PrecedentId, ReportSectionId,
    ScenarioId, SiteId,
};

/// Active workspace, active mode and the selection slots.
///
/// # Invariants
///
/// - Changing the workspace always clears every selection slot, even when the
///   new workspace equals the current one.
/// - A workspace without modes (dashboard, or none) always has no active mode.
///
/// Mode membership is not enforced by [`set_mode`](Self::set_mode); callers
/// are trusted to pass a mode of the active workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    workspace: Option<Workspace>,
    mode: Option<Mode>,
    selections: Selections,
}

impl Default for NavigationState {
    /// Dashboard, no mode, nothing selected.
    fn default() -> Self {
        Self {
            workspace: Some(Workspace::Dashboard),
            mode: None,
            selections: Selections::default(),
        }
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn workspace(&self) -> Option<Workspace> {
        self.workspace
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    /// Whether the active mode belongs to the active workspace.
    ///
    /// No mode counts as matching. This only reports; nothing enforces it.
    pub fn mode_matches_workspace(&self) -> bool {
        match (self.mode, self.workspace) {
            (None, _) => true,
            (Some(mode), Some(workspace)) => mode.workspace() == workspace,
            (Some(_), None) => false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Switches workspace, resetting the mode and every selection slot.
    ///
    /// The mode becomes `default_mode`, or none when it is not supplied or the
    /// workspace has no modes.
    pub fn set_workspace(&mut self, workspace: Option<Workspace>, default_mode: Option<Mode>) {
        let has_modes = workspace.map(|w| w.has_modes()).unwrap_or(false);
        self.workspace = workspace;
        self.mode = if has_modes { default_mode } else { None };
        self.selections.clear();
    }

    /// Sets the mode. Workspace and selections are untouched.
    pub fn set_mode(&mut self, mode: Option<Mode>) {
        self.mode = mode;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection setters (each overwrites one slot only)
    // ─────────────────────────────────────────────────────────────────────────

    pub fn select_policy(&mut self, id: Option<PolicyId>) {
        self.selections.policy = id;
    }

    pub fn select_site(&mut self, id: Option<SiteId>) {
        self.selections.site = id;
    }

    pub fn select_scenario(&mut self, id: Option<ScenarioId>) {
        self.selections.scenario = id;
    }

    pub fn select_goal(&mut self, id: Option<GoalId>) {
        self.selections.goal = id;
    }

    pub fn select_document(&mut self, id: Option<DocumentId>) {
        self.selections.document = id;
    }

    pub fn select_document_node(&mut self, id: Option<NodeId>) {
        self.selections.document_node = id;
    }

    pub fn select_application(&mut self, id: Option<ApplicationId>) {
        self.selections.application = id;
    }

    pub fn select_precedent(&mut self, id: Option<PrecedentId>) {
        self.selections.precedent = id;
    }

    pub fn select_report_section(&mut self, id: Option<ReportSectionId>) {
        self.selections.report_section = id;
    }
}
