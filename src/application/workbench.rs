//! The planner's workbench: loaded records plus navigation state.
//!
//! A `Workbench` is a plain owned value. Each transition is logged, and the
//! selection slots are resolved against the catalog on demand, so a stale
//! selection simply resolves to nothing.

use tracing::{debug, info};

use crate::domain::development::{OfficerReportSection, PlanningApplication, PrecedentCase, SiteAssessment};
use crate::domain::document::{DocumentNode, PlanDocument};
use crate::domain::foundation::{
    ApplicationId, DocumentId, GoalId, NodeId, PolicyId, PrecedentId, ReportSectionId,
    ScenarioId, SiteId,
};
use crate::domain::navigation::{Mode, NavigationState, Selections, Workspace};
use crate::domain::planning::{Goal, Policy, Scenario, Site};
use crate::domain::{Catalog, CatalogSeed};

#[derive(Debug, Clone, Default)]
pub struct Workbench {
    catalog: Catalog,
    navigation: NavigationState,
}

impl Workbench {
    /// Empty catalog, dashboard workspace.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            navigation: NavigationState::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Replaces the loaded records. Navigation is left alone.
    pub fn load(&mut self, seed: CatalogSeed) {
        self.catalog.load(seed);
        info!(
            policies = self.catalog.policies().len(),
            sites = self.catalog.sites().len(),
            applications = self.catalog.applications().len(),
            documents = self.catalog.documents().len(),
            "Catalog loaded"
        );
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────

    pub fn set_workspace(&mut self, workspace: Option<Workspace>, default_mode: Option<Mode>) {
        let cleared = self.navigation.selections().set_count();
        self.navigation.set_workspace(workspace, default_mode);
        info!(
            workspace = ?workspace,
            mode = ?self.navigation.mode(),
            cleared_selections = cleared,
            "Workspace changed"
        );
    }

    pub fn set_mode(&mut self, mode: Option<Mode>) {
        self.navigation.set_mode(mode);
        if !self.navigation.mode_matches_workspace() {
            debug!(
                mode = ?mode,
                workspace = ?self.navigation.workspace(),
                "Mode does not belong to the active workspace"
            );
        }
        info!(mode = ?mode, "Mode changed");
    }

    pub fn selections(&self) -> &Selections {
        self.navigation.selections()
    }

    pub fn select_policy(&mut self, id: Option<PolicyId>) {
        debug!(policy = ?id, "Policy selected");
        self.navigation.select_policy(id);
    }

    pub fn select_site(&mut self, id: Option<SiteId>) {
        debug!(site = ?id, "Site selected");
        self.navigation.select_site(id);
    }

    pub fn select_scenario(&mut self, id: Option<ScenarioId>) {
        debug!(scenario = ?id, "Scenario selected");
        self.navigation.select_scenario(id);
    }

    pub fn select_goal(&mut self, id: Option<GoalId>) {
        debug!(goal = ?id, "Goal selected");
        self.navigation.select_goal(id);
    }

    pub fn select_document(&mut self, id: Option<DocumentId>) {
        debug!(document = ?id, "Document selected");
        self.navigation.select_document(id);
    }

    pub fn select_document_node(&mut self, id: Option<NodeId>) {
        debug!(node = ?id, "Document node selected");
        self.navigation.select_document_node(id);
    }

    pub fn select_application(&mut self, id: Option<ApplicationId>) {
        debug!(application = ?id, "Application selected");
        self.navigation.select_application(id);
    }

    pub fn select_precedent(&mut self, id: Option<PrecedentId>) {
        debug!(precedent = ?id, "Precedent selected");
        self.navigation.select_precedent(id);
    }

    pub fn select_report_section(&mut self, id: Option<ReportSectionId>) {
        debug!(section = ?id, "Report section selected");
        self.navigation.select_report_section(id);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Selection resolution
    // ─────────────────────────────────────────────────────────────────────

    pub fn selected_policy(&self) -> Option<&Policy> {
        self.catalog.find_policy(self.selections().policy.as_ref()?)
    }

    pub fn selected_site(&self) -> Option<&Site> {
        self.catalog.find_site(self.selections().site.as_ref()?)
    }

    pub fn selected_scenario(&self) -> Option<&Scenario> {
        self.catalog.find_scenario(self.selections().scenario.as_ref()?)
    }

    pub fn selected_goal(&self) -> Option<&Goal> {
        self.catalog.find_goal(self.selections().goal.as_ref()?)
    }

    pub fn selected_document(&self) -> Option<&PlanDocument> {
        self.catalog.find_document(self.selections().document.as_ref()?)
    }

    /// The selected node, looked up in the selected document's tree.
    pub fn selected_document_node(&self) -> Option<&DocumentNode> {
        let node_id = self.selections().document_node.as_ref()?;
        self.selected_document()?.find_node(node_id)
    }

    pub fn selected_application(&self) -> Option<&PlanningApplication> {
        self.catalog
            .find_application(self.selections().application.as_ref()?)
    }

    pub fn selected_precedent(&self) -> Option<&PrecedentCase> {
        self.catalog.find_precedent(self.selections().precedent.as_ref()?)
    }

    /// The selected section of the selected application's officer report.
    pub fn selected_report_section(&self) -> Option<&OfficerReportSection> {
        let section_id = self.selections().report_section.as_ref()?;
        self.selected_application()?
            .officer_report
            .as_ref()?
            .find_section(section_id)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Site assessment
    // ─────────────────────────────────────────────────────────────────────

    /// Builds the site assessment for the selected application and makes it
    /// the active one. Clears the active assessment when nothing resolves.
    pub fn assess_selected_application(&mut self) -> Option<&SiteAssessment> {
        let assessment = self
            .selections()
            .application
            .as_ref()
            .and_then(|id| self.catalog.site_assessment_for(id));

        match assessment {
            Some(assessment) => {
                info!(site = %assessment.site.id, "Site assessment prepared");
                self.catalog.set_active_site_assessment(assessment);
            }
            None => {
                debug!("No application to assess");
                self.catalog.clear_active_site_assessment();
            }
        }
        self.catalog.active_site_assessment()
    }

    pub fn active_site_assessment(&self) -> Option<&SiteAssessment> {
        self.catalog.active_site_assessment()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::development::{ApplicationType, OfficerReport};
    use crate::domain::document::{DocumentNodeType, PlanDocumentType};
    use crate::domain::planning::PolicyType;
    use chrono::NaiveDate;

    fn seed() -> CatalogSeed {
        let tree = DocumentNode::new(NodeId::new("root-1").unwrap(), DocumentNodeType::DocumentRoot)
            .with_child(
                DocumentNode::new(NodeId::new("ch-1").unwrap(), DocumentNodeType::Chapter)
                    .with_child(DocumentNode::new(
                        NodeId::new("sec-1").unwrap(),
                        DocumentNodeType::PolicySection,
                    )),
            );
        let report = OfficerReport::new("0.1").with_section(OfficerReportSection::new(
            ReportSectionId::new("rs-1").unwrap(),
            "Introduction",
            1,
        ));
        let application = PlanningApplication::new(
            ApplicationId::new("app-1").unwrap(),
            "25/00123/FUL",
            "Land North of Old Mill Lane",
            "Erection of 145 dwellings",
            ApplicationType::Full,
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        )
        .with_officer_report(report);

        CatalogSeed {
            policies: vec![Policy::new(
                PolicyId::new("pol-1").unwrap(),
                "H1",
                "Homes",
                "wording",
                PolicyType::Strategic,
                DocumentId::new("lp2025").unwrap(),
            )],
            documents: vec![PlanDocument::new(
                DocumentId::new("lp2025").unwrap(),
                "Local Plan 2025",
                PlanDocumentType::LocalPlan,
            )
            .with_root(tree)],
            applications: vec![application],
            ..Default::default()
        }
    }

    fn workbench() -> Workbench {
        let mut wb = Workbench::new();
        wb.load(seed());
        wb
    }

    #[test]
    fn starts_on_dashboard_with_nothing_selected() {
        let wb = Workbench::new();
        assert_eq!(wb.navigation().workspace(), Some(Workspace::Dashboard));
        assert!(wb.selections().is_empty());
        assert!(wb.selected_policy().is_none());
    }

    #[test]
    fn resolves_selected_policy() {
        let mut wb = workbench();
        wb.select_policy(Some(PolicyId::new("pol-1").unwrap()));
        assert_eq!(wb.selected_policy().map(|p| p.reference.as_str()), Some("H1"));

        wb.select_policy(Some(PolicyId::new("pol-9").unwrap()));
        assert!(wb.selected_policy().is_none());
    }

    #[test]
    fn document_node_resolves_within_selected_document() {
        let mut wb = workbench();
        wb.select_document_node(Some(NodeId::new("sec-1").unwrap()));
        assert!(wb.selected_document_node().is_none());

        wb.select_document(Some(DocumentId::new("lp2025").unwrap()));
        assert_eq!(wb.selected_document_node().map(|n| n.id.as_str()), Some("sec-1"));
    }

    #[test]
    fn report_section_resolves_within_selected_application() {
        let mut wb = workbench();
        wb.select_report_section(Some(ReportSectionId::new("rs-1").unwrap()));
        assert!(wb.selected_report_section().is_none());

        wb.select_application(Some(ApplicationId::new("app-1").unwrap()));
        assert_eq!(
            wb.selected_report_section().map(|s| s.title.as_str()),
            Some("Introduction")
        );
    }

    #[test]
    fn workspace_change_clears_selections() {
        let mut wb = workbench();
        wb.set_workspace(Some(Workspace::PlanMaking), Some(Mode::Policy));
        wb.select_policy(Some(PolicyId::new("pol-1").unwrap()));

        wb.set_workspace(Some(Workspace::DevelopmentManagement), Some(Mode::DmSiteAssessment));
        assert_eq!(wb.navigation().mode(), Some(Mode::DmSiteAssessment));
        assert!(wb.selections().is_empty());
        assert!(wb.selected_policy().is_none());
    }

    #[test]
    fn set_mode_keeps_selections() {
        let mut wb = workbench();
        wb.set_workspace(Some(Workspace::PlanMaking), Some(Mode::Policy));
        wb.select_policy(Some(PolicyId::new("pol-1").unwrap()));

        wb.set_mode(Some(Mode::Document));
        assert_eq!(wb.navigation().mode(), Some(Mode::Document));
        assert!(wb.selected_policy().is_some());
    }

    #[test]
    fn assess_selected_application_sets_active_assessment() {
        let mut wb = workbench();
        assert!(wb.assess_selected_application().is_none());

        wb.select_application(Some(ApplicationId::new("app-1").unwrap()));
        let assessment = wb.assess_selected_application().unwrap();
        assert!(assessment.ai_reasoning_output.summary.contains("25/00123/FUL"));
        assert!(wb.active_site_assessment().is_some());

        wb.select_application(None);
        wb.assess_selected_application();
        assert!(wb.active_site_assessment().is_none());
    }
}
