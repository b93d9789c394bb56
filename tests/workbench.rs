//! Integration tests for the planner's workbench.
//!
//! Drives navigation and record resolution over the bundled sample catalog
//! the way the UI does: pick a workspace, pick a mode, select records.

use planners_assistant::adapters::memory::sample_seed;
use planners_assistant::application::Workbench;
use planners_assistant::domain::document::{find_node, DocumentNode, DocumentNodeType};
use planners_assistant::domain::foundation::{
    ApplicationId, DocumentId, NodeId, PolicyId, ReportSectionId, SiteId,
};
use planners_assistant::domain::navigation::{Mode, Workspace};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn node_id(id: &str) -> NodeId {
    NodeId::new(id).unwrap()
}

fn loaded_workbench() -> Workbench {
    let mut workbench = Workbench::new();
    workbench.load(sample_seed().expect("sample catalog parses"));
    workbench
}

// =============================================================================
// Document-tree locator
// =============================================================================

#[test]
fn locates_nested_node_and_reports_missing() {
    let root = DocumentNode::new(node_id("root-1"), DocumentNodeType::DocumentRoot).with_child(
        DocumentNode::new(node_id("ch-1"), DocumentNodeType::Chapter)
            .with_child(DocumentNode::new(node_id("sec-1"), DocumentNodeType::PolicySection)),
    );

    let found = find_node(Some(&root), &node_id("sec-1")).unwrap();
    assert_eq!(found.id.as_str(), "sec-1");
    assert!(find_node(Some(&root), &node_id("missing")).is_none());
    assert!(find_node(None, &node_id("sec-1")).is_none());
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn switching_workspace_resets_mode_and_selections() {
    let mut workbench = loaded_workbench();
    workbench.set_workspace(Some(Workspace::PlanMaking), Some(Mode::Policy));
    workbench.select_policy(Some(PolicyId::new("pol-1").unwrap()));
    workbench.select_site(Some(SiteId::new("site-1").unwrap()));
    assert_eq!(workbench.selected_policy().unwrap().reference, "H1");

    workbench.set_workspace(
        Some(Workspace::DevelopmentManagement),
        Some(Mode::DmSiteAssessment),
    );

    let nav = workbench.navigation();
    assert_eq!(nav.workspace(), Some(Workspace::DevelopmentManagement));
    assert_eq!(nav.mode(), Some(Mode::DmSiteAssessment));
    assert!(nav.selections().is_empty());
    assert!(workbench.selected_policy().is_none());
}

#[test]
fn changing_mode_keeps_selections() {
    let mut workbench = loaded_workbench();
    workbench.set_workspace(Some(Workspace::PlanMaking), Some(Mode::Policy));
    workbench.select_policy(Some(PolicyId::new("pol-2").unwrap()));

    workbench.set_mode(Some(Mode::Document));

    assert_eq!(workbench.navigation().mode(), Some(Mode::Document));
    assert_eq!(workbench.selected_policy().unwrap().reference, "DM12");
}

// =============================================================================
// Record resolution
// =============================================================================

#[test]
fn document_node_resolves_within_selected_document() {
    let mut workbench = loaded_workbench();
    workbench.set_workspace(Some(Workspace::PlanMaking), Some(Mode::Document));
    workbench.select_document_node(Some(node_id("sec-dm12")));
    assert!(workbench.selected_document_node().is_none());

    workbench.select_document(Some(DocumentId::new("lp2025").unwrap()));
    let node = workbench.selected_document_node().unwrap();
    assert_eq!(node.node_type, DocumentNodeType::PolicySection);
}

#[test]
fn report_section_resolves_within_selected_application() {
    let mut workbench = loaded_workbench();
    workbench.set_workspace(
        Some(Workspace::DevelopmentManagement),
        Some(Mode::DmReportGeneration),
    );
    workbench.select_application(Some(ApplicationId::new("app-1").unwrap()));
    workbench.select_report_section(Some(ReportSectionId::new("sec-2").unwrap()));

    assert_eq!(
        workbench.selected_report_section().unwrap().title,
        "Site Context"
    );

    workbench.select_application(Some(ApplicationId::new("app-2").unwrap()));
    assert!(workbench.selected_report_section().is_none());
}

#[test]
fn assessing_selected_application_sets_active_assessment() {
    let mut workbench = loaded_workbench();
    workbench.set_workspace(
        Some(Workspace::DevelopmentManagement),
        Some(Mode::DmSiteAssessment),
    );
    assert!(workbench.assess_selected_application().is_none());

    workbench.select_application(Some(ApplicationId::new("app-1").unwrap()));
    let assessment = workbench.assess_selected_application().unwrap();
    assert_eq!(assessment.site.id.as_str(), "site-1");
    let refs: Vec<_> = assessment
        .applicable_policies
        .iter()
        .map(|p| p.reference.as_str())
        .collect();
    assert_eq!(refs, vec!["H1", "DM12"]);
    assert!(workbench.active_site_assessment().is_some());

    workbench.select_application(None);
    assert!(workbench.assess_selected_application().is_none());
    assert!(workbench.active_site_assessment().is_none());
}
