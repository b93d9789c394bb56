//! The catalog: owned, ordered collections of every loaded record.

use serde::{Deserialize, Serialize};

use super::development::{PlanningApplication, PrecedentCase, SiteAssessment};
use super::document::{DocumentNode, PlanDocument};
use super::foundation::{
    find_by_id, ApplicationId, ConstraintId, DocumentId, GoalId, NodeId, PolicyId, PrecedentId,
    ScenarioId, SiteId,
};
use super::planning::{Constraint, Goal, Policy, Scenario, Site};

/// Everything needed to populate a catalog in one step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSeed {
    #[serde(default)]
    pub policies: Vec<Policy>,
    #[serde(default)]
    pub sites: Vec<Site>,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    #[serde(default)]
    pub applications: Vec<PlanningApplication>,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub documents: Vec<PlanDocument>,
    #[serde(default)]
    pub precedents: Vec<PrecedentCase>,
}

/// Owned record collections. Lookups return the first record with a
/// matching id; uniqueness is the loader's responsibility.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    policies: Vec<Policy>,
    sites: Vec<Site>,
    constraints: Vec<Constraint>,
    applications: Vec<PlanningApplication>,
    scenarios: Vec<Scenario>,
    goals: Vec<Goal>,
    documents: Vec<PlanDocument>,
    precedents: Vec<PrecedentCase>,
    active_site_assessment: Option<SiteAssessment>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: CatalogSeed) -> Self {
        let mut catalog = Self::new();
        catalog.load(seed);
        catalog
    }

    /// Replaces every collection. The active site assessment is kept.
    pub fn load(&mut self, seed: CatalogSeed) {
        self.policies = seed.policies;
        self.sites = seed.sites;
        self.constraints = seed.constraints;
        self.applications = seed.applications;
        self.scenarios = seed.scenarios;
        self.goals = seed.goals;
        self.documents = seed.documents;
        self.precedents = seed.precedents;
    }

    // ─────────────────────────────────────────────────────────────────
    // Collections
    // ─────────────────────────────────────────────────────────────────

    pub fn set_policies(&mut self, policies: Vec<Policy>) {
        self.policies = policies;
    }

    pub fn set_sites(&mut self, sites: Vec<Site>) {
        self.sites = sites;
    }

    pub fn set_constraints(&mut self, constraints: Vec<Constraint>) {
        self.constraints = constraints;
    }

    pub fn set_applications(&mut self, applications: Vec<PlanningApplication>) {
        self.applications = applications;
    }

    pub fn set_scenarios(&mut self, scenarios: Vec<Scenario>) {
        self.scenarios = scenarios;
    }

    pub fn set_goals(&mut self, goals: Vec<Goal>) {
        self.goals = goals;
    }

    pub fn set_documents(&mut self, documents: Vec<PlanDocument>) {
        self.documents = documents;
    }

    pub fn set_precedents(&mut self, precedents: Vec<PrecedentCase>) {
        self.precedents = precedents;
    }

    pub fn policies(&self) -> &[Policy] {
        &self.policies
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn applications(&self) -> &[PlanningApplication] {
        &self.applications
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn documents(&self) -> &[PlanDocument] {
        &self.documents
    }

    pub fn precedents(&self) -> &[PrecedentCase] {
        &self.precedents
    }

    // ─────────────────────────────────────────────────────────────────
    // Lookups
    // ─────────────────────────────────────────────────────────────────

    pub fn find_policy(&self, id: &PolicyId) -> Option<&Policy> {
        find_by_id(&self.policies, id)
    }

    /// Looks a policy up by its short reference (`H1`), ignoring case.
    pub fn find_policy_by_reference(&self, reference: &str) -> Option<&Policy> {
        self.policies
            .iter()
            .find(|p| p.reference.eq_ignore_ascii_case(reference))
    }

    pub fn find_site(&self, id: &SiteId) -> Option<&Site> {
        find_by_id(&self.sites, id)
    }

    pub fn find_constraint(&self, id: &ConstraintId) -> Option<&Constraint> {
        find_by_id(&self.constraints, id)
    }

    pub fn find_application(&self, id: &ApplicationId) -> Option<&PlanningApplication> {
        find_by_id(&self.applications, id)
    }

    pub fn find_scenario(&self, id: &ScenarioId) -> Option<&Scenario> {
        find_by_id(&self.scenarios, id)
    }

    pub fn find_goal(&self, id: &GoalId) -> Option<&Goal> {
        find_by_id(&self.goals, id)
    }

    pub fn find_document(&self, id: &DocumentId) -> Option<&PlanDocument> {
        find_by_id(&self.documents, id)
    }

    pub fn find_precedent(&self, id: &PrecedentId) -> Option<&PrecedentCase> {
        find_by_id(&self.precedents, id)
    }

    /// Locates a node inside a document's tree. A missing document is
    /// reported the same way as a missing node.
    pub fn find_document_node(
        &self,
        document_id: &DocumentId,
        node_id: &NodeId,
    ) -> Option<&DocumentNode> {
        self.find_document(document_id)?.find_node(node_id)
    }

    // ─────────────────────────────────────────────────────────────────
    // Active site assessment
    // ─────────────────────────────────────────────────────────────────

    pub fn set_active_site_assessment(&mut self, assessment: SiteAssessment) {
        self.active_site_assessment = Some(assessment);
    }

    pub fn active_site_assessment(&self) -> Option<&SiteAssessment> {
        self.active_site_assessment.as_ref()
    }

    pub fn clear_active_site_assessment(&mut self) {
        self.active_site_assessment = None;
    }

    /// Assembles a site assessment for an application from the loaded
    /// records. Policies are resolved by reference and unknown references
    /// are skipped. Without a linked site, a stand-in named after the
    /// application address is used.
    pub fn site_assessment_for(&self, id: &ApplicationId) -> Option<SiteAssessment> {
        let application = self.find_application(id)?;

        let site = application
            .site_id
            .as_ref()
            .and_then(|site_id| self.find_site(site_id))
            .cloned()
            .unwrap_or_else(|| {
                let mut site = Site::new(SiteId::generate());
                site.name = Some(application.address.clone());
                site.address = Some(application.address.clone());
                site
            });

        let mut assessment = SiteAssessment::new(
            site,
            format!(
                "Initial assessment for {}: {}",
                application.reference_number, application.proposal_details
            ),
        );
        assessment.constraints_affecting_site = application.constraints.clone();
        assessment.applicable_policies = application
            .relevant_policy_refs
            .iter()
            .filter_map(|reference| self.find_policy_by_reference(reference))
            .cloned()
            .collect();
        assessment.trade_off_matrix = application
            .trade_off_analysis
            .as_ref()
            .and_then(|analysis| serde_json::to_value(analysis).ok());

        Some(assessment)
    }
}
