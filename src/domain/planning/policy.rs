//! Planning policy records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{impl_record, DocumentId, GoalId, PolicyId};

/// Adoption status of a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PolicyStatus {
    #[default]
    Draft,
    Adopted,
    Consultation,
    #[serde(rename = "Under Review")]
    UnderReview,
    Archived,
}

impl PolicyStatus {
    /// True for policies that carry weight in decisions.
    pub fn is_in_force(&self) -> bool {
        matches!(self, PolicyStatus::Adopted)
    }
}

impl fmt::Display for PolicyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PolicyStatus::Draft => "Draft",
            PolicyStatus::Adopted => "Adopted",
            PolicyStatus::Consultation => "Consultation",
            PolicyStatus::UnderReview => "Under Review",
            PolicyStatus::Archived => "Archived",
        };
        write!(f, "{}", s)
    }
}

/// Tier of a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyType {
    Strategic,
    #[serde(rename = "Development Management (DM)")]
    DevelopmentManagement,
    #[serde(rename = "Supplementary Planning Document (SPD)")]
    SupplementaryPlanningDocument,
    #[serde(rename = "National (NPPF)")]
    National,
    #[serde(rename = "Guidance Note")]
    GuidanceNote,
}

/// How one policy relates to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationshipType {
    Supports,
    ConflictsWith,
    References,
    ReferencedBy,
    OverlapsWith,
    Supersedes,
}

/// Degree to which a record advances a strategic goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalAlignment {
    Supports,
    #[serde(rename = "Partially Aligns")]
    PartiallyAligns,
    Undermines,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedPolicy {
    pub policy_id: PolicyId,
    pub policy_reference: String,
    pub relationship: RelationshipType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicGoalAlignment {
    pub goal_id: GoalId,
    pub goal_name: String,
    pub alignment: GoalAlignment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiGuidance {
    #[serde(rename = "type")]
    pub guidance_type: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// A planning policy belonging to a plan document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Policy {
    pub id: PolicyId,
    /// Short reference such as `H1` or `DM12`.
    pub reference: String,
    pub title: String,
    pub wording: String,
    pub status: PolicyStatus,
    #[serde(rename = "type")]
    pub policy_type: PolicyType,
    pub document_id: DocumentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supporting_text: Option<String>,
    /// Officer justification and legal concerns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_notes: Option<String>,
    #[serde(default)]
    pub linked_policies: Vec<LinkedPolicy>,
    #[serde(default)]
    pub affected_site_categories: Vec<String>,
    #[serde(default)]
    pub strategic_goal_alignments: Vec<StrategicGoalAlignment>,
    #[serde(default)]
    pub ai_guidance: Vec<AiGuidance>,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// One-line requirement used by DM reasoning ("min 30% affordable").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements_summary: Option<String>,
}

impl_record!(Policy, PolicyId, "Policy");

impl Policy {
    /// Creates a draft policy with only the required fields.
    pub fn new(
        id: PolicyId,
        reference: impl Into<String>,
        title: impl Into<String>,
        wording: impl Into<String>,
        policy_type: PolicyType,
        document_id: DocumentId,
    ) -> Self {
        Self {
            id,
            reference: reference.into(),
            title: title.into(),
            wording: wording.into(),
            status: PolicyStatus::default(),
            policy_type,
            document_id,
            version: None,
            last_modified: None,
            author: None,
            author_notes: None,
            supporting_text: None,
            internal_notes: None,
            linked_policies: Vec::new(),
            affected_site_categories: Vec::new(),
            strategic_goal_alignments: Vec::new(),
            ai_guidance: Vec::new(),
            keywords: Vec::new(),
            requirements_summary: None,
        }
    }

    pub fn with_status(mut self, status: PolicyStatus) -> Self {
        self.status = status;
        self
    }

    /// Case-insensitive match of `term` against reference, title, wording
    /// and keywords.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.reference.to_lowercase().contains(&term)
            || self.title.to_lowercase().contains(&term)
            || self.wording.to_lowercase().contains(&term)
            || self.keywords.iter().any(|k| k.to_lowercase().contains(&term))
    }
}
