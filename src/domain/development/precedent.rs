//! Precedent cases: earlier decisions cited in development management.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{impl_record, PrecedentId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionType {
    #[serde(rename = "LPA Decision")]
    LpaDecision,
    #[serde(rename = "Appeal Decision")]
    AppealDecision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrecedentOutcome {
    Allowed,
    Dismissed,
    #[serde(rename = "Split Decision")]
    SplitDecision,
    Withdrawn,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(default)]
    pub policy_overlap: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecedentCase {
    pub id: PrecedentId,
    pub case_reference: String,
    pub address: String,
    pub decision_type: DecisionType,
    pub decision_date: NaiveDate,
    pub outcome: PrecedentOutcome,
    #[serde(default)]
    pub key_policies_cited: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspector_reasoning_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_extract_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_criteria: Option<SimilarityCriteria>,
}

impl_record!(PrecedentCase, PrecedentId, "PrecedentCase");

impl PrecedentCase {
    pub fn is_appeal(&self) -> bool {
        self.decision_type == DecisionType::AppealDecision
    }

    /// True when the case cites the given policy reference (case-insensitive).
    pub fn cites(&self, policy_reference: &str) -> bool {
        self.key_policies_cited
            .iter()
            .any(|p| p.eq_ignore_ascii_case(policy_reference))
    }
}
