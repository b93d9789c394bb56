//! GetPolicyRelationsHandler - Query handler for a policy's links.
//!
//! Returns the policy-to-policy links and strategic goal alignments that the
//! policy view shows alongside the wording.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, PolicyId, Record};
use crate::domain::planning::{LinkedPolicy, Policy, StrategicGoalAlignment};
use crate::ports::RecordRepository;

/// Query for one policy's relations.
#[derive(Debug, Clone)]
pub struct GetPolicyRelationsQuery {
    pub policy_id: PolicyId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRelations {
    pub policy_id: PolicyId,
    pub linked_policies: Vec<LinkedPolicy>,
    pub goal_alignments: Vec<StrategicGoalAlignment>,
}

/// Handler for retrieving a policy's relations.
pub struct GetPolicyRelationsHandler {
    policies: Arc<dyn RecordRepository<Policy>>,
}

impl GetPolicyRelationsHandler {
    pub fn new(policies: Arc<dyn RecordRepository<Policy>>) -> Self {
        Self { policies }
    }

    pub async fn handle(&self, query: GetPolicyRelationsQuery) -> Result<PolicyRelations, DomainError> {
        let policy = self
            .policies
            .find_by_id(&query.policy_id)
            .await?
            .ok_or_else(|| DomainError::not_found(Policy::RESOURCE, &query.policy_id))?;

        Ok(PolicyRelations {
            policy_id: policy.id,
            linked_policies: policy.linked_policies,
            goal_alignments: policy.strategic_goal_alignments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRepository;
    use crate::domain::foundation::{DocumentId, ErrorCode, GoalId};
    use crate::domain::planning::{GoalAlignment, PolicyType, RelationshipType};

    fn handler() -> GetPolicyRelationsHandler {
        let mut dm12 = Policy::new(
            PolicyId::new("pol-2").unwrap(),
            "DM12",
            "Design Quality and Local Character",
            "All new development must demonstrate high quality design.",
            PolicyType::DevelopmentManagement,
            DocumentId::new("lp2025").unwrap(),
        );
        dm12.linked_policies.push(LinkedPolicy {
            policy_id: PolicyId::new("pol-1").unwrap(),
            policy_reference: "H1".to_string(),
            relationship: RelationshipType::Supports,
            summary: Some("Ensures housing is well-designed.".to_string()),
        });
        dm12.strategic_goal_alignments.push(StrategicGoalAlignment {
            goal_id: GoalId::new("goal-1").unwrap(),
            goal_name: "Housing Delivery Target".to_string(),
            alignment: GoalAlignment::PartiallyAligns,
            notes: None,
        });
        GetPolicyRelationsHandler::new(Arc::new(InMemoryRepository::with_records(vec![dm12])))
    }

    #[tokio::test]
    async fn returns_links_and_alignments() {
        let relations = handler()
            .handle(GetPolicyRelationsQuery {
                policy_id: PolicyId::new("pol-2").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(relations.linked_policies.len(), 1);
        assert_eq!(relations.linked_policies[0].relationship, RelationshipType::Supports);
        assert_eq!(relations.goal_alignments[0].alignment, GoalAlignment::PartiallyAligns);
    }

    #[tokio::test]
    async fn unknown_policy_is_not_found() {
        let err = handler()
            .handle(GetPolicyRelationsQuery {
                policy_id: PolicyId::new("pol-9").unwrap(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(err.message.contains("pol-9"));
    }
}
