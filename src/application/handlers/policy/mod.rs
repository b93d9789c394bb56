//! Policy query handlers.

mod get_policy_relations;
mod list_policies;

pub use get_policy_relations::{
    GetPolicyRelationsHandler, GetPolicyRelationsQuery, PolicyRelations,
};
pub use list_policies::{
    ListPoliciesHandler, ListPoliciesQuery, ListPoliciesResult, PolicySortField, SortOrder,
};
