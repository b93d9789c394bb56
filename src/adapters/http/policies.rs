//! HTTP endpoints for policies: filtered listing, CRUD and relations.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, FromRef, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::application::handlers::paging::DEFAULT_LIMIT;
use crate::application::handlers::policy::{
    GetPolicyRelationsHandler, GetPolicyRelationsQuery, ListPoliciesHandler, ListPoliciesQuery,
    PolicySortField, SortOrder,
};
use crate::domain::foundation::{DocumentId, PolicyId, ValidationError};
use crate::domain::planning::{Policy, PolicyStatus, PolicyType};
use crate::ports::RecordRepository;

use super::error::{bad_request_response, domain_error_response};
use super::records::{
    create_record, delete_record, get_record, patch_record, update_record, RecordHandlers,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters for `GET /api/policies`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPoliciesParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<PolicyStatus>,
    #[serde(default, rename = "type")]
    pub policy_type: Option<PolicyType>,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default, alias = "skip")]
    pub offset: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

impl TryFrom<ListPoliciesParams> for ListPoliciesQuery {
    type Error = ValidationError;

    fn try_from(params: ListPoliciesParams) -> Result<Self, Self::Error> {
        Ok(ListPoliciesQuery {
            search: params.search,
            status: params.status,
            policy_type: params.policy_type,
            document_id: params
                .document_id
                .as_deref()
                .map(str::parse::<DocumentId>)
                .transpose()?,
            sort_by: params
                .sort_by
                .as_deref()
                .map(str::parse::<PolicySortField>)
                .transpose()?,
            order: params
                .order
                .as_deref()
                .map(str::parse::<SortOrder>)
                .transpose()?
                .unwrap_or_default(),
            offset: params.offset.unwrap_or(0),
            limit: params.limit.unwrap_or(DEFAULT_LIMIT),
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PolicyState {
    records: RecordHandlers<Policy>,
    list_handler: Arc<ListPoliciesHandler>,
    relations_handler: Arc<GetPolicyRelationsHandler>,
}

impl PolicyState {
    pub fn new(policies: Arc<dyn RecordRepository<Policy>>) -> Self {
        Self {
            records: RecordHandlers::new(Arc::clone(&policies)),
            list_handler: Arc::new(ListPoliciesHandler::new(Arc::clone(&policies))),
            relations_handler: Arc::new(GetPolicyRelationsHandler::new(policies)),
        }
    }
}

impl FromRef<PolicyState> for RecordHandlers<Policy> {
    fn from_ref(state: &PolicyState) -> Self {
        state.records.clone()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/policies - Search, filter, sort and page policies
pub async fn list_policies(
    State(state): State<PolicyState>,
    params: Result<Query<ListPoliciesParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return bad_request_response(rejection.body_text()),
    };

    let query = match ListPoliciesQuery::try_from(params) {
        Ok(query) => query,
        Err(e) => return domain_error_response(e.into()),
    };

    match state.list_handler.handle(query).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

fn parse_policy_id(raw: &str) -> Result<PolicyId, Response> {
    raw.parse::<PolicyId>()
        .map_err(|_| bad_request_response(format!("Invalid policy ID: {}", raw)))
}

/// GET /api/policies/:id/linked-policies
pub async fn get_linked_policies(
    State(state): State<PolicyState>,
    Path(policy_id): Path<String>,
) -> Response {
    let policy_id = match parse_policy_id(&policy_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .relations_handler
        .handle(GetPolicyRelationsQuery { policy_id })
        .await
    {
        Ok(relations) => (StatusCode::OK, Json(relations.linked_policies)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/policies/:id/goal-alignments
pub async fn get_goal_alignments(
    State(state): State<PolicyState>,
    Path(policy_id): Path<String>,
) -> Response {
    let policy_id = match parse_policy_id(&policy_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .relations_handler
        .handle(GetPolicyRelationsQuery { policy_id })
        .await
    {
        Ok(relations) => (StatusCode::OK, Json(relations.goal_alignments)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Routes
// ════════════════════════════════════════════════════════════════════════════

/// Creates the policy router.
pub fn policy_routes(policies: Arc<dyn RecordRepository<Policy>>) -> Router {
    Router::new()
        .route("/", get(list_policies).post(create_record::<Policy>))
        .route(
            "/:id",
            get(get_record::<Policy>)
                .put(update_record::<Policy>)
                .patch(patch_record::<Policy>)
                .delete(delete_record::<Policy>),
        )
        .route("/:id/linked-policies", get(get_linked_policies))
        .route("/:id/goal-alignments", get(get_goal_alignments))
        .with_state(PolicyState::new(policies))
}
