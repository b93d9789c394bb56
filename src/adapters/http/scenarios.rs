//! HTTP endpoints for plan-making scenarios.

use std::sync::Arc;

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use crate::application::handlers::scenario::{DuplicateScenarioCommand, DuplicateScenarioHandler};
use crate::domain::foundation::ScenarioId;
use crate::domain::planning::Scenario;
use crate::ports::RecordRepository;

use super::error::{bad_request_response, domain_error_response};
use super::records::{
    create_record, delete_record, get_record, list_records, patch_record, update_record,
    RecordHandlers,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ScenarioState {
    records: RecordHandlers<Scenario>,
    duplicate_handler: Arc<DuplicateScenarioHandler>,
}

impl ScenarioState {
    pub fn new(scenarios: Arc<dyn RecordRepository<Scenario>>) -> Self {
        Self {
            records: RecordHandlers::new(Arc::clone(&scenarios)),
            duplicate_handler: Arc::new(DuplicateScenarioHandler::new(scenarios)),
        }
    }
}

impl FromRef<ScenarioState> for RecordHandlers<Scenario> {
    fn from_ref(state: &ScenarioState) -> Self {
        state.records.clone()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/scenarios/:id/duplicate - Copy a scenario under a new id
pub async fn duplicate_scenario(
    State(state): State<ScenarioState>,
    Path(scenario_id): Path<String>,
) -> Response {
    let source_id = match scenario_id.parse::<ScenarioId>() {
        Ok(id) => id,
        Err(_) => return bad_request_response(format!("Invalid scenario ID: {}", scenario_id)),
    };

    match state
        .duplicate_handler
        .handle(DuplicateScenarioCommand { source_id })
        .await
    {
        Ok(copy) => (StatusCode::CREATED, Json(copy)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Routes
// ════════════════════════════════════════════════════════════════════════════

/// Creates the scenario router.
pub fn scenario_routes(scenarios: Arc<dyn RecordRepository<Scenario>>) -> Router {
    Router::new()
        .route(
            "/",
            get(list_records::<Scenario>).post(create_record::<Scenario>),
        )
        .route(
            "/:id",
            get(get_record::<Scenario>)
                .put(update_record::<Scenario>)
                .patch(patch_record::<Scenario>)
                .delete(delete_record::<Scenario>),
        )
        .route("/:id/duplicate", post(duplicate_scenario))
        .with_state(ScenarioState::new(scenarios))
}
