//! HTTP endpoints for planning applications, their officer reports and the
//! reasoning behind a recommendation.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use serde::Deserialize;

use crate::application::handlers::development::{
    AddReasoningStepCommand, AddReasoningStepHandler, AddReportSectionCommand,
    AddReportSectionHandler, CreateOfficerReportCommand, CreateOfficerReportHandler,
    GetOfficerReportError, GetOfficerReportHandler, GetOfficerReportQuery, GetReasoningHandler,
    GetReasoningQuery,
};
use crate::domain::development::{OfficerReport, PlanningApplication, ReasoningStep};
use crate::domain::foundation::{ApplicationId, ReportSectionId};
use crate::ports::RecordRepository;

use super::error::{bad_request_response, domain_error_response};
use super::records::{
    create_record, delete_record, get_record, list_records, patch_record, update_record,
    RecordHandlers,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/planning-applications/:id/officer-report/sections`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSectionRequest {
    #[serde(default)]
    pub id: Option<ReportSectionId>,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub order: u32,
}

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ApplicationState {
    records: RecordHandlers<PlanningApplication>,
    report_handler: Arc<GetOfficerReportHandler>,
    create_report_handler: Arc<CreateOfficerReportHandler>,
    add_section_handler: Arc<AddReportSectionHandler>,
    reasoning_handler: Arc<GetReasoningHandler>,
    add_step_handler: Arc<AddReasoningStepHandler>,
}

impl ApplicationState {
    pub fn new(applications: Arc<dyn RecordRepository<PlanningApplication>>) -> Self {
        Self {
            records: RecordHandlers::new(Arc::clone(&applications)),
            report_handler: Arc::new(GetOfficerReportHandler::new(Arc::clone(&applications))),
            create_report_handler: Arc::new(CreateOfficerReportHandler::new(Arc::clone(
                &applications,
            ))),
            add_section_handler: Arc::new(AddReportSectionHandler::new(Arc::clone(&applications))),
            reasoning_handler: Arc::new(GetReasoningHandler::new(Arc::clone(&applications))),
            add_step_handler: Arc::new(AddReasoningStepHandler::new(applications)),
        }
    }
}

impl FromRef<ApplicationState> for RecordHandlers<PlanningApplication> {
    fn from_ref(state: &ApplicationState) -> Self {
        state.records.clone()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

fn parse_application_id(raw: &str) -> Result<ApplicationId, Response> {
    raw.parse::<ApplicationId>()
        .map_err(|_| bad_request_response(format!("Invalid application ID: {}", raw)))
}

/// GET /api/planning-applications/:id/officer-report
///
/// An application that has no report yet answers `null`.
pub async fn get_officer_report(
    State(state): State<ApplicationState>,
    Path(application_id): Path<String>,
) -> Response {
    let application_id = match parse_application_id(&application_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .report_handler
        .handle(GetOfficerReportQuery { application_id })
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(GetOfficerReportError::ReportNotFound(_)) => {
            (StatusCode::OK, Json(serde_json::Value::Null)).into_response()
        }
        Err(e) => domain_error_response(e.into()),
    }
}

/// POST /api/planning-applications/:id/officer-report - Start the report
pub async fn create_officer_report(
    State(state): State<ApplicationState>,
    Path(application_id): Path<String>,
    body: Result<Json<OfficerReport>, JsonRejection>,
) -> Response {
    let application_id = match parse_application_id(&application_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(report) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request_response(rejection.body_text()),
    };

    match state
        .create_report_handler
        .handle(CreateOfficerReportCommand {
            application_id,
            report,
        })
        .await
    {
        Ok(report) => (StatusCode::CREATED, Json(report)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/planning-applications/:id/officer-report/sections - Sections in order
pub async fn list_report_sections(
    State(state): State<ApplicationState>,
    Path(application_id): Path<String>,
) -> Response {
    let application_id = match parse_application_id(&application_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .report_handler
        .handle(GetOfficerReportQuery { application_id })
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view.sections)).into_response(),
        Err(e) => domain_error_response(e.into()),
    }
}

/// POST /api/planning-applications/:id/officer-report/sections - Append a section
pub async fn add_report_section(
    State(state): State<ApplicationState>,
    Path(application_id): Path<String>,
    body: Result<Json<AddSectionRequest>, JsonRejection>,
) -> Response {
    let application_id = match parse_application_id(&application_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request_response(rejection.body_text()),
    };

    let cmd = AddReportSectionCommand {
        application_id,
        section_id: request.id,
        title: request.title,
        content: request.content,
        order: request.order,
    };
    match state.add_section_handler.handle(cmd).await {
        Ok(section) => (StatusCode::CREATED, Json(section)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/planning-applications/:id/reasoning - Policies, steps and trade-offs
pub async fn get_reasoning(
    State(state): State<ApplicationState>,
    Path(application_id): Path<String>,
) -> Response {
    let application_id = match parse_application_id(&application_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .reasoning_handler
        .handle(GetReasoningQuery { application_id })
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/planning-applications/:id/reasoning/steps - Append a reasoning step
pub async fn add_reasoning_step(
    State(state): State<ApplicationState>,
    Path(application_id): Path<String>,
    body: Result<Json<ReasoningStep>, JsonRejection>,
) -> Response {
    let application_id = match parse_application_id(&application_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(step) = match body {
        Ok(body) => body,
        Err(rejection) => return bad_request_response(rejection.body_text()),
    };

    match state
        .add_step_handler
        .handle(AddReasoningStepCommand {
            application_id,
            step,
        })
        .await
    {
        Ok(step) => (StatusCode::CREATED, Json(step)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Routes
// ════════════════════════════════════════════════════════════════════════════

/// Creates the planning application router.
pub fn application_routes(
    applications: Arc<dyn RecordRepository<PlanningApplication>>,
) -> Router {
    Router::new()
        .route(
            "/",
            get(list_records::<PlanningApplication>).post(create_record::<PlanningApplication>),
        )
        .route(
            "/:id",
            get(get_record::<PlanningApplication>)
                .put(update_record::<PlanningApplication>)
                .patch(patch_record::<PlanningApplication>)
                .delete(delete_record::<PlanningApplication>),
        )
        .route(
            "/:id/officer-report",
            get(get_officer_report).post(create_officer_report),
        )
        .route(
            "/:id/officer-report/sections",
            get(list_report_sections).post(add_report_section),
        )
        .route("/:id/reasoning", get(get_reasoning))
        .route("/:id/reasoning/steps", post(add_reasoning_step))
        .with_state(ApplicationState::new(applications))
}
