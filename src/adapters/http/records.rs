//! Generic CRUD endpoints shared by every record kind.
//!
//! `record_routes` mounts paged list and create on `/`, and get, replace,
//! partial update and delete on `/:id`. Resources with extra endpoints reuse
//! the handlers through `FromRef`.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::application::handlers::paging::{PageRequest, DEFAULT_LIMIT};
use crate::domain::foundation::{DomainError, ErrorCode, Record};
use crate::ports::RecordRepository;

use super::error::{bad_request_response, domain_error_response, ErrorResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

pub struct RecordHandlers<T: Record> {
    repository: Arc<dyn RecordRepository<T>>,
}

impl<T: Record> RecordHandlers<T> {
    pub fn new(repository: Arc<dyn RecordRepository<T>>) -> Self {
        Self { repository }
    }
}

impl<T: Record> Clone for RecordHandlers<T> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Request parsing
// ════════════════════════════════════════════════════════════════════════════

/// Paging parameters accepted by every list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    #[serde(default, alias = "skip")]
    pub offset: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl From<PageParams> for PageRequest {
    fn from(params: PageParams) -> Self {
        PageRequest::new(
            params.offset.unwrap_or(0),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}

fn parse_id<T: Record>(raw: &str) -> Result<T::Id, Response> {
    raw.parse::<T::Id>().map_err(|_| {
        bad_request_response(format!("Invalid {} ID: {}", T::RESOURCE, raw))
    })
}

/// Decodes a record body, filling `id` with `fallback_id` when absent or null.
fn decode_record<T: Record>(
    body: Result<Json<Value>, JsonRejection>,
    fallback_id: impl FnOnce() -> T::Id,
) -> Result<T, Response> {
    let Json(mut value) = body.map_err(|rejection| bad_request_response(rejection.body_text()))?;

    let object = value
        .as_object_mut()
        .ok_or_else(|| bad_request_response("Request body must be a JSON object"))?;
    if object.get("id").map_or(true, Value::is_null) {
        object.insert("id".to_string(), Value::String(fallback_id().to_string()));
    }

    serde_json::from_value(value).map_err(|e| {
        bad_request_response(format!("Invalid {}: {}", T::RESOURCE, e))
    })
}

/// Overlays the top-level fields of `patch` onto `existing`.
fn merge_patch<T: Record>(existing: &T, patch: Map<String, Value>) -> Result<T, Response> {
    let mut value = serde_json::to_value(existing).map_err(|e| {
        domain_error_response(DomainError::new(
            ErrorCode::InternalError,
            format!("Failed to encode {}: {}", T::RESOURCE, e),
        ))
    })?;
    if let Some(object) = value.as_object_mut() {
        object.extend(patch);
    }

    serde_json::from_value(value).map_err(|e| {
        bad_request_response(format!("Invalid {}: {}", T::RESOURCE, e))
    })
}

fn id_mismatch<T: Record>(body_id: &T::Id, path_id: &T::Id) -> Response {
    domain_error_response(DomainError::new(
        ErrorCode::IdMismatch,
        format!("Body id {} does not match path id {}", body_id, path_id),
    ))
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/{resource} - List one page of records in insertion order
pub async fn list_records<T: Record>(
    State(handlers): State<RecordHandlers<T>>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return bad_request_response(rejection.body_text()),
    };

    let window = PageRequest::from(params);
    if let Err(e) = window.validate() {
        return domain_error_response(e.into());
    }

    match handlers.repository.list().await {
        Ok(records) => (StatusCode::OK, Json(window.paginate(records))).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/{resource}/:id - Get one record
pub async fn get_record<T: Record>(
    State(handlers): State<RecordHandlers<T>>,
    Path(id): Path<String>,
) -> Response {
    let record_id = match parse_id::<T>(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.repository.find_by_id(&record_id).await {
        Ok(Some(record)) => (StatusCode::OK, Json(record)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(T::RESOURCE, &id)),
        )
            .into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/{resource} - Create a record, generating an id when none is given
pub async fn create_record<T: Record>(
    State(handlers): State<RecordHandlers<T>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let record: T = match decode_record::<T>(body, T::generate_id) {
        Ok(record) => record,
        Err(response) => return response,
    };

    match handlers.repository.save(&record).await {
        Ok(()) => {
            debug!(resource = T::RESOURCE, id = %record.id(), "record created");
            (StatusCode::CREATED, Json(record)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// PUT /api/{resource}/:id - Replace a record
///
/// The body id defaults to the path id and must match it when given.
pub async fn update_record<T: Record>(
    State(handlers): State<RecordHandlers<T>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let record_id = match parse_id::<T>(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let fallback = record_id.clone();
    let record: T = match decode_record::<T>(body, move || fallback) {
        Ok(record) => record,
        Err(response) => return response,
    };

    if record.id() != &record_id {
        return id_mismatch::<T>(record.id(), &record_id);
    }

    match handlers.repository.update(&record).await {
        Ok(()) => {
            debug!(resource = T::RESOURCE, id = %record_id, "record replaced");
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// PATCH /api/{resource}/:id - Update only the fields present in the body
pub async fn patch_record<T: Record>(
    State(handlers): State<RecordHandlers<T>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let record_id = match parse_id::<T>(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let patch = match body {
        Ok(Json(Value::Object(patch))) => patch,
        Ok(_) => return bad_request_response("Request body must be a JSON object"),
        Err(rejection) => return bad_request_response(rejection.body_text()),
    };

    let existing = match handlers.repository.find_by_id(&record_id).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::not_found(T::RESOURCE, &id)),
            )
                .into_response()
        }
        Err(e) => return domain_error_response(e),
    };

    let record: T = match merge_patch(&existing, patch) {
        Ok(record) => record,
        Err(response) => return response,
    };

    if record.id() != &record_id {
        return id_mismatch::<T>(record.id(), &record_id);
    }

    match handlers.repository.update(&record).await {
        Ok(()) => {
            debug!(resource = T::RESOURCE, id = %record_id, "record patched");
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

/// DELETE /api/{resource}/:id - Delete a record
pub async fn delete_record<T: Record>(
    State(handlers): State<RecordHandlers<T>>,
    Path(id): Path<String>,
) -> Response {
    let record_id = match parse_id::<T>(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.repository.delete(&record_id).await {
        Ok(()) => {
            debug!(resource = T::RESOURCE, id = %record_id, "record deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => domain_error_response(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Routes
// ════════════════════════════════════════════════════════════════════════════

/// Creates the CRUD router for one record kind.
pub fn record_routes<T: Record>(repository: Arc<dyn RecordRepository<T>>) -> Router {
    Router::new()
        .route("/", get(list_records::<T>).post(create_record::<T>))
        .route(
            "/:id",
            get(get_record::<T>)
                .put(update_record::<T>)
                .patch(patch_record::<T>)
                .delete(delete_record::<T>),
        )
        .with_state(RecordHandlers::new(repository))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::GoalId;
    use crate::domain::planning::{Goal, GoalType};

    fn json_body(value: Value) -> Result<Json<Value>, JsonRejection> {
        Ok(Json(value))
    }

    #[test]
    fn decode_fills_missing_id() {
        let body = json_body(serde_json::json!({
            "name": "Deliver homes",
            "category": "Housing",
            "targetMetric": "Net additional dwellings",
            "status": "On Track",
            "type": "Legal"
        }));
        let goal: Goal = decode_record::<Goal>(body, || GoalId::new("goal-new").unwrap())
            .unwrap_or_else(|_| panic!("body should decode"));
        assert_eq!(goal.id.as_str(), "goal-new");
    }

    #[test]
    fn decode_keeps_given_id() {
        let body = json_body(serde_json::json!({
            "id": "goal-7",
            "name": "Deliver homes",
            "category": "Housing",
            "targetMetric": "Net additional dwellings",
            "status": "On Track",
            "type": "Legal"
        }));
        let goal: Goal = decode_record::<Goal>(body, || GoalId::new("goal-new").unwrap())
            .unwrap_or_else(|_| panic!("body should decode"));
        assert_eq!(goal.id.as_str(), "goal-7");
    }

    #[test]
    fn decode_rejects_non_object_body() {
        let body = json_body(serde_json::json!(["not", "an", "object"]));
        let response = decode_record::<Goal>(body, Goal::generate_id).err().unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    fn goal() -> Goal {
        Goal::new(
            GoalId::new("goal-1").unwrap(),
            "Deliver homes",
            "Housing",
            "Net additional dwellings",
            GoalType::Legal,
        )
    }

    fn patch(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn merge_patch_replaces_only_given_fields() {
        let patched: Goal = merge_patch(&goal(), patch(serde_json::json!({ "name": "Deliver more homes" })))
            .unwrap_or_else(|_| panic!("patch should apply"));
        assert_eq!(patched.name, "Deliver more homes");
        assert_eq!(patched.category, "Housing");
        assert_eq!(patched.id.as_str(), "goal-1");
    }

    #[test]
    fn merge_patch_rejects_ill_typed_field() {
        let response = merge_patch::<Goal>(&goal(), patch(serde_json::json!({ "risks": "none" })))
            .err()
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn page_params_default_and_accept_skip() {
        let window = PageRequest::from(PageParams::default());
        assert_eq!(window, PageRequest::new(0, DEFAULT_LIMIT));

        let params: PageParams = serde_json::from_value(serde_json::json!({ "skip": 4, "limit": 2 })).unwrap();
        assert_eq!(PageRequest::from(params), PageRequest::new(4, 2));
    }
}
