//! HTTP endpoints for plan documents and their node trees.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use serde_json::Value;

use crate::application::handlers::document::{
    AddDocumentNodeCommand, AddDocumentNodeHandler, GetDocumentNodeHandler, GetDocumentNodeQuery,
    ListDocumentNodesHandler, ListDocumentNodesQuery,
};
use crate::domain::document::{DocumentNode, PlanDocument};
use crate::domain::foundation::{DocumentId, NodeId};
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
pub struct DocumentState {
    records: RecordHandlers<PlanDocument>,
    nodes_handler: Arc<ListDocumentNodesHandler>,
    node_handler: Arc<GetDocumentNodeHandler>,
    add_node_handler: Arc<AddDocumentNodeHandler>,
}

impl DocumentState {
    pub fn new(documents: Arc<dyn RecordRepository<PlanDocument>>) -> Self {
        Self {
            records: RecordHandlers::new(Arc::clone(&documents)),
            nodes_handler: Arc::new(ListDocumentNodesHandler::new(Arc::clone(&documents))),
            node_handler: Arc::new(GetDocumentNodeHandler::new(Arc::clone(&documents))),
            add_node_handler: Arc::new(AddDocumentNodeHandler::new(documents)),
        }
    }
}

impl FromRef<DocumentState> for RecordHandlers<PlanDocument> {
    fn from_ref(state: &DocumentState) -> Self {
        state.records.clone()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Request parsing
// ════════════════════════════════════════════════════════════════════════════

/// Splits a node body into its optional `parentId` and the node, generating
/// the node id when absent or null.
fn decode_node(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(Option<NodeId>, DocumentNode), Response> {
    let Json(mut value) = body.map_err(|rejection| bad_request_response(rejection.body_text()))?;

    let object = value
        .as_object_mut()
        .ok_or_else(|| bad_request_response("Request body must be a JSON object"))?;
    let parent_id = match object.remove("parentId") {
        None | Some(Value::Null) => None,
        Some(raw) => Some(
            serde_json::from_value::<NodeId>(raw)
                .map_err(|e| bad_request_response(format!("Invalid parentId: {}", e)))?,
        ),
    };
    if object.get("id").map_or(true, Value::is_null) {
        object.insert("id".to_string(), Value::String(NodeId::generate().to_string()));
    }

    let node: DocumentNode = serde_json::from_value(value)
        .map_err(|e| bad_request_response(format!("Invalid DocumentNode: {}", e)))?;
    Ok((parent_id, node))
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/plan-documents/:id/nodes - Top-level outline of a document
pub async fn list_document_nodes(
    State(state): State<DocumentState>,
    Path(document_id): Path<String>,
) -> Response {
    let document_id = match document_id.parse::<DocumentId>() {
        Ok(id) => id,
        Err(_) => return bad_request_response("Invalid document ID"),
    };

    match state
        .nodes_handler
        .handle(ListDocumentNodesQuery { document_id })
        .await
    {
        Ok(nodes) => (StatusCode::OK, Json(nodes)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// POST /api/plan-documents/:id/nodes - Insert a node under `parentId` or the root
pub async fn add_document_node(
    State(state): State<DocumentState>,
    Path(document_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let document_id = match document_id.parse::<DocumentId>() {
        Ok(id) => id,
        Err(_) => return bad_request_response("Invalid document ID"),
    };
    let (parent_id, node) = match decode_node(body) {
        Ok(parts) => parts,
        Err(response) => return response,
    };

    match state
        .add_node_handler
        .handle(AddDocumentNodeCommand {
            document_id,
            parent_id,
            node,
        })
        .await
    {
        Ok(node) => (StatusCode::CREATED, Json(node)).into_response(),
        Err(e) => domain_error_response(e),
    }
}

/// GET /api/plan-documents/:id/nodes/:node_id - One node with its path
pub async fn get_document_node(
    State(state): State<DocumentState>,
    Path((document_id, node_id)): Path<(String, String)>,
) -> Response {
    let document_id = match document_id.parse::<DocumentId>() {
        Ok(id) => id,
        Err(_) => return bad_request_response("Invalid document ID"),
    };
    let node_id = match node_id.parse::<NodeId>() {
        Ok(id) => id,
        Err(_) => return bad_request_response("Invalid node ID"),
    };

    match state
        .node_handler
        .handle(GetDocumentNodeQuery {
            document_id,
            node_id,
        })
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => domain_error_response(e.into()),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Routes
// ════════════════════════════════════════════════════════════════════════════

/// Creates the plan document router.
pub fn document_routes(documents: Arc<dyn RecordRepository<PlanDocument>>) -> Router {
    Router::new()
        .route(
            "/",
            get(list_records::<PlanDocument>).post(create_record::<PlanDocument>),
        )
        .route(
            "/:id",
            get(get_record::<PlanDocument>)
                .put(update_record::<PlanDocument>)
                .patch(patch_record::<PlanDocument>)
                .delete(delete_record::<PlanDocument>),
        )
        .route("/:id/nodes", get(list_document_nodes).post(add_document_node))
        .route("/:id/nodes/:node_id", get(get_document_node))
        .with_state(DocumentState::new(documents))
}
