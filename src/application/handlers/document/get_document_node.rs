//! GetDocumentNodeHandler - Query handler for one node of a plan document.
//!
//! Resolves the document first, then runs the pre-order locator over its
//! tree. A missing document and a missing node are reported separately.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::document::{DocumentNode, PlanDocument};
use crate::domain::foundation::{DocumentId, DomainError, ErrorCode, NodeId};
use crate::ports::RecordRepository;

/// Query to get a node from a document.
#[derive(Debug, Clone)]
pub struct GetDocumentNodeQuery {
    pub document_id: DocumentId,
    pub node_id: NodeId,
}

/// The located node and the ids leading to it from the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNodeView {
    pub document_id: DocumentId,
    pub node: DocumentNode,
    /// Root first, ending with the node itself.
    pub path: Vec<NodeId>,
}

/// Error type for getting a document node.
#[derive(Debug, Clone)]
pub enum GetDocumentNodeError {
    /// Document not found.
    DocumentNotFound(DocumentId),
    /// Node not found in the document (or the document has no tree).
    NodeNotFound(DocumentId, NodeId),
    /// Infrastructure error.
    Infrastructure(String),
}

impl std::fmt::Display for GetDocumentNodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetDocumentNodeError::DocumentNotFound(id) => write!(f, "PlanDocument not found: {}", id),
            GetDocumentNodeError::NodeNotFound(doc, node) => {
                write!(f, "Node {} not found in document: {}", node, doc)
            }
            GetDocumentNodeError::Infrastructure(msg) => write!(f, "Infrastructure error: {}", msg),
        }
    }
}

impl std::error::Error for GetDocumentNodeError {}

impl From<DomainError> for GetDocumentNodeError {
    fn from(err: DomainError) -> Self {
        GetDocumentNodeError::Infrastructure(err.message)
    }
}

impl From<GetDocumentNodeError> for DomainError {
    fn from(err: GetDocumentNodeError) -> Self {
        let message = err.to_string();
        match err {
            GetDocumentNodeError::DocumentNotFound(id) => {
                DomainError::new(ErrorCode::NotFound, message).with_detail("document_id", id.to_string())
            }
            GetDocumentNodeError::NodeNotFound(doc, node) => {
                DomainError::new(ErrorCode::DocumentNodeNotFound, message)
                    .with_detail("document_id", doc.to_string())
                    .with_detail("node_id", node.to_string())
            }
            GetDocumentNodeError::Infrastructure(_) => {
                DomainError::new(ErrorCode::InternalError, message)
            }
        }
    }
}

/// Handler for retrieving a document node.
pub struct GetDocumentNodeHandler {
    documents: Arc<dyn RecordRepository<PlanDocument>>,
}

impl GetDocumentNodeHandler {
    pub fn new(documents: Arc<dyn RecordRepository<PlanDocument>>) -> Self {
        Self { documents }
    }

    pub async fn handle(
        &self,
        query: GetDocumentNodeQuery,
    ) -> Result<DocumentNodeView, GetDocumentNodeError> {
        let document = self
            .documents
            .find_by_id(&query.document_id)
            .await?
            .ok_or_else(|| GetDocumentNodeError::DocumentNotFound(query.document_id.clone()))?;

        let not_found = || GetDocumentNodeError::NodeNotFound(query.document_id.clone(), query.node_id.clone());

        let root = document.root().ok_or_else(not_found)?;
        let node = root.find(&query.node_id).ok_or_else(not_found)?;
        let path: Vec<NodeId> = root
            .path_to(&query.node_id)
            .map(|ids| ids.into_iter().cloned().collect())
            .unwrap_or_default();

        debug!(
            document_id = %query.document_id,
            node_id = %query.node_id,
            depth = path.len(),
            "Resolved document node"
        );

        Ok(DocumentNodeView {
            document_id: query.document_id,
            node: node.clone(),
            path,
        })
    }
}
