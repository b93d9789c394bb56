//! ListDocumentNodesHandler - Query handler for a document's outline.
//!
//! Lists the top-level nodes (direct children of the root) as summaries.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::document::{DocumentNode, DocumentNodeType, PlanDocument};
use crate::domain::foundation::{DocumentId, DomainError, NodeId, Record};
use crate::ports::RecordRepository;

#[derive(Debug, Clone)]
pub struct ListDocumentNodesQuery {
    pub document_id: DocumentId,
}

/// Outline entry for a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNodeSummary {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub node_type: DocumentNodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub child_count: usize,
}

impl From<&DocumentNode> for DocumentNodeSummary {
    fn from(node: &DocumentNode) -> Self {
        Self {
            id: node.id.clone(),
            node_type: node.node_type,
            title: node.title.clone(),
            reference: node.reference.clone(),
            child_count: node.children.len(),
        }
    }
}

/// Handler for listing a document's top-level nodes.
pub struct ListDocumentNodesHandler {
    documents: Arc<dyn RecordRepository<PlanDocument>>,
}

impl ListDocumentNodesHandler {
    pub fn new(documents: Arc<dyn RecordRepository<PlanDocument>>) -> Self {
        Self { documents }
    }

    /// Empty when the document has no tree loaded.
    pub async fn handle(
        &self,
        query: ListDocumentNodesQuery,
    ) -> Result<Vec<DocumentNodeSummary>, DomainError> {
        let document = self
            .documents
            .find_by_id(&query.document_id)
            .await?
            .ok_or_else(|| DomainError::not_found(PlanDocument::RESOURCE, &query.document_id))?;

        Ok(document
            .top_level_nodes()
            .iter()
            .map(DocumentNodeSummary::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRepository;
    use crate::domain::document::PlanDocumentType;
    use crate::domain::foundation::ErrorCode;

    fn node(id: &str, node_type: DocumentNodeType) -> DocumentNode {
        DocumentNode::new(NodeId::new(id).unwrap(), node_type)
    }

    fn handler() -> ListDocumentNodesHandler {
        let tree = node("root-1", DocumentNodeType::DocumentRoot)
            .with_child(
                node("ch-1", DocumentNodeType::Chapter)
                    .with_title("Housing")
                    .with_child(node("sec-1", DocumentNodeType::PolicySection)),
            )
            .with_child(node("app-a", DocumentNodeType::Appendix));
        let docs = vec![
            PlanDocument::new(DocumentId::new("lp2025").unwrap(), "Local Plan", PlanDocumentType::LocalPlan)
                .with_root(tree),
            PlanDocument::new(DocumentId::new("dc1").unwrap(), "Design Code", PlanDocumentType::DesignCode),
        ];
        ListDocumentNodesHandler::new(Arc::new(InMemoryRepository::with_records(docs)))
    }

    fn query(id: &str) -> ListDocumentNodesQuery {
        ListDocumentNodesQuery {
            document_id: DocumentId::new(id).unwrap(),
        }
    }

    #[tokio::test]
    async fn lists_direct_children_of_root() {
        let nodes = handler().handle(query("lp2025")).await.unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].title.as_deref(), Some("Housing"));
        assert_eq!(nodes[0].child_count, 1);
        assert_eq!(nodes[1].node_type, DocumentNodeType::Appendix);
    }

    #[tokio::test]
    async fn document_without_tree_has_no_nodes() {
        assert!(handler().handle(query("dc1")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_document_is_not_found() {
        let err = handler().handle(query("nope")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
