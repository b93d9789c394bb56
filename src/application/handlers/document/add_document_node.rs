//! AddDocumentNodeHandler - Command handler for growing a document tree.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::domain::document::{DocumentNode, PlanDocument};
use crate::domain::foundation::{DocumentId, DomainError, NodeId, Record};
use crate::ports::RecordRepository;

/// Command to insert a node into a plan document.
#[derive(Debug, Clone)]
pub struct AddDocumentNodeCommand {
    pub document_id: DocumentId,
    /// `None` inserts under the root.
    pub parent_id: Option<NodeId>,
    pub node: DocumentNode,
}

/// Handler for adding document nodes.
pub struct AddDocumentNodeHandler {
    documents: Arc<dyn RecordRepository<PlanDocument>>,
}

impl AddDocumentNodeHandler {
    pub fn new(documents: Arc<dyn RecordRepository<PlanDocument>>) -> Self {
        Self { documents }
    }

    pub async fn handle(&self, cmd: AddDocumentNodeCommand) -> Result<DocumentNode, DomainError> {
        let mut document = self
            .documents
            .find_by_id(&cmd.document_id)
            .await?
            .ok_or_else(|| DomainError::not_found(PlanDocument::RESOURCE, &cmd.document_id))?;

        let mut node = cmd.node;
        node.last_modified = Some(Utc::now());
        document.add_node(cmd.parent_id.as_ref(), node.clone())?;

        self.documents.update(&document).await?;

        debug!(
            document_id = %cmd.document_id,
            node_id = %node.id,
            parent_id = ?cmd.parent_id,
            "Document node added"
        );
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRepository;
    use crate::domain::document::{DocumentNodeType, PlanDocumentType};
    use crate::domain::foundation::ErrorCode;

    fn node_id(id: &str) -> NodeId {
        NodeId::new(id).unwrap()
    }

    fn setup() -> (Arc<InMemoryRepository<PlanDocument>>, AddDocumentNodeHandler) {
        let tree = DocumentNode::new(node_id("root-1"), DocumentNodeType::DocumentRoot)
            .with_child(DocumentNode::new(node_id("ch-1"), DocumentNodeType::Chapter));
        let lp = PlanDocument::new(
            DocumentId::new("lp2025").unwrap(),
            "Local Plan 2025",
            PlanDocumentType::LocalPlan,
        )
        .with_root(tree);
        let repo = Arc::new(InMemoryRepository::with_records(vec![lp]));
        let handler = AddDocumentNodeHandler::new(repo.clone());
        (repo, handler)
    }

    fn cmd(doc: &str, parent: Option<&str>, id: &str) -> AddDocumentNodeCommand {
        AddDocumentNodeCommand {
            document_id: DocumentId::new(doc).unwrap(),
            parent_id: parent.map(node_id),
            node: DocumentNode::new(node_id(id), DocumentNodeType::PolicySection).with_title("H3"),
        }
    }

    #[tokio::test]
    async fn persists_node_under_parent() {
        let (repo, handler) = setup();
        let added = handler.handle(cmd("lp2025", Some("ch-1"), "sec-h3")).await.unwrap();
        assert!(added.last_modified.is_some());

        let stored = repo
            .find_by_id(&DocumentId::new("lp2025").unwrap())
            .await
            .unwrap()
            .unwrap();
        let path: Vec<_> = stored
            .root()
            .unwrap()
            .path_to(&node_id("sec-h3"))
            .unwrap()
            .into_iter()
            .map(NodeId::as_str)
            .collect();
        assert_eq!(path, vec!["root-1", "ch-1", "sec-h3"]);
    }

    #[tokio::test]
    async fn unknown_document_and_parent_are_told_apart() {
        let (_, handler) = setup();
        let err = handler.handle(cmd("lp1999", None, "sec-h3")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = handler.handle(cmd("lp2025", Some("ch-9"), "sec-h3")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DocumentNodeNotFound);
    }

    #[tokio::test]
    async fn taken_id_is_a_conflict() {
        let (_, handler) = setup();
        let err = handler.handle(cmd("lp2025", None, "ch-1")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyExists);
    }
}
