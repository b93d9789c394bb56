//! Plan document aggregate.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::node::{find_node, DocumentNode};
use crate::domain::foundation::{impl_record, DocumentId, DomainError, ErrorCode, NodeId};

/// Kind of plan document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanDocumentType {
    #[serde(rename = "Local Plan")]
    LocalPlan,
    #[serde(rename = "Sustainability Appraisal")]
    SustainabilityAppraisal,
    #[serde(rename = "Design Code")]
    DesignCode,
    #[serde(rename = "Proposals Map")]
    ProposalsMap,
    #[serde(rename = "SPD")]
    Spd,
    #[serde(rename = "Evidence Base Document")]
    EvidenceBaseDocument,
}

/// Publication status of a plan document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PlanDocumentStatus {
    #[default]
    Draft,
    Consultation,
    Submitted,
    Adopted,
}

impl fmt::Display for PlanDocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlanDocumentStatus::Draft => "Draft",
            PlanDocumentStatus::Consultation => "Consultation",
            PlanDocumentStatus::Submitted => "Submitted",
            PlanDocumentStatus::Adopted => "Adopted",
        };
        write!(f, "{}", s)
    }
}

/// A plan document and its structure.
///
/// The root node is the only entry point into the tree. It is optional so a
/// document can be registered before its structure is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument {
    pub id: DocumentId,
    pub name: String,
    #[serde(rename = "type")]
    pub document_type: PlanDocumentType,
    #[serde(default)]
    pub root_node: Option<DocumentNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_status: Option<PlanDocumentStatus>,
}

impl_record!(PlanDocument, DocumentId, "PlanDocument");

impl PlanDocument {
    /// Creates a document with no tree loaded.
    pub fn new(id: DocumentId, name: impl Into<String>, document_type: PlanDocumentType) -> Self {
        Self {
            id,
            name: name.into(),
            document_type,
            root_node: None,
            version: None,
            document_status: None,
        }
    }

    pub fn with_root(mut self, root: DocumentNode) -> Self {
        self.root_node = Some(root);
        self
    }

    pub fn with_status(mut self, status: PlanDocumentStatus) -> Self {
        self.document_status = Some(status);
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn root(&self) -> Option<&DocumentNode> {
        self.root_node.as_ref()
    }

    /// Finds a node anywhere in this document's tree.
    pub fn find_node(&self, id: &NodeId) -> Option<&DocumentNode> {
        find_node(self.root(), id)
    }

    /// Top-level sections: the children of the root, or nothing without a root.
    pub fn top_level_nodes(&self) -> &[DocumentNode] {
        self.root().map(|r| r.children.as_slice()).unwrap_or(&[])
    }

    /// Inserts `node` (with its subtree) as the last child of `parent`.
    ///
    /// Without a parent the node goes under the root, or becomes the root when
    /// the document has no tree yet. Ids already in the tree are rejected.
    pub fn add_node(&mut self, parent: Option<&NodeId>, node: DocumentNode) -> Result<(), DomainError> {
        if let Some(existing) = node.iter().find(|n| self.find_node(&n.id).is_some()) {
            return Err(DomainError::already_exists("DocumentNode", &existing.id)
                .with_detail("document_id", self.id.to_string()));
        }

        let document_id = self.id.clone();
        match (parent, self.root_node.as_mut()) {
            (Some(parent_id), root) => {
                let parent = root.and_then(|r| r.find_mut(parent_id)).ok_or_else(|| {
                    DomainError::new(
                        ErrorCode::DocumentNodeNotFound,
                        format!("Node {} not found in document {}", parent_id, document_id),
                    )
                    .with_detail("node_id", parent_id.to_string())
                })?;
                parent.children.push(node);
            }
            (None, Some(root)) => root.children.push(node),
            (None, None) => self.root_node = Some(node),
        }
        Ok(())
    }
}
