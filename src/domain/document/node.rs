//! Document tree nodes and the node locator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::domain::foundation::NodeId;

/// Structural role of a node in a plan document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentNodeType {
    DocumentRoot,
    Chapter,
    SubChapter,
    PolicySection,
    MapSection,
    Appendix,
    GlossaryItem,
    ReportSection,
}

impl DocumentNodeType {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentNodeType::DocumentRoot => "Document Root",
            DocumentNodeType::Chapter => "Chapter",
            DocumentNodeType::SubChapter => "Sub-chapter",
            DocumentNodeType::PolicySection => "Policy Section",
            DocumentNodeType::MapSection => "Map Section",
            DocumentNodeType::Appendix => "Appendix",
            DocumentNodeType::GlossaryItem => "Glossary Item",
            DocumentNodeType::ReportSection => "Report Section",
        }
    }
}

impl fmt::Display for DocumentNodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A reference from a node to another record (policy, site, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedEntity {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub id: String,
    pub name: String,
}

/// A node in a plan document's structure.
///
/// # Invariants
///
/// - The tree is finite and acyclic; each node is owned by exactly one parent.
/// - `id` is unique within its tree by construction. Lookups do not check this
///   and return the pre-order-first match when it is violated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentNode {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub node_type: DocumentNodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub children: Vec<DocumentNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved_issues: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linked_entities: Vec<LinkedEntity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl DocumentNode {
    /// Creates a leaf node with no title.
    pub fn new(id: NodeId, node_type: DocumentNodeType) -> Self {
        Self {
            id,
            node_type,
            title: None,
            reference: None,
            content: None,
            children: Vec::new(),
            unresolved_issues: Vec::new(),
            linked_entities: Vec::new(),
            last_modified: None,
            author: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Appends a child, keeping stored order.
    pub fn with_child(mut self, child: DocumentNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth-first pre-order search for `id`.
    ///
    /// Returns the first node whose id matches, checking a node before its
    /// children and children in stored order. A missing id is `None`.
    pub fn find(&self, id: &NodeId) -> Option<&DocumentNode> {
        if &self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Mutable counterpart of [`find`](Self::find), with the same search order.
    pub fn find_mut(&mut self, id: &NodeId) -> Option<&mut DocumentNode> {
        if &self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Iterates the subtree in the same pre-order used by [`find`](Self::find).
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Number of nodes in the subtree, including this one.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Ids from this node down to the pre-order-first node matching `id`.
    ///
    /// The returned path starts with this node's id and ends with `id`.
    pub fn path_to(&self, id: &NodeId) -> Option<Vec<&NodeId>> {
        if &self.id == id {
            return Some(vec![&self.id]);
        }
        self.children.iter().find_map(|child| {
            child.path_to(id).map(|mut tail| {
                tail.insert(0, &self.id);
                tail
            })
        })
    }

    /// Ids that occur more than once in the subtree, in pre-order of their
    /// second occurrence.
    pub fn duplicate_ids(&self) -> Vec<&NodeId> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for node in self.iter() {
            if !seen.insert(&node.id) && reported.insert(&node.id) {
                duplicates.push(&node.id);
            }
        }
        duplicates
    }
}

/// Finds the node with `id` in the tree rooted at `root`.
///
/// An absent root reports not-found without traversing anything.
pub fn find_node<'a>(root: Option<&'a DocumentNode>, id: &NodeId) -> Option<&'a DocumentNode> {
    root.and_then(|node| node.find(id))
}

/// Pre-order iterator over a document subtree.
pub struct PreOrder<'a> {
    stack: Vec<&'a DocumentNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a DocumentNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
