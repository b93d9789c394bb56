//! Plan documents and their hierarchical structure.
//!
//! A `PlanDocument` owns one optional root `DocumentNode`; every traversal
//! starts there. `find_node` is a depth-first pre-order search that reports
//! a missing id (or a missing root) as `None`.

mod node;
mod plan_document;

pub use node::{find_node, DocumentNode, DocumentNodeType, LinkedEntity, PreOrder};
pub use plan_document::{PlanDocument, PlanDocumentStatus, PlanDocumentType};
