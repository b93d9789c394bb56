//! Plan document handlers.

mod add_document_node;
mod get_document_node;
mod list_document_nodes;

pub use add_document_node::{AddDocumentNodeCommand, AddDocumentNodeHandler};
pub use get_document_node::{
    DocumentNodeView, GetDocumentNodeError, GetDocumentNodeHandler, GetDocumentNodeQuery,
};
pub use list_document_nodes::{
    DocumentNodeSummary, ListDocumentNodesHandler, ListDocumentNodesQuery,
};
