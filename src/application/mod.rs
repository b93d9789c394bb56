//! Application layer - Command/query handlers and the workbench.
//!
//! Handlers orchestrate reads and edits over the repository ports for the
//! HTTP API.
//! The workbench owns a catalog and navigation state for a single planner.

pub mod handlers;
mod workbench;

pub use workbench::Workbench;
