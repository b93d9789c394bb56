//! Domain layer containing planning records and navigation state.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (typed ids, errors, the `Record` trait)
//! - `document` - Plan documents and the node-tree locator
//! - `planning` - Plan-making records (policies, sites, scenarios, goals)
//! - `development` - Development-management records (applications, reports)
//! - `navigation` - Workspace, mode and selection state
//! - `catalog` - Owned collections of loaded records

pub mod catalog;
pub mod development;
pub mod document;
pub mod foundation;
pub mod navigation;
pub mod planning;

pub use catalog::{Catalog, CatalogSeed};
