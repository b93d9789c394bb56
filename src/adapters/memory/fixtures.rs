//! Sample records for development and demos.
//!
//! The sample is a small, internally consistent Local Plan: two policies,
//! one allocated site, two applications (one with an officer report), a
//! precedent, a goal, two scenarios and the `lp2025` document tree.

use crate::domain::CatalogSeed;

const SAMPLE_CATALOG: &str = include_str!("sample_catalog.json");

/// Parses the bundled sample catalog.
pub fn sample_seed() -> Result<CatalogSeed, serde_json::Error> {
    serde_json::from_str(SAMPLE_CATALOG)
}
