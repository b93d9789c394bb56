//! Scenario command handlers.

mod duplicate_scenario;

pub use duplicate_scenario::{DuplicateScenarioCommand, DuplicateScenarioHandler};
