//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, value objects, the `Record` trait and error types
//! that form the vocabulary of the planning domain.

mod errors;
mod ids;
mod percentage;
mod record;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    ApplicationId, ConstraintId, DocumentId, GoalId, NodeId, PolicyId, PrecedentId,
    ReportSectionId, ScenarioId, SiteId,
};
pub use percentage::Percentage;
pub use record::{find_by_id, Record};

pub(crate) use record::impl_record;
