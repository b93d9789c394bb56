//! HTTP adapters - REST API over the record repositories.
//!
//! Each resource with endpoints beyond CRUD has its own module; the rest are
//! served by the generic handlers in `records`.

mod applications;
mod documents;
mod error;
mod policies;
mod records;
mod router;
mod scenarios;

pub use error::{domain_error_response, status_for, ErrorResponse};
pub use policies::ListPoliciesParams;
pub use applications::AddSectionRequest;
pub use records::{record_routes, PageParams, RecordHandlers};
pub use router::{api_router, app, health, ApiRepositories, HealthResponse};
