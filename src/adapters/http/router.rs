//! API router assembly: repositories, resource routers and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::{response::IntoResponse, routing::get, Json, Router};
use http::HeaderValue;
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use crate::adapters::memory::InMemoryRepository;
use crate::config::ServerConfig;
use crate::domain::development::{PlanningApplication, PrecedentCase};
use crate::domain::document::PlanDocument;
use crate::domain::planning::{Constraint, Goal, Policy, Scenario, Site};
use crate::domain::CatalogSeed;
use crate::ports::RecordRepository;

use super::applications::application_routes;
use super::documents::document_routes;
use super::policies::policy_routes;
use super::records::record_routes;
use super::scenarios::scenario_routes;

/// One repository per record kind.
#[derive(Clone)]
pub struct ApiRepositories {
    pub policies: Arc<dyn RecordRepository<Policy>>,
    pub sites: Arc<dyn RecordRepository<Site>>,
    pub constraints: Arc<dyn RecordRepository<Constraint>>,
    pub documents: Arc<dyn RecordRepository<PlanDocument>>,
    pub scenarios: Arc<dyn RecordRepository<Scenario>>,
    pub goals: Arc<dyn RecordRepository<Goal>>,
    pub applications: Arc<dyn RecordRepository<PlanningApplication>>,
    pub precedents: Arc<dyn RecordRepository<PrecedentCase>>,
}

impl ApiRepositories {
    /// Empty in-memory repositories.
    pub fn in_memory() -> Self {
        Self::seeded(CatalogSeed::default())
    }

    /// In-memory repositories holding the seed's records, in seed order.
    pub fn seeded(seed: CatalogSeed) -> Self {
        Self {
            policies: Arc::new(InMemoryRepository::with_records(seed.policies)),
            sites: Arc::new(InMemoryRepository::with_records(seed.sites)),
            constraints: Arc::new(InMemoryRepository::with_records(seed.constraints)),
            documents: Arc::new(InMemoryRepository::with_records(seed.documents)),
            scenarios: Arc::new(InMemoryRepository::with_records(seed.scenarios)),
            goals: Arc::new(InMemoryRepository::with_records(seed.goals)),
            applications: Arc::new(InMemoryRepository::with_records(seed.applications)),
            precedents: Arc::new(InMemoryRepository::with_records(seed.precedents)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Routes under `/api`, without middleware.
pub fn api_router(repos: ApiRepositories) -> Router {
    Router::new()
        .nest("/policies", policy_routes(repos.policies))
        .nest("/sites", record_routes(repos.sites))
        .nest("/constraints", record_routes(repos.constraints))
        .nest("/plan-documents", document_routes(repos.documents))
        .nest("/scenarios", scenario_routes(repos.scenarios))
        .nest("/goals", record_routes(repos.goals))
        .nest("/planning-applications", application_routes(repos.applications))
        .nest("/precedent-cases", record_routes(repos.precedents))
}

/// Full application: `/health`, `/api` and the HTTP middleware stack.
pub fn app(repos: ApiRepositories, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_router(repos))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(
                    server.request_timeout_secs,
                )))
                .layer(cors_layer(server)),
        )
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.allows_any_origin() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
