//! DuplicateScenarioHandler - Command handler for copying a scenario.
//!
//! The copy keeps every site, policy and metric choice of the source so a
//! planner can vary one assumption without losing the original. It gets a
//! fresh id, a " (Copy)" suffixed name and new timestamps.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::foundation::{DomainError, Record, ScenarioId};
use crate::domain::planning::Scenario;
use crate::ports::RecordRepository;

/// Command to duplicate an existing scenario.
#[derive(Debug, Clone)]
pub struct DuplicateScenarioCommand {
    pub source_id: ScenarioId,
}

/// Handler for duplicating scenarios.
pub struct DuplicateScenarioHandler {
    scenarios: Arc<dyn RecordRepository<Scenario>>,
}

impl DuplicateScenarioHandler {
    pub fn new(scenarios: Arc<dyn RecordRepository<Scenario>>) -> Self {
        Self { scenarios }
    }

    pub async fn handle(&self, cmd: DuplicateScenarioCommand) -> Result<Scenario, DomainError> {
        // 1. Find the source
        let source = self
            .scenarios
            .find_by_id(&cmd.source_id)
            .await?
            .ok_or_else(|| DomainError::not_found(Scenario::RESOURCE, &cmd.source_id))?;

        // 2. Copy under a new identity
        let now = Utc::now();
        let mut copy = source.clone();
        copy.set_id(Scenario::generate_id());
        copy.name = format!("{} (Copy)", source.name);
        copy.created_at = Some(now);
        copy.last_modified = Some(now);

        // 3. Persist
        self.scenarios.save(&copy).await?;

        info!(source_id = %cmd.source_id, scenario_id = %copy.id, "Scenario duplicated");
        Ok(copy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRepository;
    use crate::domain::foundation::{ErrorCode, SiteId};

    fn setup() -> (Arc<InMemoryRepository<Scenario>>, DuplicateScenarioHandler) {
        let mut growth = Scenario::new(ScenarioId::new("scen-2").unwrap(), "Northern Growth");
        growth.baseline_scenario_id = Some(ScenarioId::new("scen-1").unwrap());
        growth.included_site_ids = vec![SiteId::new("site-1").unwrap()];
        let repo = Arc::new(InMemoryRepository::with_records(vec![growth]));
        let handler = DuplicateScenarioHandler::new(repo.clone());
        (repo, handler)
    }

    fn cmd(id: &str) -> DuplicateScenarioCommand {
        DuplicateScenarioCommand {
            source_id: ScenarioId::new(id).unwrap(),
        }
    }

    #[tokio::test]
    async fn copy_gets_new_id_and_suffixed_name() {
        let (repo, handler) = setup();
        let copy = handler.handle(cmd("scen-2")).await.unwrap();

        assert_ne!(copy.id.as_str(), "scen-2");
        assert!(copy.id.as_str().starts_with("scen-"));
        assert_eq!(copy.name, "Northern Growth (Copy)");
        assert_eq!(copy.included_site_ids, vec![SiteId::new("site-1").unwrap()]);
        assert_eq!(copy.baseline_scenario_id, Some(ScenarioId::new("scen-1").unwrap()));
        assert!(copy.created_at.is_some());

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Northern Growth");
    }

    #[tokio::test]
    async fn unknown_source_is_not_found() {
        let (_, handler) = setup();
        let err = handler.handle(cmd("scen-9")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
