//! Reasoning handlers - read the planning balance of an application and
//! append steps to it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::development::{PlanningApplication, ReasoningStep, TradeOffAnalysis};
use crate::domain::foundation::{ApplicationId, DomainError};
use crate::ports::RecordRepository;

#[derive(Debug, Clone)]
pub struct GetReasoningQuery {
    pub application_id: ApplicationId,
}

/// Policies, ordered steps and trade-offs behind a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasoningView {
    pub application_id: ApplicationId,
    /// Ranked policy references.
    pub relevant_policies: Vec<String>,
    pub reasoning_steps: Vec<ReasoningStep>,
    pub trade_off_analysis: Option<TradeOffAnalysis>,
}

impl ReasoningView {
    fn new(application: &PlanningApplication) -> Self {
        Self {
            application_id: application.id.clone(),
            relevant_policies: application.relevant_policy_refs.clone(),
            reasoning_steps: application.ordered_reasoning().into_iter().cloned().collect(),
            trade_off_analysis: application.trade_off_analysis.clone(),
        }
    }
}

/// Handler for reading an application's reasoning.
pub struct GetReasoningHandler {
    applications: Arc<dyn RecordRepository<PlanningApplication>>,
}

impl GetReasoningHandler {
    pub fn new(applications: Arc<dyn RecordRepository<PlanningApplication>>) -> Self {
        Self { applications }
    }

    pub async fn handle(&self, query: GetReasoningQuery) -> Result<ReasoningView, DomainError> {
        let application = self
            .applications
            .find_by_id(&query.application_id)
            .await?
            .ok_or_else(|| DomainError::not_found("PlanningApplication", &query.application_id))?;

        Ok(ReasoningView::new(&application))
    }
}

/// Command to append a reasoning step.
#[derive(Debug, Clone)]
pub struct AddReasoningStepCommand {
    pub application_id: ApplicationId,
    pub step: ReasoningStep,
}

/// Handler for appending reasoning steps.
///
/// Steps are stored in arrival order; readers sort by step number.
pub struct AddReasoningStepHandler {
    applications: Arc<dyn RecordRepository<PlanningApplication>>,
}

impl AddReasoningStepHandler {
    pub fn new(applications: Arc<dyn RecordRepository<PlanningApplication>>) -> Self {
        Self { applications }
    }

    pub async fn handle(&self, cmd: AddReasoningStepCommand) -> Result<ReasoningStep, DomainError> {
        let mut application = self
            .applications
            .find_by_id(&cmd.application_id)
            .await?
            .ok_or_else(|| DomainError::not_found("PlanningApplication", &cmd.application_id))?;

        application.reasoning_steps.push(cmd.step.clone());
        self.applications.update(&application).await?;

        debug!(
            application_id = %cmd.application_id,
            step = cmd.step.step,
            "Reasoning step added"
        );
        Ok(cmd.step)
    }
}
