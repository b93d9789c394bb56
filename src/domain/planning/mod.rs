//! Plan-making records: policies, sites, constraints, scenarios, goals.

mod constraint;
mod goal;
mod policy;
mod scenario;
mod site;

pub use constraint::{Constraint, ConstraintSeverity};
pub use goal::{Goal, GoalStatus, GoalType};
pub use policy::{
    AiGuidance, GoalAlignment, LinkedPolicy, Policy, PolicyStatus, PolicyType, RelationshipType,
    StrategicGoalAlignment,
};
pub use scenario::{GoalPerformance, MetricValue, PolicyModification, Scenario, ScenarioMetrics};
pub use site::{
    DeliverabilityScore, GoalContribution, PlanMakingStatus, PolicyRequirement, Site,
    SiteSource, SoundnessCheck, SoundnessStatus,
};
