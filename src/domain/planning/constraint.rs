//! Planning constraints (flood zones, designations, protections).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{impl_record, ConstraintId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConstraintSeverity {
    High,
    Medium,
    Low,
    Informational,
}

/// A constraint that can affect a site or an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraint {
    pub id: ConstraintId,
    /// e.g. "Flood Zone 3", "Conservation Area"
    pub name: String,
    /// e.g. "Flood Risk", "Heritage"
    #[serde(rename = "type")]
    pub constraint_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<ConstraintSeverity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_document: Option<String>,
    /// GeoJSON geometry, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl_record!(Constraint, ConstraintId, "Constraint");

impl Constraint {
    pub fn new(id: ConstraintId, name: impl Into<String>, constraint_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            constraint_type: constraint_type.into(),
            severity: None,
            source_document: None,
            geometry: None,
            description: None,
        }
    }

    pub fn with_severity(mut self, severity: ConstraintSeverity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_high_severity(&self) -> bool {
        self.severity == Some(ConstraintSeverity::High)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_json_deserializes() {
        let c: Constraint =
            serde_json::from_str(r#"{"id":"con-1","name":"Flood Zone 1","type":"Flood Risk"}"#)
                .unwrap();
        assert_eq!(c.constraint_type, "Flood Risk");
        assert_eq!(c.severity, None);
        assert!(!c.is_high_severity());
    }

    #[test]
    fn severity_orders_high_first() {
        assert!(ConstraintSeverity::High < ConstraintSeverity::Informational);
        let c = Constraint::new(ConstraintId::new("con-3").unwrap(), "Green Belt", "Spatial Strategy")
            .with_severity(ConstraintSeverity::High);
        assert!(c.is_high_severity());
    }
}
