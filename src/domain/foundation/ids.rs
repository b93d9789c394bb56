//! Strongly-typed identifier value objects.
//!
//! Identifiers are opaque strings assigned by whoever creates the record
//! (seed data, the HTTP client, or a future backend). They are never derived
//! from counters inside this crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier, returning error if empty or blank.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Generates a fresh identifier of the form `<prefix>-<uuid>`.
            pub fn generate() -> Self {
                Self(format!("{}-{}", $prefix, Uuid::new_v4()))
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

string_id!(
    /// Identifier of a planning policy (e.g. `pol-1`).
    PolicyId, "policy_id", "pol"
);
string_id!(
    /// Identifier of a site.
    SiteId, "site_id", "site"
);
string_id!(
    /// Identifier of a planning constraint.
    ConstraintId, "constraint_id", "con"
);
string_id!(
    /// Identifier of a plan-making scenario.
    ScenarioId, "scenario_id", "scen"
);
string_id!(
    /// Identifier of a strategic goal.
    GoalId, "goal_id", "goal"
);
string_id!(
    /// Identifier of a plan document (e.g. `lp2025`).
    DocumentId, "document_id", "doc"
);
string_id!(
    /// Identifier of a node inside a plan document tree.
    ///
    /// Unique within its tree by construction; the locator does not check.
    NodeId, "node_id", "node"
);
string_id!(
    /// Identifier of a planning application.
    ApplicationId, "application_id", "app"
);
string_id!(
    /// Identifier of a precedent case.
    PrecedentId, "precedent_id", "prec"
);
string_id!(
    /// Identifier of a section within an officer report.
    ReportSectionId, "report_section_id", "sec"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_non_empty_string() {
        let id = PolicyId::new("pol-1").unwrap();
        assert_eq!(id.as_str(), "pol-1");
    }

    #[test]
    fn new_rejects_empty_string() {
        let result = PolicyId::new("");
        assert!(matches!(
            result,
            Err(ValidationError::EmptyField { ref field }) if field == "policy_id"
        ));
    }

    #[test]
    fn new_rejects_whitespace_only() {
        assert!(NodeId::new("   ").is_err());
    }

    #[test]
    fn generate_uses_prefix() {
        let id = ApplicationId::generate();
        assert!(id.as_str().starts_with("app-"));
        assert_ne!(id, ApplicationId::generate());
    }

    #[test]
    fn parses_from_str() {
        let id: DocumentId = "lp2025".parse().unwrap();
        assert_eq!(id.to_string(), "lp2025");
        assert!("".parse::<DocumentId>().is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = SiteId::new("site-1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"site-1\"");

        let parsed: SiteId = serde_json::from_str("\"site-2\"").unwrap();
        assert_eq!(parsed.as_str(), "site-2");
    }

    #[test]
    fn deserialize_rejects_blank_id() {
        assert!(serde_json::from_str::<PolicyId>("\"\"").is_err());
        let err = serde_json::from_str::<ConstraintId>("\"   \"").unwrap_err();
        assert!(err.to_string().contains("constraint_id"));
    }
}
