//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Load the bundled sample catalog into the repositories at startup
    #[serde(default = "default_seed_fixtures")]
    pub seed_fixtures: bool,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub log_json: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            seed_fixtures: default_seed_fixtures(),
            log_json: false,
        }
    }
}

fn default_seed_fixtures() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(flags.seed_fixtures);
        assert!(!flags.log_json);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let flags: FeatureFlags = serde_json::from_str(r#"{"log_json": true}"#).unwrap();
        assert!(flags.seed_fixtures);
        assert!(flags.log_json);

        let flags: FeatureFlags =
            serde_json::from_str(r#"{"seed_fixtures": false, "log_json": false}"#).unwrap();
        assert!(!flags.seed_fixtures);
    }
}
