//! Selection configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::selection::TierSelectionPolicy;

/// Where handoff snapshots are kept.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HandoffBackend {
    #[default]
    Memory,
    Redis,
}

/// Selection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionConfig {
    /// How a pricing-grid tier choice treats earlier picks
    #[serde(default)]
    pub tier_policy: TierSelectionPolicy,

    /// Lifetime of a handoff token in seconds
    #[serde(default = "default_handoff_ttl")]
    pub handoff_ttl_secs: u64,

    /// Idle time after which a visitor session is dropped
    #[serde(default = "default_session_idle")]
    pub session_idle_secs: u64,

    /// Handoff storage backend
    #[serde(default)]
    pub handoff_backend: HandoffBackend,
}

impl SelectionConfig {
    pub fn handoff_ttl(&self) -> Duration {
        Duration::from_secs(self.handoff_ttl_secs)
    }

    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }

    /// Validate selection configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.handoff_ttl_secs == 0 || self.handoff_ttl_secs > 86_400 {
            return Err(ValidationError::InvalidHandoffTtl);
        }
        if self.session_idle_secs < 60 {
            return Err(ValidationError::InvalidSessionIdle);
        }
        Ok(())
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            tier_policy: TierSelectionPolicy::default(),
            handoff_ttl_secs: default_handoff_ttl(),
            session_idle_secs: default_session_idle(),
            handoff_backend: HandoffBackend::default(),
        }
    }
}

fn default_handoff_ttl() -> u64 {
    300
}

fn default_session_idle() -> u64 {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_defaults() {
        let config = SelectionConfig::default();
        assert_eq!(config.tier_policy, TierSelectionPolicy::StartFresh);
        assert_eq!(config.handoff_ttl(), Duration::from_secs(300));
        assert_eq!(config.session_idle(), Duration::from_secs(3600));
        assert_eq!(config.handoff_backend, HandoffBackend::Memory);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_ttls() {
        let config = SelectionConfig {
            handoff_ttl_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidHandoffTtl));

        let config = SelectionConfig {
            session_idle_secs: 5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSessionIdle));
    }

    #[test]
    fn test_deserializes_policy_and_backend() {
        let json = r#"{"tier_policy": "keep_interests", "handoff_backend": "redis"}"#;
        let config: SelectionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.tier_policy, TierSelectionPolicy::KeepInterests);
        assert_eq!(config.handoff_backend, HandoffBackend::Redis);
    }
}
