//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `AGENCY_SITE` prefix and
//! nested values are separated by a double underscore.
//!
//! Every section has defaults, so an empty environment yields a working
//! development configuration (in-memory handoffs, recording mailer).
//!
//! # Example
//!
//! ```no_run
//! use agency_site::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod email;
mod error;
mod features;
mod locale;
mod redis;
mod selection;
mod server;

pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use locale::LocaleConfig;
pub use redis::RedisConfig;
pub use selection::{HandoffBackend, SelectionConfig};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Default and supported site locales
    #[serde(default)]
    pub locale: LocaleConfig,

    /// Tier policy, handoff and session lifetimes
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Contact delivery (Resend)
    #[serde(default)]
    pub email: EmailConfig,

    /// Redis configuration (handoff storage)
    #[serde(default)]
    pub redis: RedisConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AGENCY_SITE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `AGENCY_SITE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `AGENCY_SITE__SELECTION__TIER_POLICY=keep_interests`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AGENCY_SITE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Production requires a Resend API key. A Redis handoff backend requires
    /// a Redis URL.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.locale.validate()?;
        self.selection.validate()?;
        self.redis.validate()?;
        self.email.validate(self.is_production())?;

        if self.selection.handoff_backend == HandoffBackend::Redis && self.redis.url.is_none() {
            return Err(ValidationError::MissingRequired("REDIS_URL"));
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::locale::Locale;
    use crate::domain::selection::TierSelectionPolicy;
    use std::env;
    use std::sync::Mutex;

    // env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "AGENCY_SITE__SERVER__PORT",
        "AGENCY_SITE__SERVER__ENVIRONMENT",
        "AGENCY_SITE__LOCALE__SUPPORTED",
        "AGENCY_SITE__SELECTION__TIER_POLICY",
        "AGENCY_SITE__SELECTION__HANDOFF_BACKEND",
        "AGENCY_SITE__REDIS__URL",
        "AGENCY_SITE__EMAIL__RESEND_API_KEY",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        clear_env();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_empty_environment_gives_development_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.locale.supported_locales().unwrap().default_locale(), Locale::En);
        assert_eq!(config.selection.tier_policy, TierSelectionPolicy::StartFresh);
        assert!(!config.email.has_api_key());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_values_are_read() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("AGENCY_SITE__SERVER__PORT", "3000"),
            ("AGENCY_SITE__SELECTION__TIER_POLICY", "keep_interests"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.selection.tier_policy, TierSelectionPolicy::KeepInterests);
    }

    #[test]
    fn test_production_requires_resend_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("AGENCY_SITE__SERVER__ENVIRONMENT", "production")]).unwrap();

        assert!(config.is_production());
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("RESEND_API_KEY"))
        );
    }

    #[test]
    fn test_production_with_key_validates() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("AGENCY_SITE__SERVER__ENVIRONMENT", "production"),
            ("AGENCY_SITE__EMAIL__RESEND_API_KEY", "re_live_xxx"),
        ])
        .unwrap();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_redis_backend_requires_url() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("AGENCY_SITE__SELECTION__HANDOFF_BACKEND", "redis")]).unwrap();
        assert_eq!(config.validate(), Err(ValidationError::MissingRequired("REDIS_URL")));

        let config = load_with(&[
            ("AGENCY_SITE__SELECTION__HANDOFF_BACKEND", "redis"),
            ("AGENCY_SITE__REDIS__URL", "redis://localhost:6379"),
        ])
        .unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_locale_must_lead_supported_list() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("AGENCY_SITE__LOCALE__SUPPORTED", "ko,en")]).unwrap();
        assert_eq!(config.validate(), Err(ValidationError::DefaultLocaleNotFirst));
    }
}
