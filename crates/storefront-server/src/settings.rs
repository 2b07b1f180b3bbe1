//! Server settings
//!
//! Built-in defaults, overridden by `STOREFRONT_*` environment variables.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment};
use serde::Deserialize;

/// Environment variable prefix, e.g. `STOREFRONT_BIND_ADDRESS`
pub const ENV_PREFIX: &str = "STOREFRONT";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    /// `tracing_subscriber::EnvFilter` directive string
    pub log_filter: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
    /// Load the sample catalog at startup
    pub seed_catalog: bool,
    /// Directory holding the built storefront client, served with an SPA fallback
    #[serde(default)]
    pub static_dir: Option<String>,
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("bind_address", "0.0.0.0:5000")?
            .set_default("log_filter", "info")?
            .set_default("log_json", false)?
            .set_default("seed_catalog", true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    #[test]
    fn test_defaults() {
        let config: ServerConfig = assert_ok!(ServerConfig::defaults()
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize()));

        assert_eq!(config.bind_address, "0.0.0.0:5000");
        assert_eq!(config.log_filter, "info");
        assert!(!config.log_json);
        assert!(config.seed_catalog);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_overrides() -> Result<(), ConfigError> {
        let config: ServerConfig = ServerConfig::defaults()?
            .set_override("bind_address", "127.0.0.1:8080")?
            .set_override("seed_catalog", "false")?
            .set_override("static_dir", "/srv/storefront")?
            .build()?
            .try_deserialize()?;

        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert!(!config.seed_catalog);
        assert_eq!(config.static_dir.as_deref(), Some("/srv/storefront"));
        Ok(())
    }
}
