//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the codec.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct CodecConfig {
    /// Where page instance Urls are mounted.
    pub mount: MountConfig,

    /// Listener interfaces known to the registry.
    pub listeners: ListenerConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Mount prefix configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MountConfig {
    /// Literal leading path segments (e.g. `["wicket", "page"]`).
    pub prefix: Vec<String>,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            prefix: vec!["wicket".to_string(), "page".to_string()],
        }
    }
}

/// Listener registry seed.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface names accepted in listener tokens.
    pub interfaces: Vec<String>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            interfaces: vec![
                "ILinkListener".to_string(),
                "IFormSubmitListener".to_string(),
                "IBehaviorListener".to_string(),
                "IRedirectListener".to_string(),
            ],
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable ones.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: CodecConfig = toml::from_str("").unwrap();
        assert_eq!(config, CodecConfig::default());
        assert_eq!(config.mount.prefix, ["wicket", "page"]);
    }

    #[test]
    fn test_partial_config() {
        let config: CodecConfig = toml::from_str(
            r#"
            [mount]
            prefix = ["app", "p"]

            [observability]
            json = true
            "#,
        )
        .unwrap();
        assert_eq!(config.mount.prefix, ["app", "p"]);
        assert!(config.observability.json);
        assert_eq!(config.observability.log_level, "info");
        assert!(config.listeners.interfaces.contains(&"ILinkListener".to_string()));
    }
}
