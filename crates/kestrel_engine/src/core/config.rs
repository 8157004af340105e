//! Engine configuration
//!
//! TOML-backed configuration for the collision and input subsystems.
//! Every field has a default, so a partial (or empty) config file is
//! always valid; unknown keys are rejected by the parser.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors produced while loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents were not valid TOML for [`EngineConfig`]
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Collision subsystem settings
    pub collision: CollisionConfig,

    /// Input binding settings
    pub input: InputConfig,
}

impl EngineConfig {
    /// Parse a configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a configuration from a TOML file on disk
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

/// Collision subsystem settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollisionConfig {
    /// Maximum re-entrant query depth before the registry bails out
    ///
    /// Overlap queries can re-enter the registry through the overlap
    /// filter hook. Past this depth a warning is logged and the query
    /// returns empty.
    pub max_recursion_depth: u32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: 3,
        }
    }
}

/// Input binding settings
///
/// Maps key names (as accepted by `KeyCode::from_name`) to action names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Key name -> action name
    pub bindings: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config.collision.max_recursion_depth, 3);
        assert!(config.input.bindings.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let config = EngineConfig::from_toml_str(
            r#"
            [collision]
            max_recursion_depth = 5

            [input.bindings]
            w = "move_forward"
            space = "fire"
            "#,
        )
        .unwrap();

        assert_eq!(config.collision.max_recursion_depth, 5);
        assert_eq!(config.input.bindings["w"], "move_forward");
        assert_eq!(config.input.bindings["space"], "fire");
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = EngineConfig::from_toml_str("[renderer]\nvsync = true\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = EngineConfig::load_from_file("/nonexistent/kestrel.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
