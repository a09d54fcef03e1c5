//! Configuration schema (modelverify.toml)

use serde::{Deserialize, Serialize};

/// Widest permitted name-length tolerance; strictness counts down from it.
pub const MAX_TOLERANCE: u32 = 5;

/// Database connection settings for catalog-backed verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Connection strings, one per underlying database
    pub strings: Vec<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Matching strictness: 0 allows the widest name tolerance, 5 demands
    /// exact matches
    #[serde(default)]
    pub strictness: u32,

    /// Substrings matched against a property's qualified type name;
    /// properties whose type matches are never treated as columns
    #[serde(default)]
    pub ignore_namespaces: Vec<String>,

    /// Connection settings (for catalog-backed table sources)
    #[serde(default)]
    pub connection: Option<ConnectionConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strictness: 0,
            ignore_namespaces: Vec::new(),
            connection: None,
        }
    }
}

impl Config {
    /// The name-matcher tolerance this configuration selects.
    ///
    /// Strictness counts up from 0 (laxest) while the matcher consumes a
    /// permitted length difference counting down from [`MAX_TOLERANCE`];
    /// strictness beyond the maximum saturates at an exact-match-only 0.
    pub fn tolerance(&self) -> u32 {
        MAX_TOLERANCE.saturating_sub(self.strictness)
    }

    /// Load config from TOML file
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save config to TOML file
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let toml =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, toml).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
