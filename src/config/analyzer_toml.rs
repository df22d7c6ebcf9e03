//! Parsing and validation for regionlint.toml configuration files

use crate::error::ConfigError;
use crate::types::RuleId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main configuration struct for regionlint.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Analyzer metadata and execution settings
    pub analyzer: AnalyzerMeta,

    /// Rule configuration
    #[serde(default)]
    pub rules: RulesConfig,
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: AnalyzerConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.analyzer.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '1'",
                self.analyzer.version
            )));
        }
        Ok(())
    }
}

/// Analyzer metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerMeta {
    /// Configuration version (must be "1")
    pub version: String,

    /// Analyse independent source units in parallel
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_parallel() -> bool {
    true
}

impl Default for AnalyzerMeta {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            parallel: default_parallel(),
        }
    }
}

/// Rules configuration section
///
/// Each key is a rule ID mapped to whether the rule is enabled. Rules that
/// are not listed keep their default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(flatten)]
    pub rules: HashMap<RuleId, bool>,
}

impl RulesConfig {
    /// Explicit setting for a rule, if any
    pub fn is_enabled(&self, rule_id: &RuleId) -> Option<bool> {
        self.rules.get(rule_id).copied()
    }
}
