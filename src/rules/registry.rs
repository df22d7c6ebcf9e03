#![forbid(unsafe_code)]

//! Rule registry for managing rules
//!
//! The RuleRegistry is responsible for:
//! - Holding the built-in rules
//! - Accepting additional rules from the host
//! - Filtering rules based on configuration
//! - Providing access to rules by ID

use crate::config::{AnalyzerConfig, RulesConfig};
use crate::error::{ConfigError, RuleError};
use crate::rules::{DoNotUseRegions, Rule};
use crate::types::RuleId;
use std::collections::BTreeMap;

/// Registry for storing and managing all rules
///
/// Rules are keyed by their unique RuleId and iterated in ID order, which
/// keeps diagnostic output deterministic.
pub struct RuleRegistry {
    rules: BTreeMap<RuleId, Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty RuleRegistry
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Create a registry holding every built-in rule
    pub fn with_builtin_rules() -> Self {
        let mut registry = Self::new();
        let builtin: [Box<dyn Rule>; 1] = [Box::new(DoNotUseRegions::new())];
        for rule in builtin {
            registry.rules.insert(rule.id().clone(), rule);
        }
        registry
    }

    /// Build the registry described by a configuration
    ///
    /// Starts from the built-in rules and applies the `[rules]` table.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the configuration names a rule
    /// that does not exist.
    pub fn build_from_config(config: &AnalyzerConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::with_builtin_rules();
        registry.filter_by_config(&config.rules)?;
        Ok(registry)
    }

    /// Add a rule
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidDefinition` if the rule's ID is malformed,
    /// or `RuleError::Duplicate` if a rule with the same ID is already registered.
    pub fn register(&mut self, rule: Box<dyn Rule>) -> Result<(), RuleError> {
        let rule_id = rule.id().clone();
        if RuleId::new(rule_id.as_str()).is_none() {
            return Err(RuleError::InvalidDefinition(format!(
                "Invalid rule ID '{}'",
                rule_id
            )));
        }
        if self.rules.contains_key(&rule_id) {
            return Err(RuleError::Duplicate(rule_id.to_string()));
        }
        self.rules.insert(rule_id, rule);
        Ok(())
    }

    /// Filter rules based on configuration
    ///
    /// Rules explicitly set to `false` are removed. Rules not mentioned keep
    /// their descriptor's `enabled_by_default` setting.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the configuration names a rule
    /// that is not registered.
    pub fn filter_by_config(&mut self, config: &RulesConfig) -> Result<(), ConfigError> {
        if let Some(unknown) = config.rules.keys().find(|id| !self.rules.contains_key(*id)) {
            return Err(ConfigError::Validation(format!(
                "Unknown rule '{}' in [rules]",
                unknown
            )));
        }

        self.rules.retain(|rule_id, rule| {
            config
                .rules
                .get(rule_id)
                .copied()
                .unwrap_or(rule.descriptor().enabled_by_default)
        });
        Ok(())
    }

    /// Remove a rule by its ID
    ///
    /// # Errors
    ///
    /// Returns `RuleError::NotFound` if no rule with that ID is registered.
    pub fn unregister(&mut self, id: &RuleId) -> Result<Box<dyn Rule>, RuleError> {
        self.rules
            .remove(id)
            .ok_or_else(|| RuleError::NotFound(id.to_string()))
    }

    /// Get a rule by its ID
    ///
    /// Returns `None` if the rule is not found in the registry.
    pub fn get_rule(&self, id: &RuleId) -> Option<&dyn Rule> {
        self.rules.get(id).map(|boxed| boxed.as_ref())
    }

    /// Iterate over all rules in ID order
    pub fn iter_rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.values().map(|boxed| boxed.as_ref())
    }

    /// Consume the registry, yielding its rules in ID order
    pub fn into_rules(self) -> Vec<Box<dyn Rule>> {
        self.rules.into_values().collect()
    }

    /// Get the number of rules in the registry
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
