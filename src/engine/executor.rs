#![forbid(unsafe_code)]

//! Execution engine for running rules across syntax trees
//!
//! The ExecutionEngine plays the host: it registers each rule's interest by
//! node kind, walks every tree once, and invokes each interested rule exactly
//! once per matching node. Independent source units run in parallel using
//! rayon.

use crate::config::AnalyzerConfig;
use crate::error::ConfigError;
use crate::rules::{Diagnostic, NodeContext, Rule, RuleRegistry};
use crate::syntax::{SyntaxKind, SyntaxTree};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

/// A syntax tree to analyse, optionally tagged with its file path
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub path: Option<PathBuf>,
    pub tree: SyntaxTree,
}

impl SourceUnit {
    pub fn new(tree: SyntaxTree) -> Self {
        Self { path: None, tree }
    }

    pub fn with_path(path: impl Into<PathBuf>, tree: SyntaxTree) -> Self {
        Self {
            path: Some(path.into()),
            tree,
        }
    }
}

/// Result of executing all rules against all source units
#[derive(Debug, Default)]
pub struct ExecutionResult {
    /// All diagnostics, grouped by unit in input order, then in tree order
    pub diagnostics: Vec<Diagnostic>,
    /// Number of units whose analysis ran to completion
    pub units_analyzed: usize,
    /// Number of rules registered with the engine
    pub rules_executed: usize,
    /// True if cancellation stopped the pass early
    pub cancelled: bool,
}

/// Diagnostics of one unit and whether its walk was cut short
struct UnitOutcome {
    diagnostics: Vec<Diagnostic>,
    cancelled: bool,
}

/// Execution engine that dispatches rules by node kind
pub struct ExecutionEngine {
    rules: Vec<Box<dyn Rule>>,
    /// Indices into `rules`, per node kind, in rule ID order
    dispatch: HashMap<SyntaxKind, Vec<usize>>,
    parallel: bool,
}

impl ExecutionEngine {
    /// Creates a new ExecutionEngine with the provided rule registry
    pub fn new(registry: RuleRegistry) -> Self {
        let rules = registry.into_rules();
        let mut dispatch: HashMap<SyntaxKind, Vec<usize>> = HashMap::new();
        for (index, rule) in rules.iter().enumerate() {
            for &kind in rule.interests() {
                let entry = dispatch.entry(kind).or_default();
                if !entry.contains(&index) {
                    entry.push(index);
                }
            }
        }

        Self {
            rules,
            dispatch,
            parallel: true,
        }
    }

    /// Creates an engine from configuration, starting from the built-in rules
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration names an unknown rule.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self, ConfigError> {
        let registry = RuleRegistry::build_from_config(config)?;
        Ok(Self::new(registry).with_parallel(config.analyzer.parallel))
    }

    /// Enables or disables parallel analysis of source units
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of registered rules
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Analyses a single tree to completion
    pub fn analyze_tree(&self, tree: &SyntaxTree) -> Vec<Diagnostic> {
        self.execute_tree(tree, None, &CancellationToken::new())
            .diagnostics
    }

    /// Execute all rules against the given source units
    ///
    /// Units are processed in parallel unless the engine is configured
    /// otherwise; the combined diagnostics keep input order either way.
    /// Cancellation is observed before each rule invocation.
    pub fn execute(&self, units: &[SourceUnit], cancel: &CancellationToken) -> ExecutionResult {
        tracing::debug!(
            units = units.len(),
            rules = self.rules.len(),
            parallel = self.parallel,
            "starting analysis"
        );

        let outcomes: Vec<UnitOutcome> = if self.parallel {
            units
                .par_iter()
                .map(|unit| self.execute_tree(&unit.tree, unit.path.as_deref(), cancel))
                .collect()
        } else {
            units
                .iter()
                .map(|unit| self.execute_tree(&unit.tree, unit.path.as_deref(), cancel))
                .collect()
        };

        let mut result = ExecutionResult {
            rules_executed: self.rules.len(),
            ..ExecutionResult::default()
        };
        for outcome in outcomes {
            if outcome.cancelled {
                result.cancelled = true;
            } else {
                result.units_analyzed += 1;
            }
            result.diagnostics.extend(outcome.diagnostics);
        }

        if result.cancelled {
            tracing::warn!(
                completed = result.units_analyzed,
                units = units.len(),
                "analysis cancelled"
            );
        }
        tracing::debug!(
            diagnostics = result.diagnostics.len(),
            units_analyzed = result.units_analyzed,
            "analysis finished"
        );
        result
    }

    /// Walks one tree, invoking interested rules per node
    fn execute_tree(
        &self,
        tree: &SyntaxTree,
        path: Option<&Path>,
        cancel: &CancellationToken,
    ) -> UnitOutcome {
        let mut diagnostics = Vec::new();

        for node in tree.descendants(tree.root()) {
            let Some(interested) = self.dispatch.get(&tree.kind(node)) else {
                continue;
            };
            let ctx = NodeContext {
                tree,
                node,
                file: path,
            };
            for &index in interested {
                if cancel.is_cancelled() {
                    return UnitOutcome {
                        diagnostics,
                        cancelled: true,
                    };
                }
                let rule = &self.rules[index];
                tracing::trace!(rule = %rule.id(), node = node.index(), "invoking rule");
                rule.check(&ctx, &mut diagnostics);
            }
        }

        UnitOutcome {
            diagnostics,
            cancelled: false,
        }
    }
}
