//! Error types for regionlint
//!
//! This module defines the error types used throughout regionlint, following
//! a hierarchical structure with specific error variants for different
//! error categories. Rules themselves never fail: malformed directive input
//! is reported as a diagnostic, not returned as an error.

use crate::syntax::SyntaxKind;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Invalid TOML syntax or shape
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration file could not be read
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration parsed but failed validation
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Rule-related errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Invalid rule definition
    #[error("Invalid rule definition: {0}")]
    InvalidDefinition(String),

    /// Rule not found
    #[error("Rule not found: {0}")]
    NotFound(String),

    /// A rule with the same ID is already registered
    #[error("Duplicate rule ID: {0}")]
    Duplicate(String),
}

/// Errors raised while assembling a syntax tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// `finish_node` was called with no open node
    #[error("finish_node called without a matching start_node")]
    UnbalancedFinish,

    /// A node other than the root was still open when the tree was finished
    #[error("Node {0:?} was never finished")]
    UnclosedNode(SyntaxKind),

    /// The tree has no root node
    #[error("Tree has no root node")]
    NoRoot,

    /// A second root node was started after the first was closed
    #[error("Tree already has a root node")]
    MultipleRoots,

    /// A token or trivia was added outside any node
    #[error("{0:?} added outside of any node")]
    Orphan(SyntaxKind),

    /// A kind was used in the wrong builder call
    #[error("{kind:?} is not a {expected}")]
    WrongKind {
        kind: SyntaxKind,
        expected: &'static str,
    },

    /// Trailing trivia was added before any token existed
    #[error("Trailing trivia {0:?} has no preceding token")]
    DanglingTrivia(SyntaxKind),

    /// The source text is longer than offsets can address
    #[error("Source text exceeds the maximum supported length")]
    TextTooLong,
}

/// Top-level error type for regionlint
#[derive(Debug, thiserror::Error)]
pub enum RegionLintError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// Syntax tree construction error
    #[error("Syntax tree error: {0}")]
    Tree(#[from] TreeError),
}
