#![forbid(unsafe_code)]

//! Core Rule trait and related types for defining and executing rules

use crate::syntax::{NodeId, SyntaxKind, SyntaxTree, TextRange};
use crate::types::{RuleId, Severity};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Fixed metadata of a rule, defined once and never computed per invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticDescriptor {
    /// Stable identifier documented to downstream consumers
    pub id: RuleId,
    pub title: &'static str,
    /// Message carried by every diagnostic the rule emits
    pub message: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub default_severity: Severity,
    pub enabled_by_default: bool,
    pub help_link: Option<&'static str>,
}

/// Where a diagnostic points
///
/// Lines and columns are 1-indexed; the range holds byte offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// File path, when the host knows it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    pub range: TextRange,
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl Location {
    /// Locates an element of `tree`
    pub fn of(tree: &SyntaxTree, id: NodeId, file: Option<&Path>) -> Self {
        let range = tree.range(id);
        let start = tree.line_col(range.start());
        let end = tree.line_col(range.end());
        Self {
            file: file.map(Path::to_path_buf),
            range,
            line: start.line,
            column: start.column,
            end_line: end.line,
            end_column: end.column,
        }
    }
}

/// A single finding reported by a rule
///
/// Diagnostics are immutable once created and handed straight to a
/// [`DiagnosticSink`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub rule_id: RuleId,
    pub severity: Severity,
    pub message: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_link: Option<String>,
    pub location: Location,
}

impl Diagnostic {
    /// Creates a diagnostic carrying the descriptor's fixed fields
    pub fn new(descriptor: &DiagnosticDescriptor, location: Location) -> Self {
        Self {
            rule_id: descriptor.id.clone(),
            severity: descriptor.default_severity,
            message: descriptor.message.to_string(),
            category: descriptor.category.to_string(),
            help_link: descriptor.help_link.map(str::to_string),
            location,
        }
    }
}

/// Receives diagnostics as rules emit them
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Context handed to a rule for one node it registered interest in
///
/// The whole tree is readable so rules can look at ancestors and siblings.
#[derive(Debug, Clone, Copy)]
pub struct NodeContext<'a> {
    pub tree: &'a SyntaxTree,
    pub node: NodeId,
    pub file: Option<&'a Path>,
}

impl<'a> NodeContext<'a> {
    pub fn new(tree: &'a SyntaxTree, node: NodeId) -> Self {
        Self {
            tree,
            node,
            file: None,
        }
    }

    pub fn with_file(mut self, file: &'a Path) -> Self {
        self.file = Some(file);
        self
    }

    pub fn kind(&self) -> SyntaxKind {
        self.tree.kind(self.node)
    }

    /// Location of any element of the tree, tagged with this context's file
    pub fn location_of(&self, id: NodeId) -> Location {
        Location::of(self.tree, id, self.file)
    }
}

/// Trait that all rules must implement
///
/// Rules hold no mutable state and are invoked once per node of a kind they
/// registered for. The trait is `Send + Sync` to enable parallel execution
/// across trees.
pub trait Rule: Send + Sync {
    /// Returns the fixed metadata of this rule
    fn descriptor(&self) -> &DiagnosticDescriptor;

    /// Returns the unique identifier for this rule
    fn id(&self) -> &RuleId {
        &self.descriptor().id
    }

    /// Node kinds this rule wants to be called for
    fn interests(&self) -> &[SyntaxKind];

    /// Examines one node and reports any findings to `sink`
    fn check(&self, ctx: &NodeContext<'_>, sink: &mut dyn DiagnosticSink);
}
