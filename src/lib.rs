#![forbid(unsafe_code)]

//! regionlint: reports `#region` directives that are not confined to a body
//!
//! Implements readability rule `SA1124` ("Do not use regions") over an
//! immutable, arena-backed syntax tree. A region whose start and matching
//! end both lie inside one member body is owned by the companion rule
//! `SA1123`; every other region is reported here. The two rules share the
//! predicate in [`containment`].

pub mod config;
pub mod containment;
pub mod directives;
pub mod engine;
pub mod error;
pub mod rules;
pub mod syntax;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, RegionLintError, RuleError, TreeError};

// Re-export core domain types for convenient access
pub use types::{RuleId, Severity};
