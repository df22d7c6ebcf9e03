#![forbid(unsafe_code)]

//! Rule definitions and registry

mod regions;
mod registry;
mod rule;

// Re-export core types
pub use regions::{DO_NOT_USE_REGIONS, DoNotUseRegions};
pub use registry::RuleRegistry;
pub use rule::{Diagnostic, DiagnosticDescriptor, DiagnosticSink, Location, NodeContext, Rule};
