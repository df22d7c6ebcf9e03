//! Configuration file parsing and validation

pub mod analyzer_toml;

pub use analyzer_toml::{AnalyzerConfig, AnalyzerMeta, RulesConfig};
