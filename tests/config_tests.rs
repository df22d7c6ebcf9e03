//! Integration tests for loading regionlint.toml from disk

mod common;

use common::{Source, TestResult};
use regionlint::ConfigError;
use regionlint::config::AnalyzerConfig;
use regionlint::engine::{ExecutionEngine, SourceUnit};
use regionlint::rules::RuleRegistry;
use regionlint::RuleId;
use std::fs;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("regionlint.toml");
    fs::write(&path, content).unwrap();
    path
}

fn file_scope_region() -> regionlint::syntax::SyntaxTree {
    let mut s = Source::new();
    s.region("Usings");
    s.using("System");
    s.end_region();
    s.finish()
}

#[test]
fn test_load_config_from_file() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_config(
        &dir,
        r#"
[analyzer]
version = "1"
parallel = false

[rules]
SA1124 = true
"#,
    );

    let config = AnalyzerConfig::load(&path)?;
    assert!(!config.analyzer.parallel);
    assert_eq!(
        config.rules.is_enabled(&RuleId::from_static("SA1124")),
        Some(true)
    );
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = AnalyzerConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[analyzer\nversion = \"1\"\n");
    let err = AnalyzerConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("Invalid configuration syntax"));
}

#[test]
fn test_disabled_rule_silences_engine() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_config(&dir, "[analyzer]\nversion = \"1\"\n\n[rules]\nSA1124 = false\n");
    let config = AnalyzerConfig::load(&path)?;

    let engine = ExecutionEngine::from_config(&config)?;
    let result = engine.execute(
        &[SourceUnit::new(file_scope_region())],
        &CancellationToken::new(),
    );
    assert_eq!(result.rules_executed, 0);
    assert!(result.diagnostics.is_empty());
    Ok(())
}

#[test]
fn test_default_config_enables_builtin_rule() -> TestResult {
    let config = AnalyzerConfig::default();
    let registry = RuleRegistry::build_from_config(&config)?;
    assert_eq!(registry.len(), 1);

    let engine = ExecutionEngine::from_config(&config)?;
    assert_eq!(engine.analyze_tree(&file_scope_region()).len(), 1);
    Ok(())
}

#[test]
fn test_unknown_rule_is_validation_error() {
    let config =
        AnalyzerConfig::parse("[analyzer]\nversion = \"1\"\n\n[rules]\nSA1123 = true\n").unwrap();
    let err = RuleRegistry::build_from_config(&config).err().unwrap();
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("SA1123"));
}
