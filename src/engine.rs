//! Rule execution engine

pub mod executor;

pub use executor::{ExecutionEngine, ExecutionResult, SourceUnit};
