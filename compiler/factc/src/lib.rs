//! Fact compiler driver.
//!
//! Ties the front-end crates and the evaluator into one pipeline; the
//! `fact` binary is a thin argument-parsing wrapper over [`pipeline`].

pub mod pipeline;

pub use pipeline::{check, run, Analysis, Execution, PipelineError};

/// Recursion depth limit used when the caller does not pick one.
pub const DEFAULT_MAX_DEPTH: usize = 1024;
