//! Tree-walking evaluator for Fact.
//!
//! The environment is a chain of parent-linked frames rather than a single
//! mutable table with snapshot/restore: `let` blocks and function calls each
//! get a fresh child frame, outer frames are never mutated, and closures
//! capture the frame they were defined in. Scope isolation is therefore
//! structural instead of depending on copy discipline.
//!
//! Runtime errors abort the evaluation and propagate to the caller as
//! [`RuntimeError`]; a failing subexpression is never silently replaced
//! with `nil`.

mod environment;
mod interpreter;
mod operators;
mod value;

pub use environment::{bind_defs, Binding, Frame, FrameRef};
pub use interpreter::Interpreter;
pub use operators::evaluate_binary;
pub use value::{Closure, Value};

use fact_diagnostic::RuntimeError;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, RuntimeError>;

#[cfg(test)]
mod tests;
