//! Runtime errors raised by the evaluator.
//!
//! Centralizing the constructors here keeps message wording in one place;
//! the evaluator imports these instead of formatting strings inline.

use thiserror::Error;

/// Classification of a runtime failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    UndefinedVariable,
    UndefinedFunction,
    ArityMismatch,
    TypeMismatch,
    DivisionByZero,
    RecursionLimitExceeded,
}

/// A runtime failure.
///
/// Runtime errors abort the evaluation: they propagate from the failing
/// subexpression to the top level rather than being substituted with `nil`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub message: String,
}

impl RuntimeError {
    /// Create a new runtime error.
    pub fn new(kind: RuntimeErrorKind, message: impl Into<String>) -> Self {
        RuntimeError {
            kind,
            message: message.into(),
        }
    }
}

/// Reference to a variable with no visible definition.
pub fn undefined_variable(name: &str) -> RuntimeError {
    RuntimeError::new(
        RuntimeErrorKind::UndefinedVariable,
        format!("undefined variable `{name}`"),
    )
}

/// Call of a function name with no visible definition.
pub fn undefined_function(name: &str) -> RuntimeError {
    RuntimeError::new(
        RuntimeErrorKind::UndefinedFunction,
        format!("undefined function `{name}`"),
    )
}

/// Call of a name that is bound, but not to a function.
pub fn not_a_function(name: &str) -> RuntimeError {
    RuntimeError::new(
        RuntimeErrorKind::TypeMismatch,
        format!("`{name}` is not a function"),
    )
}

/// Call with the wrong number of arguments.
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> RuntimeError {
    RuntimeError::new(
        RuntimeErrorKind::ArityMismatch,
        format!("function `{name}` expects {expected} argument(s), but got {got}"),
    )
}

/// Operator applied to operands it is not defined for.
pub fn type_mismatch(op: &str, lhs: &str, rhs: &str) -> RuntimeError {
    RuntimeError::new(
        RuntimeErrorKind::TypeMismatch,
        format!("incompatible operands for `{op}`: {lhs} and {rhs}"),
    )
}

/// Division with a zero divisor.
pub fn division_by_zero() -> RuntimeError {
    RuntimeError::new(RuntimeErrorKind::DivisionByZero, "division by zero")
}

/// Evaluation exceeded the configured recursion depth.
pub fn recursion_limit_exceeded(limit: usize) -> RuntimeError {
    RuntimeError::new(
        RuntimeErrorKind::RecursionLimitExceeded,
        format!("recursion limit of {limit} exceeded"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind_and_message() {
        let err = arity_mismatch("Add", 2, 1);
        assert_eq!(err.kind, RuntimeErrorKind::ArityMismatch);
        assert_eq!(
            err.to_string(),
            "function `Add` expects 2 argument(s), but got 1"
        );

        assert_eq!(division_by_zero().kind, RuntimeErrorKind::DivisionByZero);
        assert_eq!(
            recursion_limit_exceeded(64).kind,
            RuntimeErrorKind::RecursionLimitExceeded
        );
    }
}
