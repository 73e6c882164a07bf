//! Diagnostics for the Fact compiler.
//!
//! Lexical and syntax problems are plain values collected into a
//! [`Diagnostics`] object that is threaded through the lexer and parser and
//! returned alongside their results; nothing in the pipeline throws. The
//! evaluator reports failures through the separate [`RuntimeError`] channel.

mod diagnostic;
mod runtime;

pub use diagnostic::{
    expected_syntax, expected_token, illegal_character, unexpected_eof, unexpected_token,
    Diagnostic, Diagnostics,
};
pub use runtime::{
    arity_mismatch, division_by_zero, not_a_function, recursion_limit_exceeded, type_mismatch,
    undefined_function, undefined_variable, RuntimeError, RuntimeErrorKind,
};
