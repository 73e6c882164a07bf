//! Shared IR for the Fact compiler: tokens, spans, and the syntax tree.
//!
//! The lexer produces a [`TokenList`], the parser consumes it and builds a
//! [`Program`], and the evaluator walks that tree. Nothing in this crate
//! performs analysis; it only defines the data the pipeline stages exchange.

mod ast;
mod line_map;
mod source;
mod span;
mod token;

pub use ast::{BinOp, Def, Expr, FuncDef, Literal, Program, ValDef};
pub use line_map::LineMap;
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
