//! The source-to-value pipeline: lex, parse, evaluate.
//!
//! Evaluation is gated on a clean front end. Lexical and syntax
//! diagnostics are merged into a single report, and a non-empty report
//! means the program never runs, even though a partial tree exists.

use fact_diagnostic::{Diagnostic, RuntimeError};
use fact_eval::{Interpreter, Value};
use fact_ir::{LineMap, Program, TokenList};
use thiserror::Error;
use tracing::debug;

/// Front-end output for one source text.
#[derive(Debug)]
pub struct Analysis {
    pub tokens: TokenList,
    pub line_map: LineMap,
    pub program: Program,
    /// Merged lexical and syntax diagnostics, sorted by line, at most one
    /// per line. Empty means the program is well-formed.
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A completed run.
#[derive(Debug)]
pub struct Execution {
    pub program: Program,
    pub value: Value,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("source has {} diagnostic(s)", .0.len())]
    Invalid(Vec<Diagnostic>),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Lex and parse `source` without evaluating it.
pub fn check(source: &str) -> Analysis {
    let (tokens, lexical) = fact_lexer::lex(source);
    let line_map = LineMap::new(source);
    let outcome = fact_parse::parse(&tokens, &line_map);

    // Lexical entries first so they win line-level dedup ties.
    let mut merged = lexical;
    merged.extend(outcome.diagnostics);
    let diagnostics = merged.into_report();
    debug!(
        tokens = tokens.len(),
        diagnostics = diagnostics.len(),
        "front end finished"
    );

    Analysis {
        tokens,
        line_map,
        program: outcome.program,
        diagnostics,
    }
}

/// Run the full pipeline on `source`.
pub fn run(source: &str, max_depth: usize) -> Result<Execution, PipelineError> {
    let analysis = check(source);
    if !analysis.is_valid() {
        return Err(PipelineError::Invalid(analysis.diagnostics));
    }
    let value = Interpreter::with_max_depth(max_depth).run(&analysis.program)?;
    Ok(Execution {
        program: analysis.program,
        value,
    })
}
