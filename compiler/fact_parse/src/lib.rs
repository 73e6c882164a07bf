//! Parser for the Fact language.
//!
//! Hand-written recursive descent with precedence climbing for binary
//! operators, replacing the grammar-engine tables of earlier designs. The
//! parser always terminates and always yields a [`Program`], possibly
//! partially built: on a malformed construct it records a diagnostic and
//! discards tokens up to a synchronizing keyword before resuming.

mod cursor;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use recovery::{synchronize, TokenSet};

use fact_diagnostic::Diagnostics;
use fact_ir::{LineMap, Program, TokenList};
use grammar::Parser;
use tracing::debug;

/// Result of a parse: the (possibly partial) program plus syntax
/// diagnostics.
///
/// Callers must treat a non-empty diagnostic list as failure and skip
/// evaluation, whether or not a partial tree exists.
#[derive(Debug)]
pub struct ParseOutcome {
    pub program: Program,
    pub diagnostics: Diagnostics,
}

/// Parse an EOF-terminated token stream into a [`Program`].
///
/// `line_map` supplies 1-based line/column positions for diagnostics.
pub fn parse(tokens: &TokenList, line_map: &LineMap) -> ParseOutcome {
    let mut parser = Parser::new(tokens, line_map);
    let program = parser.program();
    let diagnostics = parser.into_diagnostics();
    debug!(
        defs = program.defs.len(),
        has_exec = program.exec.is_some(),
        errors = diagnostics.len(),
        "parse finished"
    );
    ParseOutcome {
        program,
        diagnostics,
    }
}
