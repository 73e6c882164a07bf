//! Source diagnostics and their collector.

use std::fmt;

/// A lexical or syntax diagnostic at a 1-based source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: u32,
    pub column: u32,
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(line: u32, column: u32, message: impl Into<String>) -> Self {
        Diagnostic {
            line,
            column,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}

/// Lexical: a character no token rule recognizes.
pub fn illegal_character(line: u32, column: u32, ch: char) -> Diagnostic {
    Diagnostic::new(line, column, format!("illegal character '{ch}'"))
}

/// Syntax: a token that cannot start or continue the current construct.
pub fn unexpected_token(line: u32, column: u32, found: impl fmt::Display) -> Diagnostic {
    Diagnostic::new(line, column, format!("unexpected token `{found}`"))
}

/// Syntax: a specific token was required.
pub fn expected_token(
    line: u32,
    column: u32,
    expected: impl fmt::Display,
    found: impl fmt::Display,
) -> Diagnostic {
    Diagnostic::new(
        line,
        column,
        format!("expected `{expected}`, found `{found}`"),
    )
}

/// Syntax: a class of token (e.g. "a parameter name") was required.
pub fn expected_syntax(
    line: u32,
    column: u32,
    expected: &str,
    found: impl fmt::Display,
) -> Diagnostic {
    Diagnostic::new(line, column, format!("expected {expected}, found `{found}`"))
}

/// Syntax: input ended inside a construct.
pub fn unexpected_eof(line: u32, column: u32, while_parsing: &str) -> Diagnostic {
    Diagnostic::new(
        line,
        column,
        format!("unexpected end of input while parsing {while_parsing}"),
    )
}

/// Collector for diagnostics, threaded explicitly through the lexer and
/// parser instead of accumulating in shared mutable state.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collector.
    pub fn new() -> Self {
        Diagnostics::default()
    }

    /// Record a diagnostic.
    #[inline]
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    /// Record every diagnostic from `other` (e.g. merging lexical into
    /// syntactic before reporting).
    pub fn extend(&mut self, other: impl IntoIterator<Item = Diagnostic>) {
        self.entries.extend(other);
    }

    /// Check if anything was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded diagnostics (before deduplication).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether some diagnostic was already recorded for `line`.
    pub fn has_line(&self, line: u32) -> bool {
        self.entries.iter().any(|d| d.line == line)
    }

    /// Produce the surfaced report: stably sorted by line, at most one
    /// diagnostic per source line (the first recorded one wins).
    pub fn into_report(self) -> Vec<Diagnostic> {
        let mut entries = self.entries;
        entries.sort_by_key(|d| d.line);
        entries.dedup_by_key(|d| d.line);
        entries
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
