//! Lexical tokens for the Fact language.

use crate::Span;
use std::fmt;
use std::ops::Index;

/// The kind of a lexical token, carrying the literal value where one exists.
///
/// Fact distinguishes two identifier classes by the first character:
/// lowercase-initial [`Ident`](TokenKind::Ident) names variables and
/// uppercase-initial [`FuncIdent`](TokenKind::FuncIdent) names functions.
/// All keywords are lowercase spellings and are reserved in both classes.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Variable-class identifier (`[a-z][a-zA-Z0-9_']*`).
    Ident(String),
    /// Function-class identifier (`[A-Z][a-zA-Z0-9_']*`).
    FuncIdent(String),
    /// Integer literal.
    Number(i64),
    /// String literal, quotes stripped. No escape processing.
    Str(String),

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    /// `:=`
    Assign,

    // Operators
    Eq,
    Lt,
    Gt,
    Plus,
    Minus,
    Star,
    Slash,
    Dot,
    Amp,
    Pipe,

    // Keywords
    If,
    Then,
    Else,
    Let,
    Val,
    Func,
    End,
    In,
    Nil,
    True,
    False,
    Exec,

    /// End of input. Always the final token in a [`TokenList`].
    Eof,
}

impl TokenKind {
    /// Dense discriminant index, used by the parser's token sets.
    pub fn tag(&self) -> u8 {
        match self {
            TokenKind::Ident(_) => 0,
            TokenKind::FuncIdent(_) => 1,
            TokenKind::Number(_) => 2,
            TokenKind::Str(_) => 3,
            TokenKind::LParen => 4,
            TokenKind::RParen => 5,
            TokenKind::LBracket => 6,
            TokenKind::RBracket => 7,
            TokenKind::Comma => 8,
            TokenKind::Assign => 9,
            TokenKind::Eq => 10,
            TokenKind::Lt => 11,
            TokenKind::Gt => 12,
            TokenKind::Plus => 13,
            TokenKind::Minus => 14,
            TokenKind::Star => 15,
            TokenKind::Slash => 16,
            TokenKind::Dot => 17,
            TokenKind::Amp => 18,
            TokenKind::Pipe => 19,
            TokenKind::If => 20,
            TokenKind::Then => 21,
            TokenKind::Else => 22,
            TokenKind::Let => 23,
            TokenKind::Val => 24,
            TokenKind::Func => 25,
            TokenKind::End => 26,
            TokenKind::In => 27,
            TokenKind::Nil => 28,
            TokenKind::True => 29,
            TokenKind::False => 30,
            TokenKind::Exec => 31,
            TokenKind::Eof => 32,
        }
    }

    /// Check whether this is either identifier class.
    #[inline]
    pub fn is_identifier(&self) -> bool {
        matches!(self, TokenKind::Ident(_) | TokenKind::FuncIdent(_))
    }
}

impl fmt::Display for TokenKind {
    /// Surface spelling, used in diagnostics (`unexpected token `+``).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) | TokenKind::FuncIdent(name) => write!(f, "{name}"),
            TokenKind::Number(n) => write!(f, "{n}"),
            TokenKind::Str(s) => write!(f, "\"{s}\""),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::LBracket => write!(f, "["),
            TokenKind::RBracket => write!(f, "]"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Assign => write!(f, ":="),
            TokenKind::Eq => write!(f, "="),
            TokenKind::Lt => write!(f, "<"),
            TokenKind::Gt => write!(f, ">"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Star => write!(f, "*"),
            TokenKind::Slash => write!(f, "/"),
            TokenKind::Dot => write!(f, "."),
            TokenKind::Amp => write!(f, "&"),
            TokenKind::Pipe => write!(f, "|"),
            TokenKind::If => write!(f, "if"),
            TokenKind::Then => write!(f, "then"),
            TokenKind::Else => write!(f, "else"),
            TokenKind::Let => write!(f, "let"),
            TokenKind::Val => write!(f, "val"),
            TokenKind::Func => write!(f, "func"),
            TokenKind::End => write!(f, "end"),
            TokenKind::In => write!(f, "in"),
            TokenKind::Nil => write!(f, "nil"),
            TokenKind::True => write!(f, "true"),
            TokenKind::False => write!(f, "false"),
            TokenKind::Exec => write!(f, "exec"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A single token: kind (with literal value), byte span, and 1-based line.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: u32,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: Span, line: u32) -> Self {
        Token { kind, span, line }
    }
}

/// An EOF-terminated token stream.
///
/// The lexer guarantees the final token is [`TokenKind::Eof`], which lets
/// the parser index the current position unconditionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Create an empty token list.
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    /// Append a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Number of tokens, including the trailing EOF.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the list holds no tokens at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get a token by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Iterate over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_unique() {
        let kinds = [
            TokenKind::Ident("x".into()),
            TokenKind::FuncIdent("F".into()),
            TokenKind::Number(0),
            TokenKind::Str(String::new()),
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::Comma,
            TokenKind::Assign,
            TokenKind::Eq,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Dot,
            TokenKind::Amp,
            TokenKind::Pipe,
            TokenKind::If,
            TokenKind::Then,
            TokenKind::Else,
            TokenKind::Let,
            TokenKind::Val,
            TokenKind::Func,
            TokenKind::End,
            TokenKind::In,
            TokenKind::Nil,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Exec,
            TokenKind::Eof,
        ];
        let mut seen = std::collections::HashSet::new();
        for kind in &kinds {
            assert!(seen.insert(kind.tag()), "duplicate tag for {kind:?}");
            assert!(kind.tag() < 64, "tag must fit the parser's u64 bitset");
        }
        assert_eq!(seen.len(), 33);
    }

    #[test]
    fn display_matches_surface_syntax() {
        assert_eq!(TokenKind::Assign.to_string(), ":=");
        assert_eq!(TokenKind::FuncIdent("Add".into()).to_string(), "Add");
        assert_eq!(TokenKind::Str("hi".into()).to_string(), "\"hi\"");
    }
}
