//! Tokenizer for Fact, built on logos.
//!
//! [`lex`] never fails: unrecognized characters are reported as lexical
//! diagnostics (at most one per source line) and scanning continues, so a
//! best-effort token stream is produced even for malformed input.

use fact_diagnostic::{illegal_character, Diagnostics};
use fact_ir::{Span, Token, TokenKind, TokenList};
use logos::Logos;

/// Raw token as matched by logos, before conversion to [`TokenKind`].
///
/// Keyword `#[token]` rules outrank the identifier regexes on exact
/// matches, which reproduces the reserved-word table: `if` is a keyword,
/// `iffy` and `If` are identifiers.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Horizontal whitespace never affects line counting
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    /// A run of newlines; the scanner bumps the line counter by its length.
    #[regex(r"\n+")]
    Newline,

    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("else")]
    Else,
    #[token("let")]
    Let,
    #[token("val")]
    Val,
    #[token("func")]
    Func,
    #[token("end")]
    End,
    #[token("in")]
    In,
    #[token("nil")]
    Nil,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("exec")]
    Exec,

    // Function-class identifier: uppercase start.
    #[regex(r"[A-Z][a-zA-Z0-9_']*", |lex| lex.slice().to_owned())]
    FuncIdent(String),

    // Variable-class identifier: lowercase start.
    #[regex(r"[a-z][a-zA-Z0-9_']*", |lex| lex.slice().to_owned())]
    Ident(String),

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Number(i64),

    // Text between double quotes; no escapes, no embedded quotes.
    #[regex(r#""[^"]*""#, |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_owned()
    })]
    Str(String),

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(":=")]
    Assign,
    #[token("=")]
    Eq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token(".")]
    Dot,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
}

/// Lex `source` into an EOF-terminated [`TokenList`] plus lexical
/// diagnostics.
pub fn lex(source: &str) -> (TokenList, Diagnostics) {
    let mut tokens = TokenList::new();
    let mut diagnostics = Diagnostics::new();
    let mut logos = RawToken::lexer(source);

    // 1-based current line and the byte offset where it starts, for
    // diagnostic columns.
    let mut line: u32 = 1;
    let mut line_start: usize = 0;

    while let Some(result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        match result {
            Ok(RawToken::LineComment) => {}
            Ok(RawToken::Newline) => {
                line = line.saturating_add(u32::try_from(slice.len()).unwrap_or(u32::MAX));
                line_start = logos.span().end;
            }
            Ok(raw) => {
                tokens.push(Token::new(convert(raw), span, line));
            }
            Err(()) => {
                // One report per affected line; scanning continues past the
                // offending character either way.
                if !diagnostics.has_line(line) {
                    let column =
                        u32::try_from(logos.span().start - line_start + 1).unwrap_or(u32::MAX);
                    let ch = slice.chars().next().unwrap_or('\u{fffd}');
                    diagnostics.push(illegal_character(line, column, ch));
                }
            }
        }
    }

    let eof_pos = u32::try_from(source.len()).unwrap_or(u32::MAX);
    tokens.push(Token::new(TokenKind::Eof, Span::point(eof_pos), line));

    (tokens, diagnostics)
}

/// Convert a raw logos token into the shared [`TokenKind`].
fn convert(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::Ident(name) => TokenKind::Ident(name),
        RawToken::FuncIdent(name) => TokenKind::FuncIdent(name),
        RawToken::Number(n) => TokenKind::Number(n),
        RawToken::Str(s) => TokenKind::Str(s),

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Pipe => TokenKind::Pipe,

        RawToken::If => TokenKind::If,
        RawToken::Then => TokenKind::Then,
        RawToken::Else => TokenKind::Else,
        RawToken::Let => TokenKind::Let,
        RawToken::Val => TokenKind::Val,
        RawToken::Func => TokenKind::Func,
        RawToken::End => TokenKind::End,
        RawToken::In => TokenKind::In,
        RawToken::Nil => TokenKind::Nil,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Exec => TokenKind::Exec,

        RawToken::LineComment | RawToken::Newline => {
            unreachable!("trivia is handled before conversion")
        }
    }
}
