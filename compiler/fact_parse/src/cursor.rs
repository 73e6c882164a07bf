//! Token cursor for navigating the token stream.

use fact_ir::{Span, Token, TokenKind, TokenList};

/// Cursor over an EOF-terminated [`TokenList`].
///
/// The position never moves past the final EOF token, so
/// [`current`](Cursor::current) is always valid.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of the stream.
    pub fn new(tokens: &'a TokenList) -> Self {
        debug_assert!(
            matches!(tokens.get(tokens.len().wrapping_sub(1)).map(|t| &t.kind), Some(TokenKind::Eof)),
            "token stream must be EOF-terminated"
        );
        Cursor { tokens, pos: 0 }
    }

    /// The current token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos.min(self.tokens.len().saturating_sub(1))]
    }

    /// The current token's kind.
    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    /// The current token's span.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Check if the cursor reached the end of input.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Advance one token. Stops at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Check whether the current token has the same kind as `kind`
    /// (payloads are ignored).
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind().tag() == kind.tag()
    }

    /// Consume the current token if it matches `kind`.
    #[inline]
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fact_ir::Token;

    fn toks(kinds: Vec<TokenKind>) -> TokenList {
        let mut list = TokenList::new();
        for (i, kind) in kinds.into_iter().enumerate() {
            let pos = u32::try_from(i).unwrap_or(u32::MAX);
            list.push(Token::new(kind, Span::point(pos), 1));
        }
        list.push(Token::new(TokenKind::Eof, Span::point(99), 1));
        list
    }

    #[test]
    fn advance_stops_at_eof() {
        let tokens = toks(vec![TokenKind::Exec, TokenKind::Number(1)]);
        let mut cursor = Cursor::new(&tokens);
        assert!(cursor.check(&TokenKind::Exec));
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_at_end());
        cursor.advance();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn check_ignores_payloads() {
        let tokens = toks(vec![TokenKind::Number(42)]);
        let cursor = Cursor::new(&tokens);
        assert!(cursor.check(&TokenKind::Number(0)));
        assert!(!cursor.check(&TokenKind::Str(String::new())));
    }

    #[test]
    fn eat_consumes_only_on_match() {
        let tokens = toks(vec![TokenKind::LParen, TokenKind::RParen]);
        let mut cursor = Cursor::new(&tokens);
        assert!(!cursor.eat(&TokenKind::RParen));
        assert!(cursor.eat(&TokenKind::LParen));
        assert!(cursor.eat(&TokenKind::RParen));
        assert!(cursor.is_at_end());
    }
}
