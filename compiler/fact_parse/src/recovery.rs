//! Error recovery for the parser.
//!
//! After a syntax error the parser discards tokens until it reaches a
//! synchronizing token, then resumes at that known grammatical boundary.

use crate::cursor::Cursor;
use fact_ir::TokenKind;
use tracing::trace;

/// A set of token kinds backed by a `u64` bitset over [`TokenKind::tag`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        TokenSet(0)
    }

    /// Create a set from the given kinds.
    pub fn of(kinds: &[TokenKind]) -> Self {
        let mut set = TokenSet::new();
        for kind in kinds {
            set.0 |= 1u64 << kind.tag();
        }
        set
    }

    /// Check membership.
    #[inline]
    pub fn contains(&self, kind: &TokenKind) -> bool {
        (self.0 & (1u64 << kind.tag())) != 0
    }

    /// Check if the set is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// The synchronizing tokens: `end`, `val`, `func`, `if`, `let`, `exec`,
/// plus EOF so recovery always terminates.
pub fn sync_set() -> TokenSet {
    TokenSet::of(&[
        TokenKind::End,
        TokenKind::Val,
        TokenKind::Func,
        TokenKind::If,
        TokenKind::Let,
        TokenKind::Exec,
        TokenKind::Eof,
    ])
}

/// Advance the cursor until the current token is in `recovery`.
///
/// Returns the number of tokens discarded.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> usize {
    let mut skipped = 0;
    while !cursor.is_at_end() && !recovery.contains(cursor.current_kind()) {
        cursor.advance();
        skipped += 1;
    }
    if skipped > 0 {
        trace!(skipped, "synchronized after syntax error");
    }
    skipped
}
