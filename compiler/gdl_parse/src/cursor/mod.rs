//! Token cursor for navigating the token stream.
//!
//! The cursor views the default channel of a [`TokenList`]; hidden-channel
//! tokens are skipped by lookahead and consumption and are only reachable
//! through [`Cursor::hidden_before`].

use gdl_ir::{Span, Token, TokenKind, TokenList};
use tracing::trace;

use crate::error::SyntaxError;

/// Read-only lookahead over token kinds.
///
/// `la(1)` is the next token, `la(k)` the k-th; positions past the end read
/// as [`TokenKind::Eof`]. `la(0)` is treated as `la(1)`. This is all the
/// decision tables and the unordered-group coordinator ever see.
pub trait Lookahead {
    fn la(&self, k: usize) -> TokenKind;
}

impl Lookahead for [TokenKind] {
    fn la(&self, k: usize) -> TokenKind {
        self.get(k.max(1) - 1).copied().unwrap_or(TokenKind::Eof)
    }
}

impl Lookahead for Vec<TokenKind> {
    fn la(&self, k: usize) -> TokenKind {
        self.as_slice().la(k)
    }
}

/// Cursor for navigating tokens.
///
/// Positions count default-channel tokens only. Marks are plain positions,
/// so `mark`/`rewind` are O(1) and nest arbitrarily.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    /// Indices into `tokens` of the default-channel tokens, `Eof` last.
    visible: Vec<usize>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList) -> Self {
        let visible = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_hidden())
            .map(|(i, _)| i)
            .collect();
        Cursor {
            tokens,
            visible,
            pos: 0,
        }
    }

    /// Get the current position in the token stream.
    ///
    /// Used for progress tracking: compare positions before and after
    /// parsing to determine if tokens were consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Remember the current position.
    #[inline]
    pub fn mark(&self) -> usize {
        self.pos
    }

    /// Return to a position obtained from [`mark`](Self::mark).
    pub fn rewind(&mut self, mark: usize) {
        debug_assert!(
            mark <= self.visible.len(),
            "cursor mark {mark} out of bounds (max {})",
            self.visible.len()
        );
        self.pos = mark;
    }

    /// The k-th lookahead token (`lt(1)` is the next one).
    ///
    /// Past the end this is the `Eof` token.
    pub fn lt(&self, k: usize) -> &'a Token {
        let tokens = self.tokens;
        self.visible
            .get(self.pos + k.max(1) - 1)
            .map_or_else(|| tokens.eof(), |&i| &tokens[i])
    }

    /// Get the current token (`lt(1)`).
    #[inline]
    pub fn current(&self) -> &'a Token {
        self.lt(1)
    }

    /// Get the current token's span.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Get the previous token's span.
    ///
    /// At the start of the stream this is an empty span at offset 0.
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|p| self.visible.get(p)) {
            Some(&i) => self.tokens[i].span,
            None => Span::DUMMY,
        }
    }

    /// Check if at end of token stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.la(1) == TokenKind::Eof
    }

    /// Check if the current token matches the given kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.la(1) == kind
    }

    /// Advance to the next token and return the consumed token.
    ///
    /// Consuming `Eof` once moves past the end; consuming again is a bug in
    /// the caller.
    pub fn consume(&mut self) -> &'a Token {
        debug_assert!(
            self.pos < self.visible.len(),
            "consume past end of token stream"
        );
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "consume"
        );
        self.pos += 1;
        token
    }

    /// Expect the current token to be of the given kind, consume and return it.
    ///
    /// On mismatch nothing is consumed.
    #[inline]
    pub fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, SyntaxError> {
        if self.check(kind) {
            Ok(self.consume())
        } else {
            Err(self.make_expect_error(kind))
        }
    }

    /// Build the error for a failed `expect()` call.
    #[cold]
    #[inline(never)]
    pub(crate) fn make_expect_error(&self, kind: TokenKind) -> SyntaxError {
        let found = self.current();
        SyntaxError::UnexpectedToken {
            expected: kind,
            found: found.kind,
            span: found.span,
            pos: found.pos,
        }
    }

    /// Hidden-channel tokens between the (k-1)-th and the k-th lookahead
    /// token, in source order.
    pub fn hidden_before(&self, k: usize) -> &'a [Token] {
        let tokens = self.tokens.as_slice();
        let index = self.pos + k.max(1) - 1;
        let Some(&end) = self.visible.get(index) else {
            return &[];
        };
        let start = match index.checked_sub(1).and_then(|i| self.visible.get(i)) {
            Some(&prev) => prev + 1,
            None => 0,
        };
        tokens.get(start..end).unwrap_or(&[])
    }
}

impl Lookahead for Cursor<'_> {
    #[inline]
    fn la(&self, k: usize) -> TokenKind {
        self.lt(k).kind
    }
}
