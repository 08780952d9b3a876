//! Token types produced by the GDL scanner.
//!
//! Tokens are immutable once produced. Every token carries its kind, its text
//! (already unescaped for string literals), its byte span, its 1-based
//! line/column and the channel it was emitted on.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use std::fmt;

use super::{LineCol, Span};

/// Channel a token was emitted on.
///
/// The parser only sees the default channel; whitespace and comments go to
/// the hidden channel and are reachable through explicit queries.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Channel {
    #[default]
    Default,
    Hidden,
}

/// A token with its text and location in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
    pub pos: LineCol,
    pub channel: Channel,
}

impl Token {
    /// Create a token, picking the channel from the kind.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span, pos: LineCol) -> Self {
        let channel = if kind.is_trivia() {
            Channel::Hidden
        } else {
            Channel::Default
        };
        Token {
            kind,
            text: text.into(),
            span,
            pos,
            channel,
        }
    }

    /// Create a dummy token for tests and synthesized input.
    ///
    /// The text is the kind's spelling, or empty for lexical classes.
    pub fn dummy(kind: TokenKind) -> Self {
        Token::new(
            kind,
            kind.text().unwrap_or_default(),
            Span::DUMMY,
            LineCol::START,
        )
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.channel == Channel::Hidden
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.pos)
    }
}
