//! Token list handed from the scanner to the parser.

use std::ops::Index;

use super::{Channel, Token, TokenKind};
use crate::{LineCol, Span};

/// All tokens of one source, both channels, in source order.
///
/// Always ends with exactly one [`TokenKind::Eof`] token on the default
/// channel; construction appends one when it is missing and drops any
/// stray `Eof` tokens before the end.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Build a list from scanned tokens.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        tokens.retain(|t| t.kind != TokenKind::Eof);
        let (end, pos) = tokens.last().map_or((0, LineCol::START), |last| {
            let width = u32::try_from(last.text.chars().count()).unwrap_or(u32::MAX);
            (
                last.span.end,
                LineCol::new(last.pos.line, last.pos.col.saturating_add(width)),
            )
        });
        tokens.push(Token {
            kind: TokenKind::Eof,
            text: String::new(),
            span: Span::point(end),
            pos,
            channel: Channel::Default,
        });
        TokenList { tokens }
    }

    /// Build a list of synthetic tokens, one per kind, laid out on one line.
    ///
    /// Lexical classes get placeholder text (`x`, `1`, `s`, `code`) so the
    /// parser has something to record.
    pub fn from_kinds(kinds: &[TokenKind]) -> Self {
        let mut offset = 0u32;
        let tokens = kinds
            .iter()
            .map(|&kind| {
                let text = match kind {
                    TokenKind::Id => "x",
                    TokenKind::Int => "1",
                    TokenKind::String => "s",
                    TokenKind::JavaCode => "code",
                    TokenKind::Ws => " ",
                    other => other.text().unwrap_or_default(),
                };
                let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
                let token = Token::new(
                    kind,
                    text,
                    Span::new(offset, offset + len),
                    LineCol::new(1, offset + 1),
                );
                offset += len + 1;
                token
            })
            .collect();
        TokenList::new(tokens)
    }

    /// Number of tokens, including hidden ones and the final `Eof`.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Never true: the list always holds at least the `Eof` token.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// The final `Eof` token.
    pub fn eof(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }

    /// Kinds of all default-channel tokens, `Eof` included.
    pub fn visible_kinds(&self) -> Vec<TokenKind> {
        self.tokens
            .iter()
            .filter(|t| !t.is_hidden())
            .map(|t| t.kind)
            .collect()
    }
}

impl Default for TokenList {
    fn default() -> Self {
        TokenList::new(Vec::new())
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
