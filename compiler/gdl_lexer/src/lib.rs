//! Scanner for GDL grammar files, built on logos.
//!
//! Produces a [`TokenList`] holding both channels: whitespace and comments
//! are emitted on the hidden channel, everything else on the default one.
//! Maximal munch is logos' longest match; embedded `$$ ... $$` code blocks
//! come out as a single opaque token.
//!
//! Token text is cooked:
//! - `STRING`: the content between the quotes, escapes resolved
//! - `ID`: a leading `^` (keyword escape) is dropped
//! - `JAVACODE_STRING`: the raw code between the `$$` delimiters

mod escape;
mod lex_error;
mod raw_token;

pub use lex_error::LexError;

use gdl_ir::{LineIndex, Span, Token, TokenKind, TokenList};
use logos::Logos;

use crate::escape::unescape_string;
use crate::raw_token::RawToken;

/// Result of scanning one source.
#[derive(Clone, Debug)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

/// Scan `source` into tokens.
///
/// Offsets past `u32::MAX` are clamped; sources that large are not
/// supported.
pub fn lex(source: &str) -> LexOutput {
    let index = LineIndex::new(source);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let range = logos.span();
        let pos = index.line_col(range.start);
        let span = Span::try_from_range(range).unwrap_or(Span::point(u32::MAX));
        let slice = logos.slice();

        match result {
            Ok(raw) => {
                let kind = raw.kind();
                tokens.push(Token::new(kind, cook(kind, slice), span, pos));
            }
            Err(()) => {
                errors.push(LexError::Unrecognized {
                    text: slice.to_owned(),
                    span,
                    pos,
                });
                tokens.push(Token::new(TokenKind::AnyOther, slice, span, pos));
            }
        }
    }

    LexOutput {
        tokens: TokenList::new(tokens),
        errors,
    }
}

/// Token text as the parser sees it.
fn cook(kind: TokenKind, slice: &str) -> String {
    match kind {
        TokenKind::String => slice
            .get(1..slice.len().saturating_sub(1))
            .map(unescape_string)
            .unwrap_or_default(),
        TokenKind::Id => slice.strip_prefix('^').unwrap_or(slice).to_owned(),
        TokenKind::JavaCode => slice
            .strip_prefix("$$")
            .and_then(|s| s.strip_suffix("$$"))
            .unwrap_or(slice)
            .to_owned(),
        _ => slice.to_owned(),
    }
}

#[cfg(test)]
mod tests;
