//! Parse error types.
//!
//! [`SyntaxError`] is what callers see: one entry per recovered or fatal
//! error, convertible to a [`Diagnostic`]. Rule procedures propagate the
//! crate-private [`Interrupt`] instead, which separates errors the nearest
//! rule recovers from errors that must unwind the whole parse.

use gdl_diagnostic::{Diagnostic, ErrorCode};
use gdl_ir::{LineCol, Span, TokenKind};
use gdl_lexer::LexError;

use crate::decision::DecisionId;
use crate::recovery::TokenSet;

/// A syntax error found while scanning or parsing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// The scanner could not classify some input. The input reaches the
    /// parser as an `AnyOther` token.
    #[error(transparent)]
    Lexical(#[from] LexError),

    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
        pos: LineCol,
    },

    #[error("no viable alternative at {found} in {decision}, expected {}", .expected.format_expected())]
    NoViableAlternative {
        decision: DecisionId,
        found: TokenKind,
        expected: TokenSet,
        span: Span,
        pos: LineCol,
    },

    #[error("integer literal {text:?} does not fit in 32 bits")]
    InvalidInteger { text: String, span: Span, pos: LineCol },

    #[error("grammar nesting exceeds the maximum depth of {depth}")]
    StackExhausted { depth: usize, span: Span, pos: LineCol },
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Lexical(err) => err.span(),
            SyntaxError::UnexpectedToken { span, .. }
            | SyntaxError::NoViableAlternative { span, .. }
            | SyntaxError::InvalidInteger { span, .. }
            | SyntaxError::StackExhausted { span, .. } => *span,
        }
    }

    pub fn pos(&self) -> LineCol {
        match self {
            SyntaxError::Lexical(err) => err.pos(),
            SyntaxError::UnexpectedToken { pos, .. }
            | SyntaxError::NoViableAlternative { pos, .. }
            | SyntaxError::InvalidInteger { pos, .. }
            | SyntaxError::StackExhausted { pos, .. } => *pos,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SyntaxError::Lexical(_) => ErrorCode::E0001,
            SyntaxError::UnexpectedToken { .. } => ErrorCode::E1001,
            SyntaxError::NoViableAlternative { .. } => ErrorCode::E1002,
            SyntaxError::InvalidInteger { .. } => ErrorCode::E1003,
            SyntaxError::StackExhausted { .. } => ErrorCode::E1004,
        }
    }

    /// Fatal errors stop the parse; everything else is recovered.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SyntaxError::StackExhausted { .. })
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = match self {
            SyntaxError::Lexical(err) => return err.to_diagnostic(),
            SyntaxError::UnexpectedToken { expected, .. } => Diagnostic::error(self.code())
                .with_label(self.span(), format!("expected {expected} here")),
            SyntaxError::NoViableAlternative {
                decision, found, ..
            } => Diagnostic::error(self.code())
                .with_label(self.span(), format!("unexpected {found}"))
                .with_note(format!("while choosing an alternative of `{decision}`")),
            SyntaxError::InvalidInteger { .. } => Diagnostic::error(self.code())
                .with_label(self.span(), "integer literal out of range")
                .with_note(format!("the largest allowed value is {}", u32::MAX)),
            SyntaxError::StackExhausted { .. } => Diagnostic::error(self.code())
                .with_label(self.span(), "nesting too deep here")
                .with_note("parsing stopped at this point"),
        };
        diag.with_message(self.to_string()).with_pos(self.pos())
    }
}

/// Why a rule body stopped early.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Interrupt {
    /// Caught and recovered by the nearest enclosing rule procedure.
    Syntax(SyntaxError),
    /// Unwinds every rule procedure up to the entry point.
    Fatal(SyntaxError),
}

impl From<SyntaxError> for Interrupt {
    fn from(err: SyntaxError) -> Self {
        if err.is_fatal() {
            Interrupt::Fatal(err)
        } else {
            Interrupt::Syntax(err)
        }
    }
}

#[cfg(test)]
mod tests;
