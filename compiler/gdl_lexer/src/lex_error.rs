use gdl_diagnostic::{Diagnostic, ErrorCode};
use gdl_ir::{LineCol, Span};

/// Error produced while scanning.
///
/// Scanning never stops on an error: the offending input is emitted as an
/// [`AnyOther`](gdl_ir::TokenKind::AnyOther) token and scanning resumes.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("unrecognized input {text:?}")]
    Unrecognized {
        text: String,
        span: Span,
        pos: LineCol,
    },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::Unrecognized { span, .. } => *span,
        }
    }

    pub fn pos(&self) -> LineCol {
        match self {
            LexError::Unrecognized { pos, .. } => *pos,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(ErrorCode::E0001)
            .with_message(self.to_string())
            .with_pos(self.pos())
            .with_label(self.span(), "not a GDL token")
    }
}
