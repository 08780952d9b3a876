//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before text
//! cooking and conversion to [`TokenKind`].

use gdl_ir::TokenKind;
use logos::Logos;

/// Raw token from logos.
///
/// Keywords are matched as tokens and win over `ID` on equal length; `^`
/// escapes a keyword into an identifier.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\r\n]+")]
    Ws,
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    MlComment,
    #[regex(r"//[^\n\r]*")]
    SlComment,

    #[token("grammar")]
    Grammar,
    #[token("with")]
    With,
    #[token("hidden")]
    Hidden,
    #[token("terminal")]
    Terminal,
    #[token("enum")]
    Enum,
    #[token("fragment")]
    Fragment,
    #[token("returns")]
    Returns,
    #[token("generate")]
    Generate,
    #[token("import")]
    Import,
    #[token("as")]
    As,
    #[token("current")]
    Current,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("tokenLimit")]
    TokenLimit,
    #[token("hoistingDebug")]
    HoistingDebug,
    #[token("EOF")]
    EofKw,

    #[token("::")]
    ColonColon,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token(",")]
    Comma,
    #[token("|")]
    Pipe,
    #[token("&")]
    Amp,
    #[token("?=>")]
    GatedArrow,
    #[token("?=")]
    QuestionEq,
    #[token("?")]
    Question,
    #[token("*")]
    Star,
    #[token("+=")]
    PlusEq,
    #[token("+")]
    Plus,
    #[token("=>")]
    FatArrow,
    #[token("=")]
    Eq,
    #[token("->")]
    Arrow,
    #[token("..")]
    DotDot,
    #[token(".")]
    Dot,
    #[token("!")]
    Bang,

    #[regex(r"\^?[a-zA-Z_][a-zA-Z_0-9]*")]
    Id,
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\]|\\.)*'")]
    String,
    #[regex(r"\$\$([^$]|\$[^$])*\$\$")]
    JavaCode,
}

impl RawToken {
    pub(crate) fn kind(self) -> TokenKind {
        match self {
            RawToken::Ws => TokenKind::Ws,
            RawToken::MlComment => TokenKind::MlComment,
            RawToken::SlComment => TokenKind::SlComment,
            RawToken::Grammar => TokenKind::Grammar,
            RawToken::With => TokenKind::With,
            RawToken::Hidden => TokenKind::Hidden,
            RawToken::Terminal => TokenKind::Terminal,
            RawToken::Enum => TokenKind::Enum,
            RawToken::Fragment => TokenKind::Fragment,
            RawToken::Returns => TokenKind::Returns,
            RawToken::Generate => TokenKind::Generate,
            RawToken::Import => TokenKind::Import,
            RawToken::As => TokenKind::As,
            RawToken::Current => TokenKind::Current,
            RawToken::True => TokenKind::True,
            RawToken::False => TokenKind::False,
            RawToken::TokenLimit => TokenKind::TokenLimit,
            RawToken::HoistingDebug => TokenKind::HoistingDebug,
            RawToken::EofKw => TokenKind::EofKw,
            RawToken::ColonColon => TokenKind::ColonColon,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Pipe => TokenKind::Pipe,
            RawToken::Amp => TokenKind::Amp,
            RawToken::GatedArrow => TokenKind::GatedArrow,
            RawToken::QuestionEq => TokenKind::QuestionEq,
            RawToken::Question => TokenKind::Question,
            RawToken::Star => TokenKind::Star,
            RawToken::PlusEq => TokenKind::PlusEq,
            RawToken::Plus => TokenKind::Plus,
            RawToken::FatArrow => TokenKind::FatArrow,
            RawToken::Eq => TokenKind::Eq,
            RawToken::Arrow => TokenKind::Arrow,
            RawToken::DotDot => TokenKind::DotDot,
            RawToken::Dot => TokenKind::Dot,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Id => TokenKind::Id,
            RawToken::Int => TokenKind::Int,
            RawToken::String => TokenKind::String,
            RawToken::JavaCode => TokenKind::JavaCode,
        }
    }
}
