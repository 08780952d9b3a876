//! Token kinds for GDL grammar files.

use std::fmt;

/// Token kinds for GDL.
///
/// A closed, data-free enumeration: the token text lives on [`Token`](super::Token).
/// The discriminant doubles as the bit index in lookahead and follow sets, so
/// there must never be more than 64 variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // Keywords
    Grammar,
    With,
    Hidden,
    Terminal,
    Enum,
    Fragment,
    Returns,
    Generate,
    Import,
    As,
    Current,
    True,
    False,
    TokenLimit,
    HoistingDebug,
    /// The `EOF` keyword of terminal rules (not end of input).
    EofKw,

    // Punctuation
    Colon,      // :
    Semicolon,  // ;
    ColonColon, // ::
    LParen,     // (
    RParen,     // )
    LBrace,     // {
    RBrace,     // }
    LBracket,   // [
    RBracket,   // ]
    Lt,         // <
    Gt,         // >
    Comma,      // ,
    Pipe,       // |
    Amp,        // &
    Question,   // ?
    Star,       // *
    Plus,       // +
    Eq,         // =
    PlusEq,     // +=
    QuestionEq, // ?=
    FatArrow,   // =>
    Arrow,      // ->
    GatedArrow, // ?=>
    Dot,        // .
    DotDot,     // ..
    Bang,       // !

    // Lexical classes
    Id,
    Int,
    String,
    /// Embedded action code block, `$$ ... $$`.
    JavaCode,
    MlComment,
    SlComment,
    Ws,
    /// Input the scanner could not classify.
    AnyOther,

    /// End of input.
    Eof,
}

impl TokenKind {
    /// Number of token kinds.
    pub const COUNT: usize = 51;

    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; Self::COUNT] = [
        TokenKind::Grammar,
        TokenKind::With,
        TokenKind::Hidden,
        TokenKind::Terminal,
        TokenKind::Enum,
        TokenKind::Fragment,
        TokenKind::Returns,
        TokenKind::Generate,
        TokenKind::Import,
        TokenKind::As,
        TokenKind::Current,
        TokenKind::True,
        TokenKind::False,
        TokenKind::TokenLimit,
        TokenKind::HoistingDebug,
        TokenKind::EofKw,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::ColonColon,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::Lt,
        TokenKind::Gt,
        TokenKind::Comma,
        TokenKind::Pipe,
        TokenKind::Amp,
        TokenKind::Question,
        TokenKind::Star,
        TokenKind::Plus,
        TokenKind::Eq,
        TokenKind::PlusEq,
        TokenKind::QuestionEq,
        TokenKind::FatArrow,
        TokenKind::Arrow,
        TokenKind::GatedArrow,
        TokenKind::Dot,
        TokenKind::DotDot,
        TokenKind::Bang,
        TokenKind::Id,
        TokenKind::Int,
        TokenKind::String,
        TokenKind::JavaCode,
        TokenKind::MlComment,
        TokenKind::SlComment,
        TokenKind::Ws,
        TokenKind::AnyOther,
        TokenKind::Eof,
    ];

    /// Discriminant index, used as a bit position in token sets.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`index`](Self::index).
    pub fn from_index(index: u8) -> Option<TokenKind> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Source spelling of keywords and punctuation; `None` for lexical classes.
    pub const fn text(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Grammar => "grammar",
            TokenKind::With => "with",
            TokenKind::Hidden => "hidden",
            TokenKind::Terminal => "terminal",
            TokenKind::Enum => "enum",
            TokenKind::Fragment => "fragment",
            TokenKind::Returns => "returns",
            TokenKind::Generate => "generate",
            TokenKind::Import => "import",
            TokenKind::As => "as",
            TokenKind::Current => "current",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::TokenLimit => "tokenLimit",
            TokenKind::HoistingDebug => "hoistingDebug",
            TokenKind::EofKw => "EOF",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::ColonColon => "::",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Comma => ",",
            TokenKind::Pipe => "|",
            TokenKind::Amp => "&",
            TokenKind::Question => "?",
            TokenKind::Star => "*",
            TokenKind::Plus => "+",
            TokenKind::Eq => "=",
            TokenKind::PlusEq => "+=",
            TokenKind::QuestionEq => "?=",
            TokenKind::FatArrow => "=>",
            TokenKind::Arrow => "->",
            TokenKind::GatedArrow => "?=>",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::Bang => "!",
            TokenKind::Id
            | TokenKind::Int
            | TokenKind::String
            | TokenKind::JavaCode
            | TokenKind::MlComment
            | TokenKind::SlComment
            | TokenKind::Ws
            | TokenKind::AnyOther
            | TokenKind::Eof => return None,
        };
        Some(text)
    }

    /// Human-readable name for error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Id => "identifier",
            TokenKind::Int => "integer",
            TokenKind::String => "string",
            TokenKind::JavaCode => "embedded code",
            TokenKind::MlComment | TokenKind::SlComment => "comment",
            TokenKind::Ws => "whitespace",
            TokenKind::AnyOther => "unrecognized input",
            TokenKind::Eof => "end of file",
            other => other.text().unwrap_or("token"),
        }
    }

    /// Whether the scanner puts this kind on the hidden channel.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Ws | TokenKind::MlComment | TokenKind::SlComment
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            Some(text) => write!(f, "`{text}`"),
            None => f.write_str(self.display_name()),
        }
    }
}
