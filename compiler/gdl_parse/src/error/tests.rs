use gdl_diagnostic::Severity;
use pretty_assertions::assert_eq;

use super::*;

fn unexpected() -> SyntaxError {
    SyntaxError::UnexpectedToken {
        expected: TokenKind::Semicolon,
        found: TokenKind::Eof,
        span: Span::point(12),
        pos: LineCol::new(2, 5),
    }
}

#[test]
fn test_unexpected_token_message() {
    assert_eq!(unexpected().to_string(), "expected `;`, found end of file");
    assert_eq!(unexpected().code(), ErrorCode::E1001);
    assert_eq!(unexpected().pos(), LineCol::new(2, 5));
}

#[test]
fn test_no_viable_alternative_message() {
    let err = SyntaxError::NoViableAlternative {
        decision: DecisionId::AssignmentOperator,
        found: TokenKind::Colon,
        expected: TokenSet::of(&[TokenKind::Eq, TokenKind::PlusEq]),
        span: Span::new(4, 5),
        pos: LineCol::new(1, 5),
    };
    assert_eq!(
        err.to_string(),
        "no viable alternative at `:` in Assignment.operator, expected `=` or `+=`"
    );
    assert_eq!(err.code(), ErrorCode::E1002);
}

#[test]
fn test_lexical_error_is_transparent() {
    let lex = LexError::Unrecognized {
        text: "#".to_owned(),
        span: Span::new(0, 1),
        pos: LineCol::START,
    };
    let err = SyntaxError::from(lex.clone());
    assert_eq!(err.to_string(), lex.to_string());
    assert_eq!(err.code(), ErrorCode::E0001);
    assert_eq!(err.to_diagnostic(), lex.to_diagnostic());
}

#[test]
fn test_only_stack_exhaustion_is_fatal() {
    let fatal = SyntaxError::StackExhausted {
        depth: 8,
        span: Span::DUMMY,
        pos: LineCol::START,
    };
    assert!(fatal.is_fatal());
    assert!(!unexpected().is_fatal());
    assert!(matches!(Interrupt::from(fatal), Interrupt::Fatal(_)));
    assert!(matches!(Interrupt::from(unexpected()), Interrupt::Syntax(_)));
}

#[test]
fn test_to_diagnostic() {
    let diag = unexpected().to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.message, "expected `;`, found end of file");
    assert_eq!(diag.pos, Some(LineCol::new(2, 5)));
    assert_eq!(diag.primary_span(), Some(Span::point(12)));
}

#[test]
fn test_invalid_integer_note() {
    let err = SyntaxError::InvalidInteger {
        text: "99999999999".to_owned(),
        span: Span::new(0, 11),
        pos: LineCol::START,
    };
    assert_eq!(
        err.to_string(),
        "integer literal \"99999999999\" does not fit in 32 bits"
    );
    assert_eq!(err.to_diagnostic().notes.len(), 1);
}
