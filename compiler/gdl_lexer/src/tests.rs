use gdl_ir::{Channel, LineCol, Span, TokenKind};
use pretty_assertions::assert_eq;

use super::*;

fn visible(source: &str) -> Vec<(TokenKind, String)> {
    lex(source)
        .tokens
        .iter()
        .filter(|t| t.channel == Channel::Default)
        .map(|t| (t.kind, t.text.clone()))
        .collect()
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).tokens.visible_kinds()
}

#[test]
fn test_lex_grammar_header() {
    assert_eq!(
        kinds("grammar Foo with Bar hidden(WS, COMMENT)"),
        vec![
            TokenKind::Grammar,
            TokenKind::Id,
            TokenKind::With,
            TokenKind::Id,
            TokenKind::Hidden,
            TokenKind::LParen,
            TokenKind::Id,
            TokenKind::Comma,
            TokenKind::Id,
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_maximal_munch_operators() {
    assert_eq!(
        kinds("?=> ?= ? += + => = -> .. . :: :"),
        vec![
            TokenKind::GatedArrow,
            TokenKind::QuestionEq,
            TokenKind::Question,
            TokenKind::PlusEq,
            TokenKind::Plus,
            TokenKind::FatArrow,
            TokenKind::Eq,
            TokenKind::Arrow,
            TokenKind::DotDot,
            TokenKind::Dot,
            TokenKind::ColonColon,
            TokenKind::Colon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keywords_and_identifiers() {
    assert_eq!(
        visible("tokenLimit tokenLimits ^grammar EOF"),
        vec![
            (TokenKind::TokenLimit, "tokenLimit".to_owned()),
            (TokenKind::Id, "tokenLimits".to_owned()),
            (TokenKind::Id, "grammar".to_owned()),
            (TokenKind::EofKw, "EOF".to_owned()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn test_string_literals_are_unescaped() {
    assert_eq!(
        visible(r#"'a' "b\"c" 'd\n' '\q'"#),
        vec![
            (TokenKind::String, "a".to_owned()),
            (TokenKind::String, "b\"c".to_owned()),
            (TokenKind::String, "d\n".to_owned()),
            (TokenKind::String, r"\q".to_owned()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn test_embedded_code_is_one_token() {
    assert_eq!(
        visible("$$ if (x) { $y } $$ ?=>"),
        vec![
            (TokenKind::JavaCode, " if (x) { $y } ".to_owned()),
            (TokenKind::GatedArrow, "?=>".to_owned()),
            (TokenKind::Eof, String::new()),
        ]
    );
}

#[test]
fn test_trivia_on_hidden_channel() {
    let out = lex("a /* c */ b // line\n");
    let hidden: Vec<TokenKind> = out
        .tokens
        .iter()
        .filter(|t| t.is_hidden())
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        hidden,
        vec![
            TokenKind::Ws,
            TokenKind::MlComment,
            TokenKind::Ws,
            TokenKind::Ws,
            TokenKind::SlComment,
            TokenKind::Ws,
        ]
    );
    assert!(out.errors.is_empty());
}

#[test]
fn test_positions() {
    let out = lex("grammar G\n  Foo: 'x';");
    let foo = out
        .tokens
        .iter()
        .find(|t| t.text == "Foo")
        .map(|t| (t.span, t.pos));
    assert_eq!(foo, Some((Span::new(12, 15), LineCol::new(2, 3))));
    assert_eq!(out.tokens.eof().span, Span::point(21));
}

#[test]
fn test_unrecognized_input_becomes_any_other() {
    let out = lex("Foo # Bar");
    assert_eq!(
        out.tokens.visible_kinds(),
        vec![
            TokenKind::Id,
            TokenKind::AnyOther,
            TokenKind::Id,
            TokenKind::Eof
        ]
    );
    assert_eq!(
        out.errors,
        vec![LexError::Unrecognized {
            text: "#".to_owned(),
            span: Span::new(4, 5),
            pos: LineCol::new(1, 5),
        }]
    );
    assert_eq!(out.errors[0].to_diagnostic().code.as_str(), "E0001");
}

#[test]
fn test_empty_source() {
    let out = lex("");
    assert_eq!(out.tokens.len(), 1);
    assert_eq!(out.tokens.eof().kind, TokenKind::Eof);
}
