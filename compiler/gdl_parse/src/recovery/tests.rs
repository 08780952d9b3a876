use super::*;
use gdl_ir::{Rule, TokenList};

fn tokens(source: &str) -> TokenList {
    gdl_lexer::lex(source).tokens
}

#[test]
fn test_token_set_empty() {
    let set = TokenSet::new();
    assert_eq!(set.iter().count(), 0);
    assert!(!set.contains(TokenKind::Colon));
}

#[test]
fn test_token_set_single() {
    let set = TokenSet::single(TokenKind::Colon);
    assert_eq!(set.iter().count(), 1);
    assert!(set.contains(TokenKind::Colon));
    assert!(!set.contains(TokenKind::Semicolon));
}

#[test]
fn test_token_set_with_and_of() {
    let built = TokenSet::new()
        .with(TokenKind::Pipe)
        .with(TokenKind::Amp)
        .with(TokenKind::Semicolon);
    let listed = TokenSet::of(&[TokenKind::Semicolon, TokenKind::Amp, TokenKind::Pipe]);

    assert_eq!(built, listed);
    assert_eq!(built.iter().count(), 3);
    assert!(!built.contains(TokenKind::Plus));
}

#[test]
fn test_token_set_union() {
    let a = TokenSet::of(&[TokenKind::Id, TokenKind::String]);
    let b = TokenSet::of(&[TokenKind::String, TokenKind::Int]);

    let union = a.union(b);
    assert_eq!(union.iter().count(), 3);
    assert!(union.contains(TokenKind::Int));
    assert_eq!(union, TokenSet::of(&[TokenKind::Int, TokenKind::Id, TokenKind::String]));
}

#[test]
fn test_token_set_insert_is_idempotent() {
    let mut set = TokenSet::new();
    set.insert(TokenKind::Plus);
    set.insert(TokenKind::Plus);
    assert_eq!(set, TokenSet::single(TokenKind::Plus));
}

#[test]
fn test_token_set_iter_in_discriminant_order() {
    let set: TokenSet = [TokenKind::Eof, TokenKind::Grammar, TokenKind::Colon]
        .into_iter()
        .collect();
    let kinds: Vec<TokenKind> = set.iter().collect();
    assert_eq!(kinds, vec![TokenKind::Grammar, TokenKind::Colon, TokenKind::Eof]);
}

#[test]
fn test_format_expected() {
    assert_eq!(TokenSet::new().format_expected(), "nothing");
    assert_eq!(TokenSet::single(TokenKind::LParen).format_expected(), "`(`");
    assert_eq!(
        TokenSet::of(&[TokenKind::Eq, TokenKind::PlusEq]).format_expected(),
        "`=` or `+=`"
    );
    assert_eq!(
        TokenSet::of(&[TokenKind::Comma, TokenKind::RParen, TokenKind::Id]).format_expected(),
        "`)`, `,`, or identifier"
    );
}

#[test]
fn test_valid_id_includes_soft_keywords() {
    for kind in [
        TokenKind::Id,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Generate,
        TokenKind::Import,
        TokenKind::TokenLimit,
    ] {
        assert!(follow::VALID_ID.contains(kind), "{kind:?}");
    }
    assert!(!follow::VALID_ID.contains(TokenKind::Grammar));
    assert!(!follow::VALID_ID.contains(TokenKind::Returns));
}

#[test]
fn test_only_top_level_rules_follow_with_eof() {
    for rule in [
        Rule::Grammar,
        Rule::AbstractRule,
        Rule::ParserRule,
        Rule::TerminalRule,
        Rule::EnumRule,
    ] {
        assert!(follow::of(rule).contains(TokenKind::Eof), "{rule}");
    }
    for rule in [
        Rule::Assignment,
        Rule::Alternatives,
        Rule::Group,
        Rule::TypeRef,
        Rule::Disjunction,
        Rule::TerminalToken,
        Rule::EnumLiteralDeclaration,
        Rule::HiddenTokens,
    ] {
        assert!(!follow::of(rule).contains(TokenKind::Eof), "{rule}");
    }
}

#[test]
fn test_body_follow_sets() {
    assert!(follow::of(Rule::Alternatives).contains(TokenKind::Semicolon));
    assert!(follow::of(Rule::Alternatives).contains(TokenKind::RParen));
    assert!(follow::of(Rule::Group).contains(TokenKind::Pipe));
    assert!(follow::of(Rule::Group).contains(TokenKind::Amp));
    assert!(follow::of(Rule::Assignment).contains(TokenKind::Star));
    assert!(follow::of(Rule::Disjunction).contains(TokenKind::Gt));
}

#[test]
fn test_synchronize_to_rule_start() {
    let tokens = tokens(": 'a' ) ; Next");
    let mut cursor = Cursor::new(&tokens);

    assert!(synchronize(&mut cursor, follow::TOP_LEVEL));
    assert_eq!(cursor.la(1), TokenKind::Id);
    assert_eq!(cursor.position(), 4);
}

#[test]
fn test_synchronize_stays_on_follow_token() {
    let tokens = tokens("; rest");
    let mut cursor = Cursor::new(&tokens);

    assert!(synchronize(&mut cursor, TokenSet::single(TokenKind::Semicolon)));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_synchronize_hits_end_of_input() {
    let tokens = tokens("'a' 'b' 'c'");
    let mut cursor = Cursor::new(&tokens);

    assert!(!synchronize(&mut cursor, TokenSet::single(TokenKind::Semicolon)));
    assert!(cursor.is_at_end());
}

#[test]
fn test_synchronize_eof_counts_as_found() {
    let tokens = tokens("'a' 'b'");
    let mut cursor = Cursor::new(&tokens);

    assert!(synchronize(&mut cursor, follow::TOP_LEVEL));
    assert!(cursor.is_at_end());
}
