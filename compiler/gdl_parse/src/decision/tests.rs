use std::cell::Cell;

use gdl_ir::TokenKind::{self, *};

use super::*;

fn classify(id: DecisionId, kinds: &[TokenKind]) -> Result<Prediction, NoViableAlt> {
    DecisionTables::classify(id, kinds)
}

fn alt(id: DecisionId, kinds: &[TokenKind]) -> u8 {
    match classify(id, kinds) {
        Ok(Prediction::Alt(alt)) => alt,
        other => panic!("{id}: expected an alternative for {kinds:?}, got {other:?}"),
    }
}

/// Lookahead that records the deepest position it was asked for.
struct Recording<'a> {
    kinds: &'a [TokenKind],
    deepest: Cell<usize>,
}

impl Lookahead for Recording<'_> {
    fn la(&self, k: usize) -> TokenKind {
        self.deepest.set(self.deepest.get().max(k));
        self.kinds.la(k)
    }
}

#[test]
fn test_points_are_in_id_order() {
    for (i, point) in DecisionTables::points().iter().enumerate() {
        assert_eq!(point.id as usize, i, "{} is out of order", point.name);
    }
    assert_eq!(DecisionTables::points().len(), DecisionId::COUNT);
}

#[test]
fn test_max_depth_matches_dfa() {
    for point in DecisionTables::points() {
        assert_eq!(point.max_depth, point.start.depth(), "{}", point.name);
    }
    let deepest = DecisionTables::points()
        .iter()
        .map(|p| p.max_depth)
        .max()
        .unwrap_or(0);
    assert_eq!(deepest, 3);
}

#[test]
fn test_classifier_never_reads_past_max_depth() {
    let inputs: &[&[TokenKind]] = &[
        &[Id, Eq, String],
        &[FatArrow, Id, PlusEq],
        &[FatArrow, LParen],
        &[TokenLimit, LParen, Int],
        &[Generate, Id, String],
        &[Import, String],
        &[Id, ColonColon, Id],
        &[Id, Colon],
        &[Eof],
        &[Semicolon, Semicolon, Semicolon, Semicolon],
    ];
    for point in DecisionTables::points() {
        for kinds in inputs {
            let la = Recording {
                kinds,
                deepest: Cell::new(0),
            };
            let _ = DecisionTables::classify(point.id, &la);
            assert!(
                la.deepest.get() <= point.max_depth,
                "{} read la({}) on {kinds:?}",
                point.name,
                la.deepest.get()
            );
        }
    }
}

#[test]
fn test_abstract_token_with_cardinality() {
    let id = DecisionId::AbstractTokenWithCardinality;
    assert_eq!(alt(id, &[Id, Eq, String]), 1);
    assert_eq!(alt(id, &[String, Star]), 2);
    assert_eq!(alt(id, &[Id, Semicolon]), 3);
    assert_eq!(alt(id, &[LParen, Id]), 4);
    assert_eq!(alt(id, &[FatArrow, String]), 5);
    assert_eq!(alt(id, &[Arrow, Id, Semicolon]), 6);
    assert_eq!(alt(id, &[FatArrow, LParen]), 7);
    // `=> name = ...` is a predicated assignment
    assert_eq!(alt(id, &[FatArrow, Id, Eq]), 1);
    // soft keywords are rule names too
    assert_eq!(alt(id, &[Generate, QuestionEq, String]), 1);
}

#[test]
fn test_soft_keywords_need_second_token() {
    let id = DecisionId::MetamodelLoop;
    assert_eq!(alt(id, &[Generate, Id, String]), 1);
    assert_eq!(alt(id, &[Import, String]), 2);
    // a rule named `generate`
    assert_eq!(alt(id, &[Generate, Colon]), 3);
    assert_eq!(alt(id, &[Id, Colon]), 3);

    let id = DecisionId::TokenLimitClause;
    assert_eq!(alt(id, &[TokenLimit, LParen, Int]), 1);
    assert_eq!(alt(id, &[TokenLimit, Colon]), 2);
}

#[test]
fn test_type_ref_and_named_argument() {
    assert_eq!(alt(DecisionId::TypeRefMetamodel, &[Id, ColonColon, Id]), 1);
    assert_eq!(alt(DecisionId::TypeRefMetamodel, &[Id, Colon]), 2);
    assert_eq!(alt(DecisionId::NamedArgument, &[Id, Eq, True]), 1);
    assert_eq!(alt(DecisionId::NamedArgument, &[Id, Gt]), 2);
    assert_eq!(alt(DecisionId::NamedArgument, &[Bang, Id]), 2);
}

#[test]
fn test_optional_parts_fall_back_to_exit() {
    assert_eq!(alt(DecisionId::Cardinality, &[Star]), 2);
    assert_eq!(alt(DecisionId::Cardinality, &[Semicolon]), 4);
    assert_eq!(alt(DecisionId::UsedGrammars, &[Eof]), 2);
    assert_eq!(alt(DecisionId::GroupLoop, &[Pipe]), 2);
    assert_eq!(alt(DecisionId::GroupLoop, &[JavaCode]), 1);
}

#[test]
fn test_embedded_code_probes() {
    assert_eq!(
        classify(DecisionId::EmbeddedCode, &[JavaCode, Question]),
        Ok(Prediction::Probe(&[1, 2, 3]))
    );
    assert_eq!(
        classify(DecisionId::EmbeddedCode, &[JavaCode]),
        Ok(Prediction::Probe(&[1, 2, 3]))
    );
}

#[test]
fn test_no_viable_alternative_reports_expected() {
    let err = classify(DecisionId::AssignmentOperator, &[Colon]);
    assert_eq!(
        err,
        Err(NoViableAlt {
            decision: DecisionId::AssignmentOperator,
            depth: 1,
            found: Colon,
            expected: TokenSet::of(&[Eq, PlusEq, QuestionEq]),
        })
    );

    let err = classify(DecisionId::AbstractTokenWithCardinality, &[FatArrow, Semicolon]);
    match err {
        Err(e) => {
            assert_eq!(e.depth, 2);
            assert_eq!(e.found, Semicolon);
            assert!(e.expected.contains(String));
            assert!(e.expected.contains(LParen));
            assert!(e.expected.contains(Id));
        }
        Ok(p) => panic!("expected no viable alternative, got {p:?}"),
    }
}

#[test]
fn test_rules_loop_stops_only_at_eof() {
    assert_eq!(alt(DecisionId::RulesLoop, &[Terminal]), 1);
    assert_eq!(alt(DecisionId::RulesLoop, &[Eof]), 2);
    assert!(classify(DecisionId::RulesLoop, &[Semicolon]).is_err());
}

#[test]
fn test_decision_names() {
    assert_eq!(DecisionId::EnumLiteralValue.to_string(), "EnumLiteral.literal");
    assert_eq!(
        DecisionTables::point(DecisionId::ConditionalBranch).rule,
        Rule::ConditionalBranch
    );
}
