//! Core parser tests.
//!
//! One or more tests per production: header clauses, parser rules and their
//! elements, conditions, terminal rules and enum rules.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use gdl_ir::{Ast, Element, Feature, Node, NodeKind, Rule, Span, TreeEvent, Value};
use pretty_assertions::assert_eq;

use super::parse_ok;
use crate::{parse_source, parse_with, AstBuilder, ParseOptions, TreeSink};

fn lines(lines: &[&str]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// The body (`alternatives`) of top-level rule `name`.
fn body<'a>(ast: &'a Ast, name: &str) -> &'a Node {
    let rule = ast.rule(name).expect("rule not found");
    &ast[ast[rule].child(Feature::Alternatives).expect("rule has no body")]
}

fn elements<'a>(ast: &'a Ast, node: &Node) -> Vec<&'a Node> {
    node.children(Feature::Elements).map(|id| &ast[id]).collect()
}

fn child<'a>(ast: &'a Ast, node: &Node, feature: Feature) -> &'a Node {
    &ast[node.child(feature).expect("feature not set")]
}

#[test]
fn test_grammar_header_and_rule() {
    let ast = parse_ok("grammar Foo with Bar hidden(WS, COMMENT) Foo: name=ID ;");

    assert_eq!(
        ast.dump(),
        lines(&[
            "Grammar",
            "  name = \"Foo\"",
            "  usedGrammars += \"Bar\"",
            "  definesHiddenTokens ?= true",
            "  hiddenTokens += \"WS\"",
            "  hiddenTokens += \"COMMENT\"",
            "  rules +=",
            "    ParserRule",
            "      name = \"Foo\"",
            "      alternatives =",
            "        Assignment",
            "          feature = \"name\"",
            "          operator = \"=\"",
            "          terminal =",
            "            RuleCall",
            "              rule = \"ID\"",
        ])
    );
}

#[test]
fn test_terminal_character_range() {
    let ast = parse_ok("grammar G terminal ID : ('a'..'z')+ ;");

    assert_eq!(
        ast.dump(),
        lines(&[
            "Grammar",
            "  name = \"G\"",
            "  rules +=",
            "    TerminalRule",
            "      name = \"ID\"",
            "      alternatives =",
            "        CharacterRange",
            "          left =",
            "            Keyword",
            "              value = \"a\"",
            "          right =",
            "            Keyword",
            "              value = \"z\"",
            "          cardinality = \"+\"",
        ])
    );
}

#[test]
fn test_grammar_header_order_independent() {
    let orders = [
        "grammar G hidden(X) tokenLimit(500) hoistingDebug { a = 1; } R: 'r';",
        "grammar G tokenLimit(500) hoistingDebug hidden(X) { a = 1; } R: 'r';",
        "grammar G hoistingDebug hidden(X) tokenLimit(500) { a = 1; } R: 'r';",
    ];
    let dumps: Vec<String> = orders.iter().map(|src| parse_ok(src).dump()).collect();
    assert_eq!(dumps[0], dumps[1]);
    assert_eq!(dumps[0], dumps[2]);

    let ast = parse_ok(orders[1]);
    let grammar = &ast[ast.root().unwrap()];
    assert_eq!(grammar.texts(Feature::HiddenTokens), vec!["X"]);
    assert_eq!(grammar.int(Feature::TokenLimit), Some(500));
    assert!(grammar.flag(Feature::Debug));
}

#[test]
fn test_partial_header() {
    let ast = parse_ok("grammar G tokenLimit(7) R: 'r';");
    let grammar = &ast[ast.root().unwrap()];
    assert_eq!(grammar.int(Feature::TokenLimit), Some(7));
    assert!(!grammar.flag(Feature::Debug));
    assert!(!grammar.flag(Feature::DefinesHiddenTokens));
}

#[test]
fn test_empty_hidden_list() {
    let ast = parse_ok("grammar G hidden() R: 'r';");
    let grammar = &ast[ast.root().unwrap()];
    assert!(grammar.flag(Feature::DefinesHiddenTokens));
    assert!(grammar.values(Feature::HiddenTokens).is_empty());
}

#[test]
fn test_parse_is_deterministic() {
    let source = "grammar G with H hidden(WS) R: a=ID | b+=[T] ; X: $$code$$ 'x' ;";
    let first = parse_source(source);
    let second = parse_source(source);

    assert_eq!(first.ast.dump(), second.ast.dump());
    assert_eq!(first.ast.nodes(), second.ast.nodes());
    assert_eq!(first.ast.events(), second.ast.events());
    assert_eq!(first.errors, second.errors);
}

#[test]
fn test_node_spans() {
    let ast = parse_ok("grammar Foo with Bar hidden(WS, COMMENT) Foo: name=ID ;");
    let grammar = &ast[ast.root().unwrap()];
    assert_eq!(grammar.span, Span::new(0, 55));

    let rule = &ast[ast.rule("Foo").unwrap()];
    assert_eq!(rule.span, Span::new(41, 55));

    let assignment = body(&ast, "Foo");
    assert_eq!(assignment.span, Span::new(46, 53));
}

#[test]
fn test_events_are_bracketed() {
    let ast = parse_ok("grammar G R: x='a'? ;");
    let events = ast.events();

    assert_eq!(events.first(), Some(&TreeEvent::Before(Element::Rule(Rule::Grammar))));
    assert_eq!(events.last(), Some(&TreeEvent::After(Element::Rule(Rule::Grammar))));

    let mut open = Vec::new();
    for event in events {
        match event {
            TreeEvent::Before(element) => open.push(*element),
            TreeEvent::After(element) => assert_eq!(open.pop(), Some(*element)),
        }
    }
    assert!(open.is_empty());

    assert!(events.contains(&TreeEvent::Before(Element::Feature(Feature::Cardinality))));
    assert!(events.contains(&TreeEvent::Before(Element::Keyword(gdl_ir::TokenKind::Colon))));
}

#[test]
fn test_grammar_options() {
    let ast = parse_ok(
        "grammar G { a = x; b = 3; c = \"s\"; d = true; e = false; } R: 'r';",
    );
    let grammar = &ast[ast.root().unwrap()];
    let values: Vec<(Option<&str>, Option<&Value>)> = grammar
        .children(Feature::Options)
        .map(|id| {
            let option = &ast[id];
            assert_eq!(option.kind, NodeKind::GrammarOption);
            let value = match option.get(Feature::Value) {
                Some(gdl_ir::FeatureValue::Single(value)) => Some(value),
                _ => None,
            };
            (option.text(Feature::Name), value)
        })
        .collect();

    assert_eq!(
        values,
        vec![
            (Some("a"), Some(&Value::text("x"))),
            (Some("b"), Some(&Value::Int(3))),
            (Some("c"), Some(&Value::text("s"))),
            (Some("d"), Some(&Value::text("true"))),
            (Some("e"), Some(&Value::text("false"))),
        ]
    );
}

#[test]
fn test_metamodel_declarations() {
    let ast = parse_ok(
        "grammar G generate g \"http://g\" import \"http://e\" as e R: 'r';",
    );
    let grammar = &ast[ast.root().unwrap()];
    let decls: Vec<&Node> = grammar
        .children(Feature::MetamodelDeclarations)
        .map(|id| &ast[id])
        .collect();
    assert_eq!(decls.len(), 2);

    assert_eq!(decls[0].kind, NodeKind::GeneratedMetamodel);
    assert_eq!(decls[0].text(Feature::Name), Some("g"));
    assert_eq!(decls[0].text(Feature::EPackage), Some("http://g"));
    assert_eq!(decls[0].text(Feature::Alias), None);

    assert_eq!(decls[1].kind, NodeKind::ReferencedMetamodel);
    assert_eq!(decls[1].text(Feature::EPackage), Some("http://e"));
    assert_eq!(decls[1].text(Feature::Alias), Some("e"));
}

#[test]
fn test_soft_keywords_as_rule_names() {
    let ast = parse_ok("grammar G generate: 'x'; tokenLimit: 'y'; import: 'z'; true: 't';");
    for name in ["generate", "tokenLimit", "import", "true"] {
        assert!(ast.rule(name).is_some(), "missing rule {name}");
    }
    let grammar = &ast[ast.root().unwrap()];
    assert_eq!(grammar.int(Feature::TokenLimit), None);
    assert_eq!(grammar.values(Feature::MetamodelDeclarations).len(), 0);
}

#[test]
fn test_qualified_names() {
    let ast = parse_ok("grammar org.example.G with a.B hidden(lib::WS) R: x=lib::ID;");
    let grammar = &ast[ast.root().unwrap()];
    assert_eq!(grammar.text(Feature::Name), Some("org.example.G"));
    assert_eq!(grammar.texts(Feature::UsedGrammars), vec!["a.B"]);
    assert_eq!(grammar.texts(Feature::HiddenTokens), vec!["lib::WS"]);

    let call = child(&ast, body(&ast, "R"), Feature::Terminal);
    assert_eq!(call.text(Feature::Rule), Some("lib::ID"));
}

#[test]
fn test_parser_rule_header_order_independent() {
    let a = parse_ok("grammar G R returns T hidden(WS): 'a';");
    let b = parse_ok("grammar G R hidden(WS) returns T: 'a';");
    assert_eq!(a.dump(), b.dump());

    let rule = &a[a.rule("R").unwrap()];
    assert!(rule.flag(Feature::DefinesHiddenTokens));
    assert_eq!(rule.texts(Feature::HiddenTokens), vec!["WS"]);
    let type_ref = child(&a, rule, Feature::Type);
    assert_eq!(type_ref.kind, NodeKind::TypeRef);
    assert_eq!(type_ref.text(Feature::Classifier), Some("T"));
    assert_eq!(type_ref.text(Feature::Metamodel), None);
}

#[test]
fn test_fragment_rule_with_wildcard() {
    let ast = parse_ok("grammar G fragment F*: 'a'; R: F;");
    let rule = &ast[ast.rule("F").unwrap()];
    assert!(rule.flag(Feature::Fragment));
    assert!(rule.flag(Feature::Wildcard));

    let plain = &ast[ast.rule("R").unwrap()];
    assert!(!plain.flag(Feature::Fragment));
}

#[test]
fn test_parameters_and_guards() {
    let ast = parse_ok("grammar G R<A, B>: <A & !B> 'x' | <false> 'y';");
    let rule = &ast[ast.rule("R").unwrap()];
    let params: Vec<Option<&str>> = rule
        .children(Feature::Parameters)
        .map(|id| ast[id].text(Feature::Name))
        .collect();
    assert_eq!(params, vec![Some("A"), Some("B")]);

    let alternatives = body(&ast, "R");
    assert_eq!(alternatives.kind, NodeKind::Alternatives);
    let branches = elements(&ast, alternatives);
    assert_eq!(branches.len(), 2);

    let guard = child(&ast, branches[0], Feature::GuardCondition);
    assert_eq!(guard.kind, NodeKind::Conjunction);
    assert_eq!(child(&ast, guard, Feature::Left).text(Feature::Parameter), Some("A"));
    let negation = child(&ast, guard, Feature::Right);
    assert_eq!(negation.kind, NodeKind::Negation);
    assert_eq!(child(&ast, negation, Feature::Value).text(Feature::Parameter), Some("B"));
    assert_eq!(elements(&ast, branches[0]).len(), 1);

    let literal = child(&ast, branches[1], Feature::GuardCondition);
    assert_eq!(literal.kind, NodeKind::LiteralCondition);
    assert!(!literal.flag(Feature::True));
}

#[test]
fn test_condition_precedence() {
    let ast = parse_ok("grammar G R<A, B, C>: <A | B & C | (A)> 'x';");
    let guard = child(&ast, body(&ast, "R"), Feature::GuardCondition);

    // ((A | (B & C)) | A)
    assert_eq!(guard.kind, NodeKind::Disjunction);
    let inner = child(&ast, guard, Feature::Left);
    assert_eq!(inner.kind, NodeKind::Disjunction);
    assert_eq!(child(&ast, inner, Feature::Right).kind, NodeKind::Conjunction);
    assert_eq!(child(&ast, guard, Feature::Right).kind, NodeKind::ParameterReference);
}

#[test]
fn test_rule_call_arguments() {
    let ast = parse_ok("grammar G R: Expr<A=true, !B>; Expr<A, B>: 'e';");
    let call = body(&ast, "R");
    assert_eq!(call.kind, NodeKind::RuleCall);
    assert_eq!(call.text(Feature::Rule), Some("Expr"));

    let args: Vec<&Node> = call.children(Feature::Arguments).map(|id| &ast[id]).collect();
    assert_eq!(args.len(), 2);
    assert_eq!(args[0].text(Feature::Parameter), Some("A"));
    assert!(args[0].flag(Feature::CalledByName));
    assert!(child(&ast, args[0], Feature::Value).flag(Feature::True));

    assert_eq!(args[1].text(Feature::Parameter), None);
    assert!(!args[1].flag(Feature::CalledByName));
    assert_eq!(child(&ast, args[1], Feature::Value).kind, NodeKind::Negation);
}

#[test]
fn test_assignments() {
    let ast = parse_ok("grammar G R: ref=[Type|ID] names+=('a'|'b')? ok?=Flag;");
    let group = body(&ast, "R");
    assert_eq!(group.kind, NodeKind::Group);
    let parts = elements(&ast, group);
    assert_eq!(parts.len(), 3);

    assert_eq!(parts[0].text(Feature::Feature), Some("ref"));
    assert_eq!(parts[0].text(Feature::Operator), Some("="));
    let reference = child(&ast, parts[0], Feature::Terminal);
    assert_eq!(reference.kind, NodeKind::CrossReference);
    assert_eq!(
        child(&ast, reference, Feature::Type).text(Feature::Classifier),
        Some("Type")
    );
    assert_eq!(
        child(&ast, reference, Feature::Terminal).text(Feature::Rule),
        Some("ID")
    );

    assert_eq!(parts[1].text(Feature::Operator), Some("+="));
    assert_eq!(parts[1].text(Feature::Cardinality), Some("?"));
    let choice = child(&ast, parts[1], Feature::Terminal);
    assert_eq!(choice.kind, NodeKind::Alternatives);
    assert_eq!(elements(&ast, choice).len(), 2);

    assert_eq!(parts[2].text(Feature::Operator), Some("?="));
    assert_eq!(
        child(&ast, parts[2], Feature::Terminal).text(Feature::Rule),
        Some("Flag")
    );
}

#[test]
fn test_actions() {
    let ast = parse_ok(
        "grammar G Expr: Primary ({Plus.left=current} '+' right=Primary)*; Primary: {Lit} value=INT;",
    );
    let expr = elements(&ast, body(&ast, "Expr"));
    assert_eq!(expr.len(), 2);
    assert_eq!(expr[0].kind, NodeKind::RuleCall);

    let repeated = expr[1];
    assert_eq!(repeated.kind, NodeKind::Group);
    assert_eq!(repeated.text(Feature::Cardinality), Some("*"));
    let inner = elements(&ast, repeated);
    assert_eq!(inner.len(), 3);
    assert_eq!(inner[0].kind, NodeKind::Action);
    assert_eq!(child(&ast, inner[0], Feature::Type).text(Feature::Classifier), Some("Plus"));
    assert_eq!(inner[0].text(Feature::Feature), Some("left"));
    assert_eq!(inner[0].text(Feature::Operator), Some("="));

    let primary = elements(&ast, body(&ast, "Primary"));
    assert_eq!(primary[0].kind, NodeKind::Action);
    assert_eq!(primary[0].text(Feature::Feature), None);
}

#[test]
fn test_predicated_elements() {
    let ast = parse_ok("grammar G R: =>'a' ->B =>('c' 'd') ->x=ID;");
    let parts = elements(&ast, body(&ast, "R"));
    assert_eq!(parts.len(), 4);

    assert_eq!(parts[0].kind, NodeKind::Keyword);
    assert!(parts[0].flag(Feature::Predicated));
    assert_eq!(parts[0].text(Feature::Value), Some("a"));

    assert_eq!(parts[1].kind, NodeKind::RuleCall);
    assert!(parts[1].flag(Feature::FirstSetPredicated));

    assert_eq!(parts[2].kind, NodeKind::Group);
    assert!(parts[2].flag(Feature::Predicated));
    let nested = elements(&ast, parts[2]);
    assert_eq!(nested.len(), 1);
    assert_eq!(elements(&ast, nested[0]).len(), 2);

    assert_eq!(parts[3].kind, NodeKind::Assignment);
    assert!(parts[3].flag(Feature::FirstSetPredicated));
    assert_eq!(parts[3].text(Feature::Feature), Some("x"));
}

#[test]
fn test_unordered_group_element() {
    let ast = parse_ok("grammar G R: a='a' & b='b' & c='c';");
    let group = body(&ast, "R");
    assert_eq!(group.kind, NodeKind::UnorderedGroup);
    assert_eq!(elements(&ast, group).len(), 3);
}

#[test]
fn test_enum_rule() {
    let ast = parse_ok("grammar G enum Color returns Col: RED = 'red' | GREEN;");
    let rule = &ast[ast.rule("Color").unwrap()];
    assert_eq!(rule.kind, NodeKind::EnumRule);
    assert_eq!(child(&ast, rule, Feature::Type).text(Feature::Classifier), Some("Col"));

    let literals = elements(&ast, body(&ast, "Color"));
    assert_eq!(literals.len(), 2);
    assert_eq!(literals[0].text(Feature::EnumLiteral), Some("RED"));
    assert_eq!(child(&ast, literals[0], Feature::Literal).text(Feature::Value), Some("red"));
    assert_eq!(literals[1].text(Feature::EnumLiteral), Some("GREEN"));
    assert_eq!(literals[1].child(Feature::Literal), None);
}

#[test]
fn test_single_enum_literal_is_unwrapped() {
    let ast = parse_ok("grammar G enum E: ONLY;");
    assert_eq!(body(&ast, "E").kind, NodeKind::EnumLiteralDeclaration);
}

#[test]
fn test_terminal_rule_elements() {
    let ast = parse_ok(
        "grammar G terminal fragment DIGIT: '0'..'9'; \
         terminal STR returns ecore::EString: '\"' -> '\"' | !('a'|'b') | . | EOF;",
    );
    let digit = &ast[ast.rule("DIGIT").unwrap()];
    assert!(digit.flag(Feature::Fragment));
    assert_eq!(body(&ast, "DIGIT").kind, NodeKind::CharacterRange);

    let rule = &ast[ast.rule("STR").unwrap()];
    let type_ref = child(&ast, rule, Feature::Type);
    assert_eq!(type_ref.text(Feature::Metamodel), Some("ecore"));
    assert_eq!(type_ref.text(Feature::Classifier), Some("EString"));

    let branches = elements(&ast, body(&ast, "STR"));
    let kinds: Vec<NodeKind> = branches.iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Group,
            NodeKind::NegatedToken,
            NodeKind::Wildcard,
            NodeKind::EofElement,
        ]
    );
    let until = elements(&ast, branches[0])[1];
    assert_eq!(until.kind, NodeKind::UntilToken);
    assert_eq!(child(&ast, until, Feature::Terminal).text(Feature::Value), Some("\""));
    assert_eq!(
        child(&ast, branches[1], Feature::Terminal).kind,
        NodeKind::Alternatives
    );
}

#[test]
fn test_comments_are_hidden() {
    let ast = parse_ok("grammar G // line\n/* block */ R: 'a' /* inner */ ;\n");
    assert!(ast.rule("R").is_some());
}

#[test]
fn test_parse_with_dyn_sink() {
    let lexed = gdl_lexer::lex("grammar G R: 'a';");
    let mut builder = AstBuilder::new();
    let sink: &mut dyn TreeSink = &mut builder;
    let report = parse_with(&lexed.tokens, ParseOptions::default(), sink);

    assert!(report.errors.is_empty());
    assert!(!report.halted);
    assert_eq!(builder.node_count(), 3);
    assert!(builder.finish().rule("R").is_some());
}
