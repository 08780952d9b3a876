use pretty_assertions::assert_eq;

use super::*;

fn grammar_with_rule() -> Ast {
    let mut grammar = Node::new(NodeKind::Grammar, Span::new(0, 20));
    grammar.set(Feature::Name, Value::text("Foo"));
    grammar.add(Feature::Rules, Value::Node(NodeId::new(1)));
    let mut rule = Node::new(NodeKind::ParserRule, Span::new(12, 20));
    rule.set(Feature::Name, Value::text("Start"));
    rule.set(Feature::Alternatives, Value::Node(NodeId::new(2)));
    let mut keyword = Node::new(NodeKind::Keyword, Span::new(18, 20));
    keyword.set(Feature::Value, Value::text("a"));
    Ast::new(vec![grammar, rule, keyword], Vec::new())
}

#[test]
fn test_features_stay_sorted() {
    let mut node = Node::new(NodeKind::Grammar, Span::DUMMY);
    node.set_flag(Feature::Debug);
    node.set(Feature::TokenLimit, Value::Int(500));
    node.set(Feature::Name, Value::text("G"));
    let order: Vec<Feature> = node.features().map(|(f, _)| f).collect();
    assert_eq!(order, vec![Feature::Name, Feature::TokenLimit, Feature::Debug]);
}

#[test]
fn test_set_overwrites() {
    let mut node = Node::new(NodeKind::Assignment, Span::DUMMY);
    node.set(Feature::Cardinality, Value::text("?"));
    node.set(Feature::Cardinality, Value::text("+"));
    assert_eq!(node.text(Feature::Cardinality), Some("+"));
}

#[test]
fn test_add_appends_in_order() {
    let mut node = Node::new(NodeKind::Grammar, Span::DUMMY);
    node.add(Feature::HiddenTokens, Value::text("WS"));
    node.add(Feature::HiddenTokens, Value::text("COMMENT"));
    assert_eq!(node.texts(Feature::HiddenTokens), vec!["WS", "COMMENT"]);
    assert!(node.values(Feature::UsedGrammars).is_empty());
}

#[test]
fn test_flag() {
    let mut node = Node::new(NodeKind::ParserRule, Span::DUMMY);
    assert!(!node.flag(Feature::Fragment));
    node.set_flag(Feature::Fragment);
    assert!(node.flag(Feature::Fragment));
}

#[test]
fn test_rule_index() {
    let ast = grammar_with_rule();
    assert_eq!(ast.root(), Some(NodeId::new(0)));
    assert_eq!(ast.rule("Start"), Some(NodeId::new(1)));
    assert_eq!(ast.rule("Missing"), None);
    assert_eq!(ast[NodeId::new(1)].kind, NodeKind::ParserRule);
}

#[test]
fn test_dump() {
    let ast = grammar_with_rule();
    assert_eq!(
        ast.dump(),
        "Grammar\n  \
           name = \"Foo\"\n  \
           rules +=\n    \
             ParserRule\n      \
               name = \"Start\"\n      \
               alternatives =\n        \
                 Keyword\n          \
                   value = \"a\"\n"
    );
}

#[test]
fn test_dump_marks_recovered() {
    let mut grammar = Node::new(NodeKind::Grammar, Span::DUMMY);
    grammar.recovered = true;
    grammar.set_flag(Feature::Debug);
    let ast = Ast::new(vec![grammar], Vec::new());
    assert_eq!(ast.dump(), "Grammar (recovered)\n  debug ?= true\n");
    assert_eq!(ast.recovered_count(), 1);
}

#[test]
fn test_empty_ast() {
    let ast = Ast::default();
    assert_eq!(ast.root(), None);
    assert_eq!(ast.dump(), "");
}
