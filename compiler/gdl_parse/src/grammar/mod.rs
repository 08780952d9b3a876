//! Rule procedures, one per production of the grammar language.
//!
//! Every procedure runs under [`Parser::rule`] (or [`Parser::text_rule`]
//! for the datatype rules `GrammarID` and `RuleID`), which brackets it with
//! rule notifications and catches its syntax errors. Feature assignments go
//! through the helpers below so each one is bracketed by feature
//! notifications.
//!
//! - `header`: grammar header, options and metamodel declarations
//! - `rule`: parser rules and their body structure
//! - `element`: assignments, terminals, actions and embedded code
//! - `condition`: guard and argument conditions
//! - `terminal`: terminal rules
//! - `enum_rule`: enum rules

mod condition;
mod element;
mod enum_rule;
mod header;
mod rule;
mod terminal;

use gdl_ir::{Element, Feature, NodeId, TokenKind, Value};

use crate::decision::DecisionId;
use crate::{PResult, Parser, TokenSet, TreeSink};

impl<S: TreeSink + ?Sized> Parser<'_, '_, S> {
    /// Bracket `f` with feature notifications.
    fn feature<T>(&mut self, feature: Feature, f: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        self.sink.before(Element::Feature(feature));
        let result = f(self);
        self.sink.after(Element::Feature(feature));
        result
    }

    /// `owner.feature = <node built by f>`
    fn assign_node(
        &mut self,
        owner: NodeId,
        feature: Feature,
        f: impl FnOnce(&mut Self) -> PResult<Option<NodeId>>,
    ) -> PResult<()> {
        self.feature(feature, |p| {
            if let Some(child) = f(p)? {
                p.sink.set_value(owner, feature, Value::Node(child));
            }
            Ok(())
        })
    }

    /// `owner.feature += <node built by f>`
    fn add_node(
        &mut self,
        owner: NodeId,
        feature: Feature,
        f: impl FnOnce(&mut Self) -> PResult<Option<NodeId>>,
    ) -> PResult<()> {
        self.feature(feature, |p| {
            if let Some(child) = f(p)? {
                p.sink.add_to_collection(owner, feature, Value::Node(child));
            }
            Ok(())
        })
    }

    /// `owner.feature = <text of the matched token>`
    fn assign_token(&mut self, owner: NodeId, feature: Feature, kind: TokenKind) -> PResult<()> {
        self.feature(feature, |p| {
            let token = p.expect(kind)?;
            p.sink.set_value(owner, feature, Value::text(token.text.as_str()));
            Ok(())
        })
    }

    /// `owner.feature = ValidID`
    fn assign_valid_id(&mut self, owner: NodeId, feature: Feature) -> PResult<()> {
        self.feature(feature, |p| {
            let token = p.valid_id()?;
            p.sink.set_value(owner, feature, Value::text(token.text.as_str()));
            Ok(())
        })
    }

    /// `owner.feature ?= 'keyword'`
    fn assign_flag(&mut self, owner: NodeId, feature: Feature, kind: TokenKind) -> PResult<()> {
        self.feature(feature, |p| {
            p.keyword(kind)?;
            p.sink.set_flag(owner, feature);
            Ok(())
        })
    }

    /// `owner.feature = <operator keyword>`, the operator already predicted.
    fn assign_operator(&mut self, owner: NodeId, feature: Feature, kind: TokenKind) -> PResult<()> {
        self.feature(feature, |p| {
            let token = p.keyword(kind)?;
            p.sink.set_value(owner, feature, Value::text(token.text.as_str()));
            Ok(())
        })
    }

    /// Run alternative `alt` of a probed decision.
    pub(crate) fn speculate(&mut self, decision: DecisionId, alt: u8) -> PResult<()> {
        match (decision, alt) {
            (DecisionId::EmbeddedCode, 1) => self.parse_gated_semantic_predicate().map(drop),
            (DecisionId::EmbeddedCode, 2) => self.parse_semantic_predicate().map(drop),
            (DecisionId::EmbeddedCode, _) => self.parse_java_action().map(drop),
            _ => Err(self.no_viable(decision, 1, TokenSet::new()).into()),
        }
    }
}
