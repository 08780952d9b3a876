//! Boolean conditions over rule parameters, used by guarded branches and
//! rule-call arguments.
//!
//! `|` binds looser than `&`, `!` binds tightest; both binary operators are
//! left-associative.

use gdl_ir::{Feature, NodeId, NodeKind, Rule, TokenKind, Value};

use crate::decision::DecisionId;
use crate::{PResult, Parser, TreeSink};

impl<S: TreeSink + ?Sized> Parser<'_, '_, S> {
    /// `Disjunction: Conjunction ({Disjunction.left=current} '|' right=Conjunction)*`
    pub(super) fn parse_disjunction(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::Disjunction, |p| {
            p.binary(
                Self::parse_conjunction,
                DecisionId::DisjunctionLoop,
                TokenKind::Pipe,
                NodeKind::Disjunction,
            )
        })
    }

    /// `Conjunction: Negation ({Conjunction.left=current} '&' right=Negation)*`
    fn parse_conjunction(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::Conjunction, |p| {
            p.binary(
                Self::parse_negation,
                DecisionId::ConjunctionLoop,
                TokenKind::Amp,
                NodeKind::Conjunction,
            )
        })
    }

    /// Left-associative chain of `operand (op operand)*`. Each operator wraps
    /// everything parsed so far as `left`.
    fn binary(
        &mut self,
        mut operand: impl FnMut(&mut Self) -> PResult<Option<NodeId>>,
        more: DecisionId,
        op: TokenKind,
        kind: NodeKind,
    ) -> PResult<Option<NodeId>> {
        let mut left = operand(self)?;
        self.set_current(left);
        self.repeat(more, |p| {
            let node = p.create(kind);
            if let Some(left) = left {
                p.sink.set_value(node, Feature::Left, Value::Node(left));
            }
            left = Some(node);
            p.keyword(op)?;
            p.assign_node(node, Feature::Right, &mut operand)?;
            p.sink.finish_node(node, p.cursor.previous_span());
            Ok(())
        })?;
        Ok(left)
    }

    /// `Negation: {Negation} '!' value=Negation | ConditionAtom`
    fn parse_negation(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::Negation, |p| {
            if p.decide(DecisionId::Negation)? != 1 {
                return p.parse_condition_atom();
            }
            let negation = p.create(NodeKind::Negation);
            p.keyword(TokenKind::Bang)?;
            p.assign_node(negation, Feature::Value, Self::parse_negation)?;
            Ok(Some(negation))
        })
    }

    /// `ConditionAtom: ParameterReference | '(' Disjunction ')' | LiteralCondition`
    fn parse_condition_atom(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::ConditionAtom, |p| match p.decide(DecisionId::ConditionAtom)? {
            1 => p.parse_parameter_reference(),
            2 => {
                p.keyword(TokenKind::LParen)?;
                let inner = p.parse_disjunction()?;
                p.set_current(inner);
                p.keyword(TokenKind::RParen)?;
                Ok(inner)
            }
            _ => p.parse_literal_condition(),
        })
    }

    /// `ParameterReference: parameter=[Parameter|ID]`
    fn parse_parameter_reference(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::ParameterReference, |p| {
            let reference = p.create(NodeKind::ParameterReference);
            p.assign_token(reference, Feature::Parameter, TokenKind::Id)?;
            Ok(Some(reference))
        })
    }

    /// `LiteralCondition: {LiteralCondition} (true?='true' | 'false')`
    fn parse_literal_condition(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::LiteralCondition, |p| {
            let literal = p.create(NodeKind::LiteralCondition);
            if p.decide(DecisionId::LiteralCondition)? == 1 {
                p.assign_flag(literal, Feature::True, TokenKind::True)?;
            } else {
                p.keyword(TokenKind::False)?;
            }
            Ok(Some(literal))
        })
    }
}
