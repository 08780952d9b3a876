//! Terminal rules: character-level productions for the scanner.

use gdl_ir::{Feature, NodeId, NodeKind, Rule, TokenKind, Value};

use crate::decision::DecisionId;
use crate::{PResult, Parser, TreeSink};

impl<S: TreeSink + ?Sized> Parser<'_, '_, S> {
    /// `'terminal' (fragment?='fragment' name=ValidID | name=ValidID ('returns' type=TypeRef)?)
    /// ':' alternatives=TerminalAlternatives ';'`
    pub(super) fn parse_terminal_rule(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::TerminalRule, |p| {
            let rule = p.create(NodeKind::TerminalRule);
            p.keyword(TokenKind::Terminal)?;
            if p.decide(DecisionId::TerminalRuleKind)? == 1 {
                p.assign_flag(rule, Feature::Fragment, TokenKind::Fragment)?;
                p.assign_valid_id(rule, Feature::Name)?;
            } else {
                p.assign_valid_id(rule, Feature::Name)?;
                p.parse_optional_returns(rule)?;
            }
            p.keyword(TokenKind::Colon)?;
            p.assign_node(rule, Feature::Alternatives, Self::parse_terminal_alternatives)?;
            p.keyword(TokenKind::Semicolon)?;
            Ok(Some(rule))
        })
    }

    /// `('returns' type=TypeRef)?` on a terminal or enum rule.
    pub(super) fn parse_optional_returns(&mut self, rule: NodeId) -> PResult<()> {
        if self.decide(DecisionId::ReturnsOptional)? == 1 {
            self.keyword(TokenKind::Returns)?;
            self.assign_node(rule, Feature::Type, Self::parse_type_ref)?;
        }
        Ok(())
    }

    /// `TerminalGroup ({Alternatives.elements+=current} ('|' elements+=TerminalGroup)+)?`
    fn parse_terminal_alternatives(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::TerminalAlternatives, |p| {
            p.list(
                Self::parse_terminal_group,
                DecisionId::TerminalAlternativesLoop,
                Some(TokenKind::Pipe),
                NodeKind::Alternatives,
            )
        })
    }

    /// `TerminalToken ({Group.elements+=current} elements+=TerminalToken+)?`
    fn parse_terminal_group(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::TerminalGroup, |p| {
            p.list(
                Self::parse_terminal_token,
                DecisionId::TerminalGroupLoop,
                None,
                NodeKind::Group,
            )
        })
    }

    /// `TerminalTokenElement cardinality=('?'|'*'|'+')?`
    fn parse_terminal_token(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::TerminalToken, |p| {
            let element = p.parse_terminal_token_element()?;
            p.set_current(element);
            p.parse_cardinality(element)?;
            Ok(element)
        })
    }

    fn parse_terminal_token_element(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::TerminalTokenElement, |p| {
            match p.decide(DecisionId::TerminalTokenElement)? {
                1 => p.parse_character_range(),
                2 => p.parse_terminal_rule_call(),
                3 => {
                    p.keyword(TokenKind::LParen)?;
                    let inner = p.parse_terminal_alternatives()?;
                    p.set_current(inner);
                    p.keyword(TokenKind::RParen)?;
                    Ok(inner)
                }
                4 => p.parse_prefixed_token(Rule::NegatedToken, NodeKind::NegatedToken, TokenKind::Bang),
                5 => p.parse_prefixed_token(Rule::UntilToken, NodeKind::UntilToken, TokenKind::Arrow),
                6 => p.parse_marker_element(Rule::Wildcard, NodeKind::Wildcard, TokenKind::Dot),
                _ => p.parse_marker_element(Rule::EofElement, NodeKind::EofElement, TokenKind::EofKw),
            }
        })
    }

    /// `Keyword ({CharacterRange.left=current} '..' right=Keyword)?`
    fn parse_character_range(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::CharacterRange, |p| {
            let left = p.parse_keyword()?;
            p.set_current(left);
            if p.decide(DecisionId::CharacterRange)? != 1 {
                return Ok(left);
            }
            let range = p.create(NodeKind::CharacterRange);
            if let Some(left) = left {
                p.sink.set_value(range, Feature::Left, Value::Node(left));
            }
            p.keyword(TokenKind::DotDot)?;
            p.assign_node(range, Feature::Right, Self::parse_keyword)?;
            Ok(Some(range))
        })
    }

    /// `TerminalRuleCall: rule=[AbstractRule|RuleID]`
    fn parse_terminal_rule_call(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::TerminalRuleCall, |p| {
            let call = p.create(NodeKind::RuleCall);
            p.assign_rule_ref(call)?;
            Ok(Some(call))
        })
    }

    /// `'!' terminal=TerminalTokenElement` and `'->' terminal=TerminalTokenElement`
    fn parse_prefixed_token(
        &mut self,
        rule: Rule,
        kind: NodeKind,
        prefix: TokenKind,
    ) -> PResult<Option<NodeId>> {
        self.rule(rule, |p| {
            let node = p.create(kind);
            p.keyword(prefix)?;
            p.assign_node(node, Feature::Terminal, Self::parse_terminal_token_element)?;
            Ok(Some(node))
        })
    }

    /// `{Wildcard} '.'` and `{EOF} 'EOF'`
    fn parse_marker_element(
        &mut self,
        rule: Rule,
        kind: NodeKind,
        marker: TokenKind,
    ) -> PResult<Option<NodeId>> {
        self.rule(rule, |p| {
            let node = p.create(kind);
            p.keyword(marker)?;
            Ok(Some(node))
        })
    }
}
