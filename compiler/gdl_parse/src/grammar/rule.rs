//! Parser rules and the structure of their bodies: alternatives, guarded
//! branches, unordered groups and sequences.

use gdl_ir::{Feature, NodeId, NodeKind, Rule, TokenKind, Value};

use crate::decision::DecisionId;
use crate::unordered::GroupId;
use crate::{PResult, Parser, TreeSink};

impl<S: TreeSink + ?Sized> Parser<'_, '_, S> {
    /// `AbstractRule: ParserRule | TerminalRule | EnumRule`
    pub(super) fn parse_abstract_rule(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::AbstractRule, |p| match p.decide(DecisionId::AbstractRule)? {
            1 => p.parse_parser_rule(),
            2 => p.parse_terminal_rule(),
            _ => p.parse_enum_rule(),
        })
    }

    fn parse_parser_rule(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::ParserRule, |p| {
            let rule = p.create(NodeKind::ParserRule);
            if p.decide(DecisionId::ParserRuleKind)? == 1 {
                p.assign_flag(rule, Feature::Fragment, TokenKind::Fragment)?;
                p.parse_rule_name_and_params(rule)?;
                if p.decide(DecisionId::ParserRuleWildcard)? == 1 {
                    p.assign_flag(rule, Feature::Wildcard, TokenKind::Star)?;
                }
            } else {
                p.parse_rule_name_and_params(rule)?;
            }

            p.unordered_group(GroupId::ParserRuleHeader, |p, clause| {
                if clause == 0 {
                    p.keyword(TokenKind::Returns)?;
                    p.assign_node(rule, Feature::Type, Self::parse_type_ref)
                } else {
                    p.parse_hidden_tokens(rule).map(drop)
                }
            })?;

            p.keyword(TokenKind::Colon)?;
            p.assign_node(rule, Feature::Alternatives, Self::parse_alternatives)?;
            p.keyword(TokenKind::Semicolon)?;
            Ok(Some(rule))
        })
    }

    /// `name=ValidID ('<' (parameters+=Parameter (',' parameters+=Parameter)*)? '>')?`
    /// assigned into the parser rule `owner`.
    fn parse_rule_name_and_params(&mut self, owner: NodeId) -> PResult<Option<NodeId>> {
        self.rule(Rule::RuleNameAndParams, |p| {
            p.set_current(Some(owner));
            p.assign_valid_id(owner, Feature::Name)?;
            if p.decide(DecisionId::Params)? == 1 {
                p.keyword(TokenKind::Lt)?;
                if p.decide(DecisionId::ParamList)? == 1 {
                    p.add_node(owner, Feature::Parameters, Self::parse_parameter)?;
                    p.repeat(DecisionId::ParamsLoop, |p| {
                        p.keyword(TokenKind::Comma)?;
                        p.add_node(owner, Feature::Parameters, Self::parse_parameter)
                    })?;
                }
                p.keyword(TokenKind::Gt)?;
            }
            Ok(Some(owner))
        })
    }

    /// `Parameter: name=ID`
    fn parse_parameter(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::Parameter, |p| {
            let parameter = p.create(NodeKind::Parameter);
            p.assign_token(parameter, Feature::Name, TokenKind::Id)?;
            Ok(Some(parameter))
        })
    }

    /// `TypeRef: (metamodel=ValidID '::')? classifier=ValidID`
    pub(super) fn parse_type_ref(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::TypeRef, |p| {
            let type_ref = p.create(NodeKind::TypeRef);
            if p.decide(DecisionId::TypeRefMetamodel)? == 1 {
                p.assign_valid_id(type_ref, Feature::Metamodel)?;
                p.keyword(TokenKind::ColonColon)?;
            }
            p.assign_valid_id(type_ref, Feature::Classifier)?;
            Ok(Some(type_ref))
        })
    }

    /// `Alternatives: ConditionalBranch ({Alternatives.elements+=current} ('|' elements+=ConditionalBranch)+)?`
    pub(super) fn parse_alternatives(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::Alternatives, |p| {
            p.list(
                Self::parse_conditional_branch,
                DecisionId::AlternativesLoop,
                Some(TokenKind::Pipe),
                NodeKind::Alternatives,
            )
        })
    }

    /// Shared shape of `First ({Kind.elements+=current} (sep? elements+=Next)+)?`:
    /// a single element comes back unwrapped, two or more are collected
    /// into a new `kind` node.
    pub(super) fn list(
        &mut self,
        mut element: impl FnMut(&mut Self) -> PResult<Option<NodeId>>,
        more: DecisionId,
        separator: Option<TokenKind>,
        kind: NodeKind,
    ) -> PResult<Option<NodeId>> {
        let first = element(self)?;
        self.set_current(first);
        if self.decide(more)? != 1 {
            return Ok(first);
        }
        let list = self.create(kind);
        if let Some(first) = first {
            self.sink
                .add_to_collection(list, Feature::Elements, Value::Node(first));
        }
        self.repeat(more, |p| {
            if let Some(separator) = separator {
                p.keyword(separator)?;
            }
            p.add_node(list, Feature::Elements, &mut element)
        })?;
        Ok(Some(list))
    }

    /// `ConditionalBranch: UnorderedGroup | {Group} '<' guardCondition=Disjunction '>' elements+=AbstractToken+`
    fn parse_conditional_branch(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::ConditionalBranch, |p| {
            if p.decide(DecisionId::ConditionalBranch)? != 1 {
                return p.parse_unordered_group();
            }
            let group = p.create(NodeKind::Group);
            p.keyword(TokenKind::Lt)?;
            p.assign_node(group, Feature::GuardCondition, Self::parse_disjunction)?;
            p.keyword(TokenKind::Gt)?;
            p.add_node(group, Feature::Elements, Self::parse_abstract_token)?;
            p.repeat(DecisionId::GroupLoop, |p| {
                p.add_node(group, Feature::Elements, Self::parse_abstract_token)
            })?;
            Ok(Some(group))
        })
    }

    /// `UnorderedGroup: Group ({UnorderedGroup.elements+=current} ('&' elements+=Group)+)?`
    fn parse_unordered_group(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::UnorderedGroup, |p| {
            p.list(
                Self::parse_group,
                DecisionId::UnorderedGroupLoop,
                Some(TokenKind::Amp),
                NodeKind::UnorderedGroup,
            )
        })
    }

    /// `Group: AbstractToken ({Group.elements+=current} elements+=AbstractToken+)?`
    fn parse_group(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::Group, |p| {
            p.list(
                Self::parse_abstract_token,
                DecisionId::GroupLoop,
                None,
                NodeKind::Group,
            )
        })
    }
}
