//! Elements of a parser rule body: assignments, keywords, rule calls,
//! cross references, actions and embedded code.

use gdl_ir::{Feature, NodeId, NodeKind, Rule, TokenKind, Value};

use crate::decision::DecisionId;
use crate::{PResult, Parser, TreeSink};

impl<S: TreeSink + ?Sized> Parser<'_, '_, S> {
    /// `AbstractToken: AbstractTokenWithCardinality | Action | EmbeddedCode`
    pub(super) fn parse_abstract_token(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::AbstractToken, |p| match p.decide(DecisionId::AbstractToken)? {
            1 => p.parse_abstract_token_with_cardinality(),
            2 => p.parse_action(),
            _ => p.parse_embedded_code(),
        })
    }

    /// `EmbeddedCode: GatedSemanticPredicate | SemanticPredicate | JavaAction`
    ///
    /// All three start with a code block, so the decision probes them.
    fn parse_embedded_code(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::EmbeddedCode, |p| match p.decide(DecisionId::EmbeddedCode)? {
            1 => p.parse_gated_semantic_predicate(),
            2 => p.parse_semantic_predicate(),
            _ => p.parse_java_action(),
        })
    }

    /// `code=JAVACODE '?=>'`
    pub(super) fn parse_gated_semantic_predicate(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::GatedSemanticPredicate, |p| {
            let predicate = p.create(NodeKind::GatedSemanticPredicate);
            p.assign_token(predicate, Feature::Code, TokenKind::JavaCode)?;
            p.keyword(TokenKind::GatedArrow)?;
            Ok(Some(predicate))
        })
    }

    /// `code=JAVACODE '?'`
    pub(super) fn parse_semantic_predicate(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::SemanticPredicate, |p| {
            let predicate = p.create(NodeKind::SemanticPredicate);
            p.assign_token(predicate, Feature::Code, TokenKind::JavaCode)?;
            p.keyword(TokenKind::Question)?;
            Ok(Some(predicate))
        })
    }

    pub(super) fn parse_java_action(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::JavaAction, |p| {
            let action = p.create(NodeKind::JavaAction);
            p.assign_token(action, Feature::Code, TokenKind::JavaCode)?;
            Ok(Some(action))
        })
    }

    /// `(Assignment | AbstractTerminal) cardinality=('?'|'*'|'+')?`
    fn parse_abstract_token_with_cardinality(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::AbstractTokenWithCardinality, |p| {
            let target = match p.decide(DecisionId::AbstractTokenWithCardinality)? {
                1 => p.parse_assignment()?,
                alt => p.parse_abstract_terminal(alt)?,
            };
            p.set_current(target);
            p.parse_cardinality(target)?;
            Ok(target)
        })
    }

    /// Optional `?`, `*` or `+` after an element, stored on `target` and
    /// widening its span.
    pub(super) fn parse_cardinality(&mut self, target: Option<NodeId>) -> PResult<()> {
        let kind = match self.decide(DecisionId::Cardinality)? {
            1 => TokenKind::Question,
            2 => TokenKind::Star,
            3 => TokenKind::Plus,
            _ => return Ok(()),
        };
        self.feature(Feature::Cardinality, |p| {
            let token = p.keyword(kind)?;
            if let Some(target) = target {
                p.sink
                    .set_value(target, Feature::Cardinality, Value::text(token.text.as_str()));
                p.sink.finish_node(target, token.span);
            }
            Ok(())
        })
    }

    /// Alternatives 2..=7 of `AbstractTokenWithCardinality`, already
    /// predicted by the caller.
    fn parse_abstract_terminal(&mut self, alt: u8) -> PResult<Option<NodeId>> {
        self.rule(Rule::AbstractTerminal, |p| match alt {
            2 => p.parse_keyword(),
            3 => p.parse_rule_call(),
            4 => p.parse_parenthesized_element(),
            5 => p.parse_predicated_keyword(),
            6 => p.parse_predicated_rule_call(),
            _ => p.parse_predicated_group(),
        })
    }

    /// `Keyword: value=STRING`
    pub(super) fn parse_keyword(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::Keyword, |p| {
            let keyword = p.create(NodeKind::Keyword);
            p.assign_token(keyword, Feature::Value, TokenKind::String)?;
            Ok(Some(keyword))
        })
    }

    /// `RuleCall: rule=[AbstractRule|RuleID] ('<' arguments+=NamedArgument (',' arguments+=NamedArgument)* '>')?`
    fn parse_rule_call(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::RuleCall, |p| {
            let call = p.create(NodeKind::RuleCall);
            p.parse_rule_call_target(call)?;
            Ok(Some(call))
        })
    }

    /// The referenced rule and the optional argument list of `call`.
    fn parse_rule_call_target(&mut self, call: NodeId) -> PResult<()> {
        self.assign_rule_ref(call)?;
        if self.decide(DecisionId::RuleCallArguments)? == 1 {
            self.keyword(TokenKind::Lt)?;
            self.add_node(call, Feature::Arguments, Self::parse_named_argument)?;
            self.repeat(DecisionId::ArgumentsLoop, |p| {
                p.keyword(TokenKind::Comma)?;
                p.add_node(call, Feature::Arguments, Self::parse_named_argument)
            })?;
            self.keyword(TokenKind::Gt)?;
        }
        Ok(())
    }

    /// `owner.rule = RuleID`, kept as text for later linking.
    pub(super) fn assign_rule_ref(&mut self, owner: NodeId) -> PResult<()> {
        self.feature(Feature::Rule, |p| {
            if let Some(name) = p.parse_rule_id()? {
                p.sink.set_value(owner, Feature::Rule, Value::Text(name));
            }
            Ok(())
        })
    }

    /// `NamedArgument: (parameter=[Parameter|ID] calledByName?='=')? value=Disjunction`
    fn parse_named_argument(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::NamedArgument, |p| {
            let argument = p.create(NodeKind::NamedArgument);
            if p.decide(DecisionId::NamedArgument)? == 1 {
                p.assign_token(argument, Feature::Parameter, TokenKind::Id)?;
                p.assign_flag(argument, Feature::CalledByName, TokenKind::Eq)?;
            }
            p.assign_node(argument, Feature::Value, Self::parse_disjunction)?;
            Ok(Some(argument))
        })
    }

    /// `Assignment: ('=>' | '->')? feature=ValidID operator=('+='|'='|'?=') terminal=AssignableTerminal`
    fn parse_assignment(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::Assignment, |p| {
            let assignment = p.create(NodeKind::Assignment);
            match p.decide(DecisionId::AssignmentPredicate)? {
                1 => p.assign_flag(assignment, Feature::Predicated, TokenKind::FatArrow)?,
                2 => p.assign_flag(assignment, Feature::FirstSetPredicated, TokenKind::Arrow)?,
                _ => {}
            }
            p.assign_valid_id(assignment, Feature::Feature)?;
            let operator = match p.decide(DecisionId::AssignmentOperator)? {
                1 => TokenKind::PlusEq,
                2 => TokenKind::Eq,
                _ => TokenKind::QuestionEq,
            };
            p.assign_operator(assignment, Feature::Operator, operator)?;
            p.assign_node(assignment, Feature::Terminal, Self::parse_assignable_terminal)?;
            Ok(Some(assignment))
        })
    }

    /// `AssignableTerminal: Keyword | RuleCall | '(' AssignableAlternatives ')' | CrossReference`
    fn parse_assignable_terminal(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::AssignableTerminal, |p| {
            match p.decide(DecisionId::AssignableTerminal)? {
                1 => p.parse_keyword(),
                2 => p.parse_rule_call(),
                3 => {
                    p.keyword(TokenKind::LParen)?;
                    let inner = p.parse_assignable_alternatives()?;
                    p.set_current(inner);
                    p.keyword(TokenKind::RParen)?;
                    Ok(inner)
                }
                _ => p.parse_cross_reference(),
            }
        })
    }

    /// `AssignableTerminal ({Alternatives.elements+=current} ('|' elements+=AssignableTerminal)+)?`
    fn parse_assignable_alternatives(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::AssignableAlternatives, |p| {
            p.list(
                Self::parse_assignable_terminal,
                DecisionId::AssignableAlternativesLoop,
                Some(TokenKind::Pipe),
                NodeKind::Alternatives,
            )
        })
    }

    /// `CrossReference: '[' type=TypeRef ('|' terminal=CrossReferenceableTerminal)? ']'`
    fn parse_cross_reference(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::CrossReference, |p| {
            let reference = p.create(NodeKind::CrossReference);
            p.keyword(TokenKind::LBracket)?;
            p.assign_node(reference, Feature::Type, Self::parse_type_ref)?;
            if p.decide(DecisionId::CrossReferenceTerminal)? == 1 {
                p.keyword(TokenKind::Pipe)?;
                p.assign_node(
                    reference,
                    Feature::Terminal,
                    Self::parse_cross_referenceable_terminal,
                )?;
            }
            p.keyword(TokenKind::RBracket)?;
            Ok(Some(reference))
        })
    }

    /// `CrossReferenceableTerminal: Keyword | RuleCall`
    fn parse_cross_referenceable_terminal(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::CrossReferenceableTerminal, |p| {
            match p.decide(DecisionId::CrossReferenceableTerminal)? {
                1 => p.parse_keyword(),
                _ => p.parse_rule_call(),
            }
        })
    }

    /// `'(' Alternatives ')'`
    fn parse_parenthesized_element(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::ParenthesizedElement, |p| {
            p.keyword(TokenKind::LParen)?;
            let inner = p.parse_alternatives()?;
            p.set_current(inner);
            p.keyword(TokenKind::RParen)?;
            Ok(inner)
        })
    }

    /// `predicated?='=>' | firstSetPredicated?='->'` on `owner`.
    fn parse_predicate_marker(&mut self, owner: NodeId) -> PResult<()> {
        match self.decide(DecisionId::PredicateMarker)? {
            1 => self.assign_flag(owner, Feature::Predicated, TokenKind::FatArrow),
            _ => self.assign_flag(owner, Feature::FirstSetPredicated, TokenKind::Arrow),
        }
    }

    /// `{Keyword} ('=>' | '->') value=STRING`
    fn parse_predicated_keyword(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::PredicatedKeyword, |p| {
            let keyword = p.create(NodeKind::Keyword);
            p.parse_predicate_marker(keyword)?;
            p.assign_token(keyword, Feature::Value, TokenKind::String)?;
            Ok(Some(keyword))
        })
    }

    /// `{RuleCall} ('=>' | '->') rule=[AbstractRule|RuleID] ('<' arguments ... '>')?`
    fn parse_predicated_rule_call(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::PredicatedRuleCall, |p| {
            let call = p.create(NodeKind::RuleCall);
            p.parse_predicate_marker(call)?;
            p.parse_rule_call_target(call)?;
            Ok(Some(call))
        })
    }

    /// `{Group} ('=>' | '->') '(' elements+=Alternatives ')'`
    fn parse_predicated_group(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::PredicatedGroup, |p| {
            let group = p.create(NodeKind::Group);
            p.parse_predicate_marker(group)?;
            p.keyword(TokenKind::LParen)?;
            p.add_node(group, Feature::Elements, Self::parse_alternatives)?;
            p.keyword(TokenKind::RParen)?;
            Ok(Some(group))
        })
    }

    /// `Action: '{' type=TypeRef ('.' feature=ValidID operator=('='|'+=') 'current')? '}'`
    fn parse_action(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::Action, |p| {
            let action = p.create(NodeKind::Action);
            p.keyword(TokenKind::LBrace)?;
            p.assign_node(action, Feature::Type, Self::parse_type_ref)?;
            if p.decide(DecisionId::ActionAssignment)? == 1 {
                p.keyword(TokenKind::Dot)?;
                p.assign_valid_id(action, Feature::Feature)?;
                let operator = match p.decide(DecisionId::ActionOperator)? {
                    1 => TokenKind::Eq,
                    _ => TokenKind::PlusEq,
                };
                p.assign_operator(action, Feature::Operator, operator)?;
                p.keyword(TokenKind::Current)?;
            }
            p.keyword(TokenKind::RBrace)?;
            Ok(Some(action))
        })
    }
}
