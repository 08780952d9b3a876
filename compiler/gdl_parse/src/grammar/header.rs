//! Grammar header: name, used grammars, the unordered header clauses,
//! options block, metamodel declarations and the rule list.

use gdl_ir::{Feature, NodeId, NodeKind, Rule, TokenKind, Value};
use tracing::debug;

use crate::decision::{DecisionId, DecisionTables, Prediction};
use crate::recovery::{self, follow};
use crate::unordered::GroupId;
use crate::{PResult, Parser, TreeSink};

impl<S: TreeSink + ?Sized> Parser<'_, '_, S> {
    /// Parse a grammar file. The grammar node is always the first node
    /// created.
    pub(crate) fn parse_grammar(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::Grammar, |p| {
            let grammar = p.create(NodeKind::Grammar);
            p.keyword(TokenKind::Grammar)?;
            p.feature(Feature::Name, |p| {
                if let Some(name) = p.parse_grammar_id()? {
                    p.sink.set_value(grammar, Feature::Name, Value::Text(name));
                }
                Ok(())
            })?;

            if p.decide(DecisionId::UsedGrammars)? == 1 {
                p.keyword(TokenKind::With)?;
                p.parse_used_grammar(grammar)?;
                p.repeat(DecisionId::UsedGrammarsLoop, |p| {
                    p.keyword(TokenKind::Comma)?;
                    p.parse_used_grammar(grammar)
                })?;
            }

            p.parse_grammar_header(grammar)?;

            if p.decide(DecisionId::Options)? == 1 {
                p.parse_grammar_options(grammar)?;
            }

            p.parse_metamodel_declarations(grammar)?;
            p.parse_rules(grammar)?;
            Ok(Some(grammar))
        })
    }

    fn parse_used_grammar(&mut self, grammar: NodeId) -> PResult<()> {
        self.feature(Feature::UsedGrammars, |p| {
            if let Some(name) = p.parse_grammar_id()? {
                p.sink
                    .add_to_collection(grammar, Feature::UsedGrammars, Value::Text(name));
            }
            Ok(())
        })
    }

    /// `hidden(...) & tokenLimit(INT) & hoistingDebug`, each at most once, in
    /// any order.
    fn parse_grammar_header(&mut self, grammar: NodeId) -> PResult<()> {
        self.unordered_group(GroupId::GrammarHeader, |p, clause| match clause {
            0 => p.parse_hidden_tokens(grammar).map(drop),
            1 => p.parse_token_limit(grammar).map(drop),
            _ => p.assign_flag(grammar, Feature::Debug, TokenKind::HoistingDebug),
        })
    }

    /// Match the clauses of `group` until none can be selected. The
    /// activation is left even when a clause fails.
    pub(super) fn unordered_group(
        &mut self,
        group: GroupId,
        mut clause: impl FnMut(&mut Self, usize) -> PResult<()>,
    ) -> PResult<()> {
        self.groups.enter(group);
        let mut result = Ok(());
        while let Some(idx) = self.groups.next_selectable(group, &self.cursor) {
            self.groups.select(group, idx);
            result = clause(self, idx);
            if result.is_err() || self.halted {
                break;
            }
        }
        debug!(%group, state = ?self.groups.state(group, &self.cursor), "unordered group done");
        self.groups.leave(group);
        result
    }

    /// `definesHiddenTokens?='hidden' '(' (hiddenTokens+=RuleID (',' hiddenTokens+=RuleID)*)? ')'`
    /// assigned into `owner` (a grammar or a parser rule).
    pub(super) fn parse_hidden_tokens(&mut self, owner: NodeId) -> PResult<Option<NodeId>> {
        self.rule(Rule::HiddenTokens, |p| {
            p.set_current(Some(owner));
            p.assign_flag(owner, Feature::DefinesHiddenTokens, TokenKind::Hidden)?;
            p.keyword(TokenKind::LParen)?;
            if p.decide(DecisionId::HiddenTokensList)? == 1 {
                p.parse_hidden_token(owner)?;
                p.repeat(DecisionId::HiddenTokensLoop, |p| {
                    p.keyword(TokenKind::Comma)?;
                    p.parse_hidden_token(owner)
                })?;
            }
            p.keyword(TokenKind::RParen)?;
            Ok(Some(owner))
        })
    }

    fn parse_hidden_token(&mut self, owner: NodeId) -> PResult<()> {
        self.feature(Feature::HiddenTokens, |p| {
            if let Some(name) = p.parse_rule_id()? {
                p.sink
                    .add_to_collection(owner, Feature::HiddenTokens, Value::Text(name));
            }
            Ok(())
        })
    }

    /// `'tokenLimit' '(' tokenLimit=INT ')'`
    fn parse_token_limit(&mut self, grammar: NodeId) -> PResult<Option<NodeId>> {
        self.rule(Rule::TokenLimit, |p| {
            p.set_current(Some(grammar));
            p.keyword(TokenKind::TokenLimit)?;
            p.keyword(TokenKind::LParen)?;
            p.feature(Feature::TokenLimit, |p| {
                if let Some(limit) = p.int()? {
                    p.sink
                        .set_value(grammar, Feature::TokenLimit, Value::Int(limit));
                }
                Ok(())
            })?;
            p.keyword(TokenKind::RParen)?;
            Ok(Some(grammar))
        })
    }

    /// `'{' options+=GrammarOption* '}'`
    fn parse_grammar_options(&mut self, grammar: NodeId) -> PResult<Option<NodeId>> {
        self.rule(Rule::GrammarOptions, |p| {
            p.set_current(Some(grammar));
            p.keyword(TokenKind::LBrace)?;
            p.repeat(DecisionId::OptionsLoop, |p| {
                p.add_node(grammar, Feature::Options, Self::parse_grammar_option)
            })?;
            p.keyword(TokenKind::RBrace)?;
            Ok(Some(grammar))
        })
    }

    /// `name=ValidID '=' value=(ID|INT|STRING|'true'|'false') ';'`
    fn parse_grammar_option(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::GrammarOption, |p| {
            let option = p.create(NodeKind::GrammarOption);
            p.assign_valid_id(option, Feature::Name)?;
            p.keyword(TokenKind::Eq)?;
            p.feature(Feature::Value, |p| {
                let value = match p.decide(DecisionId::OptionValue)? {
                    1 => Some(Value::text(p.expect(TokenKind::Id)?.text.as_str())),
                    2 => p.int()?.map(Value::Int),
                    3 => Some(Value::text(p.expect(TokenKind::String)?.text.as_str())),
                    4 => Some(Value::text(p.keyword(TokenKind::True)?.text.as_str())),
                    _ => Some(Value::text(p.keyword(TokenKind::False)?.text.as_str())),
                };
                if let Some(value) = value {
                    p.sink.set_value(option, Feature::Value, value);
                }
                Ok(())
            })?;
            p.keyword(TokenKind::Semicolon)?;
            Ok(Some(option))
        })
    }

    fn parse_metamodel_declarations(&mut self, grammar: NodeId) -> PResult<()> {
        loop {
            let before = self.cursor.position();
            match self.decide(DecisionId::MetamodelLoop)? {
                1 => self.add_node(
                    grammar,
                    Feature::MetamodelDeclarations,
                    Self::parse_generated_metamodel,
                )?,
                2 => self.add_node(
                    grammar,
                    Feature::MetamodelDeclarations,
                    Self::parse_referenced_metamodel,
                )?,
                _ => return Ok(()),
            }
            if !self.ensure_progress(before) {
                return Ok(());
            }
        }
    }

    /// `'generate' name=ValidID ePackage=STRING ('as' alias=ValidID)?`
    fn parse_generated_metamodel(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::GeneratedMetamodel, |p| {
            let metamodel = p.create(NodeKind::GeneratedMetamodel);
            p.keyword(TokenKind::Generate)?;
            p.assign_valid_id(metamodel, Feature::Name)?;
            p.assign_token(metamodel, Feature::EPackage, TokenKind::String)?;
            p.parse_metamodel_alias(metamodel)?;
            Ok(Some(metamodel))
        })
    }

    /// `'import' ePackage=STRING ('as' alias=ValidID)?`
    fn parse_referenced_metamodel(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::ReferencedMetamodel, |p| {
            let metamodel = p.create(NodeKind::ReferencedMetamodel);
            p.keyword(TokenKind::Import)?;
            p.assign_token(metamodel, Feature::EPackage, TokenKind::String)?;
            p.parse_metamodel_alias(metamodel)?;
            Ok(Some(metamodel))
        })
    }

    fn parse_metamodel_alias(&mut self, metamodel: NodeId) -> PResult<()> {
        if self.decide(DecisionId::MetamodelAlias)? == 1 {
            self.keyword(TokenKind::As)?;
            self.assign_valid_id(metamodel, Feature::Alias)?;
        }
        Ok(())
    }

    /// `rules+=AbstractRule+`
    ///
    /// Tokens that cannot start a rule are reported once and skipped up to
    /// the next rule.
    fn parse_rules(&mut self, grammar: NodeId) -> PResult<()> {
        let mut first = true;
        loop {
            let before = self.cursor.position();
            if !first {
                match DecisionTables::classify(DecisionId::RulesLoop, &self.cursor) {
                    Ok(Prediction::Alt(1)) => {}
                    Ok(_) => return Ok(()),
                    Err(nva) => {
                        let err = self.no_viable(nva.decision, nva.depth, nva.expected);
                        self.report(err);
                        recovery::synchronize(&mut self.cursor, follow::TOP_LEVEL);
                        if !self.ensure_progress(before) {
                            return Ok(());
                        }
                        continue;
                    }
                }
            }
            first = false;
            self.add_node(grammar, Feature::Rules, Self::parse_abstract_rule)?;
            if !self.ensure_progress(before) {
                return Ok(());
            }
        }
    }

    /// `GrammarID: ValidID ('.' ValidID)*`
    pub(super) fn parse_grammar_id(&mut self) -> PResult<Option<String>> {
        self.text_rule(Rule::GrammarId, |p| {
            let mut name = p.valid_id()?.text.clone();
            p.repeat(DecisionId::GrammarIdLoop, |p| {
                p.keyword(TokenKind::Dot)?;
                name.push('.');
                name.push_str(&p.valid_id()?.text);
                Ok(())
            })?;
            Ok(name)
        })
    }

    /// `RuleID: ValidID ('::' ValidID)*`
    pub(super) fn parse_rule_id(&mut self) -> PResult<Option<String>> {
        self.text_rule(Rule::RuleId, |p| {
            let mut name = p.valid_id()?.text.clone();
            p.repeat(DecisionId::RuleIdLoop, |p| {
                p.keyword(TokenKind::ColonColon)?;
                name.push_str("::");
                name.push_str(&p.valid_id()?.text);
                Ok(())
            })?;
            Ok(name)
        })
    }
}
