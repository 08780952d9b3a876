//! Enum rules: a closed set of literals, each optionally spelled by a
//! keyword.

use gdl_ir::{Feature, NodeId, NodeKind, Rule, TokenKind};

use crate::decision::DecisionId;
use crate::{PResult, Parser, TreeSink};

impl<S: TreeSink + ?Sized> Parser<'_, '_, S> {
    /// `'enum' name=ValidID ('returns' type=TypeRef)? ':' alternatives=EnumLiterals ';'`
    pub(super) fn parse_enum_rule(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::EnumRule, |p| {
            let rule = p.create(NodeKind::EnumRule);
            p.keyword(TokenKind::Enum)?;
            p.assign_valid_id(rule, Feature::Name)?;
            p.parse_optional_returns(rule)?;
            p.keyword(TokenKind::Colon)?;
            p.assign_node(rule, Feature::Alternatives, Self::parse_enum_literals)?;
            p.keyword(TokenKind::Semicolon)?;
            Ok(Some(rule))
        })
    }

    /// `EnumLiteralDeclaration ({Alternatives.elements+=current} ('|' elements+=EnumLiteralDeclaration)+)?`
    fn parse_enum_literals(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::EnumLiterals, |p| {
            p.list(
                Self::parse_enum_literal_declaration,
                DecisionId::EnumLiteralsLoop,
                Some(TokenKind::Pipe),
                NodeKind::Alternatives,
            )
        })
    }

    /// `enumLiteral=[EEnumLiteral|ValidID] ('=' literal=Keyword)?`
    fn parse_enum_literal_declaration(&mut self) -> PResult<Option<NodeId>> {
        self.rule(Rule::EnumLiteralDeclaration, |p| {
            let declaration = p.create(NodeKind::EnumLiteralDeclaration);
            p.assign_valid_id(declaration, Feature::EnumLiteral)?;
            if p.decide(DecisionId::EnumLiteralValue)? == 1 {
                p.keyword(TokenKind::Eq)?;
                p.assign_node(declaration, Feature::Literal, Self::parse_keyword)?;
            }
            Ok(Some(declaration))
        })
    }
}
