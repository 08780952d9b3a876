//! Static follow sets of the rule procedures.
//!
//! The follow set of a rule is every token that may legally come right after
//! it, in any context it is invoked from. Only the rules that can end the
//! grammar file carry `Eof`; every other rule halts the parse when
//! resynchronization runs into end of input.

use gdl_ir::{Rule, TokenKind};

use super::TokenSet;

/// Tokens usable as a `ValidID`: identifiers and the soft keywords.
pub const VALID_ID: TokenSet = TokenSet::of(&[
    TokenKind::Id,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Generate,
    TokenKind::Import,
    TokenKind::TokenLimit,
]);

pub const CARDINALITY: TokenSet =
    TokenSet::of(&[TokenKind::Question, TokenKind::Star, TokenKind::Plus]);

pub const ASSIGN_OP: TokenSet =
    TokenSet::of(&[TokenKind::Eq, TokenKind::PlusEq, TokenKind::QuestionEq]);

pub const PREDICATE_MARK: TokenSet = TokenSet::of(&[TokenKind::FatArrow, TokenKind::Arrow]);

/// Start of a parser, terminal or enum rule.
pub const FIRST_ABSTRACT_RULE: TokenSet = VALID_ID.union(TokenSet::of(&[
    TokenKind::Fragment,
    TokenKind::Terminal,
    TokenKind::Enum,
]));

/// Start of an element of a parser rule body.
pub const FIRST_ABSTRACT_TOKEN: TokenSet = VALID_ID.union(TokenSet::of(&[
    TokenKind::String,
    TokenKind::LParen,
    TokenKind::FatArrow,
    TokenKind::Arrow,
    TokenKind::LBrace,
    TokenKind::JavaCode,
]));

/// Start of a condition (guard or rule-call argument).
pub const FIRST_CONDITION: TokenSet = TokenSet::of(&[
    TokenKind::Id,
    TokenKind::LParen,
    TokenKind::Bang,
    TokenKind::True,
    TokenKind::False,
]);

/// Start of an element of a terminal rule body.
pub const FIRST_TERMINAL_TOKEN: TokenSet = VALID_ID.union(TokenSet::of(&[
    TokenKind::String,
    TokenKind::LParen,
    TokenKind::Bang,
    TokenKind::Arrow,
    TokenKind::Dot,
    TokenKind::EofKw,
]));

/// Between rules: the next rule or end of input.
pub const TOP_LEVEL: TokenSet = FIRST_ABSTRACT_RULE.with(TokenKind::Eof);

/// After the metamodel declarations.
const METAMODEL_FOLLOW: TokenSet = FIRST_ABSTRACT_RULE
    .with(TokenKind::Generate)
    .with(TokenKind::Import);

/// After any part of the grammar header.
const HEADER_FOLLOW: TokenSet = METAMODEL_FOLLOW.union(TokenSet::of(&[
    TokenKind::With,
    TokenKind::Comma,
    TokenKind::Hidden,
    TokenKind::TokenLimit,
    TokenKind::HoistingDebug,
    TokenKind::LBrace,
]));

/// After a `hidden(...)` clause, in a grammar or parser-rule header.
const HIDDEN_FOLLOW: TokenSet = HEADER_FOLLOW
    .with(TokenKind::Returns)
    .with(TokenKind::Colon);

/// After a type reference: `returns` clause, action, cross reference.
const TYPE_REF_FOLLOW: TokenSet = TokenSet::of(&[
    TokenKind::Hidden,
    TokenKind::Colon,
    TokenKind::Dot,
    TokenKind::RBrace,
    TokenKind::Pipe,
    TokenKind::RBracket,
]);

/// After a body: end of rule or closing parenthesis.
const BODY_FOLLOW: TokenSet = TokenSet::of(&[TokenKind::RParen, TokenKind::Semicolon]);

/// After one branch of an alternatives list.
const BRANCH_FOLLOW: TokenSet = BODY_FOLLOW.with(TokenKind::Pipe);

/// After one group of an unordered group.
const GROUP_FOLLOW: TokenSet = BRANCH_FOLLOW.with(TokenKind::Amp);

/// After an element of a parser rule body (cardinality already applied).
const ELEMENT_FOLLOW: TokenSet = FIRST_ABSTRACT_TOKEN.union(GROUP_FOLLOW);

/// After an element before its cardinality, or inside a cross reference.
const TERMINAL_FOLLOW: TokenSet = ELEMENT_FOLLOW
    .union(CARDINALITY)
    .with(TokenKind::RBracket);

/// After an element of a terminal rule body (cardinality already applied).
const TERMINAL_TOKEN_FOLLOW: TokenSet = FIRST_TERMINAL_TOKEN.union(BRANCH_FOLLOW);

/// After an element of a terminal rule body before its cardinality.
const TERMINAL_ELEMENT_FOLLOW: TokenSet = TERMINAL_TOKEN_FOLLOW.union(CARDINALITY);

/// After a keyword: parser, terminal and enum rule bodies, character ranges.
const KEYWORD_FOLLOW: TokenSet = TERMINAL_FOLLOW
    .union(TERMINAL_ELEMENT_FOLLOW)
    .with(TokenKind::DotDot);

/// After a rule reference: hidden-token lists, rule-call arguments, bodies.
const RULE_ID_FOLLOW: TokenSet = KEYWORD_FOLLOW
    .with(TokenKind::Comma)
    .with(TokenKind::Lt);

/// After a full condition: guard end, argument separator, parenthesis.
const DISJUNCTION_FOLLOW: TokenSet =
    TokenSet::of(&[TokenKind::Gt, TokenKind::Comma, TokenKind::RParen]);

const CONJUNCTION_FOLLOW: TokenSet = DISJUNCTION_FOLLOW.with(TokenKind::Pipe);

const NEGATION_FOLLOW: TokenSet = CONJUNCTION_FOLLOW.with(TokenKind::Amp);

/// After a parameter declaration.
const PARAMETER_FOLLOW: TokenSet = TokenSet::of(&[TokenKind::Comma, TokenKind::Gt]);

/// Static follow set of `rule`.
pub const fn of(rule: Rule) -> TokenSet {
    match rule {
        Rule::Grammar => TokenSet::single(TokenKind::Eof),
        Rule::AbstractRule | Rule::ParserRule | Rule::TerminalRule | Rule::EnumRule => TOP_LEVEL,
        Rule::GrammarId | Rule::TokenLimit => HEADER_FOLLOW,
        Rule::HiddenTokens => HIDDEN_FOLLOW,
        Rule::GrammarOptions | Rule::GeneratedMetamodel | Rule::ReferencedMetamodel => {
            METAMODEL_FOLLOW
        }
        Rule::GrammarOption => VALID_ID.with(TokenKind::RBrace),
        Rule::RuleId => RULE_ID_FOLLOW,
        Rule::RuleNameAndParams => TokenSet::of(&[
            TokenKind::Returns,
            TokenKind::Hidden,
            TokenKind::Colon,
            TokenKind::Star,
        ]),
        Rule::Parameter | Rule::NamedArgument => PARAMETER_FOLLOW,
        Rule::TypeRef => TYPE_REF_FOLLOW,
        Rule::Alternatives | Rule::TerminalAlternatives => BODY_FOLLOW,
        Rule::ConditionalBranch | Rule::UnorderedGroup | Rule::TerminalGroup => BRANCH_FOLLOW,
        Rule::Group => GROUP_FOLLOW,
        Rule::AbstractToken
        | Rule::EmbeddedCode
        | Rule::GatedSemanticPredicate
        | Rule::SemanticPredicate
        | Rule::JavaAction
        | Rule::AbstractTokenWithCardinality
        | Rule::Action => ELEMENT_FOLLOW,
        Rule::AbstractTerminal
        | Rule::Assignment
        | Rule::AssignableTerminal
        | Rule::CrossReference
        | Rule::ParenthesizedElement
        | Rule::PredicatedKeyword
        | Rule::PredicatedRuleCall
        | Rule::PredicatedGroup => TERMINAL_FOLLOW,
        Rule::AssignableAlternatives => TokenSet::single(TokenKind::RParen),
        Rule::Keyword
        | Rule::RuleCall
        | Rule::CrossReferenceableTerminal
        | Rule::TerminalRuleCall => KEYWORD_FOLLOW,
        Rule::Disjunction => DISJUNCTION_FOLLOW,
        Rule::Conjunction => CONJUNCTION_FOLLOW,
        Rule::Negation
        | Rule::ConditionAtom
        | Rule::ParameterReference
        | Rule::LiteralCondition => NEGATION_FOLLOW,
        Rule::TerminalToken => TERMINAL_TOKEN_FOLLOW,
        Rule::TerminalTokenElement
        | Rule::CharacterRange
        | Rule::NegatedToken
        | Rule::UntilToken
        | Rule::Wildcard
        | Rule::EofElement => TERMINAL_ELEMENT_FOLLOW,
        Rule::EnumLiterals => TokenSet::single(TokenKind::Semicolon),
        Rule::EnumLiteralDeclaration => {
            TokenSet::of(&[TokenKind::Pipe, TokenKind::Semicolon])
        }
    }
}
