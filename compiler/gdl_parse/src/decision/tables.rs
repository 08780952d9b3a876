//! Static DFA data for every decision point.
//!
//! Alternatives are numbered from 1 in declaration order. For optional
//! parts and loops the last alternative is "exit", reached through the
//! `otherwise` fallback so the classifier never fails there.

use gdl_ir::{Rule, TokenKind};

use super::{DecisionId, DecisionPoint, DfaState, Edge, Target};
use crate::recovery::follow::{
    ASSIGN_OP, FIRST_ABSTRACT_RULE, FIRST_ABSTRACT_TOKEN, FIRST_CONDITION, FIRST_TERMINAL_TOKEN,
    PREDICATE_MARK, VALID_ID,
};
use crate::recovery::TokenSet;

use Target::{Next, Predict, Probe};

const fn on(kind: TokenKind, target: Target) -> Edge {
    Edge::new(TokenSet::single(kind), target)
}

const fn on_set(set: TokenSet, target: Target) -> Edge {
    Edge::new(set, target)
}

/// `kind` enters the optional part (alt 1), anything else exits (alt 2).
macro_rules! optional {
    ($name:ident, $kind:expr) => {
        static $name: DfaState = DfaState::new(&[on($kind, Predict(1))], Some(Predict(2)));
    };
}

// Grammar header

optional!(USED_GRAMMARS, TokenKind::With);
optional!(USED_GRAMMARS_LOOP, TokenKind::Comma);
optional!(HIDDEN_CLAUSE, TokenKind::Hidden);
optional!(DEBUG_CLAUSE, TokenKind::HoistingDebug);
optional!(OPTIONS, TokenKind::LBrace);
optional!(HIDDEN_TOKENS_LOOP, TokenKind::Comma);
optional!(GRAMMAR_ID_LOOP, TokenKind::Dot);
optional!(RULE_ID_LOOP, TokenKind::ColonColon);
optional!(METAMODEL_ALIAS, TokenKind::As);

// `tokenLimit` is also a ValidID, so a rule named `tokenLimit` must not be
// taken for the clause.
static TOKEN_LIMIT_CLAUSE: DfaState = DfaState::new(
    &[on(TokenKind::TokenLimit, Next(&TOKEN_LIMIT_CLAUSE_2))],
    Some(Predict(2)),
);
static TOKEN_LIMIT_CLAUSE_2: DfaState =
    DfaState::new(&[on(TokenKind::LParen, Predict(1))], Some(Predict(2)));

static OPTIONS_LOOP: DfaState = DfaState::new(&[on_set(VALID_ID, Predict(1))], Some(Predict(2)));

static OPTION_VALUE: DfaState = DfaState::new(
    &[
        on(TokenKind::Id, Predict(1)),
        on(TokenKind::Int, Predict(2)),
        on(TokenKind::String, Predict(3)),
        on(TokenKind::True, Predict(4)),
        on(TokenKind::False, Predict(5)),
    ],
    None,
);

// `generate` and `import` are ValidIDs too: a rule named `generate` is
// followed by `:`, `<`, `returns` or `hidden`, never by a name.
static METAMODEL_LOOP: DfaState = DfaState::new(
    &[
        on(TokenKind::Generate, Next(&METAMODEL_LOOP_GENERATE)),
        on(TokenKind::Import, Next(&METAMODEL_LOOP_IMPORT)),
    ],
    Some(Predict(3)),
);
static METAMODEL_LOOP_GENERATE: DfaState =
    DfaState::new(&[on_set(VALID_ID, Predict(1))], Some(Predict(3)));
static METAMODEL_LOOP_IMPORT: DfaState =
    DfaState::new(&[on(TokenKind::String, Predict(2))], Some(Predict(3)));

static RULES_LOOP: DfaState = DfaState::new(
    &[
        on_set(FIRST_ABSTRACT_RULE, Predict(1)),
        on(TokenKind::Eof, Predict(2)),
    ],
    None,
);

static ABSTRACT_RULE: DfaState = DfaState::new(
    &[
        on_set(VALID_ID.with(TokenKind::Fragment), Predict(1)),
        on(TokenKind::Terminal, Predict(2)),
        on(TokenKind::Enum, Predict(3)),
    ],
    None,
);

static HIDDEN_TOKENS_LIST: DfaState =
    DfaState::new(&[on_set(VALID_ID, Predict(1))], Some(Predict(2)));

// Parser rules

static PARSER_RULE_KIND: DfaState = DfaState::new(
    &[
        on(TokenKind::Fragment, Predict(1)),
        on_set(VALID_ID, Predict(2)),
    ],
    None,
);

optional!(PARSER_RULE_WILDCARD, TokenKind::Star);
optional!(RETURNS_CLAUSE, TokenKind::Returns);
optional!(RULE_HIDDEN_CLAUSE, TokenKind::Hidden);
optional!(PARAMS, TokenKind::Lt);
optional!(PARAM_LIST, TokenKind::Id);
optional!(PARAMS_LOOP, TokenKind::Comma);

static TYPE_REF_METAMODEL: DfaState =
    DfaState::new(&[on_set(VALID_ID, Next(&TYPE_REF_METAMODEL_2))], None);
static TYPE_REF_METAMODEL_2: DfaState =
    DfaState::new(&[on(TokenKind::ColonColon, Predict(1))], Some(Predict(2)));

optional!(ALTERNATIVES_LOOP, TokenKind::Pipe);

static CONDITIONAL_BRANCH: DfaState = DfaState::new(
    &[
        on(TokenKind::Lt, Predict(1)),
        on_set(FIRST_ABSTRACT_TOKEN, Predict(2)),
    ],
    None,
);

optional!(UNORDERED_GROUP_LOOP, TokenKind::Amp);

static GROUP_LOOP: DfaState =
    DfaState::new(&[on_set(FIRST_ABSTRACT_TOKEN, Predict(1))], Some(Predict(2)));

static ABSTRACT_TOKEN: DfaState = DfaState::new(
    &[
        on_set(
            VALID_ID
                .union(PREDICATE_MARK)
                .with(TokenKind::String)
                .with(TokenKind::LParen),
            Predict(1),
        ),
        on(TokenKind::LBrace, Predict(2)),
        on(TokenKind::JavaCode, Predict(3)),
    ],
    None,
);

// Gated predicate, semantic predicate and action all start with the same
// code block; only a probe of each production tells them apart.
static EMBEDDED_CODE: DfaState =
    DfaState::new(&[on(TokenKind::JavaCode, Probe(&[1, 2, 3]))], None);

// 1 assignment, 2 keyword, 3 rule call, 4 parenthesized element,
// 5 predicated keyword, 6 predicated rule call, 7 predicated group.
static ABSTRACT_TOKEN_WITH_CARDINALITY: DfaState = DfaState::new(
    &[
        on(TokenKind::String, Predict(2)),
        on(TokenKind::LParen, Predict(4)),
        on_set(VALID_ID, Next(&ATWC_AFTER_ID)),
        on_set(PREDICATE_MARK, Next(&ATWC_AFTER_MARK)),
    ],
    None,
);
static ATWC_AFTER_ID: DfaState = DfaState::new(&[on_set(ASSIGN_OP, Predict(1))], Some(Predict(3)));
static ATWC_AFTER_MARK: DfaState = DfaState::new(
    &[
        on(TokenKind::String, Predict(5)),
        on(TokenKind::LParen, Predict(7)),
        on_set(VALID_ID, Next(&ATWC_AFTER_MARK_ID)),
    ],
    None,
);
static ATWC_AFTER_MARK_ID: DfaState =
    DfaState::new(&[on_set(ASSIGN_OP, Predict(1))], Some(Predict(6)));

static CARDINALITY: DfaState = DfaState::new(
    &[
        on(TokenKind::Question, Predict(1)),
        on(TokenKind::Star, Predict(2)),
        on(TokenKind::Plus, Predict(3)),
    ],
    Some(Predict(4)),
);

static PREDICATE_MARKER: DfaState = DfaState::new(
    &[
        on(TokenKind::FatArrow, Predict(1)),
        on(TokenKind::Arrow, Predict(2)),
    ],
    None,
);

static ASSIGNMENT_PREDICATE: DfaState = DfaState::new(
    &[
        on(TokenKind::FatArrow, Predict(1)),
        on(TokenKind::Arrow, Predict(2)),
    ],
    Some(Predict(3)),
);

static ASSIGNMENT_OPERATOR: DfaState = DfaState::new(
    &[
        on(TokenKind::PlusEq, Predict(1)),
        on(TokenKind::Eq, Predict(2)),
        on(TokenKind::QuestionEq, Predict(3)),
    ],
    None,
);

static ASSIGNABLE_TERMINAL: DfaState = DfaState::new(
    &[
        on(TokenKind::String, Predict(1)),
        on_set(VALID_ID, Predict(2)),
        on(TokenKind::LParen, Predict(3)),
        on(TokenKind::LBracket, Predict(4)),
    ],
    None,
);

optional!(ASSIGNABLE_ALTERNATIVES_LOOP, TokenKind::Pipe);
optional!(CROSS_REFERENCE_TERMINAL, TokenKind::Pipe);

static CROSS_REFERENCEABLE_TERMINAL: DfaState = DfaState::new(
    &[
        on(TokenKind::String, Predict(1)),
        on_set(VALID_ID, Predict(2)),
    ],
    None,
);

optional!(RULE_CALL_ARGUMENTS, TokenKind::Lt);
optional!(ARGUMENTS_LOOP, TokenKind::Comma);

static NAMED_ARGUMENT: DfaState = DfaState::new(
    &[
        on(TokenKind::Id, Next(&NAMED_ARGUMENT_2)),
        on_set(FIRST_CONDITION, Predict(2)),
    ],
    None,
);
static NAMED_ARGUMENT_2: DfaState =
    DfaState::new(&[on(TokenKind::Eq, Predict(1))], Some(Predict(2)));

// Conditions

optional!(DISJUNCTION_LOOP, TokenKind::Pipe);
optional!(CONJUNCTION_LOOP, TokenKind::Amp);

static NEGATION: DfaState = DfaState::new(
    &[
        on(TokenKind::Bang, Predict(1)),
        on_set(FIRST_CONDITION, Predict(2)),
    ],
    None,
);

static CONDITION_ATOM: DfaState = DfaState::new(
    &[
        on(TokenKind::Id, Predict(1)),
        on(TokenKind::LParen, Predict(2)),
        on_set(
            TokenSet::of(&[TokenKind::True, TokenKind::False]),
            Predict(3),
        ),
    ],
    None,
);

static LITERAL_CONDITION: DfaState = DfaState::new(
    &[
        on(TokenKind::True, Predict(1)),
        on(TokenKind::False, Predict(2)),
    ],
    None,
);

// Actions

optional!(ACTION_ASSIGNMENT, TokenKind::Dot);

static ACTION_OPERATOR: DfaState = DfaState::new(
    &[
        on(TokenKind::Eq, Predict(1)),
        on(TokenKind::PlusEq, Predict(2)),
    ],
    None,
);

// Terminal and enum rules

static TERMINAL_RULE_KIND: DfaState = DfaState::new(
    &[
        on(TokenKind::Fragment, Predict(1)),
        on_set(VALID_ID, Predict(2)),
    ],
    None,
);

optional!(RETURNS_OPTIONAL, TokenKind::Returns);
optional!(TERMINAL_ALTERNATIVES_LOOP, TokenKind::Pipe);

static TERMINAL_GROUP_LOOP: DfaState =
    DfaState::new(&[on_set(FIRST_TERMINAL_TOKEN, Predict(1))], Some(Predict(2)));

static TERMINAL_TOKEN_ELEMENT: DfaState = DfaState::new(
    &[
        on(TokenKind::String, Predict(1)),
        on_set(VALID_ID, Predict(2)),
        on(TokenKind::LParen, Predict(3)),
        on(TokenKind::Bang, Predict(4)),
        on(TokenKind::Arrow, Predict(5)),
        on(TokenKind::Dot, Predict(6)),
        on(TokenKind::EofKw, Predict(7)),
    ],
    None,
);

optional!(CHARACTER_RANGE, TokenKind::DotDot);
optional!(ENUM_LITERALS_LOOP, TokenKind::Pipe);
optional!(ENUM_LITERAL_VALUE, TokenKind::Eq);

const fn point(
    id: DecisionId,
    rule: Rule,
    name: &'static str,
    max_depth: usize,
    start: &'static DfaState,
) -> DecisionPoint {
    DecisionPoint {
        id,
        rule,
        name,
        max_depth,
        start,
    }
}

/// Every decision point, in [`DecisionId`] order.
pub(super) static POINTS: [DecisionPoint; DecisionId::COUNT] = [
    point(DecisionId::UsedGrammars, Rule::Grammar, "Grammar.usedGrammars", 1, &USED_GRAMMARS),
    point(DecisionId::UsedGrammarsLoop, Rule::Grammar, "Grammar.usedGrammarsLoop", 1, &USED_GRAMMARS_LOOP),
    point(DecisionId::HiddenClause, Rule::Grammar, "Grammar.hiddenClause", 1, &HIDDEN_CLAUSE),
    point(DecisionId::TokenLimitClause, Rule::Grammar, "Grammar.tokenLimitClause", 2, &TOKEN_LIMIT_CLAUSE),
    point(DecisionId::DebugClause, Rule::Grammar, "Grammar.debugClause", 1, &DEBUG_CLAUSE),
    point(DecisionId::Options, Rule::Grammar, "Grammar.options", 1, &OPTIONS),
    point(DecisionId::OptionsLoop, Rule::GrammarOptions, "GrammarOption.loop", 1, &OPTIONS_LOOP),
    point(DecisionId::OptionValue, Rule::GrammarOption, "GrammarOption.value", 1, &OPTION_VALUE),
    point(DecisionId::MetamodelLoop, Rule::Grammar, "Grammar.metamodelLoop", 2, &METAMODEL_LOOP),
    point(DecisionId::RulesLoop, Rule::Grammar, "Grammar.rulesLoop", 1, &RULES_LOOP),
    point(DecisionId::AbstractRule, Rule::AbstractRule, "AbstractRule", 1, &ABSTRACT_RULE),
    point(DecisionId::HiddenTokensList, Rule::HiddenTokens, "HiddenTokens.list", 1, &HIDDEN_TOKENS_LIST),
    point(DecisionId::HiddenTokensLoop, Rule::HiddenTokens, "HiddenTokens.loop", 1, &HIDDEN_TOKENS_LOOP),
    point(DecisionId::GrammarIdLoop, Rule::GrammarId, "GrammarID.loop", 1, &GRAMMAR_ID_LOOP),
    point(DecisionId::RuleIdLoop, Rule::RuleId, "RuleID.loop", 1, &RULE_ID_LOOP),
    point(DecisionId::ParserRuleKind, Rule::ParserRule, "ParserRule.kind", 1, &PARSER_RULE_KIND),
    point(DecisionId::ParserRuleWildcard, Rule::ParserRule, "ParserRule.wildcard", 1, &PARSER_RULE_WILDCARD),
    point(DecisionId::ReturnsClause, Rule::ParserRule, "ParserRule.returnsClause", 1, &RETURNS_CLAUSE),
    point(DecisionId::RuleHiddenClause, Rule::ParserRule, "ParserRule.hiddenClause", 1, &RULE_HIDDEN_CLAUSE),
    point(DecisionId::Params, Rule::RuleNameAndParams, "RuleNameAndParams.params", 1, &PARAMS),
    point(DecisionId::ParamList, Rule::RuleNameAndParams, "RuleNameAndParams.paramList", 1, &PARAM_LIST),
    point(DecisionId::ParamsLoop, Rule::RuleNameAndParams, "Parameters.loop", 1, &PARAMS_LOOP),
    point(DecisionId::TypeRefMetamodel, Rule::TypeRef, "TypeRef.metamodel", 2, &TYPE_REF_METAMODEL),
    point(DecisionId::AlternativesLoop, Rule::Alternatives, "Alternatives.loop", 1, &ALTERNATIVES_LOOP),
    point(DecisionId::ConditionalBranch, Rule::ConditionalBranch, "ConditionalBranch", 1, &CONDITIONAL_BRANCH),
    point(DecisionId::UnorderedGroupLoop, Rule::UnorderedGroup, "UnorderedGroup.loop", 1, &UNORDERED_GROUP_LOOP),
    point(DecisionId::GroupLoop, Rule::Group, "Group.loop", 1, &GROUP_LOOP),
    point(DecisionId::AbstractToken, Rule::AbstractToken, "AbstractToken", 1, &ABSTRACT_TOKEN),
    point(DecisionId::EmbeddedCode, Rule::EmbeddedCode, "EmbeddedCode", 1, &EMBEDDED_CODE),
    point(
        DecisionId::AbstractTokenWithCardinality,
        Rule::AbstractTokenWithCardinality,
        "AbstractTokenWithCardinality",
        3,
        &ABSTRACT_TOKEN_WITH_CARDINALITY,
    ),
    point(DecisionId::Cardinality, Rule::AbstractTokenWithCardinality, "Cardinality", 1, &CARDINALITY),
    point(DecisionId::PredicateMarker, Rule::AbstractTerminal, "Predicated.marker", 1, &PREDICATE_MARKER),
    point(DecisionId::AssignmentPredicate, Rule::Assignment, "Assignment.predicate", 1, &ASSIGNMENT_PREDICATE),
    point(DecisionId::AssignmentOperator, Rule::Assignment, "Assignment.operator", 1, &ASSIGNMENT_OPERATOR),
    point(DecisionId::AssignableTerminal, Rule::AssignableTerminal, "AssignableTerminal", 1, &ASSIGNABLE_TERMINAL),
    point(
        DecisionId::AssignableAlternativesLoop,
        Rule::AssignableAlternatives,
        "AssignableAlternatives.loop",
        1,
        &ASSIGNABLE_ALTERNATIVES_LOOP,
    ),
    point(
        DecisionId::CrossReferenceTerminal,
        Rule::CrossReference,
        "CrossReference.terminal",
        1,
        &CROSS_REFERENCE_TERMINAL,
    ),
    point(
        DecisionId::CrossReferenceableTerminal,
        Rule::CrossReferenceableTerminal,
        "CrossReferenceableTerminal",
        1,
        &CROSS_REFERENCEABLE_TERMINAL,
    ),
    point(DecisionId::RuleCallArguments, Rule::RuleCall, "RuleCall.arguments", 1, &RULE_CALL_ARGUMENTS),
    point(DecisionId::ArgumentsLoop, Rule::RuleCall, "Arguments.loop", 1, &ARGUMENTS_LOOP),
    point(DecisionId::NamedArgument, Rule::NamedArgument, "NamedArgument", 2, &NAMED_ARGUMENT),
    point(DecisionId::DisjunctionLoop, Rule::Disjunction, "Disjunction.loop", 1, &DISJUNCTION_LOOP),
    point(DecisionId::ConjunctionLoop, Rule::Conjunction, "Conjunction.loop", 1, &CONJUNCTION_LOOP),
    point(DecisionId::Negation, Rule::Negation, "Negation", 1, &NEGATION),
    point(DecisionId::ConditionAtom, Rule::ConditionAtom, "ConditionAtom", 1, &CONDITION_ATOM),
    point(DecisionId::LiteralCondition, Rule::LiteralCondition, "LiteralCondition", 1, &LITERAL_CONDITION),
    point(DecisionId::ActionAssignment, Rule::Action, "Action.assignment", 1, &ACTION_ASSIGNMENT),
    point(DecisionId::ActionOperator, Rule::Action, "Action.operator", 1, &ACTION_OPERATOR),
    point(DecisionId::TerminalRuleKind, Rule::TerminalRule, "TerminalRule.kind", 1, &TERMINAL_RULE_KIND),
    point(DecisionId::ReturnsOptional, Rule::TerminalRule, "Returns.optional", 1, &RETURNS_OPTIONAL),
    point(
        DecisionId::TerminalAlternativesLoop,
        Rule::TerminalAlternatives,
        "TerminalAlternatives.loop",
        1,
        &TERMINAL_ALTERNATIVES_LOOP,
    ),
    point(DecisionId::TerminalGroupLoop, Rule::TerminalGroup, "TerminalGroup.loop", 1, &TERMINAL_GROUP_LOOP),
    point(
        DecisionId::TerminalTokenElement,
        Rule::TerminalTokenElement,
        "TerminalTokenElement",
        1,
        &TERMINAL_TOKEN_ELEMENT,
    ),
    point(DecisionId::CharacterRange, Rule::CharacterRange, "CharacterRange.range", 1, &CHARACTER_RANGE),
    point(DecisionId::EnumLiteralsLoop, Rule::EnumLiterals, "EnumLiterals.loop", 1, &ENUM_LITERALS_LOOP),
    point(
        DecisionId::EnumLiteralValue,
        Rule::EnumLiteralDeclaration,
        "EnumLiteral.literal",
        1,
        &ENUM_LITERAL_VALUE,
    ),
    point(DecisionId::MetamodelAlias, Rule::GeneratedMetamodel, "Metamodel.alias", 1, &METAMODEL_ALIAS),
];
