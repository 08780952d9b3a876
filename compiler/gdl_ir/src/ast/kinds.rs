//! Closed vocabularies of the grammar AST: rule procedures, node kinds and
//! features.

use std::fmt;

/// A production of the grammar language, one per rule procedure.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Rule {
    Grammar,
    GrammarId,
    HiddenTokens,
    TokenLimit,
    GrammarOptions,
    GrammarOption,
    RuleId,
    GeneratedMetamodel,
    ReferencedMetamodel,
    AbstractRule,
    ParserRule,
    RuleNameAndParams,
    Parameter,
    TypeRef,
    Alternatives,
    ConditionalBranch,
    UnorderedGroup,
    Group,
    AbstractToken,
    EmbeddedCode,
    GatedSemanticPredicate,
    SemanticPredicate,
    JavaAction,
    AbstractTokenWithCardinality,
    Action,
    AbstractTerminal,
    Keyword,
    RuleCall,
    NamedArgument,
    Disjunction,
    Conjunction,
    Negation,
    ConditionAtom,
    ParameterReference,
    LiteralCondition,
    Assignment,
    AssignableTerminal,
    AssignableAlternatives,
    CrossReference,
    CrossReferenceableTerminal,
    ParenthesizedElement,
    PredicatedKeyword,
    PredicatedRuleCall,
    PredicatedGroup,
    TerminalRule,
    TerminalAlternatives,
    TerminalGroup,
    TerminalToken,
    TerminalTokenElement,
    CharacterRange,
    TerminalRuleCall,
    NegatedToken,
    UntilToken,
    Wildcard,
    EofElement,
    EnumRule,
    EnumLiterals,
    EnumLiteralDeclaration,
}

impl Rule {
    pub const fn name(self) -> &'static str {
        match self {
            Rule::Grammar => "Grammar",
            Rule::GrammarId => "GrammarID",
            Rule::HiddenTokens => "HiddenTokens",
            Rule::TokenLimit => "TokenLimit",
            Rule::GrammarOptions => "GrammarOptions",
            Rule::GrammarOption => "GrammarOption",
            Rule::RuleId => "RuleID",
            Rule::GeneratedMetamodel => "GeneratedMetamodel",
            Rule::ReferencedMetamodel => "ReferencedMetamodel",
            Rule::AbstractRule => "AbstractRule",
            Rule::ParserRule => "ParserRule",
            Rule::RuleNameAndParams => "RuleNameAndParams",
            Rule::Parameter => "Parameter",
            Rule::TypeRef => "TypeRef",
            Rule::Alternatives => "Alternatives",
            Rule::ConditionalBranch => "ConditionalBranch",
            Rule::UnorderedGroup => "UnorderedGroup",
            Rule::Group => "Group",
            Rule::AbstractToken => "AbstractToken",
            Rule::EmbeddedCode => "EmbeddedCode",
            Rule::GatedSemanticPredicate => "GatedSemanticPredicate",
            Rule::SemanticPredicate => "SemanticPredicate",
            Rule::JavaAction => "JavaAction",
            Rule::AbstractTokenWithCardinality => "AbstractTokenWithCardinality",
            Rule::Action => "Action",
            Rule::AbstractTerminal => "AbstractTerminal",
            Rule::Keyword => "Keyword",
            Rule::RuleCall => "RuleCall",
            Rule::NamedArgument => "NamedArgument",
            Rule::Disjunction => "Disjunction",
            Rule::Conjunction => "Conjunction",
            Rule::Negation => "Negation",
            Rule::ConditionAtom => "ConditionAtom",
            Rule::ParameterReference => "ParameterReference",
            Rule::LiteralCondition => "LiteralCondition",
            Rule::Assignment => "Assignment",
            Rule::AssignableTerminal => "AssignableTerminal",
            Rule::AssignableAlternatives => "AssignableAlternatives",
            Rule::CrossReference => "CrossReference",
            Rule::CrossReferenceableTerminal => "CrossReferenceableTerminal",
            Rule::ParenthesizedElement => "ParenthesizedElement",
            Rule::PredicatedKeyword => "PredicatedKeyword",
            Rule::PredicatedRuleCall => "PredicatedRuleCall",
            Rule::PredicatedGroup => "PredicatedGroup",
            Rule::TerminalRule => "TerminalRule",
            Rule::TerminalAlternatives => "TerminalAlternatives",
            Rule::TerminalGroup => "TerminalGroup",
            Rule::TerminalToken => "TerminalToken",
            Rule::TerminalTokenElement => "TerminalTokenElement",
            Rule::CharacterRange => "CharacterRange",
            Rule::TerminalRuleCall => "TerminalRuleCall",
            Rule::NegatedToken => "NegatedToken",
            Rule::UntilToken => "UntilToken",
            Rule::Wildcard => "Wildcard",
            Rule::EofElement => "EOF",
            Rule::EnumRule => "EnumRule",
            Rule::EnumLiterals => "EnumLiterals",
            Rule::EnumLiteralDeclaration => "EnumLiteralDeclaration",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type of a node in the grammar AST.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    Grammar,
    GrammarOption,
    GeneratedMetamodel,
    ReferencedMetamodel,
    ParserRule,
    TerminalRule,
    EnumRule,
    Parameter,
    TypeRef,
    Alternatives,
    UnorderedGroup,
    Group,
    Action,
    Keyword,
    RuleCall,
    NamedArgument,
    Disjunction,
    Conjunction,
    Negation,
    ParameterReference,
    LiteralCondition,
    Assignment,
    CrossReference,
    GatedSemanticPredicate,
    SemanticPredicate,
    JavaAction,
    CharacterRange,
    NegatedToken,
    UntilToken,
    Wildcard,
    EofElement,
    EnumLiteralDeclaration,
    /// Placeholder for a rule that failed before building anything.
    Error,
}

impl NodeKind {
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::Grammar => "Grammar",
            NodeKind::GrammarOption => "GrammarOption",
            NodeKind::GeneratedMetamodel => "GeneratedMetamodel",
            NodeKind::ReferencedMetamodel => "ReferencedMetamodel",
            NodeKind::ParserRule => "ParserRule",
            NodeKind::TerminalRule => "TerminalRule",
            NodeKind::EnumRule => "EnumRule",
            NodeKind::Parameter => "Parameter",
            NodeKind::TypeRef => "TypeRef",
            NodeKind::Alternatives => "Alternatives",
            NodeKind::UnorderedGroup => "UnorderedGroup",
            NodeKind::Group => "Group",
            NodeKind::Action => "Action",
            NodeKind::Keyword => "Keyword",
            NodeKind::RuleCall => "RuleCall",
            NodeKind::NamedArgument => "NamedArgument",
            NodeKind::Disjunction => "Disjunction",
            NodeKind::Conjunction => "Conjunction",
            NodeKind::Negation => "Negation",
            NodeKind::ParameterReference => "ParameterReference",
            NodeKind::LiteralCondition => "LiteralCondition",
            NodeKind::Assignment => "Assignment",
            NodeKind::CrossReference => "CrossReference",
            NodeKind::GatedSemanticPredicate => "GatedSemanticPredicate",
            NodeKind::SemanticPredicate => "SemanticPredicate",
            NodeKind::JavaAction => "JavaAction",
            NodeKind::CharacterRange => "CharacterRange",
            NodeKind::NegatedToken => "NegatedToken",
            NodeKind::UntilToken => "UntilToken",
            NodeKind::Wildcard => "Wildcard",
            NodeKind::EofElement => "EOF",
            NodeKind::EnumLiteralDeclaration => "EnumLiteralDeclaration",
            NodeKind::Error => "Error",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named feature of the output model. Declaration order is the order
/// features are stored and dumped in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Feature {
    Name,
    UsedGrammars,
    DefinesHiddenTokens,
    HiddenTokens,
    TokenLimit,
    Debug,
    Options,
    MetamodelDeclarations,
    Rules,
    EPackage,
    Alias,
    Fragment,
    Wildcard,
    Type,
    Parameters,
    Metamodel,
    Classifier,
    Predicated,
    FirstSetPredicated,
    Feature,
    Operator,
    Terminal,
    Rule,
    Arguments,
    Parameter,
    CalledByName,
    GuardCondition,
    Left,
    Right,
    True,
    Code,
    EnumLiteral,
    Literal,
    Value,
    Alternatives,
    Elements,
    Cardinality,
}

impl Feature {
    pub const fn name(self) -> &'static str {
        match self {
            Feature::Name => "name",
            Feature::UsedGrammars => "usedGrammars",
            Feature::DefinesHiddenTokens => "definesHiddenTokens",
            Feature::HiddenTokens => "hiddenTokens",
            Feature::TokenLimit => "tokenLimit",
            Feature::Debug => "debug",
            Feature::Options => "options",
            Feature::MetamodelDeclarations => "metamodelDeclarations",
            Feature::Rules => "rules",
            Feature::EPackage => "ePackage",
            Feature::Alias => "alias",
            Feature::Fragment => "fragment",
            Feature::Wildcard => "wildcard",
            Feature::Type => "type",
            Feature::Parameters => "parameters",
            Feature::Metamodel => "metamodel",
            Feature::Classifier => "classifier",
            Feature::Predicated => "predicated",
            Feature::FirstSetPredicated => "firstSetPredicated",
            Feature::Feature => "feature",
            Feature::Operator => "operator",
            Feature::Terminal => "terminal",
            Feature::Rule => "rule",
            Feature::Arguments => "arguments",
            Feature::Parameter => "parameter",
            Feature::CalledByName => "calledByName",
            Feature::GuardCondition => "guardCondition",
            Feature::Left => "left",
            Feature::Right => "right",
            Feature::True => "true",
            Feature::Code => "code",
            Feature::EnumLiteral => "enumLiteral",
            Feature::Literal => "literal",
            Feature::Value => "value",
            Feature::Alternatives => "alternatives",
            Feature::Elements => "elements",
            Feature::Cardinality => "cardinality",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
