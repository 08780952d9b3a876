//! Decision tables: lookahead classifiers for every choice point of the
//! grammar language.
//!
//! Each [`DecisionPoint`] owns a small static DFA over token kinds. Walking
//! it reads `la(1)`, `la(2)`, ... without consuming anything and ends in one
//! of three ways:
//!
//! - a predicted alternative (1-based, declaration order),
//! - a list of alternatives to try by syntactic-predicate probe, in order,
//! - no viable alternative, with the set of kinds that would have matched.
//!
//! Edges of a state are tried in declaration order and the first one whose
//! set contains the lookahead kind wins.

mod tables;

use std::fmt;

use gdl_ir::{Rule, TokenKind};
use tracing::trace;

use crate::cursor::Lookahead;
use crate::recovery::TokenSet;

/// Where an edge of a [`DfaState`] leads.
#[derive(Copy, Clone, Debug)]
pub enum Target {
    /// The alternative is decided.
    Predict(u8),
    /// Inspect one more token.
    Next(&'static DfaState),
    /// Lookahead cannot decide; probe these alternatives in order.
    Probe(&'static [u8]),
}

/// One outgoing edge of a [`DfaState`].
#[derive(Copy, Clone, Debug)]
pub struct Edge {
    pub on: TokenSet,
    pub target: Target,
}

impl Edge {
    pub const fn new(on: TokenSet, target: Target) -> Self {
        Edge { on, target }
    }
}

/// A DFA state: edges on the lookahead kind at this depth, plus an optional
/// fallback taken when no edge matches.
#[derive(Debug)]
pub struct DfaState {
    pub edges: &'static [Edge],
    pub otherwise: Option<Target>,
}

impl DfaState {
    pub const fn new(edges: &'static [Edge], otherwise: Option<Target>) -> Self {
        DfaState { edges, otherwise }
    }

    /// Union of the edge sets: the kinds this state accepts.
    pub fn expected(&self) -> TokenSet {
        self.edges
            .iter()
            .fold(TokenSet::new(), |acc, edge| acc.union(edge.on))
    }

    fn step(&self, kind: TokenKind) -> Option<Target> {
        self.edges
            .iter()
            .find(|edge| edge.on.contains(kind))
            .map(|edge| edge.target)
            .or(self.otherwise)
    }

    /// Deepest lookahead any walk from this state can read.
    pub fn depth(&self) -> usize {
        let below = self
            .edges
            .iter()
            .map(|edge| edge.target)
            .chain(self.otherwise)
            .map(|target| match target {
                Target::Next(next) => next.depth(),
                Target::Predict(_) | Target::Probe(_) => 0,
            })
            .max()
            .unwrap_or(0);
        below + 1
    }
}

/// Identity of a decision point.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum DecisionId {
    UsedGrammars,
    UsedGrammarsLoop,
    HiddenClause,
    TokenLimitClause,
    DebugClause,
    Options,
    OptionsLoop,
    OptionValue,
    MetamodelLoop,
    RulesLoop,
    AbstractRule,
    HiddenTokensList,
    HiddenTokensLoop,
    GrammarIdLoop,
    RuleIdLoop,
    ParserRuleKind,
    ParserRuleWildcard,
    ReturnsClause,
    RuleHiddenClause,
    Params,
    ParamList,
    ParamsLoop,
    TypeRefMetamodel,
    AlternativesLoop,
    ConditionalBranch,
    UnorderedGroupLoop,
    GroupLoop,
    AbstractToken,
    EmbeddedCode,
    AbstractTokenWithCardinality,
    Cardinality,
    PredicateMarker,
    AssignmentPredicate,
    AssignmentOperator,
    AssignableTerminal,
    AssignableAlternativesLoop,
    CrossReferenceTerminal,
    CrossReferenceableTerminal,
    RuleCallArguments,
    ArgumentsLoop,
    NamedArgument,
    DisjunctionLoop,
    ConjunctionLoop,
    Negation,
    ConditionAtom,
    LiteralCondition,
    ActionAssignment,
    ActionOperator,
    TerminalRuleKind,
    ReturnsOptional,
    TerminalAlternativesLoop,
    TerminalGroupLoop,
    TerminalTokenElement,
    CharacterRange,
    EnumLiteralsLoop,
    EnumLiteralValue,
    MetamodelAlias,
}

impl DecisionId {
    pub const COUNT: usize = 57;

    /// The static record of this decision point.
    #[inline]
    pub fn point(self) -> &'static DecisionPoint {
        &tables::POINTS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.point().name
    }
}

impl fmt::Display for DecisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static description of a decision point.
#[derive(Debug)]
pub struct DecisionPoint {
    pub id: DecisionId,
    /// Rule procedure the decision belongs to.
    pub rule: Rule,
    /// `Rule.position`, for diagnostics and tracing.
    pub name: &'static str,
    /// Deepest lookahead the classifier reads.
    pub max_depth: usize,
    pub start: &'static DfaState,
}

/// Outcome of a successful classification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Prediction {
    Alt(u8),
    /// Probe these alternatives in order; the first that parses wins.
    Probe(&'static [u8]),
}

/// Classification failure: the lookahead matches no alternative.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NoViableAlt {
    pub decision: DecisionId,
    /// Lookahead depth at which the walk failed (1-based).
    pub depth: usize,
    pub found: TokenKind,
    pub expected: TokenSet,
}

/// Read-only lookup service over the static decision tables.
#[derive(Copy, Clone, Debug, Default)]
pub struct DecisionTables;

impl DecisionTables {
    /// All decision points, indexed by [`DecisionId`].
    pub fn points() -> &'static [DecisionPoint] {
        &tables::POINTS
    }

    #[inline]
    pub fn point(id: DecisionId) -> &'static DecisionPoint {
        id.point()
    }

    /// Classify the lookahead at decision `id`. Never consumes.
    pub fn classify<L: Lookahead + ?Sized>(
        id: DecisionId,
        la: &L,
    ) -> Result<Prediction, NoViableAlt> {
        let mut state = id.point().start;
        let mut depth = 1;
        loop {
            let kind = la.la(depth);
            match state.step(kind) {
                Some(Target::Predict(alt)) => {
                    trace!(decision = %id, alt, depth, "predict");
                    return Ok(Prediction::Alt(alt));
                }
                Some(Target::Probe(alts)) => {
                    trace!(decision = %id, ?alts, depth, "probe");
                    return Ok(Prediction::Probe(alts));
                }
                Some(Target::Next(next)) => {
                    state = next;
                    depth += 1;
                }
                None => {
                    return Err(NoViableAlt {
                        decision: id,
                        depth,
                        found: kind,
                        expected: state.expected(),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
