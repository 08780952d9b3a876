//! Unordered-group coordinator.
//!
//! An unordered group is a set of clauses that may appear in any order, each
//! at most once. Two exist in the grammar language: the grammar header
//! (`hidden(...)`, `tokenLimit(...)`, `hoistingDebug`) and the parser-rule
//! header (`returns Type`, `hidden(...)`).
//!
//! The coordinator keeps one [`Activation`] per group currently being
//! matched, innermost last. A rule procedure enters its group before the
//! clause loop and leaves it when it finishes, whether or not it failed.
//! Clause selection is recorded in the innermost activation of the group
//! and rolled back together with the cursor when a probe rewinds.

use std::fmt;

use smallvec::SmallVec;
use tracing::debug;

use crate::cursor::Lookahead;
use crate::decision::{DecisionId, DecisionTables, Prediction};

/// Identity of an unordered group.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GroupId {
    GrammarHeader,
    ParserRuleHeader,
}

impl GroupId {
    pub fn spec(self) -> &'static GroupSpec {
        match self {
            GroupId::GrammarHeader => &GRAMMAR_HEADER,
            GroupId::ParserRuleHeader => &PARSER_RULE_HEADER,
        }
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().name)
    }
}

/// Static shape of a group: one entry decision per clause, in declaration
/// order. A clause is entered when its decision predicts alternative 1.
#[derive(Debug)]
pub struct GroupSpec {
    pub id: GroupId,
    pub name: &'static str,
    pub clauses: &'static [DecisionId],
}

impl GroupSpec {
    fn len(&self) -> usize {
        self.clauses.len()
    }

    fn all(&self) -> u32 {
        (1u32 << self.clauses.len()) - 1
    }
}

static GRAMMAR_HEADER: GroupSpec = GroupSpec {
    id: GroupId::GrammarHeader,
    name: "Grammar.header",
    clauses: &[
        DecisionId::HiddenClause,
        DecisionId::TokenLimitClause,
        DecisionId::DebugClause,
    ],
};

static PARSER_RULE_HEADER: GroupSpec = GroupSpec {
    id: GroupId::ParserRuleHeader,
    name: "ParserRule.header",
    clauses: &[DecisionId::ReturnsClause, DecisionId::RuleHiddenClause],
};

/// Progress of one activation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GroupState {
    /// No clause selected yet.
    Fresh,
    /// Some clauses selected and another one can still be entered.
    Partial,
    /// Every clause selected, or none of the remaining ones accepts the
    /// lookahead.
    Exhausted,
}

/// One group being matched: which clauses were taken so far.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Activation {
    pub group: GroupId,
    /// Bit `i` set when clause `i` was selected.
    pub selected: u32,
}

/// Saved coordinator state for rewinding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupSnapshot(SmallVec<[Activation; 4]>);

/// Runtime bookkeeping of the active unordered groups.
#[derive(Clone, Debug, Default)]
pub struct UnorderedGroups {
    stack: SmallVec<[Activation; 4]>,
}

impl UnorderedGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, group: GroupId) {
        debug!(%group, "enter unordered group");
        self.stack.push(Activation { group, selected: 0 });
    }

    /// Pop the innermost activation of `group` and everything above it.
    pub fn leave(&mut self, group: GroupId) {
        debug_assert_eq!(
            self.stack.last().map(|a| a.group),
            Some(group),
            "leaving {group} out of order"
        );
        if let Some(at) = self.stack.iter().rposition(|a| a.group == group) {
            self.stack.truncate(at);
        }
    }

    fn innermost(&self, group: GroupId) -> Option<&Activation> {
        self.stack.iter().rev().find(|a| a.group == group)
    }

    fn innermost_mut(&mut self, group: GroupId) -> Option<&mut Activation> {
        self.stack.iter_mut().rev().find(|a| a.group == group)
    }

    /// Whether clause `idx` of `group` is still free and its own classifier
    /// accepts the current lookahead.
    pub fn can_select<L: Lookahead + ?Sized>(&self, group: GroupId, idx: usize, la: &L) -> bool {
        let Some(activation) = self.innermost(group) else {
            return false;
        };
        let Some(&decision) = group.spec().clauses.get(idx) else {
            return false;
        };
        activation.selected & (1 << idx) == 0
            && DecisionTables::classify(decision, la) == Ok(Prediction::Alt(1))
    }

    /// First clause, in declaration order, that [`can_select`](Self::can_select).
    pub fn next_selectable<L: Lookahead + ?Sized>(&self, group: GroupId, la: &L) -> Option<usize> {
        (0..group.spec().len()).find(|&idx| self.can_select(group, idx, la))
    }

    pub fn select(&mut self, group: GroupId, idx: usize) {
        debug!(%group, clause = idx, "select clause");
        if let Some(activation) = self.innermost_mut(group) {
            debug_assert!(
                activation.selected & (1 << idx) == 0,
                "clause {idx} of {group} selected twice"
            );
            activation.selected |= 1 << idx;
        }
    }

    pub fn deselect(&mut self, group: GroupId, idx: usize) {
        if let Some(activation) = self.innermost_mut(group) {
            activation.selected &= !(1 << idx);
        }
    }

    /// State of the innermost activation of `group` at lookahead `la`;
    /// `Fresh` when inactive or nothing was selected yet.
    pub fn state<L: Lookahead + ?Sized>(&self, group: GroupId, la: &L) -> GroupState {
        match self.innermost(group).map(|a| a.selected) {
            None | Some(0) => GroupState::Fresh,
            Some(selected) if selected == group.spec().all() => GroupState::Exhausted,
            Some(_) if self.next_selectable(group, la).is_none() => GroupState::Exhausted,
            Some(_) => GroupState::Partial,
        }
    }

    pub fn snapshot(&self) -> GroupSnapshot {
        GroupSnapshot(self.stack.clone())
    }

    pub fn restore(&mut self, snapshot: GroupSnapshot) {
        self.stack = snapshot.0;
    }
}
