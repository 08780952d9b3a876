//! Grammar AST arena.
//!
//! Nodes are stored flat in an arena and referenced by [`NodeId`]. A node is a
//! [`NodeKind`] plus an ordered list of feature assignments, mirroring the
//! three assignment operators of the grammar language: `=` stores a single
//! [`Value`], `+=` appends to a list, `?=` records a boolean flag.
//!
//! Features are kept sorted by [`Feature`] declaration order, so two trees
//! built from the same content in a different clause order compare equal.

mod kinds;

pub use kinds::{Feature, NodeKind, Rule};

use std::fmt::{self, Write as _};
use std::ops::Index;

use rustc_hash::FxHashMap;

use crate::{Span, TokenKind};

/// Index of a node in an [`Ast`] arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value assigned to a feature.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Value {
    /// Identifier, qualified name, operator or string literal text.
    Text(String),
    Int(u32),
    Node(NodeId),
}

impl Value {
    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }
}

/// What a node holds for one feature.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum FeatureValue {
    /// Assigned with `=`; a later assignment overwrites.
    Single(Value),
    /// Assigned with `+=`, in assignment order.
    Many(Vec<Value>),
    /// Assigned with `?=`.
    Flag,
}

/// Grammar element bracketed by `before`/`after` tree notifications.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Element {
    Rule(Rule),
    Feature(Feature),
    Keyword(TokenKind),
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Rule(rule) => f.write_str(rule.name()),
            Element::Feature(feature) => f.write_str(feature.name()),
            Element::Keyword(kind) => write!(f, "{kind}"),
        }
    }
}

/// One `before`/`after` notification, in the order the parser emitted it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TreeEvent {
    Before(Element),
    After(Element),
}

/// A node of the grammar AST.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    /// Sorted by feature, at most one entry per feature.
    features: Vec<(Feature, FeatureValue)>,
    /// The rule that built this node hit a syntax error.
    pub recovered: bool,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node {
            kind,
            span,
            features: Vec::new(),
            recovered: false,
        }
    }

    fn slot(&self, feature: Feature) -> Result<usize, usize> {
        self.features.binary_search_by_key(&feature, |(f, _)| *f)
    }

    /// `feature = value`: overwrite.
    pub fn set(&mut self, feature: Feature, value: Value) {
        match self.slot(feature) {
            Ok(i) => self.features[i].1 = FeatureValue::Single(value),
            Err(i) => self
                .features
                .insert(i, (feature, FeatureValue::Single(value))),
        }
    }

    /// `feature += value`: append.
    pub fn add(&mut self, feature: Feature, value: Value) {
        match self.slot(feature) {
            Ok(i) => {
                let slot = &mut self.features[i].1;
                if let FeatureValue::Many(values) = slot {
                    values.push(value);
                    return;
                }
                *slot = match std::mem::replace(slot, FeatureValue::Flag) {
                    FeatureValue::Single(previous) => FeatureValue::Many(vec![previous, value]),
                    FeatureValue::Many(_) | FeatureValue::Flag => FeatureValue::Many(vec![value]),
                };
            }
            Err(i) => self
                .features
                .insert(i, (feature, FeatureValue::Many(vec![value]))),
        }
    }

    /// `feature ?= ...`: flag.
    pub fn set_flag(&mut self, feature: Feature) {
        match self.slot(feature) {
            Ok(i) => self.features[i].1 = FeatureValue::Flag,
            Err(i) => self.features.insert(i, (feature, FeatureValue::Flag)),
        }
    }

    pub fn get(&self, feature: Feature) -> Option<&FeatureValue> {
        self.slot(feature).ok().map(|i| &self.features[i].1)
    }

    /// All assigned features, in feature order.
    pub fn features(&self) -> impl Iterator<Item = (Feature, &FeatureValue)> {
        self.features.iter().map(|(f, v)| (*f, v))
    }

    /// Text of a single-valued feature.
    pub fn text(&self, feature: Feature) -> Option<&str> {
        match self.get(feature)? {
            FeatureValue::Single(Value::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn int(&self, feature: Feature) -> Option<u32> {
        match self.get(feature)? {
            FeatureValue::Single(Value::Int(n)) => Some(*n),
            _ => None,
        }
    }

    /// Child node of a single-valued feature.
    pub fn child(&self, feature: Feature) -> Option<NodeId> {
        match self.get(feature)? {
            FeatureValue::Single(Value::Node(id)) => Some(*id),
            _ => None,
        }
    }

    /// Values of a multi-valued feature; empty when unassigned.
    pub fn values(&self, feature: Feature) -> &[Value] {
        match self.get(feature) {
            Some(FeatureValue::Many(values)) => values,
            _ => &[],
        }
    }

    pub fn children(&self, feature: Feature) -> impl Iterator<Item = NodeId> + '_ {
        self.values(feature).iter().filter_map(|v| match v {
            Value::Node(id) => Some(*id),
            _ => None,
        })
    }

    pub fn texts(&self, feature: Feature) -> Vec<&str> {
        self.values(feature)
            .iter()
            .filter_map(|v| match v {
                Value::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn flag(&self, feature: Feature) -> bool {
        matches!(self.get(feature), Some(FeatureValue::Flag))
    }
}

/// A parsed grammar: node arena, tree event trace and a rule-name index.
///
/// The root is the first node created, which the parser always makes the
/// `Grammar` node.
#[derive(Clone, Debug, Default)]
pub struct Ast {
    nodes: Vec<Node>,
    events: Vec<TreeEvent>,
    rules: FxHashMap<String, NodeId>,
}

impl Ast {
    pub fn new(nodes: Vec<Node>, events: Vec<TreeEvent>) -> Self {
        let mut rules = FxHashMap::default();
        if let Some(root) = nodes.first() {
            for id in root.children(Feature::Rules) {
                if let Some(name) = nodes.get(id.index()).and_then(|n| n.text(Feature::Name)) {
                    rules.entry(name.to_owned()).or_insert(id);
                }
            }
        }
        Ast {
            nodes,
            events,
            rules,
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        (!self.nodes.is_empty()).then_some(NodeId(0))
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The `before`/`after` notifications the parser emitted.
    pub fn events(&self) -> &[TreeEvent] {
        &self.events
    }

    /// Top-level rule (parser, terminal or enum) by name. The first
    /// declaration wins when a name is declared twice.
    pub fn rule(&self, name: &str) -> Option<NodeId> {
        self.rules.get(name).copied()
    }

    /// Number of recovered or error nodes reachable from the root.
    pub fn recovered_count(&self) -> usize {
        let mut count = 0;
        if let Some(root) = self.root() {
            self.walk(root, &mut |node| {
                if node.recovered || node.kind == NodeKind::Error {
                    count += 1;
                }
            });
        }
        count
    }

    fn walk(&self, id: NodeId, visit: &mut impl FnMut(&Node)) {
        let Some(node) = self.get(id) else {
            return;
        };
        visit(node);
        for (_, value) in node.features() {
            match value {
                FeatureValue::Single(Value::Node(child)) => self.walk(*child, visit),
                FeatureValue::Many(values) => {
                    for value in values {
                        if let Value::Node(child) = value {
                            self.walk(*child, visit);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    /// Indented rendering of the tree reachable from the root, without spans
    /// or node ids.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.root() {
            self.dump_node(root, 0, &mut out);
        }
        out
    }

    fn dump_node(&self, id: NodeId, indent: usize, out: &mut String) {
        let Some(node) = self.get(id) else {
            let _ = writeln!(out, "{:indent$}<dangling {id:?}>", "");
            return;
        };
        let _ = write!(out, "{:indent$}{}", "", node.kind.name());
        if node.recovered {
            out.push_str(" (recovered)");
        }
        out.push('\n');
        let indent = indent + 2;
        for (feature, value) in node.features() {
            match value {
                FeatureValue::Single(value) => {
                    self.dump_value(feature.name(), "=", value, indent, out);
                }
                FeatureValue::Many(values) => {
                    for value in values {
                        self.dump_value(feature.name(), "+=", value, indent, out);
                    }
                }
                FeatureValue::Flag => {
                    let _ = writeln!(out, "{:indent$}{} ?= true", "", feature.name());
                }
            }
        }
    }

    fn dump_value(&self, name: &str, op: &str, value: &Value, indent: usize, out: &mut String) {
        match value {
            Value::Text(text) => {
                let _ = writeln!(out, "{:indent$}{name} {op} {text:?}", "");
            }
            Value::Int(n) => {
                let _ = writeln!(out, "{:indent$}{name} {op} {n}", "");
            }
            Value::Node(child) => {
                let _ = writeln!(out, "{:indent$}{name} {op}", "");
                self.dump_node(*child, indent + 2, out);
            }
        }
    }
}

impl Index<NodeId> for Ast {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

#[cfg(test)]
mod tests;
