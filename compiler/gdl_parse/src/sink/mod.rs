//! Tree sink: the callbacks rule procedures drive while parsing.
//!
//! The parser never builds nodes itself. It brackets every rule, feature
//! assignment and keyword with `before`/`after` notifications and issues
//! node creation and feature assignments through [`TreeSink`].
//!
//! The sink is transactional: [`TreeSink::mark`] and [`TreeSink::rewind`]
//! let a speculative probe drop everything it reported.
//! [`AstBuilder`] implements this with an append-only operation log, so a
//! rewind is a truncation and nothing is materialized until
//! [`AstBuilder::finish`].

use gdl_ir::{Ast, Element, Feature, Node, NodeId, NodeKind, Span, TreeEvent, Value};

/// Position in a sink's history, for [`TreeSink::rewind`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SinkMark {
    ops: usize,
    nodes: u32,
}

/// Receiver of the parser's tree-building callbacks.
pub trait TreeSink {
    fn before(&mut self, element: Element);
    fn after(&mut self, element: Element);

    /// Create a node and return its id. Ids are dense and increase.
    fn create_node(&mut self, kind: NodeKind, span: Span) -> NodeId;

    /// `feature = value`.
    fn set_value(&mut self, node: NodeId, feature: Feature, value: Value);

    /// `feature += value`.
    fn add_to_collection(&mut self, node: NodeId, feature: Feature, value: Value);

    /// `feature ?= ...`.
    fn set_flag(&mut self, node: NodeId, feature: Feature);

    /// The rule that created `node` is done; `end` is its last token.
    fn finish_node(&mut self, node: NodeId, end: Span);

    /// The rule that created `node` hit a syntax error.
    fn mark_recovered(&mut self, node: NodeId);

    fn mark(&self) -> SinkMark;

    /// Forget everything reported after `mark`, node ids included.
    fn rewind(&mut self, mark: SinkMark);
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Op {
    Event(TreeEvent),
    Create(NodeKind, Span),
    Set(NodeId, Feature, Value),
    Add(NodeId, Feature, Value),
    Flag(NodeId, Feature),
    Finish(NodeId, Span),
    Recovered(NodeId),
}

/// [`TreeSink`] that materializes an arena [`Ast`].
#[derive(Clone, Debug, Default)]
pub struct AstBuilder {
    ops: Vec<Op>,
    nodes: u32,
}

impl AstBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes created and not rewound.
    pub fn node_count(&self) -> usize {
        self.nodes as usize
    }

    /// Replay the operation log into an [`Ast`].
    pub fn finish(self) -> Ast {
        let mut nodes: Vec<Node> = Vec::with_capacity(self.node_count());
        let mut events = Vec::new();
        for op in self.ops {
            match op {
                Op::Event(event) => events.push(event),
                Op::Create(kind, span) => nodes.push(Node::new(kind, span)),
                Op::Set(id, feature, value) => {
                    if let Some(node) = nodes.get_mut(id.index()) {
                        node.set(feature, value);
                    }
                }
                Op::Add(id, feature, value) => {
                    if let Some(node) = nodes.get_mut(id.index()) {
                        node.add(feature, value);
                    }
                }
                Op::Flag(id, feature) => {
                    if let Some(node) = nodes.get_mut(id.index()) {
                        node.set_flag(feature);
                    }
                }
                Op::Finish(id, end) => {
                    if let Some(node) = nodes.get_mut(id.index()) {
                        node.span = Span::new(node.span.start, end.end.max(node.span.start));
                    }
                }
                Op::Recovered(id) => {
                    if let Some(node) = nodes.get_mut(id.index()) {
                        node.recovered = true;
                    }
                }
            }
        }
        Ast::new(nodes, events)
    }
}

impl TreeSink for AstBuilder {
    fn before(&mut self, element: Element) {
        self.ops.push(Op::Event(TreeEvent::Before(element)));
    }

    fn after(&mut self, element: Element) {
        self.ops.push(Op::Event(TreeEvent::After(element)));
    }

    fn create_node(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let id = NodeId::new(self.nodes);
        self.nodes += 1;
        self.ops.push(Op::Create(kind, span));
        id
    }

    fn set_value(&mut self, node: NodeId, feature: Feature, value: Value) {
        self.ops.push(Op::Set(node, feature, value));
    }

    fn add_to_collection(&mut self, node: NodeId, feature: Feature, value: Value) {
        self.ops.push(Op::Add(node, feature, value));
    }

    fn set_flag(&mut self, node: NodeId, feature: Feature) {
        self.ops.push(Op::Flag(node, feature));
    }

    fn finish_node(&mut self, node: NodeId, end: Span) {
        self.ops.push(Op::Finish(node, end));
    }

    fn mark_recovered(&mut self, node: NodeId) {
        self.ops.push(Op::Recovered(node));
    }

    fn mark(&self) -> SinkMark {
        SinkMark {
            ops: self.ops.len(),
            nodes: self.nodes,
        }
    }

    fn rewind(&mut self, mark: SinkMark) {
        debug_assert!(mark.ops <= self.ops.len(), "sink mark from the future");
        self.ops.truncate(mark.ops);
        self.nodes = mark.nodes;
    }
}
