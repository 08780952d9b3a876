//! Predictive recursive-descent parser for GDL grammar files.
//!
//! One procedure per production of the grammar language lives in
//! [`grammar`]. Choice points are resolved by the static lookahead tables in
//! [`decision`]; the two unordered groups are tracked by [`unordered`]; tree
//! construction goes through the [`TreeSink`] callbacks.
//!
//! Syntax errors never abort the parse. The nearest rule procedure records
//! the error, keeps whatever node it already built (flagged `recovered`) and
//! skips to a token in its follow set. Only running out of input during
//! resynchronization, hitting the error limit or exhausting the nesting
//! limit stops the parse early, and the tree built up to that point is kept.

mod cursor;
pub mod decision;
mod error;
mod grammar;
mod options;
pub mod recovery;
mod sink;
mod snapshot;
mod stack;
pub mod unordered;

pub use cursor::{Cursor, Lookahead};
pub use decision::{DecisionId, DecisionTables, Prediction};
pub use error::SyntaxError;
pub use options::ParseOptions;
pub use recovery::TokenSet;
pub use sink::{AstBuilder, SinkMark, TreeSink};

use gdl_diagnostic::Diagnostic;
use gdl_ir::{Ast, Element, NodeId, NodeKind, Rule, Span, Token, TokenKind, TokenList};
use tracing::debug;

use crate::error::Interrupt;
use crate::recovery::follow;
use crate::snapshot::Checkpoint;
use crate::unordered::UnorderedGroups;

type PResult<T> = Result<T, Interrupt>;

/// Bookkeeping for one active rule procedure.
#[derive(Clone, Debug)]
struct Frame {
    rule: Rule,
    /// Start offset of the first token the rule saw.
    start: u32,
    /// Node the rule has built so far, or the owner it assigns into.
    current: Option<NodeId>,
    /// Node the rule created itself; finished when the rule returns.
    created: Option<NodeId>,
}

impl Frame {
    fn new(rule: Rule, start: u32) -> Self {
        Frame {
            rule,
            start,
            current: None,
            created: None,
        }
    }
}

/// Errors and termination state of one parse. The tree went to the sink.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub errors: Vec<SyntaxError>,
    /// The parse stopped before consuming all input.
    pub halted: bool,
}

/// Output from parsing into an [`AstBuilder`].
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub ast: Ast,
    pub errors: Vec<SyntaxError>,
    pub halted: bool,
}

impl ParseOutput {
    /// Check if there were any errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(SyntaxError::to_diagnostic).collect()
    }
}

/// Parser state.
pub struct Parser<'a, 's, S: TreeSink + ?Sized> {
    cursor: Cursor<'a>,
    groups: UnorderedGroups,
    sink: &'s mut S,
    options: ParseOptions,
    errors: Vec<SyntaxError>,
    frames: Vec<Frame>,
    /// Nesting depth of rule procedures.
    depth: usize,
    /// Number of probes in progress. Errors propagate unrecovered while
    /// positive.
    speculating: u32,
    halted: bool,
    /// Span start of the last recorded error.
    last_error_at: Option<u32>,
}

impl<'a, 's, S: TreeSink + ?Sized> Parser<'a, 's, S> {
    pub fn new(tokens: &'a TokenList, sink: &'s mut S, options: ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            groups: UnorderedGroups::new(),
            sink,
            options,
            errors: Vec::new(),
            frames: Vec::new(),
            depth: 0,
            speculating: 0,
            halted: false,
            last_error_at: None,
        }
    }

    /// Parse one grammar file.
    pub fn run(mut self) -> ParseReport {
        match self.parse_grammar() {
            Ok(_) => {}
            Err(Interrupt::Syntax(err)) => self.report(err),
            Err(Interrupt::Fatal(err)) => {
                debug!(%err, "fatal error");
                self.errors.push(err);
                self.halted = true;
            }
        }
        ParseReport {
            errors: self.errors,
            halted: self.halted,
        }
    }

    // Token access

    #[inline]
    fn la(&self, k: usize) -> TokenKind {
        self.cursor.la(k)
    }

    /// Match a literal token, bracketed by keyword notifications.
    fn keyword(&mut self, kind: TokenKind) -> PResult<&'a Token> {
        if !self.cursor.check(kind) {
            return Err(self.cursor.make_expect_error(kind).into());
        }
        self.sink.before(Element::Keyword(kind));
        let token = self.cursor.consume();
        self.sink.after(Element::Keyword(kind));
        Ok(token)
    }

    /// Match a lexical-class token (identifier, string, code, number).
    fn expect(&mut self, kind: TokenKind) -> PResult<&'a Token> {
        Ok(self.cursor.expect(kind)?)
    }

    /// Match a `ValidID`: an identifier or one of the soft keywords.
    fn valid_id(&mut self) -> PResult<&'a Token> {
        if follow::VALID_ID.contains(self.la(1)) {
            Ok(self.cursor.consume())
        } else {
            Err(self.cursor.make_expect_error(TokenKind::Id).into())
        }
    }

    /// Match an `INT` and convert it. Out-of-range values are reported and
    /// yield `None`; the parse goes on.
    fn int(&mut self) -> PResult<Option<u32>> {
        let token = self.expect(TokenKind::Int)?;
        match token.text.parse::<u32>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                self.report(SyntaxError::InvalidInteger {
                    text: token.text.clone(),
                    span: token.span,
                    pos: token.pos,
                });
                Ok(None)
            }
        }
    }

    // Decisions

    /// Resolve decision `id` to an alternative, probing when lookahead
    /// alone cannot decide.
    fn decide(&mut self, id: DecisionId) -> PResult<u8> {
        match DecisionTables::classify(id, &self.cursor) {
            Ok(Prediction::Alt(alt)) => Ok(alt),
            Ok(Prediction::Probe(alts)) => {
                for &alt in alts {
                    if self.probe(|p| p.speculate(id, alt))? {
                        debug!(decision = %id, alt, "probe succeeded");
                        return Ok(alt);
                    }
                }
                Err(self
                    .no_viable(id, 1, DecisionTables::point(id).start.expected())
                    .into())
            }
            Err(nva) => Err(self.no_viable(nva.decision, nva.depth, nva.expected).into()),
        }
    }

    #[cold]
    #[inline(never)]
    fn no_viable(&self, decision: DecisionId, depth: usize, expected: TokenSet) -> SyntaxError {
        let found = self.cursor.lt(depth);
        SyntaxError::NoViableAlternative {
            decision,
            found: found.kind,
            expected,
            span: found.span,
            pos: found.pos,
        }
    }

    /// Run `f` speculatively and report whether it parsed. Always rewinds
    /// the cursor, the unordered groups, the sink and the error log. A fatal
    /// error inside the probe still ends the parse.
    fn probe<T>(&mut self, f: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<bool> {
        let checkpoint = self.checkpoint();
        self.speculating += 1;
        let result = f(self);
        self.speculating -= 1;
        self.restore(checkpoint);
        match result {
            Ok(_) => Ok(true),
            Err(Interrupt::Syntax(_)) => Ok(false),
            Err(fatal @ Interrupt::Fatal(_)) => Err(fatal),
        }
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            cursor: self.cursor.mark(),
            groups: self.groups.snapshot(),
            sink: self.sink.mark(),
            errors: self.errors.len(),
            last_error_at: self.last_error_at,
            halted: self.halted,
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.cursor.rewind(checkpoint.cursor);
        self.groups.restore(checkpoint.groups);
        self.sink.rewind(checkpoint.sink);
        self.errors.truncate(checkpoint.errors);
        self.last_error_at = checkpoint.last_error_at;
        self.halted = checkpoint.halted;
    }

    /// Loop while `decision` predicts alternative 1.
    fn repeat(
        &mut self,
        decision: DecisionId,
        mut body: impl FnMut(&mut Self) -> PResult<()>,
    ) -> PResult<()> {
        loop {
            let before = self.cursor.position();
            if self.decide(decision)? != 1 {
                return Ok(());
            }
            body(self)?;
            if !self.ensure_progress(before) {
                return Ok(());
            }
        }
    }

    /// Loop guard: `false` ends the loop. An iteration that consumed nothing
    /// skips one token so the loop cannot spin.
    fn ensure_progress(&mut self, before: usize) -> bool {
        if self.halted {
            return false;
        }
        if self.cursor.position() == before {
            if self.cursor.is_at_end() {
                return false;
            }
            let skipped = self.cursor.consume();
            debug!(kind = %skipped.kind, "skipped token without progress");
        }
        true
    }

    // Rule procedures

    /// Run a rule procedure that yields a node.
    ///
    /// On a recoverable error the rule yields the node it had built so far,
    /// or a fresh `Error` node.
    fn rule(
        &mut self,
        rule: Rule,
        body: impl FnOnce(&mut Self) -> PResult<Option<NodeId>>,
    ) -> PResult<Option<NodeId>> {
        self.rule_with(rule, body, |p, frame| {
            Some(frame.current.unwrap_or_else(|| p.error_node(frame)))
        })
    }

    /// Run a datatype rule procedure that yields text.
    fn text_rule(
        &mut self,
        rule: Rule,
        body: impl FnOnce(&mut Self) -> PResult<String>,
    ) -> PResult<Option<String>> {
        self.rule_with(rule, |p| body(p).map(Some), |_, _| None)
    }

    fn rule_with<T>(
        &mut self,
        rule: Rule,
        body: impl FnOnce(&mut Self) -> PResult<T>,
        recovered: impl FnOnce(&mut Self, &Frame) -> T,
    ) -> PResult<T> {
        if self.depth >= self.options.max_depth {
            let token = self.cursor.current();
            return Err(Interrupt::Fatal(SyntaxError::StackExhausted {
                depth: self.depth,
                span: token.span,
                pos: token.pos,
            }));
        }
        let start = self.cursor.current_span().start;
        self.depth += 1;
        self.frames.push(Frame::new(rule, start));
        self.sink.before(Element::Rule(rule));

        let result = stack::ensure_sufficient_stack(|| body(self));

        let frame = self.frames.pop().unwrap_or_else(|| Frame::new(rule, start));
        let result = match result {
            Err(Interrupt::Syntax(err)) if self.speculating == 0 => {
                self.recover(&frame, err);
                Ok(recovered(self, &frame))
            }
            other => other,
        };
        if let (Ok(_), Some(node)) = (&result, frame.created) {
            self.sink.finish_node(node, self.cursor.previous_span());
        }
        self.sink.after(Element::Rule(rule));
        self.depth -= 1;
        result
    }

    /// Record `err`, flag the rule's node and resynchronize to the rule's
    /// follow set. Running into end of input halts the parse.
    fn recover(&mut self, frame: &Frame, err: SyntaxError) {
        self.report(err);
        if let Some(node) = frame.current {
            self.sink.mark_recovered(node);
        }
        if !recovery::synchronize(&mut self.cursor, follow::of(frame.rule)) {
            self.halt();
        }
    }

    /// Record a recoverable error. Once `max_errors` are recorded the parse
    /// halts and further errors are dropped; a limit of 0 records none.
    fn report(&mut self, err: SyntaxError) {
        let at = err.span().start;
        if self.halted || self.last_error_at == Some(at) {
            debug!(%err, "suppressed error");
            return;
        }
        if self.errors.len() >= self.options.max_errors {
            debug!(%err, "error limit reached");
            self.halt();
            return;
        }
        debug!(%err, "syntax error");
        self.last_error_at = Some(at);
        self.errors.push(err);
        if self.errors.len() >= self.options.max_errors {
            self.halt();
        }
    }

    fn halt(&mut self) {
        if !self.halted {
            debug!(pos = self.cursor.position(), "parse halted");
            self.halted = true;
        }
    }

    fn error_node(&mut self, frame: &Frame) -> NodeId {
        let end = self.cursor.previous_span().end.max(frame.start);
        self.sink
            .create_node(NodeKind::Error, Span::new(frame.start, end))
    }

    /// Create the node of the running rule, starting at the rule's first
    /// token.
    fn create(&mut self, kind: NodeKind) -> NodeId {
        let start = self
            .frames
            .last()
            .map_or_else(|| self.cursor.current_span().start, |f| f.start);
        let node = self.sink.create_node(kind, Span::point(start));
        if let Some(frame) = self.frames.last_mut() {
            frame.created = Some(node);
            frame.current = Some(node);
        }
        node
    }

    /// Record the node the running rule has built so far without creating
    /// one: a pass-through result, or the owner node it assigns into.
    fn set_current(&mut self, node: Option<NodeId>) {
        if let (Some(frame), Some(node)) = (self.frames.last_mut(), node) {
            frame.current = Some(node);
        }
    }
}

/// Parse tokens into an [`Ast`] with default options.
pub fn parse(tokens: &TokenList) -> ParseOutput {
    let mut builder = AstBuilder::new();
    let report = parse_with(tokens, ParseOptions::default(), &mut builder);
    ParseOutput {
        ast: builder.finish(),
        errors: report.errors,
        halted: report.halted,
    }
}

/// Parse tokens, driving a caller-supplied sink.
pub fn parse_with<S: TreeSink + ?Sized>(
    tokens: &TokenList,
    options: ParseOptions,
    sink: &mut S,
) -> ParseReport {
    Parser::new(tokens, sink, options).run()
}

/// Scan and parse `source`. Scanner errors come first in position order
/// together with the parser's.
pub fn parse_source(source: &str) -> ParseOutput {
    let lexed = gdl_lexer::lex(source);
    let mut output = parse(&lexed.tokens);
    let mut errors: Vec<SyntaxError> = lexed.errors.into_iter().map(SyntaxError::from).collect();
    errors.append(&mut output.errors);
    errors.sort_by_key(|err| err.span().start);
    output.errors = errors;
    output
}

#[cfg(test)]
mod tests;
