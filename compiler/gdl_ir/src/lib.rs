//! Shared data types for the GDL front end.
//!
//! - [`Span`], [`LineCol`] and [`LineIndex`] for source locations
//! - [`TokenKind`], [`Token`] and [`TokenList`] produced by the scanner
//! - the grammar AST arena ([`Ast`], [`Node`], [`NodeId`]) built by the parser

pub mod ast;
mod span;
mod token;

pub use ast::{Ast, Element, Feature, FeatureValue, Node, NodeId, NodeKind, Rule, TreeEvent, Value};
pub use span::{LineCol, LineIndex, Span, SpanError};
pub use token::{Channel, Token, TokenKind, TokenList};
