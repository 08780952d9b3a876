//! Parser checkpoints for speculative parsing.
//!
//! A checkpoint captures everything a probe can change: the cursor position,
//! the unordered-group stack, the tree sink history and the error log.
//! Restoring one puts the parser back exactly where it was, so a probe that
//! parsed half a production leaves no trace.

use crate::sink::SinkMark;
use crate::unordered::GroupSnapshot;

#[derive(Clone, Debug)]
pub(crate) struct Checkpoint {
    pub(crate) cursor: usize,
    pub(crate) groups: GroupSnapshot,
    pub(crate) sink: SinkMark,
    pub(crate) errors: usize,
    pub(crate) last_error_at: Option<u32>,
    pub(crate) halted: bool,
}
