//! Error recovery for the parser.
//!
//! Provides token sets and follow-set synchronization for continuing after a
//! syntax error. Uses bitset-based O(1) membership testing.
//!
//! A rule procedure that catches a syntax error discards tokens until one in
//! its static follow set (see [`follow`]) shows up. Reaching end of input
//! first means no enclosing rule can resume either, so the parse halts.

pub mod follow;

use gdl_ir::TokenKind;
use tracing::debug;

use crate::cursor::{Cursor, Lookahead};

// TokenSet uses a u64 bitset, so all discriminant indices must fit in 0..63.
const _: () = assert!(
    TokenKind::COUNT <= 64,
    "TokenSet uses u64 bitset; all discriminant indices must be < 64"
);

/// A set of token kinds using bitset representation for O(1) membership testing.
///
/// Each bit corresponds to a [`TokenKind`] discriminant index. Sets are built
/// in const contexts:
///
/// ```
/// use gdl_ir::TokenKind;
/// use gdl_parse::TokenSet;
///
/// const CARDINALITY: TokenSet = TokenSet::new()
///     .with(TokenKind::Question)
///     .with(TokenKind::Star)
///     .with(TokenKind::Plus);
///
/// assert!(CARDINALITY.contains(TokenKind::Star));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a token set containing a single token kind.
    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u64 << kind.index())
    }

    /// Create a token set from a slice of kinds.
    pub const fn of(kinds: &[TokenKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            bits |= 1u64 << kinds[i].index();
            i += 1;
        }
        Self(bits)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.index()))
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check if this set contains a token kind.
    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.index())) != 0
    }

    /// Add a token kind to this set (non-const mutation).
    #[inline]
    pub fn insert(&mut self, kind: TokenKind) {
        self.0 |= 1u64 << kind.index();
    }

    /// Iterate over the kinds in this set, in discriminant order.
    pub fn iter(&self) -> TokenSetIter {
        TokenSetIter { bits: self.0 }
    }

    /// Format this token set as a human-readable list for error messages.
    ///
    /// Returns a string like "`,`, `)`, or identifier" for multiple tokens,
    /// "`(`" for a single token, or "nothing" for the empty set.
    pub fn format_expected(&self) -> String {
        let names: Vec<String> = self.iter().map(|kind| kind.to_string()).collect();

        match names.as_slice() {
            [] => "nothing".to_string(),
            [single] => single.clone(),
            [first, second] => format!("{first} or {second}"),
            [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
        }
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<TokenKind> for TokenSet {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        let mut set = TokenSet::new();
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

/// Iterator over the kinds in a [`TokenSet`].
pub struct TokenSetIter {
    bits: u64,
}

impl Iterator for TokenSetIter {
    type Item = TokenKind;

    fn next(&mut self) -> Option<Self::Item> {
        while self.bits != 0 {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "u64::trailing_zeros() max is 63"
            )]
            let idx = self.bits.trailing_zeros() as u8;
            self.bits &= self.bits - 1; // Clear the lowest set bit
            if let Some(kind) = TokenKind::from_index(idx) {
                return Some(kind);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.bits.count_ones() as usize))
    }
}

/// Advance the cursor until reaching a token in the recovery set or EOF.
///
/// Returns `true` if a recovery token was found, `false` if EOF was reached
/// first. `Eof` in `recovery` counts as found.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> bool {
    let start = cursor.position();
    while !recovery.contains(cursor.la(1)) {
        if cursor.is_at_end() {
            debug!(skipped = cursor.position() - start, "resync hit end of input");
            return false;
        }
        cursor.consume();
    }
    debug!(
        skipped = cursor.position() - start,
        at = %cursor.la(1),
        "resynchronized"
    );
    true
}

#[cfg(test)]
mod tests;
