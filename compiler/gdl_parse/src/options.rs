//! Parser configuration.

/// Limits applied to one parse.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseOptions {
    /// Deepest nesting of rule procedures before the parse stops with
    /// [`SyntaxError::StackExhausted`](crate::SyntaxError::StackExhausted).
    pub max_depth: usize,
    /// Number of recorded errors after which the parse halts. With 0 the
    /// parse halts at the first error and records nothing.
    pub max_errors: usize,
}

impl ParseOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 2048;
    pub const DEFAULT_MAX_ERRORS: usize = 100;

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_errors: Self::DEFAULT_MAX_ERRORS,
        }
    }
}
