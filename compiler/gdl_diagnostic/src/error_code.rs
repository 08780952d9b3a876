use std::fmt;

/// Error codes for all front-end diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: scanner errors
/// - E1xxx: parser errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Scanner Errors (E0xxx)
    /// Input the scanner could not classify
    E0001,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// No viable alternative at a decision point
    E1002,
    /// Integer literal out of range
    E1003,
    /// Nesting too deep (fatal)
    E1004,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E0001.to_string(), "E0001");
        assert_eq!(ErrorCode::E1002.to_string(), "E1002");
    }

    #[test]
    fn test_phase_digit() {
        assert!(ErrorCode::E0001.as_str().starts_with("E0"));
        for code in [ErrorCode::E1001, ErrorCode::E1002, ErrorCode::E1003, ErrorCode::E1004] {
            assert!(code.as_str().starts_with("E1"), "{code}");
        }
    }
}
