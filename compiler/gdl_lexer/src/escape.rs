//! Escape Sequence Processing
//!
//! Recognized escapes in string literals: `\n`, `\r`, `\t`, `\b`, `\f`,
//! `\\`, `\"`, `\'`. Anything else after a backslash is kept verbatim.

/// Resolve a single escape character to its replacement.
#[inline]
pub(crate) fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    }
}

/// Process string escape sequences.
///
/// Invalid escapes are preserved literally (e.g., `\q` stays `\q`).
pub(crate) fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(esc) => match resolve_escape(esc) {
                Some(resolved) => result.push(resolved),
                None => {
                    result.push('\\');
                    result.push(esc);
                }
            },
            None => result.push('\\'),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_escape_valid() {
        assert_eq!(resolve_escape('n'), Some('\n'));
        assert_eq!(resolve_escape('t'), Some('\t'));
        assert_eq!(resolve_escape('b'), Some('\u{8}'));
        assert_eq!(resolve_escape('\''), Some('\''));
    }

    #[test]
    fn test_resolve_escape_invalid() {
        assert_eq!(resolve_escape('q'), None);
        assert_eq!(resolve_escape('0'), None);
    }

    #[test]
    fn test_unescape_string() {
        assert_eq!(unescape_string(r"a\nb"), "a\nb");
        assert_eq!(unescape_string(r#"say \"hi\""#), "say \"hi\"");
        assert_eq!(unescape_string(r"\\"), "\\");
    }

    #[test]
    fn test_unescape_keeps_unknown_and_trailing() {
        assert_eq!(unescape_string(r"\q"), r"\q");
        assert_eq!(unescape_string("end\\"), "end\\");
    }
}
