//! Character rules for names
//!
//! Names end up as section headers in a bracketed-section config file, so
//! `[` and `]` are rejected when the name is entered.

/// Characters rejected in names by default
pub const FORBIDDEN_CHARACTERS: [char; 2] = ['[', ']'];

/// Check that `candidate` contains neither `[` nor `]`
#[inline]
#[must_use]
pub fn has_no_forbidden_character(candidate: &str) -> bool {
    first_forbidden_character(candidate, &FORBIDDEN_CHARACTERS).is_none()
}

/// First character of `candidate` that appears in `forbidden`
#[must_use]
pub fn first_forbidden_character(candidate: &str, forbidden: &[char]) -> Option<char> {
    candidate.chars().find(|c| forbidden.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_are_rejected() {
        assert!(!has_no_forbidden_character("chain[1]"));
        assert!(!has_no_forbidden_character("["));
        assert!(!has_no_forbidden_character("trailing]"));
    }

    #[test]
    fn plain_names_pass() {
        assert!(has_no_forbidden_character("chain-1"));
        assert!(has_no_forbidden_character(""));
        assert!(has_no_forbidden_character("(parens) {braces} <angles>"));
    }

    #[test]
    fn reports_first_offender() {
        assert_eq!(first_forbidden_character("a]b[c", &FORBIDDEN_CHARACTERS), Some(']'));
        assert_eq!(first_forbidden_character("a=b", &['=', ';']), Some('='));
        assert_eq!(first_forbidden_character("ab", &[]), None);
    }
}
