//! Character classes and the ordered stacks used for sequence detection.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Uppercase letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase letters, also the stack for sequential letter detection.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Digits.
pub const DIGITS: &str = "0123456789";

/// Digit stack in keyboard-row order, so `890` and `098` count as sequences.
pub const DIGIT_SEQUENCE: &str = "01234567890";

/// Symbols as laid out on a Dutch-Belgian keyboard followed by ASCII punctuation.
///
/// Used verbatim as the stack for sequential symbol detection. As a class it
/// contains duplicates; see [`SYMBOL_ALPHABET_SIZE`].
pub const SYMBOLS: &str = "²&é\"'(§è!çà)-!\"#$%&'()*+,-./<=>?@[\\]^_{|}~,;:=?./+|@#{[^{}[]^$´`";

/// Number of distinct characters in [`SYMBOLS`].
pub static SYMBOL_ALPHABET_SIZE: LazyLock<usize> =
    LazyLock::new(|| SYMBOLS.chars().collect::<HashSet<char>>().len());

pub fn is_upper(c: char) -> bool {
    c.is_ascii_uppercase()
}

pub fn is_lower(c: char) -> bool {
    c.is_ascii_lowercase()
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Literal membership in [`SYMBOLS`].
pub fn is_in_symbol_alphabet(c: char) -> bool {
    SYMBOLS.contains(c)
}

/// Anything that is not an ASCII letter or digit, including spaces and
/// characters outside [`SYMBOLS`].
pub fn is_symbol_by_exclusion(c: char) -> bool {
    !c.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_alphabet_is_deduplicated() {
        assert_eq!(*SYMBOL_ALPHABET_SIZE, 39);
    }

    #[test]
    fn test_symbol_semantics_differ_for_space() {
        assert!(is_symbol_by_exclusion(' '));
        assert!(!is_in_symbol_alphabet(' '));
        assert!(is_symbol_by_exclusion('.'));
        assert!(is_in_symbol_alphabet('.'));
        assert!(is_in_symbol_alphabet('é'));
    }

    #[test]
    fn test_class_sizes() {
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
    }
}
