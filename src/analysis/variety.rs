//! Character variety - which classes occur, and where.

use crate::charset::{is_digit, is_in_symbol_alphabet, is_lower, is_symbol_by_exclusion, is_upper};

pub fn has_upper(pwd: &str) -> bool {
    pwd.chars().any(is_upper)
}

pub fn has_lower(pwd: &str) -> bool {
    pwd.chars().any(is_lower)
}

pub fn has_digit(pwd: &str) -> bool {
    pwd.chars().any(is_digit)
}

/// True if any character is neither an ASCII letter nor a digit.
pub fn has_symbol(pwd: &str) -> bool {
    pwd.chars().any(is_symbol_by_exclusion)
}

/// True if any character belongs to the literal symbol alphabet.
pub fn has_symbol_in_alphabet(pwd: &str) -> bool {
    pwd.chars().any(is_in_symbol_alphabet)
}

/// Number of characters satisfying `class`.
pub fn count_matching(pwd: &str, class: impl Fn(char) -> bool) -> usize {
    pwd.chars().filter(|&c| class(c)).count()
}

/// Digits or alphabet symbols found between the first and last character.
pub fn mid_digit_or_symbol_count(pwd: &str) -> usize {
    let len = pwd.chars().count();
    if len < 3 {
        return 0;
    }
    pwd.chars()
        .skip(1)
        .take(len - 2)
        .filter(|&c| is_digit(c) || is_in_symbol_alphabet(c))
        .count()
}

pub fn has_mid_digit_or_symbol(pwd: &str) -> bool {
    mid_digit_or_symbol_count(pwd) > 0
}

/// True if every character is an ASCII letter. Vacuously true for `""`.
pub fn is_alpha_only(pwd: &str) -> bool {
    pwd.chars().all(|c| is_upper(c) || is_lower(c))
}

/// True if every character is a digit. Vacuously true for `""`.
pub fn is_digit_only(pwd: &str) -> bool {
    pwd.chars().all(is_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_upper() {
        assert!(has_upper("ABC"));
        assert!(has_upper("abC.1"));
        assert!(!has_upper("abc"));
        assert!(!has_upper(""));
    }

    #[test]
    fn test_has_lower() {
        assert!(has_lower("ABc.1"));
        assert!(!has_lower("ABC.1"));
    }

    #[test]
    fn test_has_digit() {
        assert!(has_digit("AB1c."));
        assert!(!has_digit("ABC."));
    }

    #[test]
    fn test_has_symbol_by_exclusion() {
        assert!(has_symbol("AB.c1"));
        assert!(has_symbol("has space"));
        assert!(has_symbol("naïve"));
        assert!(!has_symbol("ABC1"));
        assert!(!has_symbol(""));
    }

    #[test]
    fn test_has_symbol_in_alphabet() {
        assert!(has_symbol_in_alphabet("AB.c1"));
        assert!(!has_symbol_in_alphabet("has space"));
    }

    #[test]
    fn test_mid_digit_or_symbol() {
        assert!(has_mid_digit_or_symbol("ABd.fdkm4"));
        assert!(has_mid_digit_or_symbol("ABd4fdkm4"));
        assert!(!has_mid_digit_or_symbol("1AbC3"));
        assert!(!has_mid_digit_or_symbol(".AbC&"));
        assert!(!has_mid_digit_or_symbol("1."));
        assert!(!has_mid_digit_or_symbol("1"));
        assert!(!has_mid_digit_or_symbol(""));
        assert_eq!(mid_digit_or_symbol_count("a1.2b"), 3);
    }

    #[test]
    fn test_alpha_only() {
        assert!(is_alpha_only("AbCdE"));
        assert!(is_alpha_only(""));
        assert!(!is_alpha_only("abc123"));
        assert!(!is_alpha_only("AbC.1"));
    }

    #[test]
    fn test_digit_only() {
        assert!(is_digit_only("01234"));
        assert!(is_digit_only(""));
        assert!(!is_digit_only("AbC.1"));
    }

    #[test]
    fn test_count_matching() {
        assert_eq!(count_matching("AbCdE", is_upper), 3);
        assert_eq!(count_matching("", is_upper), 0);
    }
}
