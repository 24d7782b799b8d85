//! Pattern analysis - repetition, consecutive runs and sequences.

use std::collections::HashSet;

/// Characters beyond the first occurrence of each distinct value.
pub fn repeated_char_count(pwd: &str) -> usize {
    let distinct: HashSet<char> = pwd.chars().collect();
    pwd.chars().count() - distinct.len()
}

/// True if any character value occurs more than once, adjacent or not.
pub fn has_repeated_chars(pwd: &str) -> bool {
    repeated_char_count(pwd) > 0
}

/// Sum of `run_length - 1` over every maximal run of `class` characters.
///
/// Isolated characters contribute nothing; `"ABcDEF"` against uppercase
/// gives `1 + 2`.
pub fn consecutive_run_excess(pwd: &str, class: impl Fn(char) -> bool) -> usize {
    pwd.split(|c: char| !class(c))
        .map(|run| run.chars().count())
        .filter(|&len| len > 1)
        .map(|len| len - 1)
        .sum()
}

/// True if two or more adjacent characters both satisfy `class`.
pub fn has_consecutive_run(pwd: &str, class: impl Fn(char) -> bool) -> bool {
    let mut prev = false;
    for c in pwd.chars() {
        let current = class(c);
        if prev && current {
            return true;
        }
        prev = current;
    }
    false
}

/// Counts the 3-character windows of `stack` found in `pwd`, forwards or
/// reversed.
///
/// Windows overlap, so `"abcde"` against the alphabet yields 3 (`abc`, `bcd`,
/// `cde`). Matching is exact; fold case before calling for letter stacks.
pub fn count_sequential_runs(pwd: &str, stack: &str) -> usize {
    let stack: Vec<char> = stack.chars().collect();
    stack
        .windows(3)
        .filter(|window| {
            let forward: String = window.iter().collect();
            let reversed: String = window.iter().rev().collect();
            pwd.contains(&forward) || pwd.contains(&reversed)
        })
        .count()
}

/// True if the whole password is letters followed by digits, or digits
/// followed by letters (`"abc123"`, `"2024Summer"`).
pub fn has_possible_word_and_number(pwd: &str) -> bool {
    let letter = |c: char| c.is_ascii_alphabetic();
    let digit = |c: char| c.is_ascii_digit();
    is_run_then_run(pwd, letter, digit) || is_run_then_run(pwd, digit, letter)
}

fn is_run_then_run(pwd: &str, first: impl Fn(char) -> bool, second: impl Fn(char) -> bool) -> bool {
    let rest = pwd.trim_start_matches(|c: char| first(c));
    rest.len() < pwd.len() && !rest.is_empty() && rest.chars().all(second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{is_digit, is_lower, is_upper, DIGIT_SEQUENCE, LOWERCASE, SYMBOLS};

    #[test]
    fn test_repeated_chars() {
        assert!(has_repeated_chars("AAB.1"));
        assert!(has_repeated_chars("A.B1A"));
        assert!(!has_repeated_chars("AbC.1"));
        assert!(!has_repeated_chars(""));
        assert_eq!(repeated_char_count("aaab"), 2);
    }

    #[test]
    fn test_consecutive_upper() {
        assert!(has_consecutive_run("cAB.1", is_upper));
        assert!(has_consecutive_run("1.cAB", is_upper));
        assert!(!has_consecutive_run("A.b1c", is_upper));
        assert!(!has_consecutive_run("AbCdE", is_upper));
    }

    #[test]
    fn test_consecutive_lower_and_digits() {
        assert!(has_consecutive_run("Cab.1", is_lower));
        assert!(!has_consecutive_run("aBC.1", is_lower));
        assert!(has_consecutive_run("Ab.12", is_digit));
        assert!(!has_consecutive_run("1Abc.", is_digit));
    }

    #[test]
    fn test_consecutive_run_excess() {
        assert_eq!(consecutive_run_excess("ABcDEF", is_upper), 3);
        assert_eq!(consecutive_run_excess("AbCdE", is_upper), 0);
        assert_eq!(consecutive_run_excess("", is_upper), 0);
        assert_eq!(consecutive_run_excess("12.345", is_digit), 3);
    }

    #[test]
    fn test_count_sequential_runs_forward() {
        assert_eq!(count_sequential_runs("acegi", LOWERCASE), 0);
        assert_eq!(count_sequential_runs("abc", LOWERCASE), 1);
        assert_eq!(count_sequential_runs("abcd", LOWERCASE), 2);
        assert_eq!(count_sequential_runs("abcde", LOWERCASE), 3);
    }

    #[test]
    fn test_count_sequential_runs_reversed() {
        assert_eq!(count_sequential_runs("igeca", LOWERCASE), 0);
        assert_eq!(count_sequential_runs("cba", LOWERCASE), 1);
        assert_eq!(count_sequential_runs("dcba", LOWERCASE), 2);
        assert_eq!(count_sequential_runs("edcba", LOWERCASE), 3);
    }

    #[test]
    fn test_count_sequential_digits_wraps_keyboard_row() {
        assert_eq!(count_sequential_runs("a123B.", DIGIT_SEQUENCE), 1);
        assert_eq!(count_sequential_runs("321", DIGIT_SEQUENCE), 1);
        assert_eq!(count_sequential_runs("x890", DIGIT_SEQUENCE), 1);
        assert_eq!(count_sequential_runs("12ab", DIGIT_SEQUENCE), 0);
    }

    #[test]
    fn test_count_sequential_symbols() {
        assert!(count_sequential_runs("Ab1<=>", SYMBOLS) > 0);
        assert!(count_sequential_runs("Ab1>=<", SYMBOLS) > 0);
        assert_eq!(count_sequential_runs("Abc.1", SYMBOLS), 0);
        assert_eq!(count_sequential_runs("ABd...124", SYMBOLS), 0);
    }

    #[test]
    fn test_possible_word_and_number() {
        assert!(has_possible_word_and_number("abc123"));
        assert!(has_possible_word_and_number("AbCd42"));
        assert!(has_possible_word_and_number("7dCbA"));
        assert!(!has_possible_word_and_number("abc.123"));
        assert!(!has_possible_word_and_number("AbCd.42"));
        assert!(!has_possible_word_and_number("abc"));
        assert!(!has_possible_word_and_number("123"));
        assert!(!has_possible_word_and_number("ab12cd"));
        assert!(!has_possible_word_and_number(""));
    }
}
