//! Character-class analysis
//!
//! Stateless checks over a single password. Every function treats the
//! password as a sequence of `char`s and is defined for the empty string.

mod pattern;
mod variety;

pub use pattern::{
    consecutive_run_excess, count_sequential_runs, has_consecutive_run,
    has_possible_word_and_number, has_repeated_chars, repeated_char_count,
};
pub use variety::{
    count_matching, has_digit, has_lower, has_mid_digit_or_symbol, has_symbol,
    has_symbol_in_alphabet, has_upper, is_alpha_only, is_digit_only, mid_digit_or_symbol_count,
};
