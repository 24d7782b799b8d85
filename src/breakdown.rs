//! Itemized score contributions.

use std::fmt;

/// Name of a single signed score contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contribution {
    CommonPassword,
    MinimumLength,
    LengthBonus,
    AlphaUppercase,
    AlphaLowercase,
    Number,
    Symbol,
    MidNumberOrSymbol,
    PossibleWordAndNumber,
    AlphasOnly,
    NumbersOnly,
    RepeatChars,
    ConsecutiveAlphaUppercase,
    ConsecutiveAlphaLowercase,
    ConsecutiveNumbers,
    SequentialAlpha,
    SequentialNumber,
    SequentialSymbol,
    BruteForceTime,
}

impl Contribution {
    pub fn as_str(self) -> &'static str {
        match self {
            Contribution::CommonPassword => "common_password",
            Contribution::MinimumLength => "minimum_length",
            Contribution::LengthBonus => "length_bonus",
            Contribution::AlphaUppercase => "alpha_uc",
            Contribution::AlphaLowercase => "alpha_lc",
            Contribution::Number => "number",
            Contribution::Symbol => "symbol",
            Contribution::MidNumberOrSymbol => "mid_number_or_symbol",
            Contribution::PossibleWordAndNumber => "possible_word_and_number",
            Contribution::AlphasOnly => "alphas_only",
            Contribution::NumbersOnly => "numbers_only",
            Contribution::RepeatChars => "repeat_chars",
            Contribution::ConsecutiveAlphaUppercase => "consecutive_alpha_uc",
            Contribution::ConsecutiveAlphaLowercase => "consecutive_alpha_lc",
            Contribution::ConsecutiveNumbers => "consecutive_numbers",
            Contribution::SequentialAlpha => "sequential_alpha",
            Contribution::SequentialNumber => "sequential_number",
            Contribution::SequentialSymbol => "sequential_symbol",
            Contribution::BruteForceTime => "brute_force_time",
        }
    }
}

impl fmt::Display for Contribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, sparse list of contributions. Only entries whose condition held
/// are present, in the order they were scored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    entries: Vec<(Contribution, i64)>,
}

impl ScoreBreakdown {
    pub(crate) fn push(&mut self, contribution: Contribution, delta: i64) {
        self.entries.push((contribution, delta));
    }

    pub fn get(&self, contribution: Contribution) -> Option<i64> {
        self.entries
            .iter()
            .find(|(c, _)| *c == contribution)
            .map(|(_, delta)| *delta)
    }

    pub fn contains(&self, contribution: Contribution) -> bool {
        self.get(contribution).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Contribution, i64)> + '_ {
        self.entries.iter().copied()
    }

    /// Unclamped sum of all entries, saturating at the `i64` bounds.
    pub fn total(&self) -> i64 {
        self.entries
            .iter()
            .fold(0i64, |sum, (_, delta)| sum.saturating_add(*delta))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
