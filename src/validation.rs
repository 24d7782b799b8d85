//! Validation outcome.

use std::fmt;

/// A single policy check, listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    CommonPassword,
    MinimumLength,
    AlphaLowercase,
    AlphaUppercase,
    AlphasOnly,
    NumbersOnly,
    ConsecutiveAlphaLowercase,
    ConsecutiveAlphaUppercase,
    ConsecutiveNumbers,
    MidNumberOrSymbol,
    Number,
    Symbol,
    RepeatChars,
    SequentialAlpha,
    SequentialNumber,
    SequentialSymbol,
    Complexity,
    BruteForceTime,
    MinimumScore,
}

impl Check {
    pub fn as_str(self) -> &'static str {
        match self {
            Check::CommonPassword => "common_password",
            Check::MinimumLength => "minimum_length",
            Check::AlphaLowercase => "alpha_lc",
            Check::AlphaUppercase => "alpha_uc",
            Check::AlphasOnly => "alphas_only",
            Check::NumbersOnly => "numbers_only",
            Check::ConsecutiveAlphaLowercase => "consecutive_alpha_lc",
            Check::ConsecutiveAlphaUppercase => "consecutive_alpha_uc",
            Check::ConsecutiveNumbers => "consecutive_numbers",
            Check::MidNumberOrSymbol => "mid_number_or_symbol",
            Check::Number => "number",
            Check::Symbol => "symbol",
            Check::RepeatChars => "repeat_chars",
            Check::SequentialAlpha => "sequential_alpha",
            Check::SequentialNumber => "sequential_number",
            Check::SequentialSymbol => "sequential_symbol",
            Check::Complexity => "complexity",
            Check::BruteForceTime => "brute_force_time",
            Check::MinimumScore => "minimum_score",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of checking a password against a policy.
///
/// Not meeting the policy is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Pass,
    /// Failed checks in evaluation order. Never empty.
    Failed(Vec<Check>),
}

impl Validation {
    pub(crate) fn from_failures(failed: Vec<Check>) -> Self {
        if failed.is_empty() {
            Validation::Pass
        } else {
            Validation::Failed(failed)
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Validation::Pass)
    }

    /// Failed checks, empty on pass.
    pub fn failed_checks(&self) -> &[Check] {
        match self {
            Validation::Pass => &[],
            Validation::Failed(checks) => checks,
        }
    }

    pub fn has_failed(&self, check: Check) -> bool {
        self.failed_checks().contains(&check)
    }
}
