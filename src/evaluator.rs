//! Password evaluator - scoring and validation against a policy.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::analysis::{
    consecutive_run_excess, count_matching, count_sequential_runs, has_consecutive_run, has_digit,
    has_lower, has_mid_digit_or_symbol, has_possible_word_and_number, has_repeated_chars,
    has_symbol, has_symbol_in_alphabet, has_upper, is_alpha_only, is_digit_only,
    mid_digit_or_symbol_count, repeated_char_count,
};
use crate::breakdown::{Contribution, ScoreBreakdown};
use crate::charset::{
    DIGIT_SEQUENCE, LOWERCASE, SYMBOL_ALPHABET_SIZE, SYMBOLS, is_digit, is_in_symbol_alphabet,
    is_lower, is_upper,
};
use crate::common::CommonPasswordLookup;
use crate::complexity::Complexity;
use crate::policy::PasswordPolicy;
use crate::validation::{Check, Validation};

const COMMON_PASSWORD_PENALTY: i64 = -200;
const MINIMUM_LENGTH_BONUS: i64 = 2;
const BRUTE_FORCE_BONUS: i64 = 50;
const MAX_SCORE: i64 = 100;

/// Delay before an async evaluation starts, so rapid keystrokes can cancel it.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Everything known about one password under one policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub breakdown: ScoreBreakdown,
    /// Clamped to `0..=100`.
    pub score: u8,
    pub complexity: Complexity,
    pub brute_force_seconds: u64,
    pub validation: Validation,
}

/// Scores and validates passwords against a fixed policy.
///
/// The common-password source is injected; the evaluator performs no I/O.
#[derive(Debug, Clone)]
pub struct PasswordEvaluator<L> {
    policy: PasswordPolicy,
    lookup: L,
}

impl<L: CommonPasswordLookup> PasswordEvaluator<L> {
    pub fn new(policy: PasswordPolicy, lookup: L) -> Self {
        Self { policy, lookup }
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Itemized score contributions.
    ///
    /// `common_password`, `minimum_length` and `length_bonus` are always
    /// present; every other entry only appears when its condition holds.
    pub fn score_breakdown(&self, password: &SecretString) -> ScoreBreakdown {
        let pwd = password.expose_secret();
        self.breakdown_of(pwd, self.lookup.is_common(pwd))
    }

    /// Sum of the breakdown, clamped to `0..=100`.
    pub fn score(&self, password: &SecretString) -> u8 {
        clamp_score(&self.score_breakdown(password))
    }

    /// Tier of the password's own score, regardless of any configured minimum.
    pub fn complexity(&self, password: &SecretString) -> Complexity {
        Complexity::from_score(self.score(password))
    }

    /// Estimated seconds to exhaust the keyspace implied by the character
    /// classes present, at the policy's guess rate.
    pub fn brute_force_seconds(&self, password: &SecretString) -> u64 {
        self.brute_force_seconds_of(password.expose_secret())
    }

    /// Runs every enabled check, without short-circuiting.
    pub fn validate(&self, password: &SecretString) -> Validation {
        let pwd = password.expose_secret();
        let is_common = self.lookup.is_common(pwd);
        let score = clamp_score(&self.breakdown_of(pwd, is_common));
        self.validate_of(pwd, is_common, score)
    }

    /// Full evaluation: breakdown, score, tier, brute-force estimate and
    /// validation verdict.
    pub fn evaluate(&self, password: &SecretString) -> Evaluation {
        let pwd = password.expose_secret();
        let is_common = self.lookup.is_common(pwd);
        let breakdown = self.breakdown_of(pwd, is_common);
        let score = clamp_score(&breakdown);
        let brute_force_seconds = self.brute_force_seconds_of(pwd);
        let validation = self.validate_of(pwd, is_common, score);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            score,
            failed_checks = validation.failed_checks().len(),
            "password evaluated"
        );

        Evaluation {
            breakdown,
            score,
            complexity: Complexity::from_score(score),
            brute_force_seconds,
            validation,
        }
    }

    /// Like [`PasswordEvaluator::evaluate`], checking `token` between stages.
    ///
    /// Returns `None` once the token is cancelled.
    #[cfg(feature = "async")]
    pub fn evaluate_cancellable(
        &self,
        password: &SecretString,
        token: Option<&CancellationToken>,
    ) -> Option<Evaluation> {
        let is_cancelled = || token.is_some_and(|t| t.is_cancelled());
        let pwd = password.expose_secret();

        if is_cancelled() {
            return None;
        }
        let is_common = self.lookup.is_common(pwd);
        let breakdown = self.breakdown_of(pwd, is_common);
        let score = clamp_score(&breakdown);

        if is_cancelled() {
            return None;
        }
        let brute_force_seconds = self.brute_force_seconds_of(pwd);

        if is_cancelled() {
            return None;
        }
        let validation = self.validate_of(pwd, is_common, score);

        Some(Evaluation {
            breakdown,
            score,
            complexity: Complexity::from_score(score),
            brute_force_seconds,
            validation,
        })
    }

    /// Waits [`EVALUATION_DEBOUNCE`], evaluates, and sends the result unless
    /// `token` was cancelled in the meantime.
    #[cfg(feature = "async")]
    pub async fn evaluate_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<Evaluation>,
    ) {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation is about to start...");

        tokio::time::sleep(EVALUATION_DEBOUNCE).await;

        let Some(evaluation) = self.evaluate_cancellable(password, Some(&token)) else {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled");
            return;
        };

        if let Err(_e) = tx.send(evaluation).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password evaluation result: {}", _e);
        }
    }

    /// Multipliers are caller-supplied, so every product saturates.
    fn breakdown_of(&self, pwd: &str, is_common: bool) -> ScoreBreakdown {
        let m = self.policy.multipliers();
        let len = pwd.chars().count() as i64;
        let mut breakdown = ScoreBreakdown::default();

        let common = if is_common { COMMON_PASSWORD_PENALTY } else { 0 };
        breakdown.push(Contribution::CommonPassword, common);

        let min_len = self.policy.minimum_length();
        let length_met = min_len > 0 && pwd.chars().count() >= min_len;
        breakdown.push(
            Contribution::MinimumLength,
            if length_met { MINIMUM_LENGTH_BONUS } else { 0 },
        );
        breakdown.push(Contribution::LengthBonus, len.saturating_mul(m.length));

        let upper = count_matching(pwd, is_upper) as i64;
        let lower = count_matching(pwd, is_lower) as i64;
        let digits = count_matching(pwd, is_digit) as i64;
        let symbols = count_matching(pwd, is_in_symbol_alphabet) as i64;
        let partial = |count: i64| count > 0 && count < len;

        if partial(upper) {
            breakdown.push(Contribution::AlphaUppercase, (len - upper).saturating_mul(m.alpha));
        }
        if partial(lower) {
            breakdown.push(Contribution::AlphaLowercase, (len - lower).saturating_mul(m.alpha));
        }
        if partial(digits) {
            breakdown.push(Contribution::Number, digits.saturating_mul(m.number));
        }
        if partial(symbols) {
            breakdown.push(Contribution::Symbol, symbols.saturating_mul(m.symbol));
        }

        let mid = mid_digit_or_symbol_count(pwd) as i64;
        if mid > 0 {
            breakdown.push(Contribution::MidNumberOrSymbol, mid.saturating_mul(m.mid_number_or_symbol));
        }

        // Deductions
        if has_possible_word_and_number(pwd) {
            breakdown.push(Contribution::PossibleWordAndNumber, deduct(len, m.possible_word_and_number));
        }
        if (upper > 0 || lower > 0) && symbols == 0 && digits == 0 {
            breakdown.push(Contribution::AlphasOnly, deduct(len, m.alpha));
        }
        if upper == 0 && lower == 0 && symbols == 0 && digits > 0 {
            breakdown.push(Contribution::NumbersOnly, deduct(len, m.number));
        }

        let repeated = repeated_char_count(pwd) as i64;
        if repeated > 0 {
            breakdown.push(Contribution::RepeatChars, deduct(repeated, m.repetition));
        }

        let runs = [
            (Contribution::ConsecutiveAlphaUppercase, consecutive_run_excess(pwd, is_upper), m.consecutive_alpha_uc),
            (Contribution::ConsecutiveAlphaLowercase, consecutive_run_excess(pwd, is_lower), m.consecutive_alpha_lc),
            (Contribution::ConsecutiveNumbers, consecutive_run_excess(pwd, is_digit), m.consecutive_number),
        ];
        let lowered = pwd.to_ascii_lowercase();
        let sequences = [
            (Contribution::SequentialAlpha, count_sequential_runs(&lowered, LOWERCASE), m.sequential_alpha),
            (Contribution::SequentialNumber, count_sequential_runs(pwd, DIGIT_SEQUENCE), m.sequential_number),
            (Contribution::SequentialSymbol, count_sequential_runs(pwd, SYMBOLS), m.sequential_symbol),
        ];
        for (contribution, count, multiplier) in runs.into_iter().chain(sequences) {
            if count > 0 {
                breakdown.push(contribution, deduct(count as i64, multiplier));
            }
        }

        let min_seconds = self.policy.minimum_brute_force_seconds();
        if min_seconds > 0 {
            let delta = if self.brute_force_seconds_of(pwd) >= min_seconds {
                BRUTE_FORCE_BONUS
            } else {
                -BRUTE_FORCE_BONUS
            };
            breakdown.push(Contribution::BruteForceTime, delta);
        }

        breakdown
    }

    fn brute_force_seconds_of(&self, pwd: &str) -> u64 {
        let mut charset_size = 0;
        if has_lower(pwd) {
            charset_size += 26;
        }
        if has_upper(pwd) {
            charset_size += 26;
        }
        if has_symbol_in_alphabet(pwd) {
            charset_size += *SYMBOL_ALPHABET_SIZE;
        }
        if has_digit(pwd) {
            charset_size += 10;
        }
        if charset_size == 0 {
            return 0;
        }

        let len = i32::try_from(pwd.chars().count()).unwrap_or(i32::MAX);
        let keyspace = (charset_size as f64).powi(len);
        // Saturates at u64::MAX for astronomically large keyspaces.
        (keyspace / self.policy.keys_per_second() as f64).floor() as u64
    }

    fn validate_of(&self, pwd: &str, is_common: bool, score: u8) -> Validation {
        let p = &self.policy;
        let lowered = pwd.to_ascii_lowercase();

        let checks = [
            (Check::CommonPassword, p.common_passwords_disallowed() && is_common),
            (Check::MinimumLength, pwd.chars().count() < p.minimum_length()),
            (Check::AlphaLowercase, p.lowercase_required() && !has_lower(pwd)),
            (Check::AlphaUppercase, p.uppercase_required() && !has_upper(pwd)),
            (Check::AlphasOnly, p.alphas_only_disallowed() && is_alpha_only(pwd)),
            (Check::NumbersOnly, p.numbers_only_disallowed() && is_digit_only(pwd)),
            (Check::ConsecutiveAlphaLowercase, p.consecutive_alpha_lc_disallowed() && has_consecutive_run(pwd, is_lower)),
            (Check::ConsecutiveAlphaUppercase, p.consecutive_alpha_uc_disallowed() && has_consecutive_run(pwd, is_upper)),
            (Check::ConsecutiveNumbers, p.consecutive_numbers_disallowed() && has_consecutive_run(pwd, is_digit)),
            (Check::MidNumberOrSymbol, p.mid_number_or_symbol_required() && !has_mid_digit_or_symbol(pwd)),
            (Check::Number, p.number_required() && !has_digit(pwd)),
            (Check::Symbol, p.symbol_required() && !has_symbol(pwd)),
            (Check::RepeatChars, p.repeated_chars_disallowed() && has_repeated_chars(pwd)),
            (Check::SequentialAlpha, p.sequential_alphas_disallowed() && count_sequential_runs(&lowered, LOWERCASE) > 0),
            (Check::SequentialNumber, p.sequential_numbers_disallowed() && count_sequential_runs(pwd, DIGIT_SEQUENCE) > 0),
            (Check::SequentialSymbol, p.sequential_symbols_disallowed() && count_sequential_runs(pwd, SYMBOLS) > 0),
            (Check::Complexity, p.minimum_complexity().is_some_and(|min| Complexity::from_score(score) < min)),
            (Check::BruteForceTime, p.minimum_brute_force_seconds() > 0 && self.brute_force_seconds_of(pwd) < p.minimum_brute_force_seconds()),
            (Check::MinimumScore, p.minimum_score() > 0 && score < p.minimum_score()),
        ];

        Validation::from_failures(
            checks
                .into_iter()
                .filter_map(|(check, failed)| failed.then_some(check))
                .collect(),
        )
    }
}

/// `-(count * multiplier)`, saturating.
fn deduct(count: i64, multiplier: i64) -> i64 {
    count.saturating_mul(multiplier).saturating_neg()
}

fn clamp_score(breakdown: &ScoreBreakdown) -> u8 {
    breakdown.total().clamp(0, MAX_SCORE) as u8
}
