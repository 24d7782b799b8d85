//! Password policy configuration.
//!
//! A [`PasswordPolicy`] is immutable once built. Use [`PasswordPolicy::builder`]
//! to set options; setters coerce out-of-range values the same way every time,
//! and [`PolicyBuilder::build`] rejects configurations that cannot be evaluated.
//!
//! ```rust
//! use pwd_policy::{Complexity, PasswordPolicy};
//!
//! let policy = PasswordPolicy::builder()
//!     .minimum_length(10)
//!     .disallow_common_passwords(true)
//!     .minimum_complexity(Some(Complexity::Good))
//!     .build()?;
//!
//! assert_eq!(policy.minimum_length(), 10);
//! # Ok::<(), pwd_policy::ConfigError>(())
//! ```

use crate::complexity::Complexity;
use crate::error::ConfigError;

/// Default attacker guess rate for brute-force estimates.
pub const DEFAULT_KEYS_PER_SECOND: u64 = 4_000_000_000;

/// Weights applied to each score contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multipliers {
    pub length: i64,
    pub alpha: i64,
    pub number: i64,
    pub symbol: i64,
    pub mid_number_or_symbol: i64,
    pub consecutive_alpha_uc: i64,
    pub consecutive_alpha_lc: i64,
    pub consecutive_number: i64,
    pub sequential_alpha: i64,
    pub sequential_number: i64,
    pub sequential_symbol: i64,
    pub possible_word_and_number: i64,
    pub repetition: i64,
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            length: 4,
            alpha: 2,
            number: 2,
            symbol: 2,
            mid_number_or_symbol: 3,
            consecutive_alpha_uc: 2,
            consecutive_alpha_lc: 2,
            consecutive_number: 2,
            sequential_alpha: 2,
            sequential_number: 2,
            sequential_symbol: 2,
            possible_word_and_number: 2,
            repetition: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Requirements {
    uppercase: bool,
    lowercase: bool,
    number: bool,
    symbol: bool,
    mid_number_or_symbol: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Disallowed {
    alphas_only: bool,
    numbers_only: bool,
    repeated_chars: bool,
    consecutive_alpha_uc: bool,
    consecutive_alpha_lc: bool,
    consecutive_numbers: bool,
    sequential_alphas: bool,
    sequential_numbers: bool,
    sequential_symbols: bool,
    common_passwords: bool,
}

/// Immutable policy consumed by the evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    minimum_score: u8,
    minimum_length: usize,
    minimum_complexity: Option<Complexity>,
    require: Requirements,
    disallow: Disallowed,
    minimum_brute_force_seconds: u64,
    keys_per_second: u64,
    multipliers: Multipliers,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            minimum_score: 0,
            minimum_length: 0,
            minimum_complexity: None,
            require: Requirements::default(),
            disallow: Disallowed::default(),
            minimum_brute_force_seconds: 0,
            keys_per_second: DEFAULT_KEYS_PER_SECOND,
            multipliers: Multipliers::default(),
        }
    }
}

impl PasswordPolicy {
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    /// Minimum total score, 0 disables the check.
    pub fn minimum_score(&self) -> u8 {
        self.minimum_score
    }

    pub fn minimum_length(&self) -> usize {
        self.minimum_length
    }

    pub fn minimum_complexity(&self) -> Option<Complexity> {
        self.minimum_complexity
    }

    pub fn uppercase_required(&self) -> bool {
        self.require.uppercase
    }

    pub fn lowercase_required(&self) -> bool {
        self.require.lowercase
    }

    pub fn number_required(&self) -> bool {
        self.require.number
    }

    pub fn symbol_required(&self) -> bool {
        self.require.symbol
    }

    pub fn mid_number_or_symbol_required(&self) -> bool {
        self.require.mid_number_or_symbol
    }

    pub fn alphas_only_disallowed(&self) -> bool {
        self.disallow.alphas_only
    }

    pub fn numbers_only_disallowed(&self) -> bool {
        self.disallow.numbers_only
    }

    pub fn repeated_chars_disallowed(&self) -> bool {
        self.disallow.repeated_chars
    }

    pub fn consecutive_alpha_uc_disallowed(&self) -> bool {
        self.disallow.consecutive_alpha_uc
    }

    pub fn consecutive_alpha_lc_disallowed(&self) -> bool {
        self.disallow.consecutive_alpha_lc
    }

    pub fn consecutive_numbers_disallowed(&self) -> bool {
        self.disallow.consecutive_numbers
    }

    pub fn sequential_alphas_disallowed(&self) -> bool {
        self.disallow.sequential_alphas
    }

    pub fn sequential_numbers_disallowed(&self) -> bool {
        self.disallow.sequential_numbers
    }

    pub fn sequential_symbols_disallowed(&self) -> bool {
        self.disallow.sequential_symbols
    }

    pub fn common_passwords_disallowed(&self) -> bool {
        self.disallow.common_passwords
    }

    /// Minimum estimated crack time, 0 disables the check and its score entry.
    pub fn minimum_brute_force_seconds(&self) -> u64 {
        self.minimum_brute_force_seconds
    }

    /// Assumed attacker guess rate. Never zero.
    pub fn keys_per_second(&self) -> u64 {
        self.keys_per_second
    }

    pub fn multipliers(&self) -> &Multipliers {
        &self.multipliers
    }
}

/// Builder for [`PasswordPolicy`].
#[derive(Debug, Clone, Default)]
pub struct PolicyBuilder {
    policy: PasswordPolicy,
}

impl PolicyBuilder {
    /// Clamped to `0..=100`.
    pub fn minimum_score(mut self, score: i64) -> Self {
        self.policy.minimum_score = score.clamp(0, 100) as u8;
        self
    }

    /// Negative lengths become 0.
    pub fn minimum_length(mut self, length: i64) -> Self {
        self.policy.minimum_length = usize::try_from(length.max(0)).unwrap_or(usize::MAX);
        self
    }

    /// `None` disables the complexity check.
    pub fn minimum_complexity(mut self, complexity: Option<Complexity>) -> Self {
        self.policy.minimum_complexity = complexity;
        self
    }

    /// Sets the minimum complexity by name. `"disabled"` clears it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidComplexity`] for any other unknown name.
    pub fn minimum_complexity_name(self, name: &str) -> Result<Self, ConfigError> {
        if name == "disabled" {
            return Ok(self.minimum_complexity(None));
        }
        let complexity = name.parse::<Complexity>()?;
        Ok(self.minimum_complexity(Some(complexity)))
    }

    pub fn uppercase_required(mut self, required: bool) -> Self {
        self.policy.require.uppercase = required;
        self
    }

    pub fn lowercase_required(mut self, required: bool) -> Self {
        self.policy.require.lowercase = required;
        self
    }

    pub fn number_required(mut self, required: bool) -> Self {
        self.policy.require.number = required;
        self
    }

    pub fn symbol_required(mut self, required: bool) -> Self {
        self.policy.require.symbol = required;
        self
    }

    pub fn mid_number_or_symbol_required(mut self, required: bool) -> Self {
        self.policy.require.mid_number_or_symbol = required;
        self
    }

    pub fn disallow_alphas_only(mut self, disallow: bool) -> Self {
        self.policy.disallow.alphas_only = disallow;
        self
    }

    pub fn disallow_numbers_only(mut self, disallow: bool) -> Self {
        self.policy.disallow.numbers_only = disallow;
        self
    }

    pub fn disallow_repeated_chars(mut self, disallow: bool) -> Self {
        self.policy.disallow.repeated_chars = disallow;
        self
    }

    pub fn disallow_consecutive_alpha_uc(mut self, disallow: bool) -> Self {
        self.policy.disallow.consecutive_alpha_uc = disallow;
        self
    }

    pub fn disallow_consecutive_alpha_lc(mut self, disallow: bool) -> Self {
        self.policy.disallow.consecutive_alpha_lc = disallow;
        self
    }

    pub fn disallow_consecutive_numbers(mut self, disallow: bool) -> Self {
        self.policy.disallow.consecutive_numbers = disallow;
        self
    }

    pub fn disallow_sequential_alphas(mut self, disallow: bool) -> Self {
        self.policy.disallow.sequential_alphas = disallow;
        self
    }

    pub fn disallow_sequential_numbers(mut self, disallow: bool) -> Self {
        self.policy.disallow.sequential_numbers = disallow;
        self
    }

    pub fn disallow_sequential_symbols(mut self, disallow: bool) -> Self {
        self.policy.disallow.sequential_symbols = disallow;
        self
    }

    pub fn disallow_common_passwords(mut self, disallow: bool) -> Self {
        self.policy.disallow.common_passwords = disallow;
        self
    }

    /// Negative values are taken as their absolute value.
    pub fn minimum_brute_force_seconds(mut self, seconds: i64) -> Self {
        self.policy.minimum_brute_force_seconds = seconds.unsigned_abs();
        self
    }

    /// Negative values are taken as their absolute value. Zero is rejected by
    /// [`PolicyBuilder::build`].
    pub fn brute_force_keys_per_second(mut self, keys: i64) -> Self {
        self.policy.keys_per_second = keys.unsigned_abs();
        self
    }

    pub fn multipliers(mut self, multipliers: Multipliers) -> Self {
        self.policy.multipliers = multipliers;
        self
    }

    /// Freezes the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroKeysPerSecond`] if the guess rate is zero.
    pub fn build(self) -> Result<PasswordPolicy, ConfigError> {
        if self.policy.keys_per_second == 0 {
            #[cfg(feature = "tracing")]
            tracing::error!("Policy rejected: brute-force keys per second is zero");
            return Err(ConfigError::ZeroKeysPerSecond);
        }
        Ok(self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = PasswordPolicy::builder().build().unwrap();
        assert_eq!(policy, PasswordPolicy::default());
        assert_eq!(policy.minimum_score(), 0);
        assert_eq!(policy.minimum_length(), 0);
        assert_eq!(policy.minimum_complexity(), None);
        assert_eq!(policy.minimum_brute_force_seconds(), 0);
        assert_eq!(policy.keys_per_second(), DEFAULT_KEYS_PER_SECOND);
        assert_eq!(policy.multipliers().length, 4);
        assert_eq!(policy.multipliers().mid_number_or_symbol, 3);
        assert!(!policy.common_passwords_disallowed());
    }

    #[test]
    fn test_minimum_score_is_clamped() {
        for (input, expected) in [(-200, 0), (-1, 0), (0, 0), (55, 55), (100, 100), (101, 100), (200, 100)] {
            let policy = PasswordPolicy::builder().minimum_score(input).build().unwrap();
            assert_eq!(policy.minimum_score(), expected, "input {}", input);
        }
    }

    #[test]
    fn test_minimum_length_floors_at_zero() {
        for (input, expected) in [(-20, 0), (-1, 0), (0, 0), (7, 7), (20, 20)] {
            let policy = PasswordPolicy::builder().minimum_length(input).build().unwrap();
            assert_eq!(policy.minimum_length(), expected);
        }
    }

    #[test]
    fn test_minimum_complexity_by_name() {
        for tier in Complexity::ALL {
            let policy = PasswordPolicy::builder()
                .minimum_complexity_name(tier.as_str())
                .unwrap()
                .build()
                .unwrap();
            assert_eq!(policy.minimum_complexity(), Some(tier));
        }

        let policy = PasswordPolicy::builder()
            .minimum_complexity(Some(Complexity::Strong))
            .minimum_complexity_name("disabled")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(policy.minimum_complexity(), None);
    }

    #[test]
    fn test_minimum_complexity_invalid_name() {
        let result = PasswordPolicy::builder().minimum_complexity_name("not a valid complexity");
        assert!(matches!(result, Err(ConfigError::InvalidComplexity(_))));
    }

    #[test]
    fn test_brute_force_settings_take_absolute_value() {
        let policy = PasswordPolicy::builder()
            .minimum_brute_force_seconds(-315_360_000)
            .brute_force_keys_per_second(-1_000)
            .build()
            .unwrap();
        assert_eq!(policy.minimum_brute_force_seconds(), 315_360_000);
        assert_eq!(policy.keys_per_second(), 1_000);
    }

    #[test]
    fn test_zero_keys_per_second_is_rejected() {
        let result = PasswordPolicy::builder().brute_force_keys_per_second(0).build();
        assert!(matches!(result, Err(ConfigError::ZeroKeysPerSecond)));
    }

    #[test]
    fn test_flags_are_independent() {
        let policy = PasswordPolicy::builder()
            .uppercase_required(true)
            .disallow_sequential_symbols(true)
            .build()
            .unwrap();
        assert!(policy.uppercase_required());
        assert!(policy.sequential_symbols_disallowed());
        assert!(!policy.lowercase_required());
        assert!(!policy.sequential_alphas_disallowed());

        let policy = PasswordPolicy::builder()
            .uppercase_required(true)
            .uppercase_required(false)
            .build()
            .unwrap();
        assert!(!policy.uppercase_required());
    }
}
