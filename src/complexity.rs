//! Complexity tiers derived from the clamped score.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Qualitative strength label, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Complexity {
    VeryWeak,
    Weak,
    Good,
    Strong,
    VeryStrong,
}

impl Complexity {
    /// All tiers in rank order.
    pub const ALL: [Complexity; 5] = [
        Complexity::VeryWeak,
        Complexity::Weak,
        Complexity::Good,
        Complexity::Strong,
        Complexity::VeryStrong,
    ];

    /// Position in [`Complexity::ALL`], 0 to 4.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Maps a score to its tier: `ceil((score + 1) / 20) - 1`, clamped to the
    /// tier range. Scores above 100 are treated as 100.
    pub fn from_score(score: u8) -> Self {
        let score = u32::from(score.min(100));
        let width = 100 / Self::ALL.len() as u32;
        let rank = (score + 1).div_ceil(width).saturating_sub(1);
        Self::ALL[(rank as usize).min(Self::ALL.len() - 1)]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::VeryWeak => "very weak",
            Complexity::Weak => "weak",
            Complexity::Good => "good",
            Complexity::Strong => "strong",
            Complexity::VeryStrong => "very strong",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidComplexity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_score_boundaries() {
        assert_eq!(Complexity::from_score(0), Complexity::VeryWeak);
        assert_eq!(Complexity::from_score(19), Complexity::VeryWeak);
        assert_eq!(Complexity::from_score(20), Complexity::Weak);
        assert_eq!(Complexity::from_score(39), Complexity::Weak);
        assert_eq!(Complexity::from_score(40), Complexity::Good);
        assert_eq!(Complexity::from_score(60), Complexity::Strong);
        assert_eq!(Complexity::from_score(79), Complexity::Strong);
        assert_eq!(Complexity::from_score(80), Complexity::VeryStrong);
        assert_eq!(Complexity::from_score(100), Complexity::VeryStrong);
        assert_eq!(Complexity::from_score(255), Complexity::VeryStrong);
    }

    #[test]
    fn test_from_score_is_monotonic() {
        for score in 0..100u8 {
            assert!(Complexity::from_score(score) <= Complexity::from_score(score + 1));
        }
    }

    #[test]
    fn test_rank_matches_order() {
        for (i, tier) in Complexity::ALL.into_iter().enumerate() {
            assert_eq!(tier.rank() as usize, i);
        }
    }

    #[test]
    fn test_parse_round_trips_names() {
        for tier in Complexity::ALL {
            assert_eq!(tier.as_str().parse::<Complexity>().unwrap(), tier);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_name() {
        let result = "not a valid complexity".parse::<Complexity>();
        assert!(matches!(result, Err(ConfigError::InvalidComplexity(_))));
    }
}
