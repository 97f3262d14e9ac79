use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How hard the generated questions should be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Phrase inserted into the generation prompt.
    pub fn prompt_description(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy, suitable for beginners",
            Difficulty::Medium => "of medium difficulty, requiring some attention",
            Difficulty::Hard => "challenging, for people who already know the topic well",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_covers_all_levels() {
        let mut level = Difficulty::Easy;
        for expected in [Difficulty::Medium, Difficulty::Hard, Difficulty::Easy] {
            level = level.next();
            assert_eq!(level, expected);
        }
        assert_eq!(Difficulty::Easy.previous(), Difficulty::Hard);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        assert_eq!(serde_json::from_str::<Difficulty>("\"hard\"").unwrap(), Difficulty::Hard);
        assert!(serde_json::from_str::<Difficulty>("\"extreme\"").is_err());
        assert!(Difficulty::from_str("extreme", true).is_err());
        assert_eq!(Difficulty::from_str("Medium", true), Ok(Difficulty::Medium));
    }
}
