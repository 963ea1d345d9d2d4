//! # Word Groups
//!
//! The grammatical group a category belongs to. Groups are informational:
//! no matching rule reads them. They order the distribution report and
//! label legacy hints that carry no explicit category code.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Grammatical group of a vocabulary category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordGroup {
    /// Things, places, people, concepts.
    Noun,
    /// Actions and mental or physical activities.
    Verb,
    /// Qualities, colors, shapes, degrees.
    Adjective,
    /// Function words: numerals, measure words, particles, conjunctions.
    Special,
    /// Situational vocabulary (school, office, shopping, health).
    Situation,
}

impl WordGroup {
    /// All groups in declaration order.
    pub fn all() -> &'static [WordGroup] {
        &[
            Self::Noun,
            Self::Verb,
            Self::Adjective,
            Self::Special,
            Self::Situation,
        ]
    }

    /// The lowercase label, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Special => "special",
            Self::Situation => "situation",
        }
    }
}

impl std::fmt::Display for WordGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known group label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown word group: {0:?}")]
pub struct UnknownWordGroup(pub String);

impl FromStr for WordGroup {
    type Err = UnknownWordGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "noun" => Ok(Self::Noun),
            "verb" => Ok(Self::Verb),
            "adjective" => Ok(Self::Adjective),
            "special" => Ok(Self::Special),
            "situation" => Ok(Self::Situation),
            other => Err(UnknownWordGroup(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_roundtrip() {
        for group in WordGroup::all() {
            let parsed: WordGroup = group.as_str().parse().unwrap();
            assert_eq!(*group, parsed);
        }
    }

    #[test]
    fn from_str_rejects_unknown_and_uppercase() {
        assert!("general".parse::<WordGroup>().is_err());
        assert!("Noun".parse::<WordGroup>().is_err());
        assert!("".parse::<WordGroup>().is_err());
    }

    #[test]
    fn serde_format_matches_as_str() {
        for group in WordGroup::all() {
            let json = serde_json::to_string(group).unwrap();
            assert_eq!(json, format!("\"{}\"", group.as_str()));
        }
    }

    #[test]
    fn labels_sort_descending_as_report_expects() {
        let mut labels: Vec<&str> = WordGroup::all().iter().map(|g| g.as_str()).collect();
        labels.sort_by(|a, b| b.cmp(a));
        assert_eq!(labels, vec!["verb", "special", "situation", "noun", "adjective"]);
    }
}
