//! # Detection Context
//!
//! Text features derived from one vocabulary record. Built once per
//! classification attempt and discarded afterwards.

use lexcat_core::{normalize, pad, VocabularyRecord};

/// Normalized and raw views of a record's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionContext {
    /// Normalized meaning.
    pub meaning: String,
    /// `meaning` wrapped in single spaces, for whole-phrase containment.
    pub padded_meaning: String,
    /// Tokens of `meaning`.
    pub words: Vec<String>,
    /// The Chinese headword with surrounding whitespace trimmed, otherwise
    /// untouched. Character-class tests run against this.
    pub chinese_raw: String,
    /// Normalized Chinese headword. Usually empty, since ideographs
    /// normalize to separators; non-empty for Latin-script headwords.
    pub chinese: String,
    /// Normalized pinyin.
    pub pinyin: String,
}

impl DetectionContext {
    /// Derive the context for a record.
    pub fn from_record(record: &VocabularyRecord) -> Self {
        Self::new(&record.meaning, &record.chinese_word, &record.pinyin)
    }

    /// Derive a context from raw meaning, headword and pinyin.
    pub fn new(meaning: &str, chinese_word: &str, pinyin: &str) -> Self {
        let meaning = normalize(meaning);
        let words = meaning.split(' ').filter(|w| !w.is_empty()).map(String::from).collect();
        Self {
            padded_meaning: pad(&meaning),
            meaning,
            words,
            chinese_raw: chinese_word.trim().to_string(),
            chinese: normalize(chinese_word),
            pinyin: normalize(pinyin),
        }
    }

    /// First token of the meaning.
    pub fn first_word(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// Second token of the meaning.
    pub fn second_word(&self) -> Option<&str> {
        self.words.get(1).map(String::as_str)
    }

    /// Whether `phrase` occurs in the meaning as whole tokens.
    pub fn meaning_contains(&self, phrase: &str) -> bool {
        !phrase.is_empty() && self.padded_meaning.contains(&pad(phrase))
    }

    /// The non-empty normalized texts scored by the keyword fallback:
    /// meaning, headword, pinyin.
    pub fn text_sources(&self) -> Vec<&str> {
        [self.meaning.as_str(), self.chinese.as_str(), self.pinyin.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect()
    }
}
