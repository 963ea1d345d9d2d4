//! # Vocabulary Records
//!
//! The read-only snapshot of a vocabulary entry that the classifier
//! consumes, and the payload used to create a category in storage.

use serde::{Deserialize, Serialize};

use crate::identity::VocabularyId;

/// One lexical entry as loaded from storage.
///
/// The classifier only reads these fields. `current_category_name` is the
/// display name of the category the entry carried into the job; it feeds
/// the legacy hint resolver and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyRecord {
    /// Storage key.
    pub id: VocabularyId,
    /// Source-language (Chinese) headword.
    pub chinese_word: String,
    /// Romanized reading.
    pub pinyin: String,
    /// Vietnamese gloss; the primary matching signal.
    pub meaning: String,
    /// Local display name of the entry's pre-existing category, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_category_name: Option<String>,
}

impl VocabularyRecord {
    /// Build a record with no pre-existing category.
    pub fn new(
        id: VocabularyId,
        chinese_word: impl Into<String>,
        pinyin: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            id,
            chinese_word: chinese_word.into(),
            pinyin: pinyin.into(),
            meaning: meaning.into(),
            current_category_name: None,
        }
    }

    /// Attach the name of the category the entry currently belongs to.
    pub fn with_current_category(mut self, name: impl Into<String>) -> Self {
        self.current_category_name = Some(name.into());
        self
    }
}

/// Display names for a category about to be created in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    /// Vietnamese display name.
    pub name_local: String,
    /// English display name.
    pub name_alt: String,
}
