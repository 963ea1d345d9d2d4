//! # Storage Identifiers
//!
//! Newtype wrappers for the integer keys the storage collaborator assigns.
//! A `VocabularyId` cannot be passed where a `CategoryId` is expected.

use serde::{Deserialize, Serialize};

/// Primary key of a vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VocabularyId(pub i64);

/// Primary key of a stored vocabulary category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl VocabularyId {
    /// Access the raw key.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl CategoryId {
    /// Access the raw key.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for VocabularyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "vocab:{}", self.0)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "category:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_namespace() {
        assert_eq!(VocabularyId(7).to_string(), "vocab:7");
        assert_eq!(CategoryId(12).to_string(), "category:12");
    }

    #[test]
    fn serde_is_transparent() {
        assert_eq!(serde_json::to_string(&VocabularyId(42)).unwrap(), "42");
        let id: CategoryId = serde_json::from_str("3").unwrap();
        assert_eq!(id, CategoryId(3));
    }
}
