//! # Storage Trait
//!
//! Read and write operations over vocabulary entries and their categories.
//!
//! Implementations must be `Send + Sync` so they can be shared across
//! async tasks behind an `Arc`. The trait is object-safe, so callers can
//! choose the backend at runtime (`&dyn VocabularyStore`).

use async_trait::async_trait;
use serde::Serialize;

use lexcat_core::{CategoryId, NewCategory, VocabularyId, VocabularyRecord};

use crate::error::StoreError;

/// A stored category with the number of entries filed under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    /// Storage id.
    pub id: CategoryId,
    /// Local display name.
    pub name_local: String,
    /// Alternate-language display name; empty when unset.
    pub name_alt: String,
    /// Entries currently filed under the category.
    pub vocabulary_count: i64,
}

/// A vocabulary entry together with the id of its category, if any.
///
/// The category's display name travels in
/// [`VocabularyRecord::current_category_name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocabularyEntry {
    /// The entry itself.
    pub record: VocabularyRecord,
    /// Category the entry is filed under; `None` when uncategorized.
    pub category_id: Option<CategoryId>,
}

/// The first entries of one category, in id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySample {
    /// Storage id of the sampled category.
    pub category_id: CategoryId,
    /// Its display name as stored.
    pub name_local: String,
    /// At most the requested number of entries.
    pub entries: Vec<VocabularyRecord>,
}

/// Storage collaborator for vocabulary and categories.
#[async_trait]
pub trait VocabularyStore: Send + Sync {
    /// Every vocabulary entry, in id order, with the display name of its
    /// current category.
    async fn list_vocabulary(&self) -> Result<Vec<VocabularyRecord>, StoreError>;

    /// Delete every category. Entries keep existing but lose their
    /// category. Returns the number of categories deleted.
    async fn delete_all_categories(&self) -> Result<u64, StoreError>;

    /// Create one category and return its new id.
    async fn create_category(&self, category: &NewCategory) -> Result<CategoryId, StoreError>;

    /// File an entry under a category. An entry that no longer exists is
    /// skipped without error.
    async fn update_vocabulary_category(
        &self,
        id: VocabularyId,
        category: CategoryId,
    ) -> Result<(), StoreError>;

    /// Every category in id order, with entry counts.
    async fn list_categories(&self) -> Result<Vec<CategorySummary>, StoreError>;

    /// The first entry (by id) whose meaning contains `keyword`,
    /// case-insensitively.
    async fn find_vocabulary(&self, keyword: &str) -> Result<Option<VocabularyEntry>, StoreError>;

    /// Up to `limit` entries of the first category whose local display name
    /// equals `name`, case-insensitively. `None` if no category matches.
    async fn sample_category(
        &self,
        name: &str,
        limit: usize,
    ) -> Result<Option<CategorySample>, StoreError>;

    /// Human-readable backend name.
    fn backend_name(&self) -> &str;
}
