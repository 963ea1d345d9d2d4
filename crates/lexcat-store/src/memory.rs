//! # In-Memory Store
//!
//! A [`VocabularyStore`] held entirely in process memory. Used by tests and
//! for trying the job without a database.
//!
//! The lock is `parking_lot::RwLock`, never held across an `.await`, so
//! every trait method completes without suspending. Clones share data.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use lexcat_core::{CategoryId, NewCategory, VocabularyId, VocabularyRecord};

use crate::error::StoreError;
use crate::store::{CategorySample, CategorySummary, VocabularyEntry, VocabularyStore};

#[derive(Debug, Clone)]
struct StoredEntry {
    chinese_word: String,
    pinyin: String,
    meaning: String,
    category_id: Option<CategoryId>,
}

#[derive(Debug, Default)]
struct Inner {
    vocabulary: BTreeMap<VocabularyId, StoredEntry>,
    categories: BTreeMap<CategoryId, NewCategory>,
    next_category_id: i64,
    failing_updates: HashSet<VocabularyId>,
    update_count: u64,
}

impl Inner {
    fn record(&self, id: VocabularyId, entry: &StoredEntry) -> VocabularyRecord {
        VocabularyRecord {
            id,
            chinese_word: entry.chinese_word.clone(),
            pinyin: entry.pinyin.clone(),
            meaning: entry.meaning.clone(),
            current_category_name: entry
                .category_id
                .and_then(|c| self.categories.get(&c))
                .map(|c| c.name_local.clone()),
        }
    }

    fn allocate_category_id(&mut self) -> CategoryId {
        self.next_category_id += 1;
        CategoryId(self.next_category_id)
    }
}

/// Thread-safe, cloneable in-memory vocabulary store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a vocabulary entry with no category.
    pub fn insert_vocabulary(&self, record: VocabularyRecord) {
        let mut inner = self.inner.write();
        inner.vocabulary.insert(
            record.id,
            StoredEntry {
                chinese_word: record.chinese_word,
                pinyin: record.pinyin,
                meaning: record.meaning,
                category_id: None,
            },
        );
    }

    /// Remove an entry directly, bypassing the trait.
    pub fn remove_vocabulary(&self, id: VocabularyId) -> bool {
        self.inner.write().vocabulary.remove(&id).is_some()
    }

    /// Insert a category directly, bypassing the trait.
    pub fn insert_category(&self, category: NewCategory) -> CategoryId {
        let mut inner = self.inner.write();
        let id = inner.allocate_category_id();
        inner.categories.insert(id, category);
        id
    }

    /// File an entry under a category directly, bypassing the trait and
    /// any injected failures.
    pub fn assign(&self, id: VocabularyId, category: CategoryId) -> Result<(), StoreError> {
        let mut inner = self.inner.write();
        if !inner.categories.contains_key(&category) {
            return Err(StoreError::UnknownCategory(category));
        }
        let entry = inner
            .vocabulary
            .get_mut(&id)
            .ok_or(StoreError::UnknownVocabulary(id))?;
        entry.category_id = Some(category);
        Ok(())
    }

    /// Make every later update of `id` fail with [`StoreError::Rejected`].
    pub fn fail_updates_for(&self, id: VocabularyId) {
        self.inner.write().failing_updates.insert(id);
    }

    /// Display name of the category an entry is filed under.
    pub fn category_name_of(&self, id: VocabularyId) -> Option<String> {
        let inner = self.inner.read();
        let category = inner.vocabulary.get(&id)?.category_id?;
        inner.categories.get(&category).map(|c| c.name_local.clone())
    }

    /// All stored categories in id order.
    pub fn categories(&self) -> Vec<(CategoryId, NewCategory)> {
        self.inner
            .read()
            .categories
            .iter()
            .map(|(id, c)| (*id, c.clone()))
            .collect()
    }

    /// Number of successful category updates so far.
    pub fn update_count(&self) -> u64 {
        self.inner.read().update_count
    }
}

#[async_trait]
impl VocabularyStore for InMemoryStore {
    async fn list_vocabulary(&self) -> Result<Vec<VocabularyRecord>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .vocabulary
            .iter()
            .map(|(id, entry)| inner.record(*id, entry))
            .collect())
    }

    async fn delete_all_categories(&self) -> Result<u64, StoreError> {
        let mut inner = self.inner.write();
        for entry in inner.vocabulary.values_mut() {
            entry.category_id = None;
        }
        let deleted = inner.categories.len() as u64;
        inner.categories.clear();
        Ok(deleted)
    }

    async fn create_category(&self, category: &NewCategory) -> Result<CategoryId, StoreError> {
        Ok(self.insert_category(category.clone()))
    }

    async fn update_vocabulary_category(
        &self,
        id: VocabularyId,
        category: CategoryId,
    ) -> Result<(), StoreError> {
        let mut guard = self.inner.write();
        let inner = &mut *guard;
        if inner.failing_updates.contains(&id) {
            return Err(StoreError::Rejected {
                id,
                reason: "injected failure".to_string(),
            });
        }
        if !inner.categories.contains_key(&category) {
            return Err(StoreError::UnknownCategory(category));
        }
        match inner.vocabulary.get_mut(&id) {
            Some(entry) => {
                entry.category_id = Some(category);
                inner.update_count += 1;
            }
            None => {
                tracing::warn!(record = %id, "vocabulary entry vanished before update, skipped");
            }
        }
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<CategorySummary>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .categories
            .iter()
            .map(|(id, category)| CategorySummary {
                id: *id,
                name_local: category.name_local.clone(),
                name_alt: category.name_alt.clone(),
                vocabulary_count: inner
                    .vocabulary
                    .values()
                    .filter(|e| e.category_id == Some(*id))
                    .count() as i64,
            })
            .collect())
    }

    async fn find_vocabulary(&self, keyword: &str) -> Result<Option<VocabularyEntry>, StoreError> {
        let needle = keyword.to_lowercase();
        let inner = self.inner.read();
        Ok(inner
            .vocabulary
            .iter()
            .find(|(_, entry)| entry.meaning.to_lowercase().contains(&needle))
            .map(|(id, entry)| VocabularyEntry {
                record: inner.record(*id, entry),
                category_id: entry.category_id,
            }))
    }

    async fn sample_category(
        &self,
        name: &str,
        limit: usize,
    ) -> Result<Option<CategorySample>, StoreError> {
        let wanted = name.to_lowercase();
        let inner = self.inner.read();
        let Some((category_id, category)) = inner
            .categories
            .iter()
            .find(|(_, c)| c.name_local.to_lowercase() == wanted)
        else {
            return Ok(None);
        };

        let entries = inner
            .vocabulary
            .iter()
            .filter(|(_, e)| e.category_id == Some(*category_id))
            .take(limit)
            .map(|(id, entry)| inner.record(*id, entry))
            .collect();

        Ok(Some(CategorySample {
            category_id: *category_id,
            name_local: category.name_local.clone(),
            entries,
        }))
    }

    fn backend_name(&self) -> &str {
        "in-memory"
    }
}
