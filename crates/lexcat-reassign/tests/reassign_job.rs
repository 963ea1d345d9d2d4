//! End-to-end reassignment runs against the in-memory store.

use async_trait::async_trait;

use lexcat_classifier::ClassifierConfig;
use lexcat_core::{CategoryId, NewCategory, VocabularyId, VocabularyRecord};
use lexcat_reassign::{ReassignConfig, ReassignError, ReassignJob};
use lexcat_store::{
    CategorySample, CategorySummary, InMemoryStore, StoreError, VocabularyEntry, VocabularyStore,
};
use lexcat_taxonomy::{default_taxonomy, FALLBACK_CODE};

fn corpus() -> InMemoryStore {
    let store = InMemoryStore::new();
    for record in [
        VocabularyRecord::new(VocabularyId(1), "狗", "gǒu", "con chó"),
        VocabularyRecord::new(VocabularyId(2), "红", "hóng", "màu đỏ"),
        VocabularyRecord::new(VocabularyId(3), "教室", "jiàoshì", "phòng học"),
        VocabularyRecord::new(VocabularyId(4), "", "", ""),
        VocabularyRecord::new(VocabularyId(5), "", "", "ý nghĩa"),
        VocabularyRecord::new(VocabularyId(6), "猫", "māo", "con mèo"),
    ] {
        store.insert_vocabulary(record);
    }
    store
}

fn job(batch_size: usize) -> ReassignJob {
    ReassignJob::builtin(ClassifierConfig::default(), ReassignConfig { batch_size }).unwrap()
}

fn fallback_name() -> String {
    default_taxonomy().unwrap().fallback().name_local.clone()
}

#[tokio::test]
async fn histogram_counts_every_record() {
    let store = corpus();
    let report = job(200).run(&store).await.unwrap();

    let distribution = &report.distribution;
    assert_eq!(distribution.total, 6);
    assert_eq!(distribution.count("dong-vat"), 2);
    assert_eq!(distribution.count("mau-sac"), 1);
    assert_eq!(distribution.count("truong-lop"), 1);
    assert_eq!(distribution.count(FALLBACK_CODE), 2);
    assert_eq!(distribution.rows.len(), 4);
    assert_eq!(report.records, 6);
    assert_eq!(report.zero_score_fallbacks, 2);
    assert!(!report.dry_run);
    assert!(report.finished_at >= report.started_at);
}

#[tokio::test]
async fn histogram_rows_follow_group_order() {
    let store = corpus();
    let report = job(200).run(&store).await.unwrap();
    let labels: Vec<&str> = report
        .distribution
        .rows
        .iter()
        .map(|row| row.group.as_str())
        .collect();
    let mut sorted = labels.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(labels, sorted);
}

#[tokio::test]
async fn entries_are_filed_under_recreated_categories() {
    let store = corpus();
    store.insert_category(NewCategory {
        name_local: "Cũ".to_string(),
        name_alt: "Old".to_string(),
    });

    job(4).run(&store).await.unwrap();

    let taxonomy = default_taxonomy().unwrap();
    let stored = store.categories();
    assert_eq!(stored.len(), taxonomy.len());
    assert!(stored.iter().all(|(_, c)| c.name_local != "Cũ"));

    let animal_name = &taxonomy.get("dong-vat").unwrap().name_local;
    assert_eq!(store.category_name_of(VocabularyId(1)).as_ref(), Some(animal_name));
    assert_eq!(store.category_name_of(VocabularyId(4)), Some(fallback_name()));
    assert_eq!(store.update_count(), 6);
}

#[tokio::test]
async fn running_twice_gives_identical_histograms() {
    let store = corpus();
    let job = job(2);
    let first = job.run(&store).await.unwrap();
    let second = job.run(&store).await.unwrap();

    assert_eq!(first.distribution, second.distribution);
    assert_eq!(store.categories().len(), default_taxonomy().unwrap().len());
    assert_eq!(store.update_count(), 12);
}

#[tokio::test]
async fn failed_update_aborts_after_batch_settles() {
    let store = corpus();
    store.fail_updates_for(VocabularyId(3));

    let err = job(2).run(&store).await.unwrap_err();
    assert!(matches!(
        err,
        ReassignError::Storage(StoreError::Rejected {
            id: VocabularyId(3),
            ..
        })
    ));

    // Batch one (1, 2) committed; batch two (3, 4) settled with 4 written;
    // later batches never started.
    assert!(store.category_name_of(VocabularyId(1)).is_some());
    assert!(store.category_name_of(VocabularyId(2)).is_some());
    assert!(store.category_name_of(VocabularyId(3)).is_none());
    assert!(store.category_name_of(VocabularyId(4)).is_some());
    assert!(store.category_name_of(VocabularyId(5)).is_none());
    assert_eq!(store.update_count(), 3);
}

#[tokio::test]
async fn dry_run_leaves_storage_untouched() {
    let store = corpus();
    let old = store.insert_category(NewCategory {
        name_local: "Cũ".to_string(),
        name_alt: "Old".to_string(),
    });
    store.assign(VocabularyId(1), old).unwrap();

    let report = job(200).dry_run(&store).await.unwrap();
    assert!(report.dry_run);
    assert_eq!(report.distribution.total, 6);
    assert_eq!(report.distribution.count("dong-vat"), 2);

    assert_eq!(store.categories().len(), 1);
    assert_eq!(store.category_name_of(VocabularyId(1)).as_deref(), Some("Cũ"));
    assert_eq!(store.update_count(), 0);
}

#[tokio::test]
async fn dry_run_matches_real_run() {
    let store = corpus();
    let job = job(3);
    let planned = job.dry_run(&store).await.unwrap();
    let applied = job.run(&store).await.unwrap();
    assert_eq!(planned.distribution, applied.distribution);
}

#[tokio::test]
async fn legacy_hints_use_names_from_before_the_rebuild() {
    let store = corpus();
    let colors = store.insert_category(NewCategory {
        name_local: "Màu sắc".to_string(),
        name_alt: "Colors".to_string(),
    });
    store.assign(VocabularyId(1), colors).unwrap();

    let job = ReassignJob::builtin(
        ClassifierConfig::default().with_legacy_hints(true),
        ReassignConfig::default(),
    )
    .unwrap();
    let report = job.run(&store).await.unwrap();

    assert_eq!(report.distribution.count("mau-sac"), 2);
    assert_eq!(report.distribution.count("dong-vat"), 1);
}

#[tokio::test]
async fn empty_corpus_still_rebuilds_taxonomy() {
    let store = InMemoryStore::new();
    let report = job(200).run(&store).await.unwrap();
    assert!(report.distribution.is_empty());
    assert_eq!(report.records, 0);
    assert_eq!(store.categories().len(), default_taxonomy().unwrap().len());
}

#[test]
fn zero_batch_size_is_rejected() {
    let err =
        ReassignJob::builtin(ClassifierConfig::default(), ReassignConfig { batch_size: 0 })
            .unwrap_err();
    assert!(matches!(err, ReassignError::InvalidBatchSize));
}

#[test]
fn missing_fallback_is_a_configuration_error() {
    let err = ReassignJob::builtin(
        ClassifierConfig::default().with_fallback_code("khong-co"),
        ReassignConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ReassignError::Configuration(_)));
}

/// Hands out an id for the fallback category without storing it.
struct LossyStore {
    inner: InMemoryStore,
    dropped_name: String,
}

#[async_trait]
impl VocabularyStore for LossyStore {
    async fn list_vocabulary(&self) -> Result<Vec<VocabularyRecord>, StoreError> {
        self.inner.list_vocabulary().await
    }

    async fn delete_all_categories(&self) -> Result<u64, StoreError> {
        self.inner.delete_all_categories().await
    }

    async fn create_category(&self, category: &NewCategory) -> Result<CategoryId, StoreError> {
        if category.name_local == self.dropped_name {
            return Ok(CategoryId(-1));
        }
        self.inner.create_category(category).await
    }

    async fn update_vocabulary_category(
        &self,
        id: VocabularyId,
        category: CategoryId,
    ) -> Result<(), StoreError> {
        self.inner.update_vocabulary_category(id, category).await
    }

    async fn list_categories(&self) -> Result<Vec<CategorySummary>, StoreError> {
        self.inner.list_categories().await
    }

    async fn find_vocabulary(&self, keyword: &str) -> Result<Option<VocabularyEntry>, StoreError> {
        self.inner.find_vocabulary(keyword).await
    }

    async fn sample_category(
        &self,
        name: &str,
        limit: usize,
    ) -> Result<Option<CategorySample>, StoreError> {
        self.inner.sample_category(name, limit).await
    }

    fn backend_name(&self) -> &str {
        "lossy"
    }
}

#[tokio::test]
async fn unpersisted_fallback_aborts_before_updates() {
    let store = LossyStore {
        inner: corpus(),
        dropped_name: fallback_name(),
    };

    let err = job(200).run(&store).await.unwrap_err();
    match err {
        ReassignError::FallbackNotPersisted { code } => assert_eq!(code, FALLBACK_CODE),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store.inner.update_count(), 0);
}

/// Deletes one entry right after the corpus snapshot is taken.
struct VanishingStore {
    inner: InMemoryStore,
    vanishing: VocabularyId,
}

#[async_trait]
impl VocabularyStore for VanishingStore {
    async fn list_vocabulary(&self) -> Result<Vec<VocabularyRecord>, StoreError> {
        let records = self.inner.list_vocabulary().await?;
        self.inner.remove_vocabulary(self.vanishing);
        Ok(records)
    }

    async fn delete_all_categories(&self) -> Result<u64, StoreError> {
        self.inner.delete_all_categories().await
    }

    async fn create_category(&self, category: &NewCategory) -> Result<CategoryId, StoreError> {
        self.inner.create_category(category).await
    }

    async fn update_vocabulary_category(
        &self,
        id: VocabularyId,
        category: CategoryId,
    ) -> Result<(), StoreError> {
        self.inner.update_vocabulary_category(id, category).await
    }

    async fn list_categories(&self) -> Result<Vec<CategorySummary>, StoreError> {
        self.inner.list_categories().await
    }

    async fn find_vocabulary(&self, keyword: &str) -> Result<Option<VocabularyEntry>, StoreError> {
        self.inner.find_vocabulary(keyword).await
    }

    async fn sample_category(
        &self,
        name: &str,
        limit: usize,
    ) -> Result<Option<CategorySample>, StoreError> {
        self.inner.sample_category(name, limit).await
    }

    fn backend_name(&self) -> &str {
        "vanishing"
    }
}

#[tokio::test]
async fn entry_deleted_mid_run_is_skipped() {
    let store = VanishingStore {
        inner: corpus(),
        vanishing: VocabularyId(6),
    };

    let report = job(2).run(&store).await.unwrap();
    assert_eq!(report.records, 6);
    assert_eq!(report.distribution.count("dong-vat"), 2);
    assert_eq!(store.inner.update_count(), 5);
    assert_eq!(store.inner.category_name_of(VocabularyId(6)), None);
    assert!(store.inner.category_name_of(VocabularyId(1)).is_some());
}
