//! # Reassignment Job
//!
//! Drives one full reassignment run against a [`VocabularyStore`].

use std::collections::HashMap;

use chrono::Utc;
use futures::future::join_all;

use lexcat_classifier::{Classifier, ClassifierConfig, Stage};
use lexcat_core::{CategoryId, NewCategory, VocabularyId, VocabularyRecord};
use lexcat_store::VocabularyStore;

use crate::config::ReassignConfig;
use crate::error::ReassignError;
use crate::report::{Distribution, ReassignReport};

/// A configured reassignment job. Reusable across runs.
#[derive(Debug, Clone)]
pub struct ReassignJob {
    classifier: Classifier,
    config: ReassignConfig,
}

/// Classification outcome of one record, before anything is written.
struct Planned<'a> {
    id: VocabularyId,
    code: &'a str,
}

impl ReassignJob {
    /// Build a job. Fails if `config` is invalid.
    pub fn new(classifier: Classifier, config: ReassignConfig) -> Result<Self, ReassignError> {
        config.validate()?;
        Ok(Self { classifier, config })
    }

    /// A job over the built-in catalog, detectors and legacy hints.
    pub fn builtin(
        classifier_config: ClassifierConfig,
        config: ReassignConfig,
    ) -> Result<Self, ReassignError> {
        Self::new(Classifier::builtin(classifier_config)?, config)
    }

    /// The classifier this job uses.
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Rebuild the stored taxonomy and reclassify every entry.
    pub async fn run(&self, store: &dyn VocabularyStore) -> Result<ReassignReport, ReassignError> {
        let started_at = Utc::now();
        let taxonomy = self.classifier.taxonomy();

        let records = store.list_vocabulary().await?;
        tracing::info!(
            records = records.len(),
            backend = store.backend_name(),
            "loaded vocabulary snapshot"
        );

        let deleted = store.delete_all_categories().await?;
        tracing::info!(deleted, "deleted stored categories");

        let category_ids = self.create_categories(store).await?;
        tracing::info!(created = category_ids.len(), "recreated categories");

        let mut counts = vec![0u64; taxonomy.len()];
        let mut zero_score_fallbacks = 0;
        let mut processed = 0;

        for batch in records.chunks(self.config.batch_size) {
            let planned = self.plan(batch, &mut counts, &mut zero_score_fallbacks);

            let mut updates = Vec::with_capacity(planned.len());
            for item in &planned {
                let category = category_ids.get(item.code).copied().ok_or_else(|| {
                    ReassignError::CategoryNotPersisted {
                        code: item.code.to_string(),
                    }
                })?;
                updates.push(store.update_vocabulary_category(item.id, category));
            }

            // Every update settles before the first failure is reported.
            for result in join_all(updates).await {
                result?;
            }

            processed += batch.len();
            tracing::info!(processed, total = records.len(), "batch complete");
        }

        let distribution = Distribution::from_counts(taxonomy, &counts);
        tracing::info!(
            total = distribution.total,
            categories = distribution.rows.len(),
            zero_score_fallbacks,
            "reassignment finished"
        );

        Ok(ReassignReport {
            distribution,
            records: records.len(),
            zero_score_fallbacks,
            dry_run: false,
            started_at,
            finished_at: Utc::now(),
        })
    }

    /// Classify every entry and report the distribution without writing.
    pub async fn dry_run(
        &self,
        store: &dyn VocabularyStore,
    ) -> Result<ReassignReport, ReassignError> {
        let started_at = Utc::now();
        let taxonomy = self.classifier.taxonomy();

        let records = store.list_vocabulary().await?;
        tracing::info!(records = records.len(), "loaded vocabulary snapshot (dry run)");

        let mut counts = vec![0u64; taxonomy.len()];
        let mut zero_score_fallbacks = 0;
        for batch in records.chunks(self.config.batch_size) {
            self.plan(batch, &mut counts, &mut zero_score_fallbacks);
        }

        Ok(ReassignReport {
            distribution: Distribution::from_counts(taxonomy, &counts),
            records: records.len(),
            zero_score_fallbacks,
            dry_run: true,
            started_at,
            finished_at: Utc::now(),
        })
    }

    /// Create one stored category per definition, in taxonomy order, and
    /// confirm the fallback is among the stored categories.
    async fn create_categories<'s>(
        &'s self,
        store: &dyn VocabularyStore,
    ) -> Result<HashMap<&'s str, CategoryId>, ReassignError> {
        let taxonomy = self.classifier.taxonomy();
        let mut ids = HashMap::with_capacity(taxonomy.len());

        for definition in taxonomy {
            let id = store
                .create_category(&NewCategory {
                    name_local: definition.name_local.clone(),
                    name_alt: definition.name_alt.clone(),
                })
                .await?;
            ids.insert(definition.code.as_str(), id);
        }

        let fallback = taxonomy.fallback();
        let fallback_id = ids.get(fallback.code.as_str()).copied();
        let stored = store.list_categories().await?;
        let persisted = fallback_id.is_some_and(|id| stored.iter().any(|c| c.id == id));
        if !persisted {
            return Err(ReassignError::FallbackNotPersisted {
                code: fallback.code.clone(),
            });
        }

        Ok(ids)
    }

    /// Classify a batch and add it to the tallies.
    fn plan<'s>(
        &'s self,
        batch: &[VocabularyRecord],
        counts: &mut [u64],
        zero_score_fallbacks: &mut usize,
    ) -> Vec<Planned<'s>> {
        let taxonomy = self.classifier.taxonomy();
        batch
            .iter()
            .map(|record| {
                let classification = self.classifier.classify(record);
                if classification.stage == Stage::Fallback {
                    *zero_score_fallbacks += 1;
                    tracing::warn!(
                        record = %record.id,
                        meaning = %record.meaning,
                        "no signal matched, filed under fallback category"
                    );
                }
                if let Some(position) = taxonomy.position(classification.code()) {
                    counts[position] += 1;
                }
                Planned {
                    id: record.id,
                    code: classification.code(),
                }
            })
            .collect()
    }
}
