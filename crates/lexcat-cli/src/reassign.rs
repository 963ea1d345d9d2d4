//! # Reassign — Rebuild categories and reclassify the corpus.
//!
//! ```bash
//! lexcat                       # same as `lexcat reassign`
//! lexcat reassign --dry-run    # classify and report, write nothing
//! lexcat reassign --batch-size 50 --json
//! ```

use anyhow::{Context, Result};
use clap::Args;

use lexcat_classifier::ClassifierConfig;
use lexcat_reassign::{ReassignConfig, ReassignJob, ReassignReport};
use lexcat_store::VocabularyStore;

/// Reassign subcommand arguments.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ReassignArgs {
    /// Classify and report without touching storage.
    #[arg(long)]
    pub dry_run: bool,

    /// Entries updated concurrently per batch.
    #[arg(long, default_value_t = ReassignConfig::DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Trust allow-listed legacy category names before any other rule.
    #[arg(long)]
    pub use_legacy_hints: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Default for ReassignArgs {
    fn default() -> Self {
        Self {
            dry_run: false,
            batch_size: ReassignConfig::DEFAULT_BATCH_SIZE,
            use_legacy_hints: false,
            json: false,
        }
    }
}

/// Execute the reassign subcommand.
pub async fn run_reassign(args: &ReassignArgs, store: &dyn VocabularyStore) -> Result<u8> {
    let job = ReassignJob::builtin(
        ClassifierConfig::default().with_legacy_hints(args.use_legacy_hints),
        ReassignConfig {
            batch_size: args.batch_size,
        },
    )
    .context("configuring reassignment job")?;

    let report = if args.dry_run {
        job.dry_run(store).await
    } else {
        job.run(store).await
    }
    .context("reassignment failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_report(&report));
    }
    Ok(0)
}

/// Human-readable report.
pub fn render_report(report: &ReassignReport) -> String {
    let mut out = String::new();
    if report.dry_run {
        out.push_str("Dry run: storage was not modified.\n");
    }
    out.push_str(&format!(
        "Reassigned {} entries ({} without any matching signal).\n\n",
        report.records, report.zero_score_fallbacks
    ));
    out.push_str(&report.distribution.to_string());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexcat_core::{VocabularyId, VocabularyRecord};
    use lexcat_store::InMemoryStore;

    fn store() -> InMemoryStore {
        let store = InMemoryStore::new();
        store.insert_vocabulary(VocabularyRecord::new(VocabularyId(1), "狗", "gǒu", "con chó"));
        store.insert_vocabulary(VocabularyRecord::new(VocabularyId(2), "", "", ""));
        store
    }

    #[tokio::test]
    async fn reassign_writes_categories() {
        let store = store();
        let code = run_reassign(&ReassignArgs::default(), &store).await.unwrap();
        assert_eq!(code, 0);
        assert_eq!(store.update_count(), 2);
        assert!(!store.categories().is_empty());
    }

    #[tokio::test]
    async fn dry_run_writes_nothing() {
        let store = store();
        let args = ReassignArgs {
            dry_run: true,
            ..ReassignArgs::default()
        };
        run_reassign(&args, &store).await.unwrap();
        assert_eq!(store.update_count(), 0);
        assert!(store.categories().is_empty());
    }

    #[tokio::test]
    async fn zero_batch_size_is_an_error() {
        let args = ReassignArgs {
            batch_size: 0,
            ..ReassignArgs::default()
        };
        let err = run_reassign(&args, &store()).await.unwrap_err();
        assert!(format!("{err:#}").contains("batch size"));
    }

    #[tokio::test]
    async fn report_mentions_counts() {
        let store = store();
        let job = ReassignJob::builtin(ClassifierConfig::default(), ReassignConfig::default())
            .unwrap();
        let report = job.dry_run(&store).await.unwrap();
        let text = render_report(&report);
        assert!(text.starts_with("Dry run"));
        assert!(text.contains("Reassigned 2 entries (1 without any matching signal)"));
        assert!(text.contains("dong-vat"));
    }
}
