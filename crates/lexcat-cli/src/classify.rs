//! # Offline commands — classify one entry, print the catalog.
//!
//! Neither command needs a database.
//!
//! ```bash
//! lexcat classify --meaning "con chó" --chinese 狗
//! lexcat classify --meaning "xin chào" --legacy-category "Từ cảm thán" --use-legacy-hints
//! lexcat taxonomy
//! ```

use anyhow::{Context, Result};
use clap::Args;

use lexcat_classifier::{Classification, Classifier, ClassifierConfig};
use lexcat_core::{VocabularyId, VocabularyRecord};
use lexcat_taxonomy::Taxonomy;

/// Classify subcommand arguments.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ClassifyArgs {
    /// Vietnamese meaning.
    #[arg(long, default_value = "")]
    pub meaning: String,

    /// Chinese headword.
    #[arg(long, default_value = "")]
    pub chinese: String,

    /// Pinyin reading.
    #[arg(long, default_value = "")]
    pub pinyin: String,

    /// Name of the category the entry used to belong to.
    #[arg(long)]
    pub legacy_category: Option<String>,

    /// Trust allow-listed legacy category names before any other rule.
    #[arg(long)]
    pub use_legacy_hints: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the classify subcommand.
pub fn run_classify(args: &ClassifyArgs) -> Result<u8> {
    let classifier =
        Classifier::builtin(ClassifierConfig::default().with_legacy_hints(args.use_legacy_hints))
            .context("building classifier")?;

    let mut record = VocabularyRecord::new(
        VocabularyId(0),
        args.chinese.as_str(),
        args.pinyin.as_str(),
        args.meaning.as_str(),
    );
    if let Some(name) = &args.legacy_category {
        record = record.with_current_category(name.as_str());
    }

    let classification = classifier.classify(&record);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
    } else {
        println!("{}", render_classification(&classification));
    }
    Ok(0)
}

/// One-line summary: code, display names and the deciding stage.
pub fn render_classification(classification: &Classification<'_>) -> String {
    let definition = classification.definition;
    format!(
        "{} | {} | {} (via {})",
        definition.code, definition.name_local, definition.name_alt, classification.stage
    )
}

/// Execute the taxonomy subcommand.
pub fn run_taxonomy() -> Result<u8> {
    let classifier = Classifier::builtin(ClassifierConfig::default())
        .context("building classifier")?;
    print!("{}", render_taxonomy(classifier.taxonomy()));
    Ok(0)
}

/// The catalog in definition order.
pub fn render_taxonomy(taxonomy: &Taxonomy) -> String {
    let fallback = &taxonomy.fallback().code;
    let mut out = String::new();
    for (i, definition) in taxonomy.iter().enumerate() {
        out.push_str(&format!(
            "{:02} {:<28} {:<10} {:>3} kw  {} / {}",
            i + 1,
            definition.code,
            definition.group.as_str(),
            definition.keywords.len(),
            definition.name_local,
            definition.name_alt,
        ));
        if &definition.code == fallback {
            out.push_str("  [fallback]");
        }
        if !definition.legacy_names.is_empty() {
            out.push_str(&format!("  (legacy: {})", definition.legacy_names.join(", ")));
        }
        out.push('\n');
    }
    out.push_str(&format!("Total: {} categories\n", taxonomy.len()));
    out
}
