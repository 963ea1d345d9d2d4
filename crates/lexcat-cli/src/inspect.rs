//! # Storage inspection — categories, find, sample.

use anyhow::{Context, Result};

use lexcat_store::{CategorySample, CategorySummary, VocabularyEntry, VocabularyStore};
use lexcat_taxonomy::default_taxonomy;

/// Entries shown by `sample`.
pub const SAMPLE_LIMIT: usize = 20;

/// Category sampled when no name is given: the fallback category.
pub fn default_sample_name() -> Result<String> {
    let taxonomy = default_taxonomy().context("loading built-in taxonomy")?;
    Ok(taxonomy.fallback().name_local.clone())
}

/// Execute the categories subcommand.
pub async fn run_categories(store: &dyn VocabularyStore) -> Result<u8> {
    let categories = store
        .list_categories()
        .await
        .context("listing categories")?;
    print!("{}", render_categories(&categories));
    Ok(0)
}

/// Execute the find subcommand. Exits 1 when nothing matches.
pub async fn run_find(store: &dyn VocabularyStore, keyword: &str) -> Result<u8> {
    let entry = store
        .find_vocabulary(keyword)
        .await
        .with_context(|| format!("searching for {keyword:?}"))?;
    match entry {
        Some(entry) => {
            println!("{}", render_entry(&entry));
            Ok(0)
        }
        None => {
            println!("not found: no entry meaning contains {keyword:?}");
            Ok(1)
        }
    }
}

/// Execute the sample subcommand. Exits 1 when the category is unknown.
pub async fn run_sample(store: &dyn VocabularyStore, name: Option<&str>) -> Result<u8> {
    let name = match name {
        Some(name) => name.to_string(),
        None => default_sample_name()?,
    };
    let sample = store
        .sample_category(&name, SAMPLE_LIMIT)
        .await
        .with_context(|| format!("sampling category {name:?}"))?;
    match sample {
        Some(sample) => {
            print!("{}", render_sample(&sample));
            Ok(0)
        }
        None => {
            eprintln!("no category named {name:?}");
            Ok(1)
        }
    }
}

/// Category table: a total line, then `id | name | count` per category.
pub fn render_categories(categories: &[CategorySummary]) -> String {
    let mut out = format!("Total categories: {}\n", categories.len());
    for category in categories {
        out.push_str(&format!(
            "{:02} | {} | {} words\n",
            category.id.get(),
            category.name_local,
            category.vocabulary_count
        ));
    }
    out
}

/// One line: id, headword, pinyin, meaning and category.
pub fn render_entry(entry: &VocabularyEntry) -> String {
    let record = &entry.record;
    let category = match (entry.category_id, &record.current_category_name) {
        (Some(id), Some(name)) => format!("{name} ({id})"),
        (Some(id), None) => id.to_string(),
        _ => "uncategorized".to_string(),
    };
    format!(
        "{} | {} ({}) -> {} | {}",
        record.id, record.chinese_word, record.pinyin, record.meaning, category
    )
}

/// Sample header followed by one line per entry.
pub fn render_sample(sample: &CategorySample) -> String {
    let mut out = format!(
        "Sample of \"{}\" ({}), {} entries\n",
        sample.name_local,
        sample.category_id,
        sample.entries.len()
    );
    for record in &sample.entries {
        out.push_str(&format!(
            "- {} ({}) -> {}\n",
            record.chinese_word, record.pinyin, record.meaning
        ));
    }
    out
}
