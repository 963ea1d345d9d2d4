//! # Distribution Report
//!
//! Per-category counts of one run. Rows are ordered by word group label,
//! descending; rows of the same group keep taxonomy order. Categories
//! with no entries are omitted.

use chrono::{DateTime, Utc};
use serde::Serialize;

use lexcat_core::WordGroup;
use lexcat_taxonomy::Taxonomy;

/// One category's share of the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionRow {
    /// Category code.
    pub code: String,
    /// Local display name.
    pub name_local: String,
    /// Word group the category belongs to.
    pub group: WordGroup,
    /// Entries classified under the category.
    pub count: u64,
}

/// Histogram of category codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Distribution {
    /// Non-empty categories, by group label descending.
    pub rows: Vec<DistributionRow>,
    /// Sum of all row counts.
    pub total: u64,
}

impl Distribution {
    /// Build from counts indexed by taxonomy position.
    ///
    /// Positions beyond `counts` count as zero.
    pub fn from_counts(taxonomy: &Taxonomy, counts: &[u64]) -> Self {
        let mut rows: Vec<DistributionRow> = taxonomy
            .iter()
            .zip(counts.iter().copied().chain(std::iter::repeat(0)))
            .filter(|(_, count)| *count > 0)
            .map(|(definition, count)| DistributionRow {
                code: definition.code.clone(),
                name_local: definition.name_local.clone(),
                group: definition.group,
                count,
            })
            .collect();

        // Stable: equal groups keep taxonomy order.
        rows.sort_by(|a, b| b.group.as_str().cmp(a.group.as_str()));

        let total = rows.iter().map(|row| row.count).sum();
        Self { rows, total }
    }

    /// Count for one code; zero when absent.
    pub fn count(&self, code: &str) -> u64 {
        self.rows
            .iter()
            .find(|row| row.code == code)
            .map_or(0, |row| row.count)
    }

    /// Whether no entry was counted.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            writeln!(
                f,
                "{:<10} {:<28} {:>6}  {}",
                row.group.as_str(),
                row.code,
                row.count,
                row.name_local
            )?;
        }
        write!(f, "{:<10} {:<28} {:>6}", "total", "", self.total)
    }
}

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReassignReport {
    /// Per-category counts.
    pub distribution: Distribution,
    /// Entries loaded from storage.
    pub records: usize,
    /// Entries filed under the fallback because nothing matched.
    pub zero_score_fallbacks: usize,
    /// Whether storage was left untouched.
    pub dry_run: bool,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the last batch settled.
    pub finished_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexcat_taxonomy::CategoryDefinition;

    fn taxonomy() -> Taxonomy {
        let def = |code: &str, group| CategoryDefinition::new(code, code, code, group);
        Taxonomy::new(
            vec![
                def("n1", WordGroup::Noun),
                def("v1", WordGroup::Verb),
                def("n2", WordGroup::Noun),
                def("a1", WordGroup::Adjective),
                def("s1", WordGroup::Special),
            ],
            "n1",
        )
        .unwrap()
    }

    #[test]
    fn rows_sorted_by_group_desc_then_taxonomy_order() {
        let distribution = Distribution::from_counts(&taxonomy(), &[3, 1, 2, 4, 5]);
        let codes: Vec<&str> = distribution.rows.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["v1", "s1", "n1", "n2", "a1"]);
        assert_eq!(distribution.total, 15);
    }

    #[test]
    fn zero_counts_are_omitted() {
        let distribution = Distribution::from_counts(&taxonomy(), &[0, 2]);
        assert_eq!(distribution.rows.len(), 1);
        assert_eq!(distribution.count("v1"), 2);
        assert_eq!(distribution.count("n1"), 0);
        assert_eq!(distribution.total, 2);
    }

    #[test]
    fn empty_counts_give_empty_distribution() {
        let distribution = Distribution::from_counts(&taxonomy(), &[]);
        assert!(distribution.is_empty());
        assert_eq!(distribution.total, 0);
    }

    #[test]
    fn display_ends_with_total() {
        let distribution = Distribution::from_counts(&taxonomy(), &[1, 1]);
        let text = distribution.to_string();
        assert!(text.lines().next().unwrap().starts_with("verb"));
        assert!(text.lines().last().unwrap().starts_with("total"));
        assert!(text.trim_end().ends_with('2'));
    }

    #[test]
    fn serializes_group_labels() {
        let distribution = Distribution::from_counts(&taxonomy(), &[1]);
        let json = serde_json::to_value(&distribution).unwrap();
        assert_eq!(json["rows"][0]["group"], "noun");
        assert_eq!(json["total"], 1);
    }
}
