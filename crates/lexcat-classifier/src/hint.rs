//! Legacy hint resolution.

use lexcat_core::VocabularyRecord;
use lexcat_taxonomy::{CategoryDefinition, LegacyHints, Taxonomy};

use crate::config::ClassifierConfig;

/// Resolve a record's legacy category name to a definition.
///
/// Returns `None` when hints are disabled, the record has no legacy name,
/// the name is not allow-listed, the hint names only a word group, or the
/// hinted code is not part of `taxonomy`.
pub fn resolve_legacy_hint<'t>(
    config: &ClassifierConfig,
    hints: &LegacyHints,
    taxonomy: &'t Taxonomy,
    record: &VocabularyRecord,
) -> Option<&'t CategoryDefinition> {
    if !config.use_legacy_hints {
        return None;
    }
    let name = record.current_category_name.as_deref()?;
    let code = hints.lookup(name)?.code()?;
    taxonomy.get(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexcat_core::VocabularyId;
    use lexcat_taxonomy::{default_taxonomy, LegacyHint};

    fn record(legacy: &str) -> VocabularyRecord {
        VocabularyRecord::new(VocabularyId(1), "", "", "").with_current_category(legacy)
    }

    fn enabled() -> ClassifierConfig {
        ClassifierConfig::default().with_legacy_hints(true)
    }

    #[test]
    fn disabled_flag_returns_none() {
        let taxonomy = default_taxonomy().unwrap();
        let hints = LegacyHints::builtin();
        let resolved = resolve_legacy_hint(
            &ClassifierConfig::default(),
            &hints,
            &taxonomy,
            &record("Động vật"),
        );
        assert!(resolved.is_none());
    }

    #[test]
    fn code_hint_resolves_when_enabled() {
        let taxonomy = default_taxonomy().unwrap();
        let hints = LegacyHints::builtin();
        let resolved = resolve_legacy_hint(&enabled(), &hints, &taxonomy, &record("Động vật"));
        assert_eq!(resolved.map(|d| d.code.as_str()), Some("dong-vat"));
    }

    #[test]
    fn group_only_hint_returns_none() {
        let taxonomy = default_taxonomy().unwrap();
        let hints = LegacyHints::builtin();
        assert!(resolve_legacy_hint(&enabled(), &hints, &taxonomy, &record("Động từ")).is_none());
    }

    #[test]
    fn missing_or_unknown_name_returns_none() {
        let taxonomy = default_taxonomy().unwrap();
        let hints = LegacyHints::builtin();
        let bare = VocabularyRecord::new(VocabularyId(1), "", "", "");
        assert!(resolve_legacy_hint(&enabled(), &hints, &taxonomy, &bare).is_none());
        assert!(resolve_legacy_hint(&enabled(), &hints, &taxonomy, &record("rác")).is_none());
    }

    #[test]
    fn hint_to_code_outside_taxonomy_returns_none() {
        let taxonomy = default_taxonomy().unwrap();
        let hints = LegacyHints::new(
            [("Cũ", LegacyHint::Code("khong-ton-tai".to_string()))],
            ["Cũ"],
        );
        assert!(resolve_legacy_hint(&enabled(), &hints, &taxonomy, &record("cũ")).is_none());
    }
}
