//! # Text Normalization and Padded Keyword Matching
//!
//! All matching in lexcat happens on *normalized* text: lowercase ASCII
//! letters, digits and single spaces. Vietnamese tone marks are removed by
//! canonical decomposition (NFD) followed by dropping the combining marks in
//! U+0300..=U+036F, so `"màu đỏ"` becomes `"mau do"`. Every other character,
//! including Chinese ideographs and punctuation, becomes a separator.
//!
//! Whole-word matching is done without a tokenizer: both the text and the
//! keyword are wrapped in single spaces, and a plain substring test on the
//! padded forms only succeeds on token boundaries. Keywords must therefore
//! be written exactly as they appear in normalized text.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
fn is_combining_mark(ch: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&ch)
}

/// Normalize text for matching.
///
/// Lowercases, strips diacritics, maps `đ` to `d`, turns every character
/// outside `[a-z0-9]` into a separator, collapses separators to one space
/// and trims both ends. Empty input yields an empty string. The function is
/// pure and idempotent.
pub fn normalize(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let lowered = input.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut separator = false;

    for ch in lowered.nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        let ch = match ch {
            'đ' | 'Đ' => 'd',
            other => other,
        };
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if separator && !out.is_empty() {
                out.push(' ');
            }
            separator = false;
            out.push(ch);
        } else {
            separator = true;
        }
    }

    out
}

/// Wrap text in one leading and one trailing space.
pub fn pad(text: &str) -> String {
    let mut padded = String::with_capacity(text.len() + 2);
    padded.push(' ');
    padded.push_str(text);
    padded.push(' ');
    padded
}

/// Count the keywords that occur as whole phrases in any of `texts`.
///
/// Texts are expected to be normalized; they are padded here. Each keyword
/// is trimmed and padded, then tested for literal containment. A keyword
/// counts at most once no matter how many texts contain it. Blank keywords
/// never match.
pub fn count_keyword_matches<T, K>(texts: &[T], keywords: &[K]) -> usize
where
    T: AsRef<str>,
    K: AsRef<str>,
{
    if keywords.is_empty() || texts.is_empty() {
        return 0;
    }

    let padded_texts: Vec<String> = texts.iter().map(|t| pad(t.as_ref())).collect();

    keywords
        .iter()
        .filter(|keyword| {
            let keyword = keyword.as_ref().trim();
            if keyword.is_empty() {
                return false;
            }
            let needle = pad(keyword);
            padded_texts.iter().any(|text| text.contains(&needle))
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn strips_vietnamese_tones() {
        assert_eq!(normalize("màu đỏ"), "mau do");
        assert_eq!(normalize("Phòng học"), "phong hoc");
        assert_eq!(normalize("Khái niệm trừu tượng"), "khai niem truu tuong");
        assert_eq!(normalize("người"), "nguoi");
    }

    #[test]
    fn maps_d_with_stroke() {
        assert_eq!(normalize("Đồ ăn & thức uống"), "do an thuc uong");
        assert_eq!(normalize("đường"), "duong");
    }

    #[test]
    fn chinese_and_punctuation_become_separators() {
        assert_eq!(normalize("狗"), "");
        assert_eq!(normalize("bạn (朋友), bè!"), "ban be");
        assert_eq!(normalize("Số đếm & Số lượng"), "so dem so luong");
    }

    #[test]
    fn collapses_mixed_whitespace() {
        assert_eq!(normalize("  con\t\tchó \n "), "con cho");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(normalize("Bài 12"), "bai 12");
    }

    #[test]
    fn pad_wraps_in_spaces() {
        assert_eq!(pad("mau do"), " mau do ");
        assert_eq!(pad(""), "  ");
    }

    #[test]
    fn keyword_matches_whole_tokens_only() {
        assert_eq!(count_keyword_matches(&["phong hoc"], &["hoc"]), 1);
        assert_eq!(count_keyword_matches(&["phong hoc"], &["ho"]), 0);
        assert_eq!(count_keyword_matches(&["phong hoc"], &["phong hoc"]), 1);
        assert_eq!(count_keyword_matches(&["phong hoc"], &["ong ho"]), 0);
    }

    #[test]
    fn keyword_counts_once_across_texts() {
        let texts = ["con cho", "cho", "gou"];
        assert_eq!(count_keyword_matches(&texts, &["cho"]), 1);
        assert_eq!(count_keyword_matches(&texts, &["cho", "gou", "meo"]), 2);
    }

    #[test]
    fn keyword_is_trimmed_and_blank_ignored() {
        assert_eq!(count_keyword_matches(&["mau do"], &["  do  "]), 1);
        assert_eq!(count_keyword_matches(&["mau do"], &["", "   "]), 0);
    }

    #[test]
    fn empty_lists_count_zero() {
        let none: [&str; 0] = [];
        assert_eq!(count_keyword_matches(&["mau do"], &none), 0);
        assert_eq!(count_keyword_matches(&none, &["mau"]), 0);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "\\PC*") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_output_is_ascii_tokens(s in "\\PC*") {
            let out = normalize(&s);
            prop_assert!(out.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '));
            prop_assert!(!out.starts_with(' '));
            prop_assert!(!out.ends_with(' '));
            prop_assert!(!out.contains("  "));
        }

        #[test]
        fn match_count_bounded_by_keyword_count(
            text in "[a-z ]{0,40}",
            keywords in proptest::collection::vec("[a-z]{1,5}( [a-z]{1,5})?", 0..8),
        ) {
            let count = count_keyword_matches(&[normalize(&text)], &keywords);
            prop_assert!(count <= keywords.len());
        }
    }
}
