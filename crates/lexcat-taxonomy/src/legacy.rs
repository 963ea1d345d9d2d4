//! # Legacy Category Hints
//!
//! Before the current catalog, vocabulary was filed under 31 coarser
//! categories ("Đồ ăn & thức uống", "Động từ", ...). Each legacy name maps
//! either to a specific new code or only to a word group.
//!
//! A hint is trusted only when the entry's legacy name normalizes to one of
//! the known legacy names, so stale or free-text names never produce hints.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use lexcat_core::{normalize, WordGroup};

use crate::catalog::FALLBACK_CODE;

/// What a legacy category name says about the new category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyHint {
    /// The legacy category maps to exactly one new category.
    Code(String),
    /// The legacy category only names a word group. Not sufficient to
    /// classify on its own.
    Group(WordGroup),
}

impl LegacyHint {
    /// The target code, if the hint carries one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Code(code) => Some(code),
            Self::Group(_) => None,
        }
    }
}

/// Lookup table from normalized legacy names to hints.
#[derive(Debug, Clone, Default)]
pub struct LegacyHints {
    hints: HashMap<String, LegacyHint>,
    allowed: HashSet<String>,
}

impl LegacyHints {
    /// Build a table. Keys and allow-list entries are normalized; a hint
    /// whose name is missing from `allowed` can never be returned.
    pub fn new<H, A, S>(hints: H, allowed: A) -> Self
    where
        H: IntoIterator<Item = (S, LegacyHint)>,
        A: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            hints: hints
                .into_iter()
                .map(|(name, hint)| (normalize(name.as_ref()), hint))
                .collect(),
            allowed: allowed.into_iter().map(|n| normalize(n.as_ref())).collect(),
        }
    }

    /// The table for the 31 pre-migration categories.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_HINTS.iter().map(|(name, target)| {
                let hint = match target {
                    Target::Code(code) => LegacyHint::Code((*code).to_string()),
                    Target::Group(group) => LegacyHint::Group(*group),
                };
                (*name, hint)
            }),
            LEGACY_CATEGORY_NAMES.iter().copied(),
        )
    }

    /// Hint for a raw legacy category name, if the name is allow-listed.
    pub fn lookup(&self, legacy_name: &str) -> Option<&LegacyHint> {
        let key = normalize(legacy_name);
        if key.is_empty() || !self.allowed.contains(&key) {
            return None;
        }
        self.hints.get(&key)
    }

    /// Every code referenced by a code-bearing hint.
    pub fn target_codes(&self) -> impl Iterator<Item = &str> {
        self.hints.values().filter_map(LegacyHint::code)
    }

    /// Number of hints in the table.
    pub fn len(&self) -> usize {
        self.hints.len()
    }

    /// Whether the table has no hints.
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}

enum Target {
    Code(&'static str),
    Group(WordGroup),
}

const BUILTIN_HINTS: &[(&str, Target)] = &[
    ("đồ ăn & thức uống", Target::Code("thuc-pham-do-uong")),
    ("thời gian", Target::Group(WordGroup::Noun)),
    ("danh từ", Target::Group(WordGroup::Noun)),
    ("động vật", Target::Code("dong-vat")),
    ("cây cối", Target::Code("thuc-vat")),
    ("thời tiết", Target::Code("hien-tuong-tu-nhien")),
    ("động từ", Target::Group(WordGroup::Verb)),
    ("tính từ", Target::Group(WordGroup::Adjective)),
    ("sức khỏe", Target::Code("suc-khoe-benh")),
    ("sở thích", Target::Code("sinh-hoat-hang-ngay")),
    ("cảm xúc", Target::Code("cam-xuc-tinh-than")),
    ("phương tiện", Target::Code("di-chuyen-giao-thong")),
    ("mua sắm", Target::Code("mua-sam-giao-dich")),
    ("gia đình", Target::Code("gia-dinh")),
    ("màu sắc", Target::Code("mau-sac")),
    ("công việc", Target::Group(WordGroup::Verb)),
    ("thể thao", Target::Code("sinh-hoat-hang-ngay")),
    ("hành động", Target::Code("hanh-dong-co-ban")),
    ("quần áo", Target::Code("quan-ao-phu-kien")),
    ("cơ thể", Target::Code("bo-phan-co-the")),
    ("từ cảm thán", Target::Code("than-tu")),
    ("phương hướng", Target::Code("gioi-tu")),
    ("từ ngữ pháp", Target::Group(WordGroup::Special)),
    ("văn hóa", Target::Code("van-hoa-le-nghi")),
    ("khoa học", Target::Code("cong-nghe-truyen-thong")),
    ("kinh tế", Target::Code("tien-tai-chinh")),
    ("chính trị", Target::Code("su-kien-xa-hoi")),
    ("công nghệ", Target::Code("cong-nghe-truyen-thong")),
    ("địa điểm", Target::Code("dia-diem")),
    ("từ trừu tượng", Target::Code(FALLBACK_CODE)),
    ("số đếm & số lượng", Target::Code("so-luong-dem")),
];

const LEGACY_CATEGORY_NAMES: &[&str] = &[
    "Đồ ăn & thức uống",
    "Thời gian",
    "Danh từ",
    "Động vật",
    "Cây cối",
    "Thời tiết",
    "Động từ",
    "Tính từ",
    "Sức khỏe",
    "Sở thích",
    "Cảm xúc",
    "Phương tiện",
    "Mua sắm",
    "Gia đình",
    "Màu sắc",
    "Công việc",
    "Thể thao",
    "Hành động",
    "Quần áo",
    "Cơ thể",
    "Từ cảm thán",
    "Phương hướng",
    "Từ ngữ pháp",
    "Văn hóa",
    "Khoa học",
    "Kinh tế",
    "Chính trị",
    "Công nghệ",
    "Địa điểm",
    "Từ trừu tượng",
    "Số đếm & Số lượng",
];
