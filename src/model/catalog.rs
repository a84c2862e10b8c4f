//! Fixed produce catalog offered at the stall.

use serde::{Deserialize, Serialize};

/// Sentinel item that routes to a free-text entry.
pub const OTHER_ITEM: &str = "DİĞER";

/// Fruit items, in menu order.
pub const FRUITS: [&str; 9] = [
    "ŞEFTALİ",
    "NEKTARİ",
    "PORTAKAL",
    "MANDALİNA",
    "ELMA",
    "NAR",
    "ÇİLEK",
    "MUZ",
    "DİĞER",
];

/// Vegetable items, in menu order.
pub const VEGETABLES: [&str; 3] = ["FASULYE", "DOMATES", "DİĞER"];

/// Produce category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemCategory {
    /// Fruit ("MEYVE").
    #[default]
    Meyve,
    /// Vegetable ("SEBZE").
    Sebze,
}

impl ItemCategory {
    /// Parse a category from its label.
    pub fn from_label(s: &str) -> Option<Self> {
        match crate::text::normalize_key(s).as_str() {
            "meyve" => Some(ItemCategory::Meyve),
            "sebze" => Some(ItemCategory::Sebze),
            _ => None,
        }
    }

    /// The fixed item list for this category.
    pub fn items(&self) -> &'static [&'static str] {
        match self {
            ItemCategory::Meyve => &FRUITS,
            ItemCategory::Sebze => &VEGETABLES,
        }
    }

    /// The item preselected when this category is chosen.
    pub fn default_item(&self) -> &'static str {
        self.items()[0]
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemCategory::Meyve => write!(f, "MEYVE"),
            ItemCategory::Sebze => write!(f, "SEBZE"),
        }
    }
}

/// Resolve a catalog selection to the item name printed on the receipt.
///
/// `DİĞER` routes to the free-text `custom` entry, uppercased. A missing or
/// blank entry yields `None`, as does a blank selection.
pub fn resolve_item(selection: &str, custom: Option<&str>) -> Option<String> {
    if crate::text::normalize_key(selection) == crate::text::normalize_key(OTHER_ITEM) {
        return custom
            .map(|c| c.trim().to_uppercase())
            .filter(|c| !c.is_empty());
    }
    let trimmed = selection.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}
