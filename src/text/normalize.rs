//! Name normalization: comparison keys and display casing.
//!
//! Turkish names make plain case-insensitive comparison unsafe. The dotted
//! pair İ/i and the dotless pair I/ı are four distinct letters, and the
//! default Unicode lowercase sends both capitals toward a dotted `i`. The
//! fold here pairs İ↔i and I↔ı explicitly, so comparison keys and the
//! title-cased display form agree: `normalize_key(display_name(n))` equals
//! `normalize_key(n)` for every input.

use unicode_normalization::UnicodeNormalization;

/// Produce the canonical comparison key for a customer name.
///
/// NFKC-normalizes, collapses whitespace runs to single spaces, trims, and
/// lowercases with the Turkish İ/ı mapping. Two names denote the same
/// customer exactly when their keys are equal.
pub fn normalize_key(name: &str) -> String {
    let composed: String = name.nfkc().collect();
    let collapsed = composed.split_whitespace().collect::<Vec<_>>().join(" ");
    fold_turkish(&collapsed)
}

/// Title-case a name for storage and display.
///
/// NFKC-normalizes like `normalize_key`, then lowercases each
/// whitespace-separated word with the Turkish mapping and upper-cases its
/// first letter, where a leading `i` becomes `İ` (plain uppercase would
/// produce the dotless `I`).
pub fn display_name(name: &str) -> String {
    let composed: String = name.nfkc().collect();
    composed
        .split_whitespace()
        .map(title_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase with the Turkish dotted/dotless mapping: İ→i, I→ı.
fn fold_turkish(s: &str) -> String {
    let mapped: String = s
        .chars()
        .map(|c| match c {
            'İ' => 'i',
            'I' => 'ı',
            other => other,
        })
        .collect();
    mapped.to_lowercase()
}

fn title_word(word: &str) -> String {
    let lower = fold_turkish(word);
    let mut chars = lower.chars();
    match chars.next() {
        None => String::new(),
        Some('i') => format!("İ{}", chars.as_str()),
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(chars.as_str());
            out
        }
    }
}
