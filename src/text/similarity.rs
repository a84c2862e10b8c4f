//! Sequence similarity for fuzzy name matching.
//!
//! Ratcliff/Obershelp ratio over Unicode scalar values: twice the total
//! length of the matching-block decomposition divided by the combined length.
//! The resolve and filter cutoffs are calibrated against this exact
//! decomposition, including its earliest-block tie rule.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Similarity ratio in [0.0, 1.0]; 1.0 when both strings are empty.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let denom = a.len() + b.len();
    if denom == 0 {
        return 1.0;
    }
    2.0 * matched_total(&a, &b) as f64 / denom as f64
}

/// The candidates most similar to `query`.
///
/// Keeps candidates whose ratio against `query` reaches `cutoff`, orders
/// them by descending ratio, breaking exact ties by descending candidate
/// order, and truncates to `limit`.
pub fn close_matches<'a, I>(query: &str, candidates: I, limit: usize, cutoff: f64) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(f64, &'a str)> = Vec::new();
    for candidate in candidates {
        let score = ratio(candidate, query);
        if score >= cutoff {
            scored.push((score, candidate));
        }
    }
    scored.sort_by(|x, y| {
        y.0.partial_cmp(&x.0)
            .unwrap_or(Ordering::Equal)
            .then_with(|| y.1.cmp(x.1))
    });
    scored.truncate(limit);
    scored.into_iter().map(|(_, candidate)| candidate).collect()
}

/// Sum of matching-block lengths: the longest common block, then the same
/// recursively on the unmatched left and right remainders.
fn matched_total(a: &[char], b: &[char]) -> usize {
    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_block(a, b, alo, ahi, blo, bhi);
        if size > 0 {
            total += size;
            pending.push((alo, i, blo, j));
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    total
}

/// Longest matching block within the given windows.
///
/// Returns (start in a, start in b, length). On equal lengths the earliest
/// block wins: lowest start in a, then lowest start in b.
fn longest_block(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0usize);
    // run_lengths[j] is the length of the match run ending at b[j] for the
    // previous row of a.
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut next_runs: HashMap<usize, usize> = HashMap::new();
        for j in blo..bhi {
            if a[i] == b[j] {
                let len = if j > blo {
                    run_lengths.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                next_runs.insert(j, len);
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        run_lengths = next_runs;
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    // ==================== ratio tests ====================

    #[test]
    fn test_ratio_identical() {
        assert_close(ratio("ahmet", "ahmet"), 1.0);
    }

    #[test]
    fn test_ratio_both_empty() {
        assert_close(ratio("", ""), 1.0);
    }

    #[test]
    fn test_ratio_one_empty() {
        assert_close(ratio("ahmet", ""), 0.0);
        assert_close(ratio("", "ahmet"), 0.0);
    }

    #[test]
    fn test_ratio_transposition() {
        // Blocks: "app" + "l" out of 5+5 characters.
        assert_close(ratio("appel", "apple"), 0.8);
    }

    #[test]
    fn test_ratio_single_substitution() {
        assert_close(ratio("ahmet", "ahmed"), 0.8);
    }

    #[test]
    fn test_ratio_dropped_letter() {
        // Blocks: "met" + "me" against the shorter spelling.
        assert_close(ratio("mehmet", "memet"), 10.0 / 11.0);
    }

    #[test]
    fn test_ratio_counts_scalar_values() {
        // One character difference out of 4+4, not bytes.
        assert_close(ratio("ayşe", "ayse"), 0.75);
    }

    #[test]
    fn test_ratio_disjoint() {
        assert_close(ratio("abc", "xyz"), 0.0);
    }

    // ==================== close_matches tests ====================

    #[test]
    fn test_close_matches_orders_by_score() {
        let candidates = ["mehmed", "mehmet", "ali"];
        let matched = close_matches("mehmet", candidates, 5, 0.6);
        assert_eq!(matched, vec!["mehmet", "mehmed"]);
    }

    #[test]
    fn test_close_matches_cutoff_excludes() {
        let matched = close_matches("mehmet", ["ali", "veli"], 5, 0.6);
        assert!(matched.is_empty());
    }

    #[test]
    fn test_close_matches_limit() {
        let candidates = ["abcd", "abce", "abcf", "abcg"];
        let matched = close_matches("abcx", candidates, 2, 0.5);
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_close_matches_tie_prefers_greater_candidate() {
        // Both score 6/8 against the query; the tie resolves by candidate
        // order, not insertion order.
        assert_eq!(close_matches("abcd", ["abcx", "abcy"], 1, 0.5), vec!["abcy"]);
        assert_eq!(close_matches("abcd", ["abcy", "abcx"], 1, 0.5), vec!["abcy"]);
    }
}
