//! Sliding-window mismatch counting
//!
//! A window is a run of the candidate text exactly as long as the query.
//! Query and window are compared position by position (Hamming-style); only
//! substitutions are counted, never insertions or deletions.
//!
//! # Early exit
//!
//! [`count_mismatches_bounded`] stops as soon as the count passes the limit.
//! The count within one window never decreases, so the accept/reject result
//! is the same as scoring every full window and comparing afterwards.
//!
//! # Complexity
//! - Time: O(n * m) worst case for a text of n and a query of m characters
//! - Space: O(1) beyond the character slices

/// Count positions where `query` and `window` differ.
///
/// Compares up to the shorter of the two slices.
#[must_use]
pub fn count_mismatches(query: &[char], window: &[char]) -> usize {
    query
        .iter()
        .zip(window.iter())
        .filter(|(q, w)| q != w)
        .count()
}

/// Count mismatches, giving up once the count exceeds `limit`.
///
/// Returns `None` if the window has more than `limit` mismatches.
#[must_use]
pub fn count_mismatches_bounded(query: &[char], window: &[char], limit: usize) -> Option<usize> {
    let mut mismatches = 0usize;
    for (q, w) in query.iter().zip(window.iter()) {
        if q != w {
            mismatches += 1;
            if mismatches > limit {
                return None;
            }
        }
    }
    Some(mismatches)
}

/// Leftmost offset whose window has at most `max_mismatch` mismatches.
///
/// Offsets run from `0` to `text.len() - query.len()` inclusive. A text
/// shorter than the query has no windows. An empty query matches at `0`.
#[must_use]
pub fn find_window(query: &[char], text: &[char], max_mismatch: usize) -> Option<usize> {
    if query.is_empty() {
        return Some(0);
    }
    if text.len() < query.len() {
        return None;
    }
    text.windows(query.len())
        .position(|window| count_mismatches_bounded(query, window, max_mismatch).is_some())
}

/// Whether any window of `text` is within `max_mismatch` of `query`
#[inline]
#[must_use]
pub fn has_window(query: &[char], text: &[char], max_mismatch: usize) -> bool {
    find_window(query, text, max_mismatch).is_some()
}

/// Full mismatch count for every window, leftmost first.
///
/// No early exit. Empty when the text is shorter than the query.
#[must_use]
pub fn window_mismatch_counts(query: &[char], text: &[char]) -> Vec<usize> {
    if query.is_empty() || text.len() < query.len() {
        return Vec::new();
    }
    text.windows(query.len())
        .map(|window| count_mismatches(query, window))
        .collect()
}

/// [`find_window`] over string slices
#[must_use]
pub fn find_window_str(query: &str, text: &str, max_mismatch: usize) -> Option<usize> {
    let query: Vec<char> = query.chars().collect();
    let text: Vec<char> = text.chars().collect();
    find_window(&query, &text, max_mismatch)
}
