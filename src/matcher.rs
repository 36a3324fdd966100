//! Matching engine
//!
//! Every query is matched with one of three policies, chosen once from its
//! length and the [`SearchSettings`]:
//!
//! | Query length (chars)               | Tier                          |
//! |------------------------------------|-------------------------------|
//! | 0, or `< minimum_length_for_search` | [`MatchTier::Skip`]: nothing matches |
//! | `< minimum_length_for_fuzzy_match`  | [`MatchTier::Exact`]: literal substring |
//! | otherwise                          | [`MatchTier::Fuzzy`]: sliding window  |
//!
//! In the fuzzy tier a candidate matches when some window of the candidate,
//! as long as the query, differs from it in at most
//! `floor(len * percentage_allowed_mismatch / 100)` positions.
//!
//! ```rust
//! use fuzzywindow::matcher::matches;
//! use fuzzywindow::settings::SearchSettings;
//!
//! let settings = SearchSettings::default();
//! assert!(matches("hellow", "hello world", &settings));
//! assert!(!matches("helo", "hello", &settings));
//! ```

use crate::algorithms::normalize::{fold_case, CaseMode};
use crate::algorithms::substring::SubstringFinder;
use crate::algorithms::window::has_window;
use crate::settings::SearchSettings;
use rayon::prelude::*;
use smallvec::SmallVec;
use tracing::{debug, trace};

/// Minimum number of candidates before filtering runs on the rayon pool.
///
/// Below this, thread pool coordination costs more than the comparisons.
pub const PARALLEL_THRESHOLD: usize = 100;

/// Query characters kept inline before spilling to the heap
type QueryChars = SmallVec<[char; 32]>;

/// Candidate characters kept inline before spilling to the heap
type TextChars = SmallVec<[char; 128]>;

/// Matching policy for one query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// Query too short; no candidate matches
    Skip,
    /// Literal substring containment
    Exact,
    /// Sliding window with a mismatch budget
    Fuzzy { max_mismatch: usize },
}

/// A query folded and classified once, ready to test many candidates.
///
/// Holds no state that changes between candidates.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    tier: MatchTier,
    case_mode: CaseMode,
    chars: QueryChars,
    finder: Option<SubstringFinder>,
}

impl PreparedQuery {
    /// Classify `query` under `settings`.
    ///
    /// Length gates use the query as given. The window length and mismatch
    /// budget use the case-folded query.
    pub fn new(query: &str, settings: &SearchSettings) -> Self {
        let case_mode = CaseMode::from_case_sensitive(settings.case_sensitive_match());
        let query_len = query.chars().count();
        let folded = fold_case(query, case_mode);
        let chars: QueryChars = folded.chars().collect();

        let tier = if query_len == 0 || query_len < settings.minimum_length_for_search() {
            MatchTier::Skip
        } else if query_len < settings.minimum_length_for_fuzzy_match() {
            MatchTier::Exact
        } else {
            MatchTier::Fuzzy {
                max_mismatch: settings.max_mismatch_for(chars.len()),
            }
        };

        let finder = match tier {
            MatchTier::Exact => Some(SubstringFinder::new(&folded)),
            _ => None,
        };

        Self {
            tier,
            case_mode,
            chars,
            finder,
        }
    }

    #[inline]
    pub fn tier(&self) -> MatchTier {
        self.tier
    }

    /// Query length in characters after case folding
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether no candidate can match this query
    #[inline]
    pub fn is_skip(&self) -> bool {
        self.tier == MatchTier::Skip
    }

    /// Decide whether `candidate` contains a match
    pub fn is_match(&self, candidate: &str) -> bool {
        match self.tier {
            MatchTier::Skip => false,
            MatchTier::Exact => {
                let text = fold_case(candidate, self.case_mode);
                self.finder.as_ref().is_some_and(|finder| finder.is_in(&text))
            }
            MatchTier::Fuzzy { max_mismatch } => {
                let text = fold_case(candidate, self.case_mode);
                let text: TextChars = text.chars().collect();
                let matched = has_window(&self.chars, &text, max_mismatch);
                if matched {
                    trace!(candidate, max_mismatch, "fuzzy window matched");
                }
                matched
            }
        }
    }
}

/// Matching engine bound to one set of settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FuzzyMatcher {
    settings: SearchSettings,
}

impl FuzzyMatcher {
    pub fn new(settings: SearchSettings) -> Self {
        Self { settings }
    }

    #[inline]
    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    pub fn prepare(&self, query: &str) -> PreparedQuery {
        PreparedQuery::new(query, &self.settings)
    }

    /// Single candidate decision
    pub fn matches(&self, query: &str, candidate: &str) -> bool {
        self.prepare(query).is_match(candidate)
    }

    /// Matching candidates, in input order
    pub fn filter<'a, S>(&self, query: &str, candidates: &'a [S]) -> Vec<&'a S>
    where
        S: AsRef<str> + Sync,
    {
        self.filter_by(query, candidates, |candidate| Some(candidate.as_ref()))
    }

    /// Matching items, comparing the text `text_of` extracts from each.
    ///
    /// Items for which `text_of` returns `None` never match. Input order is
    /// preserved, also when filtering runs in parallel.
    pub fn filter_by<'a, T, F>(&self, query: &str, items: &'a [T], text_of: F) -> Vec<&'a T>
    where
        T: Sync,
        F: Fn(&T) -> Option<&str> + Sync,
    {
        if query.is_empty() || items.is_empty() {
            return Vec::new();
        }

        let prepared = self.prepare(query);
        debug!(
            query_len = prepared.len(),
            tier = ?prepared.tier(),
            candidates = items.len(),
            "filtering candidates"
        );
        if prepared.is_skip() {
            return Vec::new();
        }

        let keep = |item: &&T| text_of(*item).is_some_and(|text| prepared.is_match(text));
        let matched: Vec<&T> = if items.len() >= PARALLEL_THRESHOLD {
            items.par_iter().filter(keep).collect()
        } else {
            items.iter().filter(keep).collect()
        };

        debug!(matched = matched.len(), "filter complete");
        matched
    }
}

/// Whether `candidate` contains a fuzzy match for `query`
pub fn matches(query: &str, candidate: &str, settings: &SearchSettings) -> bool {
    PreparedQuery::new(query, settings).is_match(candidate)
}

/// Candidates containing a fuzzy match for `query`, in input order
pub fn filter<'a, S>(query: &str, candidates: &'a [S], settings: &SearchSettings) -> Vec<&'a S>
where
    S: AsRef<str> + Sync,
{
    FuzzyMatcher::new(*settings).filter(query, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(pct: i64, case_sensitive: bool) -> SearchSettings {
        SearchSettings::new(None, None, Some(pct), Some(case_sensitive)).unwrap()
    }

    #[test]
    fn test_tier_selection() {
        let s = SearchSettings::new(Some(2), Some(5), None, None).unwrap();
        assert_eq!(PreparedQuery::new("", &s).tier(), MatchTier::Skip);
        assert_eq!(PreparedQuery::new("a", &s).tier(), MatchTier::Skip);
        assert_eq!(PreparedQuery::new("ab", &s).tier(), MatchTier::Exact);
        assert_eq!(PreparedQuery::new("abcd", &s).tier(), MatchTier::Exact);
        assert_eq!(
            PreparedQuery::new("abcde", &s).tier(),
            MatchTier::Fuzzy { max_mismatch: 1 }
        );
        assert_eq!(
            PreparedQuery::new("abcdefgh", &s).tier(),
            MatchTier::Fuzzy { max_mismatch: 2 }
        );
    }

    #[test]
    fn test_exact_tier_needs_literal() {
        let s = SearchSettings::default();
        assert!(matches("hell", "hello", &s));
        assert!(!matches("helo", "hello", &s));
        assert!(!matches("helo", "help", &s));
    }

    #[test]
    fn test_fuzzy_one_mismatch() {
        assert!(matches("hellow", "hello world", &settings(25, false)));
    }

    #[test]
    fn test_fuzzy_budget_exceeded() {
        // 6 chars at 25% allows 1 mismatch; "jelly " has 3
        assert!(!matches("hellow", "jelly world", &settings(25, false)));
        // 50% allows 3
        assert!(matches("hellow", "jelly world", &settings(50, false)));
    }

    #[test]
    fn test_fuzzy_candidate_shorter_than_query() {
        assert!(!matches("abcdefg", "abcdef", &settings(50, false)));
    }

    #[test]
    fn test_case_insensitive() {
        let s = settings(25, false);
        assert!(matches("HELLO", "say hello", &s));
        assert!(matches("Hel", "HELP", &s));
    }

    #[test]
    fn test_case_sensitive() {
        let s = settings(10, true);
        assert!(!matches("Hel", "help", &s));
        assert!(matches("hel", "help", &s));
        // 5 chars at 10% allows 0 mismatches
        assert!(!matches("HELLO", "hello", &s));
        assert!(matches("Hello", "Hello", &s));
    }

    #[test]
    fn test_filter_preserves_order() {
        let s = settings(25, false);
        let items = ["beta fuzzy", "alpha", "fuzzi", "gamma fuzzy"];
        let out = filter("fuzzy", &items, &s);
        assert_eq!(out, vec![&"beta fuzzy", &"fuzzi", &"gamma fuzzy"]);
    }

    #[test]
    fn test_filter_empty_inputs() {
        let s = SearchSettings::default();
        let empty: [&str; 0] = [];
        assert!(filter("hello", &empty, &s).is_empty());
        assert!(filter("", &["hello"], &s).is_empty());
    }

    #[test]
    fn test_filter_below_minimum_length() {
        let s = SearchSettings::new(Some(3), None, None, None).unwrap();
        assert!(filter("he", &["hello", "he"], &s).is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let s = settings(25, false);
        let items: Vec<String> = (0..PARALLEL_THRESHOLD * 3)
            .map(|i| match i % 4 {
                0 => format!("item {} fuzzy", i),
                1 => format!("item {} fuzzi", i),
                2 => format!("item {} other", i),
                _ => format!("FUZZY {}", i),
            })
            .collect();
        let parallel = filter("fuzzy", &items, &s);
        let sequential: Vec<&String> = items.iter().filter(|i| matches("fuzzy", i, &s)).collect();
        assert_eq!(parallel, sequential);
        assert_eq!(parallel.len(), items.len() / 4 * 3);
    }

    #[test]
    fn test_filter_by_skips_missing_text() {
        let matcher = FuzzyMatcher::default();
        let items = [Some("hello"), None, Some("yellow")];
        let out = matcher.filter_by("ello", &items, |item| *item);
        assert_eq!(out, vec![&Some("hello"), &Some("yellow")]);
    }

    #[test]
    fn test_prepared_query_is_reusable() {
        let prepared = PreparedQuery::new("hellow", &SearchSettings::default());
        assert!(prepared.is_match("hello world"));
        assert!(!prepared.is_match("goodbye"));
        assert!(prepared.is_match("hello world"));
    }
}
