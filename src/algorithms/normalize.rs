//! Case folding for query and candidate text
//!
//! Only simple lowercase folding is supported. Text that is already folded
//! is passed through as a `Cow::Borrowed` without allocating.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How characters are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseMode {
    /// Compare characters as given
    Sensitive,
    /// Lowercase both sides before comparing
    Insensitive,
}

impl CaseMode {
    #[inline]
    pub fn from_case_sensitive(case_sensitive: bool) -> Self {
        if case_sensitive {
            CaseMode::Sensitive
        } else {
            CaseMode::Insensitive
        }
    }
}

/// Fold `s` according to `mode`.
///
/// Borrows when no character would change.
#[must_use]
pub fn fold_case(s: &str, mode: CaseMode) -> Cow<'_, str> {
    match mode {
        CaseMode::Sensitive => Cow::Borrowed(s),
        CaseMode::Insensitive => {
            if s.chars().any(changes_when_lowercased) {
                Cow::Owned(s.to_lowercase())
            } else {
                Cow::Borrowed(s)
            }
        }
    }
}

/// Fold both strings according to the specified mode
#[must_use]
pub fn fold_pair<'a>(a: &'a str, b: &'a str, mode: CaseMode) -> (Cow<'a, str>, Cow<'a, str>) {
    (fold_case(a, mode), fold_case(b, mode))
}

#[inline]
fn changes_when_lowercased(c: char) -> bool {
    let mut lower = c.to_lowercase();
    lower.next() != Some(c) || lower.next().is_some()
}
