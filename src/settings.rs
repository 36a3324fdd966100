//! Search settings
//!
//! [`SearchSettings`] is the validated, immutable bundle that drives the
//! matcher. It is built from [`SearchOptions`], where every value is optional
//! and falls back to a fixed default.
//!
//! # Zero means "not supplied"
//!
//! A numeric option of `0` is treated exactly like an absent one and is
//! replaced by its default before validation. As a consequence
//! `percentage_allowed_mismatch = 0` yields the default of 25, not an exact
//! matcher. Negative values are supplied values and fail validation.
//!
//! ```rust
//! use fuzzywindow::settings::{SearchOptions, SearchSettings};
//!
//! let settings = SearchOptions::new()
//!     .with_percentage_allowed_mismatch(10)
//!     .with_case_sensitive_match(true)
//!     .build()
//!     .unwrap();
//! assert_eq!(settings.percentage_allowed_mismatch(), 10);
//!
//! let quirk = SearchSettings::new(Some(0), None, None, None).unwrap();
//! assert_eq!(quirk.minimum_length_for_search(), 1);
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MINIMUM_LENGTH_FOR_SEARCH: usize = 1;
pub const DEFAULT_MINIMUM_LENGTH_FOR_FUZZY_MATCH: usize = 5;
pub const DEFAULT_PERCENTAGE_ALLOWED_MISMATCH: u32 = 25;
pub const DEFAULT_CASE_SENSITIVE_MATCH: bool = false;

/// Upper bound for `percentage_allowed_mismatch`
pub const MAX_PERCENTAGE_ALLOWED_MISMATCH: u32 = 50;

/// Validated search configuration
///
/// Construct once and share freely; all fields are read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchSettings {
    minimum_length_for_search: usize,
    minimum_length_for_fuzzy_match: usize,
    percentage_allowed_mismatch: u32,
    case_sensitive_match: bool,
}

impl SearchSettings {
    /// Build settings from optional values.
    ///
    /// `None` and `Some(0)` both select the default. Validation runs in field
    /// order and reports the first failure.
    pub fn new(
        minimum_length_for_search: Option<i64>,
        minimum_length_for_fuzzy_match: Option<i64>,
        percentage_allowed_mismatch: Option<i64>,
        case_sensitive_match: Option<bool>,
    ) -> Result<Self, ConfigError> {
        let min_search = supplied(minimum_length_for_search)
            .unwrap_or(DEFAULT_MINIMUM_LENGTH_FOR_SEARCH as i64);
        let min_fuzzy = supplied(minimum_length_for_fuzzy_match)
            .unwrap_or(DEFAULT_MINIMUM_LENGTH_FOR_FUZZY_MATCH as i64);
        let pct = supplied(percentage_allowed_mismatch)
            .unwrap_or(i64::from(DEFAULT_PERCENTAGE_ALLOWED_MISMATCH));
        let case_sensitive = case_sensitive_match.unwrap_or(DEFAULT_CASE_SENSITIVE_MATCH);

        if min_search <= 0 {
            return Err(ConfigError::MinimumLengthForSearch(min_search));
        }
        if min_fuzzy <= 0 {
            return Err(ConfigError::MinimumLengthForFuzzyMatch(min_fuzzy));
        }
        if !(0..=i64::from(MAX_PERCENTAGE_ALLOWED_MISMATCH)).contains(&pct) {
            return Err(ConfigError::PercentageAllowedMismatch(pct));
        }

        Ok(Self {
            minimum_length_for_search: to_usize(min_search),
            minimum_length_for_fuzzy_match: to_usize(min_fuzzy),
            percentage_allowed_mismatch: pct as u32,
            case_sensitive_match: case_sensitive,
        })
    }

    #[inline]
    pub fn minimum_length_for_search(&self) -> usize {
        self.minimum_length_for_search
    }

    #[inline]
    pub fn minimum_length_for_fuzzy_match(&self) -> usize {
        self.minimum_length_for_fuzzy_match
    }

    #[inline]
    pub fn percentage_allowed_mismatch(&self) -> u32 {
        self.percentage_allowed_mismatch
    }

    #[inline]
    pub fn case_sensitive_match(&self) -> bool {
        self.case_sensitive_match
    }

    /// Mismatches tolerated in a window for a query of `query_len` characters.
    ///
    /// `floor(query_len * percentage_allowed_mismatch / 100)`
    #[must_use]
    pub fn max_mismatch_for(&self, query_len: usize) -> usize {
        query_len.saturating_mul(self.percentage_allowed_mismatch as usize) / 100
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            minimum_length_for_search: DEFAULT_MINIMUM_LENGTH_FOR_SEARCH,
            minimum_length_for_fuzzy_match: DEFAULT_MINIMUM_LENGTH_FOR_FUZZY_MATCH,
            percentage_allowed_mismatch: DEFAULT_PERCENTAGE_ALLOWED_MISMATCH,
            case_sensitive_match: DEFAULT_CASE_SENSITIVE_MATCH,
        }
    }
}

impl TryFrom<SearchOptions> for SearchSettings {
    type Error = ConfigError;

    fn try_from(options: SearchOptions) -> Result<Self, Self::Error> {
        SearchSettings::new(
            options.minimum_length_for_search,
            options.minimum_length_for_fuzzy_match,
            options.percentage_allowed_mismatch,
            options.case_sensitive_match,
        )
    }
}

/// Unvalidated settings input
///
/// Deserializes from snake_case or camelCase keys; unknown keys are rejected.
///
/// ```rust
/// use fuzzywindow::settings::SearchOptions;
///
/// let options: SearchOptions =
///     serde_json::from_str(r#"{"percentageAllowedMismatch": 40}"#).unwrap();
/// assert_eq!(options.build().unwrap().percentage_allowed_mismatch(), 40);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchOptions {
    #[serde(alias = "minimumLengthForSearch")]
    pub minimum_length_for_search: Option<i64>,

    #[serde(alias = "minimumLengthForFuzzyMatch")]
    pub minimum_length_for_fuzzy_match: Option<i64>,

    #[serde(alias = "percentageAllowedMismatch")]
    pub percentage_allowed_mismatch: Option<i64>,

    #[serde(alias = "caseSensitiveMatch")]
    pub case_sensitive_match: Option<bool>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_minimum_length_for_search(mut self, value: i64) -> Self {
        self.minimum_length_for_search = Some(value);
        self
    }

    pub fn with_minimum_length_for_fuzzy_match(mut self, value: i64) -> Self {
        self.minimum_length_for_fuzzy_match = Some(value);
        self
    }

    pub fn with_percentage_allowed_mismatch(mut self, value: i64) -> Self {
        self.percentage_allowed_mismatch = Some(value);
        self
    }

    pub fn with_case_sensitive_match(mut self, value: bool) -> Self {
        self.case_sensitive_match = Some(value);
        self
    }

    /// Validate into [`SearchSettings`]
    pub fn build(self) -> Result<SearchSettings, ConfigError> {
        SearchSettings::try_from(self)
    }
}

/// Treat zero as absent
#[inline]
fn supplied(value: Option<i64>) -> Option<i64> {
    value.filter(|&v| v != 0)
}

/// Positive `i64` to `usize`, saturating on narrow targets
#[inline]
fn to_usize(value: i64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
