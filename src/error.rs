//! Error types
//!
//! Two kinds of failure exist:
//!
//! - [`ConfigError`]: a supplied setting is outside its valid range
//! - [`UsageError`]: a search call whose items cannot be read as text
//!
//! Individual candidates never fail; they either match or they don't.

use thiserror::Error;

/// Errors raised while building [`SearchSettings`](crate::settings::SearchSettings)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `minimum_length_for_search` was not positive
    #[error("minimum_length_for_search must be greater than 0, got {0}")]
    MinimumLengthForSearch(i64),

    /// `minimum_length_for_fuzzy_match` was not positive
    #[error("minimum_length_for_fuzzy_match must be greater than 0, got {0}")]
    MinimumLengthForFuzzyMatch(i64),

    /// `percentage_allowed_mismatch` was outside [0, 50]
    #[error("percentage_allowed_mismatch must be in range [0, 50], got {0}")]
    PercentageAllowedMismatch(i64),
}

impl ConfigError {
    /// Name of the setting that failed validation
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::MinimumLengthForSearch(_) => "minimum_length_for_search",
            ConfigError::MinimumLengthForFuzzyMatch(_) => "minimum_length_for_fuzzy_match",
            ConfigError::PercentageAllowedMismatch(_) => "percentage_allowed_mismatch",
        }
    }

    /// The rejected value
    #[must_use]
    pub fn value(&self) -> i64 {
        match *self {
            ConfigError::MinimumLengthForSearch(v)
            | ConfigError::MinimumLengthForFuzzyMatch(v)
            | ConfigError::PercentageAllowedMismatch(v) => v,
        }
    }
}

/// Errors raised when a collection's items can't be resolved to text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// No field was given and the items are not strings
    #[error("items are not strings and no field was given to search by")]
    NotAString,

    /// The named field holds something other than a string
    #[error("field '{field}' does not hold a string value")]
    FieldNotString { field: String },

    /// The named field does not exist on the items
    #[error("field '{field}' does not exist on the searched items")]
    MissingField { field: String },
}

/// Any error produced by this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FuzzyWindowError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("usage error: {0}")]
    Usage(#[from] UsageError),
}
