//! fuzzywindow - approximate substring search
//!
//! Finds the items of a collection that contain a substring close to a
//! query. "Close" means an equal-length window of the item differs from the
//! query in at most a configured percentage of positions.
//!
//! # Features
//! - Three-tier matching: skip short queries, exact substring for medium
//!   ones, sliding mismatch window for long ones
//! - Validated, immutable [`SearchSettings`]
//! - Search plain strings, records, JSON objects or any [`Searchable`] type
//! - Parallel filtering for large collections
//! - Optional Python bindings (`python` feature)
//!
//! # Example
//!
//! ```rust
//! use fuzzywindow::{search_with_settings, SearchSettings};
//!
//! let settings = SearchSettings::new(None, None, Some(25), None).unwrap();
//! let items = ["hello world", "submarine", "goodbye"];
//! let found = search_with_settings("hellow", &items, &settings);
//! assert_eq!(found, vec![&"hello world"]);
//! ```

pub mod algorithms;
pub mod error;
pub mod matcher;
pub mod record;
pub mod search;
pub mod settings;
pub mod source;

#[cfg(feature = "python")]
mod python;

pub use error::{ConfigError, FuzzyWindowError, UsageError};
pub use matcher::{filter, matches, FuzzyMatcher, MatchTier, PreparedQuery};
pub use record::{Record, RecordValue};
pub use search::{search, search_by_field, search_by_key, search_with_options, search_with_settings};
pub use settings::{SearchOptions, SearchSettings};
pub use source::{FieldValue, Searchable, TextSource};
