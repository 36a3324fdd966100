//! Public search entry points
//!
//! Thin wrappers that resolve how items are read, then hand the collection
//! to the [`FuzzyMatcher`]. Results borrow from the input slice and keep its
//! order.
//!
//! ```rust
//! use fuzzywindow::search::{search, search_by_field};
//! use fuzzywindow::settings::SearchSettings;
//! use serde_json::json;
//!
//! let names = ["hello world", "goodbye", "hellow"];
//! assert_eq!(search("hellow", &names), vec![&"hello world", &"hellow"]);
//!
//! let people = vec![json!({"name": "Ada Lovelace"}), json!({"name": "Alan Turing"})];
//! let found = search_by_field("lovelase", &people, Some("name"), &SearchSettings::default()).unwrap();
//! assert_eq!(found.len(), 1);
//! ```

use crate::error::{ConfigError, UsageError};
use crate::matcher::FuzzyMatcher;
use crate::settings::{SearchOptions, SearchSettings};
use crate::source::{Searchable, TextSource};
use tracing::warn;

/// Search plain strings with default settings
pub fn search<'a, S>(query: &str, items: &'a [S]) -> Vec<&'a S>
where
    S: AsRef<str> + Sync,
{
    search_with_settings(query, items, &SearchSettings::default())
}

/// Search plain strings
pub fn search_with_settings<'a, S>(
    query: &str,
    items: &'a [S],
    settings: &SearchSettings,
) -> Vec<&'a S>
where
    S: AsRef<str> + Sync,
{
    FuzzyMatcher::new(*settings).filter(query, items)
}

/// Search plain strings, validating raw options first
///
/// # Errors
///
/// Returns a [`ConfigError`] if `options` fails validation.
pub fn search_with_options<'a, S>(
    query: &str,
    items: &'a [S],
    options: SearchOptions,
) -> Result<Vec<&'a S>, ConfigError>
where
    S: AsRef<str> + Sync,
{
    let settings = options.build()?;
    Ok(search_with_settings(query, items, &settings))
}

/// Search items by a named string field, or as strings when `field` is `None`.
///
/// The first item decides how the collection is read; later items are not
/// checked and never match if they yield no text.
///
/// # Errors
///
/// Returns a [`UsageError`] if the first item isn't a string (no `field`), or
/// its `field` is missing or not a string.
pub fn search_by_field<'a, T>(
    query: &str,
    items: &'a [T],
    field: Option<&str>,
    settings: &SearchSettings,
) -> Result<Vec<&'a T>, UsageError>
where
    T: Searchable + Sync,
{
    let Some(first) = items.first() else {
        return Ok(Vec::new());
    };
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let source = TextSource::resolve(first, field).map_err(|err| {
        warn!(error = %err, "cannot read search items as text");
        err
    })?;

    Ok(FuzzyMatcher::new(*settings).filter_by(query, items, |item| source.text_of(item)))
}

/// Search items by a key function that always yields text
pub fn search_by_key<'a, T, F>(
    query: &str,
    items: &'a [T],
    key: F,
    settings: &SearchSettings,
) -> Vec<&'a T>
where
    T: Sync,
    F: Fn(&T) -> &str + Sync,
{
    FuzzyMatcher::new(*settings).filter_by(query, items, |item| Some(key(item)))
}
