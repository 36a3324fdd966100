//! Python bindings
//!
//! Exposes `SearchSettings`, `search` and `search_by_field` as the
//! `fuzzywindow._core` extension module.
//!
//! ```python
//! >>> from fuzzywindow import SearchSettings, search, search_by_field
//! >>> search("hellow", ["hello world", "goodbye"])
//! ['hello world']
//! >>> search_by_field("ada", [{"name": "Ada"}, {"name": "Bob"}], "name")
//! [{'name': 'Ada'}]
//! ```

use crate::matcher::FuzzyMatcher;
use crate::settings::SearchSettings;
use pyo3::create_exception;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyString};

// ============================================================================
// Custom Python Exceptions
// ============================================================================
//
// FuzzyWindowError (base)
//   ├── ConfigurationError - a setting is out of range
//   └── UsageError - items can't be read as text

create_exception!(fuzzywindow, FuzzyWindowError, pyo3::exceptions::PyException);
create_exception!(fuzzywindow, ConfigurationError, FuzzyWindowError);
create_exception!(fuzzywindow, UsageError, FuzzyWindowError);

impl From<crate::error::ConfigError> for PyErr {
    fn from(err: crate::error::ConfigError) -> Self {
        ConfigurationError::new_err(err.to_string())
    }
}

impl From<crate::error::UsageError> for PyErr {
    fn from(err: crate::error::UsageError) -> Self {
        UsageError::new_err(err.to_string())
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Validated search settings.
///
/// Every argument is optional; `None` or `0` selects the default.
#[pyclass(name = "SearchSettings", frozen)]
#[derive(Clone)]
struct PySearchSettings {
    inner: SearchSettings,
}

#[pymethods]
impl PySearchSettings {
    #[new]
    #[pyo3(signature = (
        minimum_length_for_search=None,
        minimum_length_for_fuzzy_match=None,
        percentage_allowed_mismatch=None,
        case_sensitive_match=None
    ))]
    fn new(
        minimum_length_for_search: Option<i64>,
        minimum_length_for_fuzzy_match: Option<i64>,
        percentage_allowed_mismatch: Option<i64>,
        case_sensitive_match: Option<bool>,
    ) -> PyResult<Self> {
        let inner = SearchSettings::new(
            minimum_length_for_search,
            minimum_length_for_fuzzy_match,
            percentage_allowed_mismatch,
            case_sensitive_match,
        )?;
        Ok(Self { inner })
    }

    #[getter]
    fn minimum_length_for_search(&self) -> usize {
        self.inner.minimum_length_for_search()
    }

    #[getter]
    fn minimum_length_for_fuzzy_match(&self) -> usize {
        self.inner.minimum_length_for_fuzzy_match()
    }

    #[getter]
    fn percentage_allowed_mismatch(&self) -> u32 {
        self.inner.percentage_allowed_mismatch()
    }

    #[getter]
    fn case_sensitive_match(&self) -> bool {
        self.inner.case_sensitive_match()
    }

    fn __repr__(&self) -> String {
        format!(
            "SearchSettings(minimum_length_for_search={}, minimum_length_for_fuzzy_match={}, percentage_allowed_mismatch={}, case_sensitive_match={})",
            self.inner.minimum_length_for_search(),
            self.inner.minimum_length_for_fuzzy_match(),
            self.inner.percentage_allowed_mismatch(),
            if self.inner.case_sensitive_match() { "True" } else { "False" },
        )
    }
}

fn settings_or_default(settings: Option<PyRef<'_, PySearchSettings>>) -> SearchSettings {
    settings.map(|s| s.inner).unwrap_or_default()
}

// ============================================================================
// Text extraction
// ============================================================================

/// Value of `field` on a dict (by key) or any other object (by attribute)
fn field_of<'py>(item: &Bound<'py, PyAny>, field: &str) -> Option<Bound<'py, PyAny>> {
    match item.downcast::<PyDict>() {
        Ok(dict) => dict.get_item(field).ok().flatten(),
        Err(_) => item.getattr(field).ok(),
    }
}

fn as_text(value: &Bound<'_, PyAny>) -> Option<String> {
    if value.is_instance_of::<PyString>() {
        value.extract::<String>().ok()
    } else {
        None
    }
}

/// Check the first item once, like the Rust `TextSource::resolve`
fn check_first(first: &Bound<'_, PyAny>, field: Option<&str>) -> PyResult<()> {
    match field {
        None if as_text(first).is_none() => Err(crate::error::UsageError::NotAString.into()),
        None => Ok(()),
        Some(name) => match field_of(first, name) {
            None => Err(crate::error::UsageError::MissingField {
                field: name.to_string(),
            }
            .into()),
            Some(value) if as_text(&value).is_none() => {
                Err(crate::error::UsageError::FieldNotString {
                    field: name.to_string(),
                }
                .into())
            }
            Some(_) => Ok(()),
        },
    }
}

// ============================================================================
// Search functions
// ============================================================================

/// Filter strings that contain a fuzzy match for `query`.
///
/// Order is preserved. Returns an empty list for an empty query or input.
#[pyfunction]
#[pyo3(signature = (query, items, settings=None))]
fn search(
    py: Python<'_>,
    query: &str,
    items: Vec<String>,
    settings: Option<PyRef<'_, PySearchSettings>>,
) -> Vec<String> {
    let matcher = FuzzyMatcher::new(settings_or_default(settings));
    py.allow_threads(|| {
        matcher
            .filter(query, &items)
            .into_iter()
            .cloned()
            .collect()
    })
}

/// Filter objects whose `field` contains a fuzzy match for `query`.
///
/// With `field=None` the items must be strings. Dicts are read by key,
/// other objects by attribute. Only the first item is checked.
///
/// Raises:
///     UsageError: the first item can't be read as text
#[pyfunction]
#[pyo3(signature = (query, items, field=None, settings=None))]
fn search_by_field<'py>(
    py: Python<'py>,
    query: &str,
    items: Vec<Bound<'py, PyAny>>,
    field: Option<&str>,
    settings: Option<PyRef<'py, PySearchSettings>>,
) -> PyResult<Vec<Bound<'py, PyAny>>> {
    let Some(first) = items.first() else {
        return Ok(Vec::new());
    };
    if query.is_empty() {
        return Ok(Vec::new());
    }
    check_first(first, field)?;

    // Extract under the GIL, match without it
    let texts: Vec<(usize, Option<String>)> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let text = match field {
                None => as_text(item),
                Some(name) => field_of(item, name).and_then(|value| as_text(&value)),
            };
            (i, text)
        })
        .collect();

    let matcher = FuzzyMatcher::new(settings_or_default(settings));
    let matched: Vec<usize> = py.allow_threads(|| {
        matcher
            .filter_by(query, &texts, |(_, text)| text.as_deref())
            .into_iter()
            .map(|(i, _)| *i)
            .collect()
    });

    Ok(matched.into_iter().map(|i| items[i].clone()).collect())
}

// ============================================================================
// Python Module
// ============================================================================

#[pymodule]
fn _core(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("FuzzyWindowError", py.get_type::<FuzzyWindowError>())?;
    m.add("ConfigurationError", py.get_type::<ConfigurationError>())?;
    m.add("UsageError", py.get_type::<UsageError>())?;

    m.add_class::<PySearchSettings>()?;

    m.add_function(wrap_pyfunction!(search, m)?)?;
    m.add_function(wrap_pyfunction!(search_by_field, m)?)?;

    Ok(())
}
