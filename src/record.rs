//! Named-field records
//!
//! A [`Record`] is a small document with named fields, for collections that
//! are searched by one of their fields rather than as plain strings.
//!
//! ```rust
//! use fuzzywindow::record::Record;
//!
//! let mut record = Record::new();
//! record.set_field("name", "MacBook Pro");
//! record.set_field("year", 2021);
//! assert_eq!(record.get_text("name"), Some("MacBook Pro"));
//! assert_eq!(record.get_text("year"), None);
//! ```

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Value held by a record field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RecordValue {
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RecordValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for RecordValue {
    fn from(value: String) -> Self {
        RecordValue::Text(value)
    }
}

impl From<&str> for RecordValue {
    fn from(value: &str) -> Self {
        RecordValue::Text(value.to_string())
    }
}

impl From<i64> for RecordValue {
    fn from(value: i64) -> Self {
        RecordValue::Integer(value)
    }
}

impl From<i32> for RecordValue {
    fn from(value: i32) -> Self {
        RecordValue::Integer(i64::from(value))
    }
}

impl From<f64> for RecordValue {
    fn from(value: f64) -> Self {
        RecordValue::Float(value)
    }
}

impl From<bool> for RecordValue {
    fn from(value: bool) -> Self {
        RecordValue::Bool(value)
    }
}

/// A searchable record with named fields
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    /// Field name -> value mapping
    pub fields: AHashMap<String, RecordValue>,

    /// Optional user data (e.g., database ID)
    pub data: Option<u64>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new record with user data
    pub fn with_data(data: u64) -> Self {
        Self {
            fields: AHashMap::new(),
            data: Some(data),
        }
    }

    /// Builder-style [`set_field`](Self::set_field)
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<RecordValue>) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<RecordValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get_field(&self, name: &str) -> Option<&RecordValue> {
        self.fields.get(name)
    }

    /// Field value if it exists and is text
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get_field(name).and_then(RecordValue::as_text)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn remove_field(&mut self, name: &str) -> Option<RecordValue> {
        self.fields.remove(name)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
