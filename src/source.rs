//! Resolving comparison text from collection items
//!
//! Items are either strings themselves or carry a named string field. Which
//! of the two applies is decided once per search from the first item (see
//! [`TextSource::resolve`]); the rest of the collection is read the same way
//! without being checked again. A later item that yields no text simply
//! doesn't match.

use crate::error::UsageError;
use crate::record::{Record, RecordValue};

/// Borrowed view of a field value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number,
    Bool,
    Null,
    /// Arrays, objects and anything else structured
    Nested,
}

impl<'a> FieldValue<'a> {
    #[inline]
    pub fn as_text(self) -> Option<&'a str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// An item that can be searched, either as text or by named field
pub trait Searchable {
    /// The item itself as text, if it is a string
    fn as_text(&self) -> Option<&str> {
        None
    }

    /// Value of the named field, or `None` if the item has no such field
    fn field(&self, _name: &str) -> Option<FieldValue<'_>> {
        None
    }
}

impl Searchable for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Searchable for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }
}

impl<T: Searchable + ?Sized> Searchable for Box<T> {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }
}

impl Searchable for serde_json::Value {
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        use serde_json::Value;

        let value = self.as_object()?.get(name)?;
        Some(match value {
            Value::String(s) => FieldValue::Text(s),
            Value::Number(_) => FieldValue::Number,
            Value::Bool(_) => FieldValue::Bool,
            Value::Null => FieldValue::Null,
            Value::Array(_) | Value::Object(_) => FieldValue::Nested,
        })
    }
}

impl Searchable for Record {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match self.get_field(name)? {
            RecordValue::Text(s) => FieldValue::Text(s),
            RecordValue::Integer(_) | RecordValue::Float(_) => FieldValue::Number,
            RecordValue::Bool(_) => FieldValue::Bool,
            RecordValue::Null => FieldValue::Null,
        })
    }
}

/// Where the comparison text of each item comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource<'f> {
    /// Items are strings
    Plain,
    /// Items carry the text in this field
    Field(&'f str),
}

impl<'f> TextSource<'f> {
    /// Decide how to read items, using `first` as representative.
    ///
    /// # Errors
    ///
    /// - [`UsageError::NotAString`] when `field` is `None` and `first` isn't text
    /// - [`UsageError::MissingField`] when `first` has no field `field`
    /// - [`UsageError::FieldNotString`] when that field isn't text
    pub fn resolve<T>(first: &T, field: Option<&'f str>) -> Result<Self, UsageError>
    where
        T: Searchable + ?Sized,
    {
        match field {
            None => match first.as_text() {
                Some(_) => Ok(TextSource::Plain),
                None => Err(UsageError::NotAString),
            },
            Some(name) => match first.field(name) {
                Some(FieldValue::Text(_)) => Ok(TextSource::Field(name)),
                Some(_) => Err(UsageError::FieldNotString {
                    field: name.to_string(),
                }),
                None => Err(UsageError::MissingField {
                    field: name.to_string(),
                }),
            },
        }
    }

    /// Comparison text of `item`, if it has one
    #[inline]
    pub fn text_of<'i, T>(&self, item: &'i T) -> Option<&'i str>
    where
        T: Searchable + ?Sized,
    {
        match *self {
            TextSource::Plain => item.as_text(),
            TextSource::Field(name) => item.field(name).and_then(FieldValue::as_text),
        }
    }
}
