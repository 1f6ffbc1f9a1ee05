//! Bookshelf document model
//!
//! Records keep every JSON field they were loaded with, in file order; only
//! `Genre` and `Tags` are ever touched.

use crate::error::{Result, ShelftagError};
use serde_json::{Map, Value};

pub const TITLE_FIELD: &str = "Title";
pub const GENRE_FIELD: &str = "Genre";
pub const TAGS_FIELD: &str = "Tags";

/// One book entry.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    fields: Map<String, Value>,
}

impl BookRecord {
    /// Validate the shape of a single record at `index` in the document.
    pub fn from_value(index: usize, value: Value) -> Result<Self> {
        let Value::Object(fields) = value else {
            return Err(invalid(index, "expected a JSON object"));
        };

        match fields.get(TITLE_FIELD) {
            Some(Value::String(_)) => {}
            Some(_) => return Err(invalid(index, "\"Title\" must be a string")),
            None => return Err(invalid(index, "missing \"Title\"")),
        }

        match fields.get(GENRE_FIELD) {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(_) => return Err(invalid(index, "\"Genre\" must be a string or null")),
        }

        if let Some(tags) = fields.get(TAGS_FIELD) {
            let all_strings = tags
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string));
            if !all_strings {
                return Err(invalid(index, "\"Tags\" must be an array of strings"));
            }
        }

        Ok(BookRecord { fields })
    }

    pub fn title(&self) -> &str {
        self.fields
            .get(TITLE_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn has_genre(&self) -> bool {
        self.fields.contains_key(GENRE_FIELD)
    }

    /// Genre text; `None` when the field is absent or null.
    pub fn genre(&self) -> Option<&str> {
        self.fields.get(GENRE_FIELD).and_then(Value::as_str)
    }

    /// Current tags, or `None` when the record has no `Tags` field.
    pub fn tags(&self) -> Option<Vec<String>> {
        let items = self.fields.get(TAGS_FIELD)?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.fields.insert(
            TAGS_FIELD.to_string(),
            Value::Array(tags.into_iter().map(Value::String).collect()),
        );
    }

    /// Replace `Genre` with `Tags`. `Tags` goes to the end of the record unless
    /// it already existed, and the remaining fields keep their order.
    pub fn replace_genre_with_tags(&mut self, tags: Vec<String>) {
        self.set_tags(tags);
        self.fields.shift_remove(GENRE_FIELD);
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

fn invalid(index: usize, message: &str) -> ShelftagError {
    ShelftagError::InvalidRecord {
        index,
        message: message.to_string(),
    }
}

/// The whole document: an ordered list of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bookshelf {
    pub books: Vec<BookRecord>,
}

impl Bookshelf {
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Array(items) = value else {
            return Err(ShelftagError::InvalidBookshelf(
                "top-level value must be an array of book records".to_string(),
            ));
        };

        let books = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| BookRecord::from_value(index, item))
            .collect::<Result<Vec<_>>>()?;

        Ok(Bookshelf { books })
    }

    pub fn into_value(self) -> Value {
        Value::Array(self.books.into_iter().map(BookRecord::into_value).collect())
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
