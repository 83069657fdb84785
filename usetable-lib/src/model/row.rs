//! Dynamic table row

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use super::Value;
use super::value::json_type_name;
use crate::error::TableError;

/// A single row of table data.
///
/// Rows hold field values as a `HashMap<String, Value>`. They are owned by
/// the caller; the table only reads them and sorts copies.
///
/// # Example
///
/// ```
/// use usetable_lib::model::Row;
///
/// let row = Row::new()
///     .set("displayName", "Alex's Car")
///     .set("year", 2001i64);
///
/// assert!(row.contains("year"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    /// Creates a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a JSON object into a row.
    ///
    /// Anything other than an object fails with [`TableError::TypeMismatch`].
    pub fn from_json(json: serde_json::Value) -> Result<Self, TableError> {
        match json {
            serde_json::Value::Object(map) => Ok(Self {
                fields: map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            }),
            other => Err(TableError::type_mismatch("object", json_type_name(&other))),
        }
    }

    // =========================================================================
    // Field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the row contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns the field names in alphabetical order.
    pub fn keys_sorted(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }
}

impl TryFrom<serde_json::Value> for Row {
    type Error = TableError;

    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        Self::from_json(json)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Converts a JSON array of objects into rows.
///
/// The outer value must be an array and every element must be an object.
pub fn rows_from_json(json: serde_json::Value) -> Result<Vec<Row>, TableError> {
    match json {
        serde_json::Value::Array(items) => items.into_iter().map(Row::from_json).collect(),
        other => Err(TableError::type_mismatch("array", json_type_name(&other))),
    }
}
