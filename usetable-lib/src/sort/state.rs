//! Sort state and the toggle transition.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de;
use serde::ser::SerializeMap;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9, oldest first).
    Asc,
    /// Descending order (Z-A, 9-0, newest first).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active sort: one column id and a direction.
///
/// Serializes as a single-entry map, e.g. `{"make": "asc"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortBy {
    pub column_id: String,
    pub direction: Direction,
}

impl SortBy {
    /// Creates an ascending sort on a column.
    pub fn asc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending sort on a column.
    pub fn desc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: Direction::Desc,
        }
    }
}

impl Serialize for SortBy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.column_id, &self.direction)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for SortBy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = HashMap::<String, Direction>::deserialize(deserializer)?;
        if map.len() != 1 {
            return Err(de::Error::invalid_length(map.len(), &"exactly one sort entry"));
        }
        let (column_id, direction) = map
            .into_iter()
            .next()
            .ok_or_else(|| de::Error::invalid_length(0, &"exactly one sort entry"))?;
        Ok(Self {
            column_id,
            direction,
        })
    }
}

/// Computes the sort that results from clicking `column_id`.
///
/// A column that is not the active one always enters ascending. Clicking the
/// active column flips its direction. There is no transition back to
/// unsorted.
pub fn toggle(current: Option<&SortBy>, column_id: &str) -> SortBy {
    match current {
        Some(sort) if sort.column_id == column_id => SortBy {
            column_id: column_id.to_string(),
            direction: sort.direction.reversed(),
        },
        _ => SortBy::asc(column_id),
    }
}

/// Holder for the optional active sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    current: Option<SortBy>,
}

impl SortState {
    /// Creates an unsorted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active sort, if any.
    pub fn current(&self) -> Option<&SortBy> {
        self.current.as_ref()
    }

    /// Applies [`toggle`] and returns the new active sort.
    pub fn toggle(&mut self, column_id: &str) -> &SortBy {
        let next = toggle(self.current.as_ref(), column_id);
        self.current.insert(next)
    }

    /// Replaces the active sort.
    pub fn set(&mut self, sort: Option<SortBy>) {
        self.current = sort;
    }

    /// Returns to unsorted.
    pub fn clear(&mut self) {
        self.current = None;
    }
}
