//! Click adapter for sort triggers.
//!
//! The presentation layer decides what counts as a click. This module only
//! maps the clicked element's attributes to the column it should sort.

use crate::config::DEFAULT_SORT_ATTRIBUTE;

/// A request to toggle sorting on a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortEvent {
    pub column_id: String,
}

impl SortEvent {
    pub fn new(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
        }
    }

    /// Reads the column id from an element's attributes.
    ///
    /// Returns `None` when the element has no `attribute` or its value is
    /// empty.
    ///
    /// # Example
    ///
    /// ```
    /// use usetable_lib::event::SortEvent;
    ///
    /// let attrs = [("role", "button"), ("data-usetable-sort", "make")];
    /// let event = SortEvent::from_attributes(attrs, "data-usetable-sort");
    /// assert_eq!(event, Some(SortEvent::new("make")));
    /// ```
    pub fn from_attributes<I, K, V>(attributes: I, attribute: &str) -> Option<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        attributes
            .into_iter()
            .find(|(name, _)| name.as_ref() == attribute)
            .map(|(_, value)| value.as_ref().trim().to_string())
            .filter(|column_id| !column_id.is_empty())
            .map(Self::new)
    }

    /// Like [`from_attributes`](Self::from_attributes) with the default
    /// `data-usetable-sort` attribute.
    pub fn from_default_attributes<I, K, V>(attributes: I) -> Option<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::from_attributes(attributes, DEFAULT_SORT_ATTRIBUTE)
    }
}
