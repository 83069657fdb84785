//! Table configuration

/// Default content for null or empty cells.
pub const DEFAULT_FALLBACK: &str = "--";

/// Default element attribute that marks a sort trigger.
pub const DEFAULT_SORT_ATTRIBUTE: &str = "data-usetable-sort";

/// Configuration for a [`Table`](crate::Table).
///
/// # Example
///
/// ```
/// use usetable_lib::TableConfig;
///
/// let config = TableConfig::default()
///     .with_fallback("n/a")
///     .with_sort_attribute("data-sort");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Content that replaces null or empty values.
    ///
    /// Default: `"--"`
    pub fallback: String,

    /// Attribute name the click adapter reads the column id from.
    ///
    /// Default: `"data-usetable-sort"`
    pub sort_attribute: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_FALLBACK.to_string(),
            sort_attribute: DEFAULT_SORT_ATTRIBUTE.to_string(),
        }
    }
}

impl TableConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fallback content.
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Sets the sort attribute name.
    pub fn with_sort_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.sort_attribute = attribute.into();
        self
    }
}
