//! TableError for column resolution, sorting and row conversion

/// Errors raised while resolving, sorting or deriving table content.
///
/// None of these are recovered internally. A failure aborts the current
/// derivation cycle and the previous view stays in place.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    /// The column definition cannot produce a usable value.
    #[error("Invalid column definition '{column}': {reason}")]
    InvalidColumnDef { column: String, reason: String },

    /// The accessor key is not present on the row.
    #[error("Field '{field}' not found in row")]
    MissingField { field: String },

    /// The row input is not a keyed record.
    #[error("Row type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
}

impl TableError {
    /// Creates a new invalid column definition error.
    pub fn invalid_column(column: Option<&str>, reason: impl Into<String>) -> Self {
        Self::InvalidColumnDef {
            column: column.unwrap_or("<unnamed>").to_string(),
            reason: reason.into(),
        }
    }

    /// Creates a new missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates a new type mismatch error.
    pub fn type_mismatch(expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch { expected, actual }
    }
}
