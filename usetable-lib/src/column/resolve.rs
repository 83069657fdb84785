//! Value resolution from a column definition.

use super::Accessor;
use super::ColumnDef;
use crate::error::TableError;
use crate::model::Row;
use crate::model::Value;

/// Extracts the column's value from a row.
///
/// - key accessor: the field value, or [`TableError::MissingField`] if the
///   row has no such field
/// - function accessor: whatever the function returns
/// - no accessor: [`TableError::InvalidColumnDef`]
pub fn resolve_value(column: &ColumnDef, row: &Row) -> Result<Value, TableError> {
    match column.get_accessor() {
        Some(Accessor::Key(key)) => row
            .get(key)
            .cloned()
            .ok_or_else(|| TableError::missing_field(key.as_str())),
        Some(Accessor::Fn(f)) => Ok(f(row)),
        None => Err(TableError::invalid_column(
            column.get_id(),
            "no usable accessor, set an accessor key or an accessor function",
        )),
    }
}
