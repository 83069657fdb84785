//! Header and cell derivation.
//!
//! Turns column definitions plus rows into the render-ready
//! [`TableView`]. Every call recomputes the whole view; nothing is patched
//! incrementally.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::column::ColumnDef;
use crate::column::Header;
use crate::column::HeaderArgs;
use crate::column::resolve_value;
use crate::error::TableError;
use crate::model::Row;
use crate::model::Value;
use crate::render::Renderable;
use crate::sort::SortBy;
use crate::sort::sort_rows;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").expect("Invalid regex pattern"));

/// One body cell: the resolved value of one column for one row.
#[derive(Debug, Clone)]
pub struct DerivedColumn {
    /// The column id, or an id generated from the row position and value.
    pub id: String,
    /// The resolved value, with null/empty replaced by the fallback.
    pub value: Value,
    /// Cell content: the column's cell function or the value itself.
    pub cell: Renderable,
}

/// One header cell.
#[derive(Debug, Clone)]
pub struct DerivedHeader {
    pub id: Option<String>,
    pub cell: Renderable,
}

/// Render-ready headers and body rows.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    pub headers: Vec<DerivedHeader>,
    /// Row-major: one inner vector of cells per row.
    pub rows: Vec<Vec<DerivedColumn>>,
}

impl TableView {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Lowercases the value's text and replaces every non-word character
/// with `_`.
pub fn normalize_id(value: &Value) -> String {
    NON_WORD
        .replace_all(&value.to_string(), "_")
        .to_lowercase()
}

/// Builds the header cells.
///
/// Columns without a header are skipped. Header functions are wrapped
/// lazily and receive whether this column is the active sort column, the
/// active direction and the column id.
pub fn derive_headers(columns: &[ColumnDef], sort_by: Option<&SortBy>) -> Vec<DerivedHeader> {
    columns
        .iter()
        .filter_map(|column| {
            let id = column.get_id().map(str::to_string);
            let cell = match column.get_header()? {
                Header::Text(text) => Renderable::Literal(Value::from(text.as_str())),
                Header::Fn(f) => {
                    let args = HeaderArgs {
                        is_sorted_by: matches!(
                            (sort_by, column.get_id()),
                            (Some(sort), Some(id)) if sort.column_id == id
                        ),
                        sort_order: sort_by.map(|sort| sort.direction),
                        id: id.clone(),
                    };
                    let f = f.clone();
                    Renderable::lazy(move || f(&args))
                }
            };
            Some(DerivedHeader { id, cell })
        })
        .collect()
}

/// Builds one body cell for `column` and `row`.
///
/// Without a column id the cell id is `{prefix_id}-{normalized value}`,
/// or `{prefix_id}-{fallback}` when the value normalizes to nothing.
/// Null or empty values, and cell functions that return nothing, are
/// replaced by `fallback`.
pub fn derive_column(
    column: &ColumnDef,
    row: &Row,
    prefix_id: &str,
    fallback: &str,
) -> Result<DerivedColumn, TableError> {
    let resolved = resolve_value(column, row)?;

    let id = match column.get_id() {
        Some(id) => id.to_string(),
        None => {
            let normalized = normalize_id(&resolved);
            if normalized.is_empty() {
                format!("{}-{}", prefix_id, fallback)
            } else {
                format!("{}-{}", prefix_id, normalized)
            }
        }
    };

    let value = if resolved.is_absent() {
        Value::from(fallback)
    } else {
        resolved.clone()
    };

    let cell = match column.get_cell() {
        Some(f) => {
            let f = f.clone();
            let fallback = fallback.to_string();
            Renderable::lazy(move || {
                let content = f(&resolved);
                if content.is_absent() {
                    Value::from(fallback.as_str())
                } else {
                    content
                }
            })
        }
        None => Renderable::Literal(value.clone()),
    };

    Ok(DerivedColumn { id, value, cell })
}

/// Derives headers and the R x C grid of body cells, in row order.
///
/// Cells are prefixed with `{row}-{column}`. The first error aborts the
/// whole derivation.
pub fn derive_view(
    rows: &[Row],
    columns: &[ColumnDef],
    sort_by: Option<&SortBy>,
    fallback: &str,
) -> Result<TableView, TableError> {
    let body = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            columns
                .iter()
                .enumerate()
                .map(|(j, column)| derive_column(column, row, &format!("{}-{}", i, j), fallback))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    let headers = derive_headers(columns, sort_by);

    debug!(
        "[derive] {} rows x {} columns, {} headers",
        body.len(),
        columns.len(),
        headers.len()
    );

    Ok(TableView {
        headers,
        rows: body,
    })
}

/// Sorts `rows` by `sort_by` (if any) and derives the view.
///
/// This is the whole pipeline to run whenever the rows, the columns or the
/// sort change.
pub fn derive_table(
    rows: &[Row],
    columns: &[ColumnDef],
    sort_by: Option<&SortBy>,
    fallback: &str,
) -> Result<TableView, TableError> {
    match sort_by {
        Some(sort) => derive_view(&sort_rows(rows, columns, sort)?, columns, sort_by, fallback),
        None => derive_view(rows, columns, None, fallback),
    }
}
