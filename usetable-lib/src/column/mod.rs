//! Column definitions.
//!
//! A [`ColumnDef`] says how one column extracts its value from a row
//! (an accessor key or an accessor function), what its header shows and how
//! its cells render.
//!
//! # Example
//!
//! ```
//! use usetable_lib::column::ColumnDef;
//! use usetable_lib::model::Value;
//!
//! let columns = vec![
//!     ColumnDef::key("displayName").id("displayName").header("Name"),
//!     ColumnDef::accessor(|row| row.get("make").cloned().unwrap_or_default())
//!         .id("make")
//!         .header_fn(|args| {
//!             let arrow = if args.is_sorted_by { " *" } else { "" };
//!             Value::from(format!("Make{arrow}"))
//!         }),
//! ];
//! ```

mod resolve;
mod spec;

use std::fmt;
use std::sync::Arc;

pub use resolve::resolve_value;
pub use spec::ColumnSpec;
pub use spec::infer_columns;

use crate::model::Row;
use crate::model::Value;
use crate::sort::Direction;

/// Extracts a value from a row.
pub type AccessorFn = Arc<dyn Fn(&Row) -> Value + Send + Sync>;

/// Produces header content from the current sort state.
pub type HeaderFn = Arc<dyn Fn(&HeaderArgs) -> Value + Send + Sync>;

/// Produces cell content from a resolved value.
pub type CellFn = Arc<dyn Fn(&Value) -> Value + Send + Sync>;

/// How a column reads its value from a row.
#[derive(Clone)]
pub enum Accessor {
    /// Shallow field lookup by key.
    Key(String),
    /// Arbitrary extraction from the whole row.
    Fn(AccessorFn),
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.debug_tuple("Key").field(key).finish(),
            Self::Fn(_) => f.write_str("Fn(..)"),
        }
    }
}

/// Column header: fixed text or a function of the sort state.
#[derive(Clone)]
pub enum Header {
    Text(String),
    Fn(HeaderFn),
}

impl fmt::Debug for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Fn(_) => f.write_str("Fn(..)"),
        }
    }
}

/// Arguments passed to a header function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderArgs {
    /// Whether the table is currently sorted by this column.
    pub is_sorted_by: bool,
    /// Direction of the active sort, if any.
    pub sort_order: Option<Direction>,
    /// The column id, if set.
    pub id: Option<String>,
}

/// Declarative description of one table column.
///
/// The accessor is optional so that an incomplete definition can be
/// expressed; resolving a value through one fails with
/// [`TableError::InvalidColumnDef`](crate::TableError::InvalidColumnDef).
#[derive(Clone, Default)]
pub struct ColumnDef {
    id: Option<String>,
    accessor: Option<Accessor>,
    header: Option<Header>,
    cell: Option<CellFn>,
}

impl ColumnDef {
    /// Creates a column definition with no accessor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a column that reads the given field.
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            accessor: Some(Accessor::Key(key.into())),
            ..Self::default()
        }
    }

    /// Creates a column that computes its value from the row.
    pub fn accessor<F>(f: F) -> Self
    where
        F: Fn(&Row) -> Value + Send + Sync + 'static,
    {
        Self {
            accessor: Some(Accessor::Fn(Arc::new(f))),
            ..Self::default()
        }
    }

    /// Sets the column id. Required for sorting by this column.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Replaces the accessor with a field lookup.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.accessor = Some(Accessor::Key(key.into()));
        self
    }

    /// Replaces the accessor with a function.
    pub fn with_accessor<F>(mut self, f: F) -> Self
    where
        F: Fn(&Row) -> Value + Send + Sync + 'static,
    {
        self.accessor = Some(Accessor::Fn(Arc::new(f)));
        self
    }

    /// Sets a fixed header text.
    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(Header::Text(text.into()));
        self
    }

    /// Sets a header function, invoked with the current sort state.
    pub fn header_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&HeaderArgs) -> Value + Send + Sync + 'static,
    {
        self.header = Some(Header::Fn(Arc::new(f)));
        self
    }

    /// Sets a cell function, invoked with the resolved value.
    pub fn cell<F>(mut self, f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.cell = Some(Arc::new(f));
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the column id, if set.
    pub fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the accessor, if set.
    pub fn get_accessor(&self) -> Option<&Accessor> {
        self.accessor.as_ref()
    }

    /// Returns the header, if set.
    pub fn get_header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    /// Returns the cell function, if set.
    pub fn get_cell(&self) -> Option<&CellFn> {
        self.cell.as_ref()
    }
}

impl fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("accessor", &self.accessor)
            .field("header", &self.header)
            .field("cell", &self.cell.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Supplies the column definitions for one derivation cycle.
///
/// The table calls [`column_defs`](ColumnSource::column_defs) once per
/// cycle and treats the result as fixed for that cycle.
pub trait ColumnSource {
    fn column_defs(&self) -> Vec<ColumnDef>;
}

impl<F> ColumnSource for F
where
    F: Fn() -> Vec<ColumnDef>,
{
    fn column_defs(&self) -> Vec<ColumnDef> {
        self()
    }
}
