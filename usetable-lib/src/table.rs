//! Headless table controller.

use log::debug;
use log::trace;

use crate::column::ColumnDef;
use crate::column::ColumnSource;
use crate::config::TableConfig;
use crate::derive::DerivedColumn;
use crate::derive::DerivedHeader;
use crate::derive::TableView;
use crate::derive::derive_view;
use crate::error::TableError;
use crate::event::SortEvent;
use crate::model::Row;
use crate::sort;
use crate::sort::SortBy;
use crate::sort::SortState;
use crate::sort::sort_rows;

/// A headless table.
///
/// Owns a copy of the caller's rows, the column source, the sort state and
/// the last derived [`TableView`]. Every change (new rows, a toggle, a
/// cleared sort) runs a full cycle: fetch columns, sort, derive. A cycle
/// that fails leaves the table exactly as it was.
///
/// # Example
///
/// ```
/// use usetable_lib::{Table, TableConfig};
/// use usetable_lib::column::ColumnDef;
/// use usetable_lib::model::{Row, Value};
///
/// let rows = vec![
///     Row::new().set("name", "B"),
///     Row::new().set("name", "A"),
/// ];
/// let columns = vec![ColumnDef::key("name").id("name").header("Name")];
///
/// let mut table = Table::with_columns(rows, columns, TableConfig::default())?;
/// table.toggle_sort("name")?;
///
/// assert_eq!(table.row_groups()[0][0].value, Value::from("A"));
/// # Ok::<(), usetable_lib::TableError>(())
/// ```
pub struct Table {
    source: Box<dyn ColumnSource>,
    data: Vec<Row>,
    rows: Vec<Row>,
    sort: SortState,
    config: TableConfig,
    view: TableView,
}

impl Table {
    /// Creates a table and derives its first view.
    pub fn new(
        rows: Vec<Row>,
        source: impl ColumnSource + 'static,
        config: TableConfig,
    ) -> Result<Self, TableError> {
        let mut table = Self {
            source: Box::new(source),
            data: rows,
            rows: Vec::new(),
            sort: SortState::new(),
            config,
            view: TableView::default(),
        };
        table.refresh()?;
        Ok(table)
    }

    /// Creates a table over a fixed list of column definitions.
    pub fn with_columns(
        rows: Vec<Row>,
        columns: Vec<ColumnDef>,
        config: TableConfig,
    ) -> Result<Self, TableError> {
        Self::new(rows, move || columns.clone(), config)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the active sort, if any.
    pub fn sort_by(&self) -> Option<&SortBy> {
        self.sort.current()
    }

    /// Returns the derived header cells.
    pub fn header_groups(&self) -> &[DerivedHeader] {
        &self.view.headers
    }

    /// Returns the derived body cells, one vector per row.
    pub fn row_groups(&self) -> &[Vec<DerivedColumn>] {
        &self.view.rows
    }

    /// Returns the rows in their current display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the rows in the order they were supplied.
    pub fn data(&self) -> &[Row] {
        &self.data
    }

    /// Returns the whole derived view.
    pub fn view(&self) -> &TableView {
        &self.view
    }

    /// Returns the table configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Re-runs the derivation cycle with unchanged inputs.
    pub fn refresh(&mut self) -> Result<(), TableError> {
        let (rows, view) = self.cycle(&self.data, self.sort.current())?;
        self.rows = rows;
        self.view = view;
        Ok(())
    }

    /// Replaces the row data wholesale and re-derives under the current sort.
    pub fn set_rows(&mut self, data: Vec<Row>) -> Result<(), TableError> {
        let (rows, view) = self.cycle(&data, self.sort.current())?;
        debug!("[table] Replaced data with {} rows", data.len());
        self.data = data;
        self.rows = rows;
        self.view = view;
        Ok(())
    }

    /// Toggles the sort for `column_id` and re-derives.
    ///
    /// See [`sort::toggle`] for the transition. The new sort is kept only if
    /// the cycle succeeds.
    pub fn toggle_sort(&mut self, column_id: &str) -> Result<SortBy, TableError> {
        let next = sort::toggle(self.sort.current(), column_id);
        let (rows, view) = self.cycle(&self.data, Some(&next))?;
        trace!(
            "[table] Sort {:?} -> {} {}",
            self.sort.current(),
            next.column_id,
            next.direction
        );
        self.sort.set(Some(next.clone()));
        self.rows = rows;
        self.view = view;
        Ok(next)
    }

    /// Drops the active sort and restores the supplied row order.
    pub fn clear_sort(&mut self) -> Result<(), TableError> {
        let (rows, view) = self.cycle(&self.data, None)?;
        self.sort.clear();
        self.rows = rows;
        self.view = view;
        Ok(())
    }

    /// Applies a sort event from the presentation layer.
    pub fn handle_event(&mut self, event: &SortEvent) -> Result<SortBy, TableError> {
        self.toggle_sort(&event.column_id)
    }

    /// Applies a click on an element with the given attributes.
    ///
    /// Elements without the configured sort attribute are ignored and
    /// return `Ok(None)`.
    pub fn handle_click<I, K, V>(&mut self, attributes: I) -> Result<Option<SortBy>, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        match SortEvent::from_attributes(attributes, &self.config.sort_attribute) {
            Some(event) => self.handle_event(&event).map(Some),
            None => Ok(None),
        }
    }

    fn cycle(
        &self,
        data: &[Row],
        sort_by: Option<&SortBy>,
    ) -> Result<(Vec<Row>, TableView), TableError> {
        let columns = self.source.column_defs();
        let rows = match sort_by {
            Some(sort) => sort_rows(data, &columns, sort)?,
            None => data.to_vec(),
        };
        let view = derive_view(&rows, &columns, sort_by, &self.config.fallback)?;
        Ok((rows, view))
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("rows", &self.rows.len())
            .field("sort", &self.sort)
            .field("config", &self.config)
            .finish()
    }
}
