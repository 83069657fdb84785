//! Headless table library
//!
//! Derives renderable header and body cells from row data and column
//! definitions, and sorts rows by a single click-toggled column.

pub mod column;
pub mod config;
pub mod derive;
pub mod error;
pub mod event;
pub mod model;
pub mod render;
pub mod sort;

mod table;

pub use config::TableConfig;
pub use error::TableError;
pub use table::*;
