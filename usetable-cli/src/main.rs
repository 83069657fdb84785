//! Prints a derived table from JSON rows.

mod args;
mod error;
mod print;

use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use usetable_lib::column::{ColumnDef, ColumnSpec, infer_columns};
use usetable_lib::model::rows_from_json;
use usetable_lib::{Table, TableConfig};

use crate::args::Args;
use crate::error::CliError;

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<String, CliError> {
    if let Some(path) = &args.log {
        WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(path)?)?;
    }

    let rows = rows_from_json(read_json(&args.rows)?)?;
    let columns: Vec<ColumnDef> = match &args.columns {
        Some(path) => serde_json::from_value::<Vec<ColumnSpec>>(read_json(path)?)?
            .into_iter()
            .map(ColumnDef::from)
            .collect(),
        None => rows.first().map(infer_columns).unwrap_or_default(),
    };
    info!("Loaded {} rows, {} columns", rows.len(), columns.len());

    let mut config = TableConfig::default();
    if let Some(fallback) = args.fallback {
        config = config.with_fallback(fallback);
    }

    let mut table = Table::with_columns(rows, columns, config)?;
    for column_id in &args.sorts {
        let sort = table.toggle_sort(column_id)?;
        info!("Sorted by {} {}", sort.column_id, sort.direction);
    }

    Ok(print::format_table(table.view(), table.sort_by()))
}

fn read_json(path: &Path) -> Result<serde_json::Value, CliError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
}
