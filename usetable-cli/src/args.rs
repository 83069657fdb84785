//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "usetable")]
#[command(about = "Print a sortable table derived from JSON rows")]
pub struct Args {
    /// JSON array of row objects
    pub rows: PathBuf,

    /// JSON array of {id, accessorKey, header} column specs
    #[arg(long)]
    pub columns: Option<PathBuf>,

    /// Toggle sorting on a column (repeat to flip direction)
    #[arg(long = "sort", value_name = "ID")]
    pub sorts: Vec<String>,

    /// Content for null or empty cells (default: --)
    #[arg(long)]
    pub fallback: Option<String>,

    /// Write debug logs to this file
    #[arg(long)]
    pub log: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_full() {
        let args = Args::try_parse_from([
            "usetable", "cars.json", "--columns", "cols.json", "--sort", "make", "--sort", "make",
            "--fallback", "n/a", "--log", "out.log",
        ])
        .unwrap();

        assert_eq!(args.rows, PathBuf::from("cars.json"));
        assert_eq!(args.columns, Some(PathBuf::from("cols.json")));
        assert_eq!(args.sorts, vec!["make", "make"]);
        assert_eq!(args.fallback.as_deref(), Some("n/a"));
        assert_eq!(args.log, Some(PathBuf::from("out.log")));
    }

    #[test]
    fn test_parse_errors() {
        let kind = |argv: &[&str]| Args::try_parse_from(argv).unwrap_err().kind();

        assert_eq!(kind(&["usetable"]), ErrorKind::MissingRequiredArgument);
        assert_eq!(kind(&["usetable", "a.json", "b.json"]), ErrorKind::UnknownArgument);
        assert_eq!(kind(&["usetable", "a.json", "--sort"]), ErrorKind::InvalidValue);
        assert_eq!(kind(&["usetable", "a.json", "--bogus"]), ErrorKind::UnknownArgument);
        assert_eq!(kind(&["usetable", "--help"]), ErrorKind::DisplayHelp);
    }
}
