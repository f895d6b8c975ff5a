//! Command-line options.

use crate::charts::ChartType;
use crate::data::{DatasetSource, DateRange};
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Compare members' weight entries on one chart.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "weight-compare", version, about)]
pub struct Args {
    /// Escaped JSON payload (`{"dates": [...], "user_weights": {...}}` with `&quot;` quotes)
    #[arg(long, value_name = "FILE", conflicts_with = "entries")]
    pub payload: Option<PathBuf>,

    /// Raw member entries (.json or .csv with username,date,weight)
    #[arg(long, value_name = "FILE")]
    pub entries: Option<PathBuf>,

    /// Earliest entry date to include (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", requires = "entries")]
    pub date_min: Option<NaiveDate>,

    /// Latest entry date to include (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", requires = "entries")]
    pub date_max: Option<NaiveDate>,

    /// Initial chart type: line or bar
    #[arg(long = "type", value_name = "TYPE")]
    pub chart_type: Option<ChartType>,

    /// JSON5 configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Render the chart to this .png or .svg file and exit
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Open the exported image with the system viewer
    #[arg(long, requires = "export")]
    pub open: bool,

    /// Print the escaped payload and exit
    #[arg(long, conflicts_with = "export")]
    pub emit_payload: bool,

    /// Log level (overrides config and RUST_LOG)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Args {
    pub fn date_range(&self) -> DateRange {
        DateRange {
            min: self.date_min,
            max: self.date_max,
        }
    }

    /// Dataset requested on the command line, if any.
    pub fn source(&self) -> Option<DatasetSource> {
        if let Some(path) = &self.payload {
            return Some(DatasetSource::Payload(path.clone()));
        }
        self.entries.as_ref().map(|path| DatasetSource::Entries {
            path: path.clone(),
            range: self.date_range(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entries_with_range() {
        let args = Args::try_parse_from([
            "weight-compare",
            "--entries",
            "members.csv",
            "--date-min",
            "2021-01-01",
            "--type",
            "bar",
        ])
        .unwrap();

        assert_eq!(args.chart_type, Some(ChartType::Bar));
        assert_eq!(
            args.source(),
            Some(DatasetSource::Entries {
                path: PathBuf::from("members.csv"),
                range: DateRange {
                    min: NaiveDate::from_ymd_opt(2021, 1, 1),
                    max: None,
                },
            })
        );
        assert!(args.export.is_none());
    }

    #[test]
    fn rejects_unsupported_type() {
        let result = Args::try_parse_from(["weight-compare", "--type", "pie"]);
        assert!(result.is_err());
    }

    #[test]
    fn payload_and_entries_conflict() {
        let result = Args::try_parse_from([
            "weight-compare",
            "--payload",
            "p.txt",
            "--entries",
            "e.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn open_requires_export() {
        assert!(Args::try_parse_from(["weight-compare", "--open"]).is_err());
        let args =
            Args::try_parse_from(["weight-compare", "--export", "c.png", "--open"]).unwrap();
        assert_eq!(args.export, Some(PathBuf::from("c.png")));
        assert!(args.open);
    }
}
