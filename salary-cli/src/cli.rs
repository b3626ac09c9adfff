use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::utils::parse_amount;

/// Net monthly salary calculator for Argentina (tax year 2024).
///
/// Applies the pension, health insurance and PAMI withholdings and the
/// progressive income tax to a gross monthly salary.
#[derive(Debug, Parser)]
#[command(name = "sueldo", version)]
pub struct Cli {
    /// TOML config file. Defaults to `$SUELDO_CONFIG` when set.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append an uncolored copy of the log to this file.
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the breakdown for one gross monthly salary.
    Net(NetArgs),

    /// Print the 2024 income tax brackets.
    Brackets(BracketsArgs),

    /// Sample net salary against gross salary as CSV.
    Curve(CurveArgs),

    /// Calculate every gross salary in a CSV file.
    Batch(BatchArgs),

    /// Prompt for gross salaries until an empty line or `q`.
    Interactive,
}

#[derive(Debug, Args)]
pub struct NetArgs {
    /// Gross monthly salary, e.g. `1,000,000`.
    #[arg(value_parser = parse_amount, allow_negative_numbers = true)]
    pub gross: Decimal,

    /// Print the breakdown as JSON.
    #[arg(long, conflicts_with = "csv")]
    pub json: bool,

    /// Print the breakdown as CSV.
    #[arg(long)]
    pub csv: bool,
}

#[derive(Debug, Args)]
pub struct BracketsArgs {
    /// Print the brackets as CSV.
    #[arg(long)]
    pub csv: bool,

    /// Compare a bracket CSV file against the compiled-in table.
    #[arg(long, value_name = "FILE", conflicts_with = "csv")]
    pub verify: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct CurveArgs {
    /// Lowest gross salary sampled.
    #[arg(long, value_parser = parse_amount)]
    pub start: Option<Decimal>,

    /// Highest gross salary sampled.
    #[arg(long, value_parser = parse_amount)]
    pub end: Option<Decimal>,

    /// Number of evenly spaced samples, both ends included.
    #[arg(long)]
    pub points: Option<usize>,

    /// Write the CSV here instead of stdout.
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// CSV with a `gross_salary` column and an optional `label` column.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Write the results here instead of stdout.
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl NetArgs {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.csv {
            OutputFormat::Csv
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn net_accepts_thousands_separators() {
        let cli = Cli::try_parse_from(["sueldo", "net", "1,000,000", "--json"]).unwrap();

        match cli.command {
            Command::Net(args) => {
                assert_eq!(args.gross, dec!(1000000));
                assert_eq!(args.format(), OutputFormat::Json);
            }
            other => panic!("expected net command, got {other:?}"),
        }
    }

    #[test]
    fn net_rejects_negative_gross() {
        let err = Cli::try_parse_from(["sueldo", "net", "-5"]).unwrap_err();

        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn net_rejects_conflicting_formats() {
        assert!(Cli::try_parse_from(["sueldo", "net", "100", "--json", "--csv"]).is_err());
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["sueldo", "brackets", "-vv", "--config", "s.toml"]).unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("s.toml")));
    }

    #[test]
    fn curve_flags_are_optional() {
        let cli = Cli::try_parse_from(["sueldo", "curve", "--points", "10"]).unwrap();

        match cli.command {
            Command::Curve(args) => {
                assert_eq!(args.start, None);
                assert_eq!(args.points, Some(10));
            }
            other => panic!("expected curve command, got {other:?}"),
        }
    }
}
