use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "fishbuddy", version, about = "Fishing tips, local weather and a catch logbook")]
pub struct Cli {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current conditions at the configured location
    Weather,
    /// Show the hourly forecast
    Forecast {
        /// Latitude; without coordinates the current location is looked up first
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
    },
    /// Read or edit the catch logbook
    Log {
        #[command(subcommand)]
        action: LogCommand,
    },
    /// Show fishing tips
    Tips {
        #[arg(long, conflicts_with = "method")]
        season: Option<String>,
        #[arg(long)]
        method: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum LogCommand {
    List,
    Add(AddArgs),
    /// Delete a log by its number as shown in `log list`
    Remove { number: usize },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub bait: Option<String>,
    #[arg(long)]
    pub spot: Option<String>,
    #[arg(long)]
    pub weather: Option<String>,
    /// Catch date, YYYY-MM-DD
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub species: Option<String>,
    #[arg(long)]
    pub weight: Option<String>,
    #[arg(long)]
    pub length: Option<String>,
    #[arg(long)]
    pub gear: Option<String>,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_log_add() {
        let cli = Cli::try_parse_from([
            "fishbuddy", "log", "add", "--bait", "Worm", "--date", "2024-06-01",
        ])
        .unwrap();
        match cli.command {
            Command::Log {
                action: LogCommand::Add(args),
            } => {
                assert_eq!(args.bait.as_deref(), Some("Worm"));
                assert_eq!(args.date, NaiveDate::from_ymd_opt(2024, 6, 1));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_bad_date() {
        assert!(Cli::try_parse_from(["fishbuddy", "log", "add", "--date", "01.06.2024"]).is_err());
    }

    #[test]
    fn forecast_needs_both_coordinates() {
        assert!(Cli::try_parse_from(["fishbuddy", "forecast", "--lat", "60.1"]).is_err());
        let cli =
            Cli::try_parse_from(["fishbuddy", "forecast", "--lat", "-33.9", "--lon", "151.2"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Command::Forecast {
                lat: Some(_),
                lon: Some(_)
            }
        ));
    }

    #[test]
    fn global_config_flag() {
        let cli = Cli::try_parse_from(["fishbuddy", "tips", "--config", "/tmp/fb.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/fb.toml")));
    }
}
