//! tripview - LeafSpy log inspector
//!
//! Usage:
//!   tripview summary <FILE>     Summarize a trip log
//!   tripview dump <FILE>        Print each trip log record as one JSON line
//!   tripview history <FILE>     List the trips of a trip history export
//!
//! The import configuration (source units and delimiter) is read from
//! `--config`, else `<config dir>/tripview/import.json`, else defaults.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use tripview_core::datalog::LogFileName;
use tripview_core::prelude::*;

#[derive(Parser)]
#[command(name = "tripview", version, about = "Inspect LeafSpy trip logs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Import configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Field delimiter, overriding the configuration
    #[arg(long, global = true)]
    delimiter: Option<char>,

    /// Stop at the first row that fails to decode
    #[arg(long, global = true)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a trip log
    Summary {
        /// Trip log CSV
        file: PathBuf,
    },
    /// Print each trip log record as one JSON object per line
    Dump {
        /// Trip log CSV
        file: PathBuf,
    },
    /// List the trips of a trip history export
    History {
        /// Trip history CSV
        file: PathBuf,
    },
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tripview").join("import.json"))
}

fn load_config(path: Option<&Path>) -> Result<ImportConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                debug!("No import configuration found, using defaults");
                return Ok(ImportConfig::default());
            }
        },
    };

    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: ImportConfig = serde_json::from_str(&text)
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    debug!("Loaded import configuration from {}", path.display());
    Ok(config)
}

fn read_records<S: LogSchema>(
    file: &Path,
    config: &ImportConfig,
    strict: bool,
) -> Result<Vec<S::Record>> {
    let reader = LogReader::<S, _>::open(file, config)
        .with_context(|| format!("Failed to open {}", file.display()))?;
    let records = if strict {
        reader.read_all()
    } else {
        reader.read_valid()
    };
    records.with_context(|| format!("Failed to read {}", file.display()))
}

fn summarize(file: &Path, config: &ImportConfig, strict: bool) -> Result<()> {
    let records = read_records::<TripLogSchema>(file, config, strict)?;

    if let Some(name) = LogFileName::parse(file) {
        println!(
            "Log:        VIN ...{} on {} from {}",
            name.vin_suffix, name.date_code, name.device_id
        );
    }
    let Some(summary) = TripSummary::from_records(&records) else {
        println!("No records");
        return Ok(());
    };

    let unit = config.odometer_unit;
    let duration = summary.duration();
    println!("VIN:        {}", summary.vin);
    println!(
        "Records:    {} ({} without GPS fix)",
        summary.record_count, summary.no_fix_count
    );
    println!("Start:      {}", summary.start);
    println!("End:        {}", summary.end);
    println!(
        "Duration:   {}h {:02}m {:02}s",
        duration.num_hours(),
        duration.num_minutes() % 60,
        duration.num_seconds() % 60
    );
    println!("Odometer:   {:.1} {}", summary.odometer_distance(unit)?, unit);
    println!(
        "GPS path:   {:.2} km ({:.2} km straight line)",
        summary.path_length_meters / 1000.0,
        summary.straight_line_meters / 1000.0
    );
    println!(
        "Energy:     {} Wh used ({} -> {} Wh)",
        summary.energy_used_wh(),
        summary.start_energy_wh,
        summary.end_energy_wh
    );
    Ok(())
}

fn dump(file: &Path, config: &ImportConfig, strict: bool) -> Result<()> {
    let mut reader = TripLogReader::open(file, config)
        .with_context(|| format!("Failed to open {}", file.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for result in reader.records() {
        match result {
            Ok(record) => {
                serde_json::to_writer(&mut out, &record)?;
                writeln!(out)?;
            }
            Err(err) if !strict && err.is_row_error() => warn!("Skipping row: {}", err),
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read {}", file.display()));
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn history(file: &Path, config: &ImportConfig, strict: bool) -> Result<()> {
    let trips = read_records::<TripHistorySchema>(file, config, strict)?;
    let unit = config.odometer_unit;

    println!(
        "{:<10} {:>8} {:>10} {:>6} {:>8}",
        "Date",
        "Time",
        format!("Dist ({})", unit),
        "Gids",
        "Energy"
    );

    let mut total_distance = 0.0;
    let mut total_gids = 0;
    let mut total_energy = 0;
    for trip in &trips {
        let distance = trip.distance_in(unit)?;
        let date = trip
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<10} {:>8} {:>10.1} {:>6} {:>8}",
            date,
            trip.time.format("%H:%M").to_string(),
            distance,
            trip.gids_used(),
            trip.energy
        );
        total_distance += distance;
        total_gids += trip.gids_used();
        total_energy += trip.energy;
    }

    println!(
        "{} trips, {:.1} {}, {} Gids, {} Wh",
        trips.len(),
        total_distance,
        unit,
        total_gids,
        total_energy
    );
    Ok(())
}

/// `-v` forces debug output; otherwise `RUST_LOG` applies, defaulting to warnings
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(io::stderr)
        .init();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(delimiter) = cli.delimiter {
        config.delimiter = delimiter;
    }

    match &cli.command {
        Commands::Summary { file } => summarize(file, &config, cli.strict),
        Commands::Dump { file } => dump(file, &config, cli.strict),
        Commands::History { file } => history(file, &config, cli.strict),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("import.json");
        fs::write(&path, r#"{ "elevation_unit": "meter", "delimiter": ";" }"#).unwrap();

        let config = load_config(Some(path.as_path())).unwrap();
        assert_eq!(config.elevation_unit, DistanceUnit::Meter);
        assert_eq!(config.delimiter, ';');
        assert_eq!(config.speed_unit, DistanceUnit::Miles);
    }

    #[test]
    fn test_load_config_reports_bad_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("import.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().starts_with("Invalid config"));
    }

    #[test]
    fn test_verbose_filter_enables_debug() {
        assert_eq!(log_filter(true).to_string(), "debug");
    }

    #[test]
    fn test_cli_parses_global_flags() {
        let cli = Cli::try_parse_from([
            "tripview",
            "summary",
            "trip.csv",
            "--strict",
            "--delimiter",
            ";",
        ])
        .unwrap();
        assert!(cli.strict);
        assert_eq!(cli.delimiter, Some(';'));
        assert!(matches!(cli.command, Commands::Summary { ref file } if file == Path::new("trip.csv")));
    }
}
