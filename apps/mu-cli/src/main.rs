mod error;

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use error::{CliError, CliResult};
use mu_measure::{ConversionJob, Measure, Measurement, RawMeasurement, Units};
use mu_tables::{TableDefinition, build_tables, build_tables_with};
use tracing::info;

#[derive(Parser)]
#[command(name = "mu")]
#[command(about = "Parse unit expressions and convert measurements", long_about = None)]
struct Cli {
    /// YAML file of extra prefixes and symbols layered over the SI tables
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a unit expression
    Parse {
        /// Quantity to attach to the unit
        #[arg(allow_hyphen_values = true)]
        quantity: f64,
        /// Unit text; omit for a dimensionless value
        #[arg(default_value = "")]
        unit: String,
    },
    /// Multiply measurements and express the product in a target unit
    Convert {
        /// Target unit text (e.g. "mg/L")
        target: String,
        /// Measurements as <quantity>[:<unit>] (e.g. 3:g)
        #[arg(required = true, allow_hyphen_values = true, value_parser = parse_measurement_arg)]
        measurements: Vec<RawMeasurement>,
    },
    /// Invert a measurement
    Reciprocal {
        /// Measurement as <quantity>[:<unit>]
        #[arg(allow_hyphen_values = true, value_parser = parse_measurement_arg)]
        measurement: RawMeasurement,
    },
    /// List prefixes and symbols in lookup order
    Tables,
    /// Run a YAML or JSON list of conversion jobs
    Batch {
        /// Path to the jobs file
        path: PathBuf,
    },
}

/// Printable form of a resolved measurement.
#[derive(Serialize)]
struct MeasureReport<'a> {
    value: f64,
    unit: &'a str,
    dimensions: String,
    scale: i32,
}

impl<'a> From<&'a Measure> for MeasureReport<'a> {
    fn from(m: &'a Measure) -> Self {
        Self {
            value: m.value(),
            unit: m.unit(),
            dimensions: m.parsed().product().to_string(),
            scale: m.parsed().scale,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum BatchOutcome {
    Ok(RawMeasurement),
    Error(String),
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let units = load_units(cli.tables.as_deref())?;

    match cli.command {
        Commands::Parse { quantity, unit } => cmd_parse(&units, quantity, &unit, cli.json),
        Commands::Convert {
            target,
            measurements,
        } => cmd_convert(&units, &target, &measurements, cli.json),
        Commands::Reciprocal { measurement } => cmd_reciprocal(&units, &measurement, cli.json),
        Commands::Tables => cmd_tables(&units, cli.json),
        Commands::Batch { path } => cmd_batch(&units, &path),
    }
}

fn load_units(extra: Option<&Path>) -> CliResult<Units> {
    let tables = match extra {
        Some(path) => {
            info!(path = %path.display(), "loading extra unit tables");
            build_tables_with(&TableDefinition::load(path)?)?
        }
        None => build_tables()?,
    };
    Ok(Units::new(Arc::new(tables)))
}

/// `<quantity>[:<unit>]`; the unit may itself be empty.
fn parse_measurement_arg(arg: &str) -> Result<RawMeasurement, String> {
    let (quantity, unit) = arg.split_once(':').unwrap_or((arg, ""));
    let value = quantity
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid quantity {quantity:?}: {e}"))?;
    Ok(RawMeasurement::new(value, unit))
}

fn print_measure(m: &Measure, json: bool) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&MeasureReport::from(m))?);
    } else {
        println!("{m}");
        println!("  dimensions: {}", m.parsed().product());
        println!("  scale:      1e{}", m.parsed().scale);
    }
    Ok(())
}

fn cmd_parse(units: &Units, quantity: f64, unit: &str, json: bool) -> CliResult<()> {
    let m = units.parse(quantity, unit)?;
    print_measure(&m, json)
}

fn cmd_convert(
    units: &Units,
    target: &str,
    measurements: &[RawMeasurement],
    json: bool,
) -> CliResult<()> {
    let inputs: Vec<&dyn Measurement> = measurements
        .iter()
        .map(|m| m as &dyn Measurement)
        .collect();
    let m = units.convert(target, &inputs)?;
    print_measure(&m, json)
}

fn cmd_reciprocal(units: &Units, measurement: &RawMeasurement, json: bool) -> CliResult<()> {
    let m = units.reciprocal(measurement)?;
    print_measure(&m, json)
}

#[derive(Serialize)]
struct TableListing<'a> {
    prefixes: Vec<(&'a str, i32)>,
    symbols: Vec<(&'a str, String, i32)>,
}

fn cmd_tables(units: &Units, json: bool) -> CliResult<()> {
    let tables = units.tables();

    if json {
        let listing = TableListing {
            prefixes: tables
                .prefixes()
                .iter()
                .map(|p| (p.key.as_str(), p.scale))
                .collect(),
            symbols: tables
                .symbols()
                .iter()
                .map(|s| (s.key.as_str(), s.unit.product().to_string(), s.unit.scale))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("Prefixes:");
    for p in tables.prefixes() {
        println!(
            "  {:<4} 1e{:<4} {}",
            p.key,
            p.scale,
            p.name.as_deref().unwrap_or("")
        );
    }
    println!("Symbols:");
    for s in tables.symbols() {
        println!(
            "  {:<4} 1e{:<4} {:<24} {}",
            s.key,
            s.unit.scale,
            s.unit.product().to_string(),
            s.name.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn cmd_batch(units: &Units, path: &Path) -> CliResult<()> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::BatchRead {
        path: path.to_path_buf(),
        source,
    })?;
    // JSON is valid YAML, so one reader covers both.
    let jobs: Vec<ConversionJob> = serde_yaml::from_str(&text)?;
    info!(jobs = jobs.len(), "running batch");

    let outcomes: Vec<BatchOutcome> = units
        .convert_batch(&jobs)
        .into_iter()
        .map(|result| match result {
            Ok(m) => BatchOutcome::Ok(m.into()),
            Err(e) => BatchOutcome::Error(e.to_string()),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&outcomes)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn measurement_arg_forms() {
        assert_eq!(
            parse_measurement_arg("3:g").unwrap(),
            RawMeasurement::new(3.0, "g")
        );
        assert_eq!(
            parse_measurement_arg("-1.5:m/s").unwrap(),
            RawMeasurement::new(-1.5, "m/s")
        );
        assert_eq!(parse_measurement_arg("2").unwrap(), RawMeasurement::new(2.0, ""));
        assert!(parse_measurement_arg("x:g").is_err());
    }

    #[test]
    fn convert_command_parses() {
        let cli = Cli::try_parse_from(["mu", "--json", "convert", "mg/L", "3:g", "2:L^-1"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Convert {
                target,
                measurements,
            } => {
                assert_eq!(target, "mg/L");
                assert_eq!(measurements.len(), 2);
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn extra_tables_are_loaded() {
        let dir = std::env::temp_dir().join(format!("mu-cli-tables-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("extra.yaml");
        std::fs::write(
            &path,
            "symbols:\n  - key: bar\n    dims: { mass: 1, length: -1, time: -2 }\n    scale: 8\n",
        )
        .unwrap();

        let units = load_units(Some(&path)).unwrap();
        let m = units.parse(1.0, "mbar").unwrap();
        assert_eq!(m.parsed().scale, 5);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_tables_file_is_fatal() {
        let err = load_units(Some(Path::new("/nonexistent/mu-tables.yaml"))).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
