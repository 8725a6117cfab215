//! Tracker CLI - Command-line interface for the fitness tracker
//!
//! Commands:
//! - summarize: Summarize a single workout given on the command line
//! - transform: Process a file of workout packages (batch mode)
//! - demo: Process the reference sample packages
//! - types: List the registered workout types and their fields

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use fitness_tracker::schema::sample_packages;
use fitness_tracker::{
    ComputeError, Language, PackageOutcome, PackageReader, ProcessorConfig, WorkoutPackage,
    WorkoutProcessor, TRACKER_VERSION,
};

/// Tracker - Workout metrics from raw sensor packages
#[derive(Parser)]
#[command(name = "tracker")]
#[command(author = "Synheart AI Inc")]
#[command(version = TRACKER_VERSION)]
#[command(about = "Compute distance, speed and calories for workouts", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a single workout
    Summarize {
        /// Workout code (RUN, WLK, SWM)
        workout_type: String,

        /// Comma-separated sensor values in the workout's field order
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
        data: Vec<f64>,

        /// Report language
        #[arg(long, default_value = "en")]
        language: LanguageArg,

        /// Output the summary as JSON (`null` for an unknown workout code)
        #[arg(long)]
        json: bool,
    },

    /// Process a file of workout packages (batch mode)
    Transform {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long)]
        output: PathBuf,

        /// Input format
        #[arg(long, default_value = "ndjson")]
        input_format: InputFormat,

        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,

        /// Report language
        #[arg(long, default_value = "en")]
        language: LanguageArg,

        /// Report failing packages and continue instead of stopping
        #[arg(long)]
        keep_going: bool,
    },

    /// Process the reference sample packages
    Demo {
        /// Output format
        #[arg(long, default_value = "text")]
        output_format: OutputFormat,

        /// Report language
        #[arg(long, default_value = "en")]
        language: LanguageArg,
    },

    /// List registered workout types
    Types {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// Newline-delimited JSON (one package per line)
    Ndjson,
    /// JSON array of packages
    Json,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// One report line per package
    Text,
    /// Newline-delimited JSON (one outcome per line)
    Ndjson,
    /// JSON array of outcomes
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

#[derive(Clone, Copy, ValueEnum)]
enum LanguageArg {
    En,
    Ru,
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::En => Language::En,
            LanguageArg::Ru => Language::Ru,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", serde_json::to_string(&CliError::from(e)).unwrap_or_else(|_| "Unknown error".to_string()));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), TrackerCliError> {
    match cli.command {
        Commands::Summarize {
            workout_type,
            data,
            language,
            json,
        } => cmd_summarize(&workout_type, data, language.into(), json),

        Commands::Transform {
            input,
            output,
            input_format,
            output_format,
            language,
            keep_going,
        } => {
            let config = ProcessorConfig {
                language: language.into(),
                keep_going,
            };
            cmd_transform(&input, &output, input_format, output_format, config)
        }

        Commands::Demo {
            output_format,
            language,
        } => {
            let config = ProcessorConfig {
                language: language.into(),
                keep_going: false,
            };
            cmd_demo(output_format, config)
        }

        Commands::Types { json } => cmd_types(json),
    }
}

fn cmd_summarize(
    workout_type: &str,
    data: Vec<f64>,
    language: Language,
    json: bool,
) -> Result<(), TrackerCliError> {
    let processor = WorkoutProcessor::with_config(ProcessorConfig {
        language,
        keep_going: false,
    });
    let package = WorkoutPackage::new(workout_type, data);

    if json {
        println!("{}", summary_json(&processor, &package)?);
    } else {
        println!("{}", processor.process(&package)?);
    }

    Ok(())
}

/// Pretty JSON of one package's summary; `null` for an unknown workout code
fn summary_json(
    processor: &WorkoutProcessor,
    package: &WorkoutPackage,
) -> Result<String, TrackerCliError> {
    let summary = processor.summarize(package)?;
    Ok(serde_json::to_string_pretty(&summary)?)
}

fn cmd_transform(
    input: &Path,
    output: &Path,
    input_format: InputFormat,
    output_format: OutputFormat,
    config: ProcessorConfig,
) -> Result<(), TrackerCliError> {
    // Read input
    let input_data = if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    let packages = match input_format {
        InputFormat::Ndjson => PackageReader::parse_ndjson(&input_data)?,
        InputFormat::Json => PackageReader::parse_array(&input_data)?,
    };

    if packages.is_empty() {
        return Err(TrackerCliError::NoPackages);
    }
    debug!(packages = packages.len(), "read workout packages");

    let outcomes = WorkoutProcessor::with_config(config).process_all(&packages)?;
    let output_data = format_output(&outcomes, &output_format)?;

    if output.to_string_lossy() == "-" {
        print!("{}", output_data);
    } else {
        fs::write(output, output_data)?;
        info!(path = %output.display(), outcomes = outcomes.len(), "wrote workout reports");
    }

    Ok(())
}

fn cmd_demo(output_format: OutputFormat, config: ProcessorConfig) -> Result<(), TrackerCliError> {
    let outcomes = WorkoutProcessor::with_config(config).process_all(&sample_packages())?;
    print!("{}", format_output(&outcomes, &output_format)?);
    Ok(())
}

fn cmd_types(json: bool) -> Result<(), TrackerCliError> {
    let processor = WorkoutProcessor::new();
    let registry = processor.registry();

    let types: Vec<WorkoutTypeInfo> = registry
        .codes()
        .into_iter()
        .filter_map(|code| {
            registry.get(code).map(|entry| WorkoutTypeInfo {
                code: code.to_string(),
                name: entry.name.to_string(),
                fields: entry.fields.iter().map(|f| f.to_string()).collect(),
            })
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&types)?);
    } else {
        println!("Workout Types");
        println!("=============");
        for info in &types {
            println!("  {}  {:<14} [{}]", info.code, info.name, info.fields.join(", "));
        }
    }

    Ok(())
}

// Helper functions

fn format_output(outcomes: &[PackageOutcome], format: &OutputFormat) -> Result<String, TrackerCliError> {
    match format {
        OutputFormat::Text => {
            let lines: Vec<&str> = outcomes.iter().map(|o| o.message.as_str()).collect();
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::Ndjson => {
            let mut lines: Vec<String> = Vec::new();
            for outcome in outcomes {
                lines.push(serde_json::to_string(outcome)?);
            }
            Ok(lines.join("\n") + "\n")
        }
        OutputFormat::Json => Ok(serde_json::to_string(outcomes)?),
        OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(outcomes)?),
    }
}

// Error types

#[derive(Debug)]
enum TrackerCliError {
    Io(io::Error),
    Compute(ComputeError),
    Json(serde_json::Error),
    NoPackages,
}

impl From<io::Error> for TrackerCliError {
    fn from(e: io::Error) -> Self {
        TrackerCliError::Io(e)
    }
}

impl From<ComputeError> for TrackerCliError {
    fn from(e: ComputeError) -> Self {
        TrackerCliError::Compute(e)
    }
}

impl From<serde_json::Error> for TrackerCliError {
    fn from(e: serde_json::Error) -> Self {
        TrackerCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<TrackerCliError> for CliError {
    fn from(e: TrackerCliError) -> Self {
        match e {
            TrackerCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            TrackerCliError::Compute(e @ ComputeError::ArityMismatch { .. }) => CliError {
                code: "ARITY_MISMATCH".to_string(),
                message: e.to_string(),
                hint: Some("Run 'tracker types' for each workout's field order".to_string()),
            },
            TrackerCliError::Compute(e @ ComputeError::ZeroDuration(_)) => CliError {
                code: "ZERO_DURATION".to_string(),
                message: e.to_string(),
                hint: Some("Duration must be non-zero".to_string()),
            },
            TrackerCliError::Compute(e @ ComputeError::ZeroHeight(_)) => CliError {
                code: "ZERO_HEIGHT".to_string(),
                message: e.to_string(),
                hint: Some("Height must be non-zero".to_string()),
            },
            TrackerCliError::Compute(e) => CliError {
                code: "PARSE_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Ensure each package is {\"workout_type\": ..., \"data\": [...]}".to_string()),
            },
            TrackerCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
            TrackerCliError::NoPackages => CliError {
                code: "NO_PACKAGES".to_string(),
                message: "No workout packages found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
        }
    }
}

// Report types

#[derive(serde::Serialize)]
struct WorkoutTypeInfo {
    code: String,
    name: String,
    fields: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_json_unknown_workout_is_null() {
        let processor = WorkoutProcessor::new();
        let package = WorkoutPackage::new("SMTH", vec![9.0, 1.0, 90.0, 180.0]);

        assert_eq!(summary_json(&processor, &package).unwrap(), "null");
    }

    #[test]
    fn test_summary_json_known_workout() {
        let processor = WorkoutProcessor::new();
        let package = WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]);
        let json = summary_json(&processor, &package).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["training_type"], "Running");
        assert_eq!(value["distance_km"], 9.75);
    }

    #[test]
    fn test_summary_json_zero_height_is_an_error() {
        let processor = WorkoutProcessor::new();
        let package = WorkoutPackage::new("WLK", vec![9000.0, 1.0, 75.0, 0.0]);

        assert!(matches!(
            summary_json(&processor, &package),
            Err(TrackerCliError::Compute(ComputeError::ZeroHeight(_)))
        ));
    }
}
