//! `sensorlog` command line tool
//!
//! ```text
//! sensorlog [-v|--verbose] evaluate <FILE> [--format json|txt]
//!     [--policy <policy.json> | --preset default|strict|lenient] [--pretty] [--diagnostics]
//! sensorlog [-v|--verbose] validate <FILE> [--format json|txt]
//! ```
//!
//! Results go to stdout, logs to stderr. Library errors are printed as they
//! are and the process exits with status 1.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use sensorlog_core::errors::{INVALID_JSON_FORMAT, INVALID_TEXT_FORMAT};
use sensorlog_core::validators::decode_json_log;
use sensorlog_core::{
    is_valid_text_format, Diagnostic, EvaluationPolicy, EvaluationResult, LogError, LogEvaluator, LogFormat,
    SensorKind,
};

#[derive(Parser)]
#[command(name = "sensorlog")]
#[command(version, about = "Classify sensor reliability from calibration logs", long_about = None)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a log and print one verdict per sensor as JSON
    Evaluate {
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Input format; defaults to the file extension
        #[arg(short, long)]
        format: Option<String>,

        /// JSON policy file overriding the default limits
        #[arg(long, value_name = "POLICY", conflicts_with = "preset")]
        policy: Option<PathBuf>,

        /// Built-in limit preset
        #[arg(long, value_enum)]
        preset: Option<Preset>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Include dropped-data diagnostics in the output
        #[arg(long)]
        diagnostics: bool,
    },
    /// Check a log's structure without evaluating it
    Validate {
        #[arg(value_name = "FILE")]
        path: PathBuf,

        #[arg(short, long)]
        format: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    Default,
    Strict,
    Lenient,
}

#[derive(Serialize)]
struct Report<'a> {
    results: &'a EvaluationResult,
    diagnostics: &'a [Diagnostic],
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Evaluate { path, format, policy, preset, pretty, diagnostics } => {
            let format = resolve_format(&path, format.as_deref())?;
            let policy = load_policy(policy.as_deref(), preset)?;
            let content = read_log(&path)?;

            let start = Instant::now();
            let evaluation = LogEvaluator::new(policy).evaluate(content.as_str(), format)?;
            info!("Time taken to process the file: {:.5} seconds", start.elapsed().as_secs_f64());

            for diagnostic in &evaluation.diagnostics {
                debug!("{}", diagnostic);
            }

            let output = if diagnostics {
                let report = Report { results: &evaluation.results, diagnostics: &evaluation.diagnostics };
                to_json(&report, pretty)?
            } else {
                to_json(&evaluation.results, pretty)?
            };
            println!("{output}");
        }
        Commands::Validate { path, format } => {
            let format = resolve_format(&path, format.as_deref())?;
            let content = read_log(&path)?;
            validate(&content, format)?;
            println!("{}: valid {} log", path.display(), format);
        }
    }
    Ok(())
}

/// Explicit format, else the lower-cased file extension
fn resolve_format(path: &Path, explicit: Option<&str>) -> Result<LogFormat, LogError> {
    let tag = match explicit {
        Some(tag) => tag.to_string(),
        None => path
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase(),
    };
    debug!(format = %tag, "resolved input format");
    tag.parse()
}

fn load_policy(path: Option<&Path>, preset: Option<Preset>) -> anyhow::Result<EvaluationPolicy> {
    if let Some(path) = path {
        let policy = EvaluationPolicy::from_file(path)?;
        debug!(?policy, "loaded policy from {}", path.display());
        return Ok(policy);
    }
    Ok(match preset.unwrap_or(Preset::Default) {
        Preset::Default => EvaluationPolicy::default(),
        Preset::Strict => EvaluationPolicy::strict(),
        Preset::Lenient => EvaluationPolicy::lenient(),
    })
}

fn read_log(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("cannot read '{}'", path.display()))
}

fn validate(content: &str, format: LogFormat) -> Result<(), LogError> {
    match format {
        LogFormat::Txt if is_valid_text_format(content) => Ok(()),
        LogFormat::Txt => Err(LogError::Format(INVALID_TEXT_FORMAT.to_string())),
        LogFormat::Json => {
            let document = serde_json::from_str(content)
                .map_err(|_| LogError::Parse(INVALID_JSON_FORMAT.to_string()))?;
            let log = decode_json_log(document)?;
            for sensor in &log.sensors {
                sensor.sensor_type.parse::<SensorKind>()?;
            }
            Ok(())
        }
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
