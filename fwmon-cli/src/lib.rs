#![warn(missing_docs)]
//! fwmon CLI Library
//!
//! This module provides the command-line front end for the telemetry analyzers.
//! Use `fwmon::run()` (or `fwmon_cli::run()`) in a main function to get the full
//! fwmon CLI.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     fwmon_cli::run()
//! }
//! ```

mod config;
mod executor;

pub use config::*;
pub use executor::{
    LogSource, analyze_logs, build_report, build_report_meta, evaluate_all, format_human_output,
    load_logs, load_scenarios, scenarios_from_logs,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use fwmon_report::{OutputFormat, Report, generate_json_report};
use rayon::ThreadPoolBuilder;
use regex::Regex;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// fwmon CLI arguments
#[derive(Parser, Debug)]
#[command(name = "fwmon")]
#[command(author, version, about = "fwmon - firmware telemetry analysis")]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: human, json (defaults to fwmon.toml, then human)
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Configuration file (discovered from the current directory if not specified)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Number of threads for parallel analysis
    /// 0 = use all available cores (default), 1 = single-threaded
    #[arg(long, short = 'j', default_value = "0", global = true)]
    pub threads: usize,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze one or more event logs
    Analyze {
        /// Event log files (JSON arrays of events)
        #[arg(name = "LOG", required = true)]
        logs: Vec<PathBuf>,
        /// Only analyze logs whose path matches this regex
        #[arg(long)]
        filter: Option<String>,
        /// Also evaluate each analyzed log against the thresholds
        #[arg(long)]
        evaluate: bool,
        /// Build identifier attached to the report
        #[arg(long)]
        build: Option<String>,
    },
    /// Evaluate pre-aggregated scenarios against the thresholds
    Evaluate {
        /// Scenario file (JSON array of scenario records)
        #[arg(name = "SCENARIOS")]
        scenarios: PathBuf,
        /// Only evaluate scenarios whose name matches this regex
        #[arg(long)]
        filter: Option<String>,
        /// Build identifier attached to the report
        #[arg(long)]
        build: Option<String>,
    },
    /// Print a default fwmon.toml
    InitConfig,
}

/// Run the fwmon CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
/// Exits the process with status 1 when a scenario fails or a log is rejected.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the fwmon CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging
    let filter = if cli.verbose { "fwmon=debug" } else { "fwmon=info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if let Commands::InitConfig = cli.command {
        print!("{}", FwmonConfig::default_toml());
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => FwmonConfig::load(path)?,
        None => FwmonConfig::discover().unwrap_or_default(),
    };

    let format_name = cli.format.as_deref().unwrap_or(&config.output.format);
    let format: OutputFormat = format_name
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    // Configure Rayon thread pool for analysis and evaluation
    if cli.threads > 0 {
        ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .ok();
    }

    let report = build_command_report(&cli.command, &config)?;

    // Generate output
    let output = match format {
        OutputFormat::Json => generate_json_report(&report)?,
        OutputFormat::Human => format_human_output(&report),
    };

    // Write output
    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        file.write_all(output.as_bytes())?;
        eprintln!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    // Exit with appropriate code
    if report.summary.should_fail() {
        if report.summary.failed_logs > 0 {
            eprintln!("\n{} log(s) could not be analyzed", report.summary.failed_logs);
        }
        if report.summary.evaluation.has_failures() {
            eprintln!(
                "\n{} scenario(s) exceeded a threshold",
                report.summary.evaluation.failed
            );
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Execute an analysis command and build its report without printing anything.
pub fn build_command_report(command: &Commands, config: &FwmonConfig) -> anyhow::Result<Report> {
    let start_time = Instant::now();

    let (logs, scenarios, build) = match command {
        Commands::Analyze {
            logs,
            filter,
            evaluate,
            build,
        } => {
            let filter_re = compile_filter(filter.as_deref())?;
            let paths: Vec<PathBuf> = logs
                .iter()
                .filter(|path| {
                    filter_re
                        .as_ref()
                        .is_none_or(|re| re.is_match(&path.display().to_string()))
                })
                .cloned()
                .collect();

            if paths.is_empty() {
                tracing::warn!("no logs matched the filter");
            }

            let sources = load_logs(&paths)?;
            let entries = analyze_logs(&sources);
            let scenarios = if *evaluate {
                evaluate_all(&scenarios_from_logs(&entries), &config.thresholds, None)
            } else {
                Vec::new()
            };
            (entries, scenarios, build)
        }
        Commands::Evaluate {
            scenarios,
            filter,
            build,
        } => {
            let filter_re = compile_filter(filter.as_deref())?;
            let loaded = load_scenarios(scenarios)?;
            let records = evaluate_all(&loaded, &config.thresholds, filter_re.as_ref());
            (Vec::new(), records, build)
        }
        Commands::InitConfig => {
            return Err(anyhow::anyhow!("init-config does not produce a report"));
        }
    };

    let build = build.clone().or_else(|| config.run.build.clone());
    let total_duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;
    Ok(build_report(
        build_report_meta(build),
        logs,
        scenarios,
        total_duration_ms,
    ))
}

fn compile_filter(pattern: Option<&str>) -> anyhow::Result<Option<Regex>> {
    pattern
        .map(|p| Regex::new(p).with_context(|| format!("invalid filter regex: {}", p)))
        .transpose()
}
