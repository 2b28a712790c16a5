//! MCH Benchmark Report CLI
//!
//! Command-line entry point run as a CI step after the benchmark harness.
//! It resolves inputs from flags, environment variables and an optional
//! config file, then uses the mch-report library to:
//! - Load the results document
//! - Render the results table, timing diagram and metadata table
//! - Append the report to the GitHub step summary

use anyhow::{bail, Context, Result};
use clap::Parser;
use mch_report::{append_report, Reporter, ResultsDocument};
use std::path::PathBuf;

mod config;

use config::AppConfig;

/// MCH Benchmark Report - Render benchmark results into a step summary
#[derive(Parser, Debug)]
#[command(name = "mch-report")]
#[command(about = "Render MCH benchmark results into a GitHub step summary", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the results document written by the harness
    #[arg(short, long, value_name = "FILE")]
    results: Option<PathBuf>,

    /// Revision the benchmarks ran against (used for source links)
    #[arg(long, env = "GITHUB_SHA", value_name = "SHA")]
    sha: String,

    /// Step summary file to append the report to
    #[arg(short, long, env = "GITHUB_STEP_SUMMARY", value_name = "FILE")]
    summary: Option<PathBuf>,

    /// Directory containing the `worlds/` tree
    #[arg(long, value_name = "DIR")]
    source_root: Option<PathBuf>,

    /// Repository URL used for source links
    #[arg(long, value_name = "URL")]
    repository_url: Option<String>,

    /// Path to configuration file (mch-report.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the report to stdout instead of appending it to the summary
    #[arg(long)]
    print: bool,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

/// Where the rendered report goes
#[derive(Debug, Clone, PartialEq, Eq)]
enum Destination {
    Stdout,
    Summary(PathBuf),
}

/// Apply command-line overrides on top of the file configuration
fn resolve(args: &Args, mut config: AppConfig) -> Result<(AppConfig, Destination)> {
    if let Some(results) = &args.results {
        config.input.results = results.clone();
    }
    if let Some(root) = &args.source_root {
        config.report.source_root = root.clone();
    }
    if let Some(url) = &args.repository_url {
        config.report.repository_url = url.clone();
    }

    let destination = if args.print {
        Destination::Stdout
    } else if let Some(summary) = args.summary.clone().or_else(|| config.output.summary.clone()) {
        Destination::Summary(summary)
    } else {
        bail!(
            "No step summary file: pass --summary, set {} or use --print",
            mch_report::STEP_SUMMARY_ENV
        );
    };

    Ok((config, destination))
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("MCH Report CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using report library v{}", mch_report::VERSION);

    let file_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };
    let (config, destination) = resolve(&args, file_config)?;

    let document = ResultsDocument::load(&config.input.results)
        .with_context(|| format!("Failed to load results: {:?}", config.input.results))?;

    let reporter = Reporter::new(config.report);
    let report = reporter
        .render(&document, &args.sha)
        .context("Failed to render report")?;

    match destination {
        Destination::Stdout => println!("{}", report),
        Destination::Summary(path) => append_report(&path, &report)
            .with_context(|| format!("Failed to append report to {:?}", path))?,
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
