//! Fakelab CLI - Deterministic synthetic lab reports
//!
//! # Commands
//!
//! - `fakelab generate --report-number <N>` - Generate one report
//! - `fakelab batch --start <N> --count <K>` - Summarise a run of reports
//! - `fakelab panels` - List available panels
//!
//! Reports go to stdout; logs go to stderr.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use service_cli::commands::{self, OutputFormat};
use service_cli::config::{build_config, CliArgs, LogLevel};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Synthetic lab report generator
#[derive(Parser)]
#[command(name = "fakelab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./fakelab.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Probability that a two-sided measurement lands inside its range
    #[arg(short, long, global = true)]
    probability: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one report
    Generate {
        /// Report number; the same number always yields the same values
        #[arg(short, long)]
        report_number: u64,

        /// Panel name (defaults to the configured panel)
        #[arg(long)]
        panel: Option<String>,

        /// Force a measurement to a value, e.g. `Sodium=162`
        #[arg(short = 'o', long = "override", value_name = "NAME=VALUE")]
        overrides: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Generate consecutive report numbers and summarise them
    Batch {
        /// First report number
        #[arg(short, long, default_value = "0")]
        start: u64,

        /// Number of reports
        #[arg(short = 'n', long, default_value = "1000")]
        count: u64,

        /// Panel name (defaults to the configured panel)
        #[arg(long)]
        panel: Option<String>,

        /// Output format; csv prints every row instead of the summary
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// List available panels
    Panels,
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_args = CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        verbose: cli.verbose,
        probability: cli.probability,
    };
    let config = build_config(&cli_args).context("Failed to build configuration")?;

    init_tracing(config.log_level);

    info!(
        log_level = %config.log_level,
        conformance_probability = config.conformance_probability,
        default_panel = %config.default_panel,
        custom_panels = config.panels.len(),
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Generate {
            report_number,
            panel,
            overrides,
            format,
        } => commands::generate::run(
            &config,
            report_number,
            panel.as_deref(),
            &overrides,
            format,
            &mut out,
        )
        .with_context(|| format!("Failed to generate report {}", report_number)),
        Commands::Batch {
            start,
            count,
            panel,
            format,
        } => commands::batch::run(&config, start, count, panel.as_deref(), format, &mut out)
            .context("Failed to generate batch"),
        Commands::Panels => {
            commands::panels::run(&config, &mut out).context("Failed to list panels")
        }
    }
}
