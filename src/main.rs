// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11y-audit CLI - heuristic accessibility checks for HTML files

use a11y_audit::config::{load_config, AuditConfig};
use a11y_audit::report::{generate_report, OutputFormat};
use a11y_audit::scanner;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Heuristic accessibility audit for HTML documents
#[derive(Parser)]
#[command(name = "a11y-audit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML); defaults apply when absent
    #[arg(long, global = true, default_value = ".a11y-audit.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks on a directory
    Check {
        /// Directory to scan
        dir: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Analyze a single file
    Analyze {
        /// File to analyze
        file: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,
    },

    /// Generate a SARIF report for a directory
    Report {
        /// Directory to scan
        dir: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI
    Sarif,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Sarif => OutputFormat::Sarif,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("a11y_audit=debug")
    } else {
        EnvFilter::new("a11y_audit=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config: AuditConfig = load_config(&cli.config)?;

    match cli.command {
        Commands::Check { dir, format, output } => {
            let findings = scanner::scan_directory(&dir, &config)?;
            let report = generate_report(&findings, format.into());
            write_output(&report, output.as_deref())?;

            if findings.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Analyze { file, format } => {
            let findings = scanner::scan_file(&file, &config)?;
            let report = generate_report(&findings, format.into());
            println!("{}", report);

            if findings.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Report { dir, output } => {
            let findings = scanner::scan_directory(&dir, &config)?;
            let report = generate_report(&findings, OutputFormat::Sarif);
            write_output(&report, output.as_deref())?;
        }
    }

    Ok(())
}

/// Write output to file or stdout
fn write_output(content: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            eprintln!("Report written to {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
