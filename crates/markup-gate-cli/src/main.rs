// crates/markup-gate-cli/src/main.rs
// ============================================================================
// Module: Markup Gate CLI Entry Point
// Description: Command dispatcher for one-shot markup validation checks.
// Purpose: Fetch a page, run the validation round trip, and report
//          diagnostics with optional count expectations.
// Dependencies: clap, markup-gate-config, markup-gate-core,
//               markup-gate-session, tracing-subscriber
// ============================================================================

//! ## Overview
//! The CLI drives the whole gate from the command line: load the
//! configuration, fetch the target page over the bundled HTTP session,
//! submit its markup to the validation service, and print the reported
//! diagnostics. Count expectations map mismatches onto a non-zero exit
//! code so the binary slots into CI pipelines. Tool diagnostics go to
//! stderr via `tracing`; scraped validator output goes to stdout.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use markup_gate_config::ConfigError;
use markup_gate_config::MarkupGateConfig;
use markup_gate_core::CheckError;
use markup_gate_core::CountMismatch;
use markup_gate_core::SessionError;
use markup_gate_core::ValidationReport;
use markup_gate_core::ValidationSubmitter;
use markup_gate_core::WebSession;
use markup_gate_core::assert_error_count;
use markup_gate_core::assert_warning_count;
use markup_gate_session::HttpSession;
use markup_gate_session::HttpSessionConfig;
use thiserror::Error;
use tracing::info;

// ============================================================================
// SECTION: Command Line Surface
// ============================================================================

/// Markup validation gate.
#[derive(Debug, Parser)]
#[command(name = "markup-gate", version, about = "Validate page markup via an external service")]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Fetches a page and checks its markup on the validation service.
    Check(CheckArgs),
}

/// Arguments of the `check` command.
#[derive(Debug, Args)]
struct CheckArgs {
    /// URL of the page whose markup is checked.
    url: String,
    /// Path to the configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Expected error count expression ("no" or a number).
    #[arg(long, value_name = "EXPR")]
    expect_errors: Option<String>,
    /// Expected warning count expression ("no" or a number).
    #[arg(long, value_name = "EXPR")]
    expect_warnings: Option<String>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI failure surfaced to the user with a non-zero exit code.
#[derive(Debug, Error)]
enum CliError {
    /// Configuration failed to load or validate.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Session driver fault outside the validation round trip.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// The validation round trip failed.
    #[error(transparent)]
    Check(#[from] CheckError),
    /// A count expectation did not hold.
    #[error(transparent)]
    Expectation(#[from] CountMismatch),
    /// Writing CLI output failed.
    #[error("output error: {0}")]
    Output(String),
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(code) => code,
        Err(err) => {
            let _ = write_stderr_line(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

/// Initializes stderr logging from `RUST_LOG`, defaulting to `info`.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Executes the CLI command dispatcher.
fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Check(args) => run_check(&args),
    }
}

/// Runs one full check against the configured validation service.
fn run_check(args: &CheckArgs) -> Result<ExitCode, CliError> {
    let config = MarkupGateConfig::load(args.config.as_deref())?;
    let mut session = HttpSession::new(HttpSessionConfig {
        timeout_ms: config.session.timeout_ms,
        user_agent: config.session.user_agent.clone(),
        max_response_bytes: config.session.max_response_bytes,
    })?;

    info!(url = %args.url, "fetching page under test");
    session.visit(&args.url)?;
    let markup = session.page_markup()?;

    let mut report = ValidationReport::new();
    ValidationSubmitter::new(
        &mut session,
        &config.selectors,
        &config.validator.url,
        config.validator.retry,
    )
    .run(&mut report, &markup)?;

    print_report(&report)?;
    if let Some(expression) = &args.expect_errors {
        assert_error_count(expression, &report)?;
    }
    if let Some(expression) = &args.expect_warnings {
        assert_warning_count(expression, &report)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Prints the scraped diagnostics to stdout.
fn print_report(report: &ValidationReport) -> Result<(), CliError> {
    write_stdout_line(&format!(
        "errors: {}, warnings: {}",
        report.errors.len(),
        report.warnings.len()
    ))?;
    for error in &report.errors {
        write_stdout_line(&format!("error: {error}"))?;
    }
    for warning in &report.warnings {
        write_stdout_line(&format!("warning: {warning}"))?;
    }
    Ok(())
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> Result<(), CliError> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}").map_err(|err| CliError::Output(err.to_string()))
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

// ============================================================================
// SECTION: Tests
// ============================================================================
