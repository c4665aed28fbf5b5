//! upmkit CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Validation failure
//! - 4: Package already exists

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use upm_core::CoreError;
use upm_spec::SpecError;

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
    pub const PACKAGE_EXISTS: u8 = 4;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "upm_cli=debug,upm_core=debug,upm_spec=debug"
    } else if cli.quiet {
        "warn"
    } else {
        "upm_cli=info,upm_core=info,warn"
    };

    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let result = match cli.command {
        Commands::Create(args) => commands::create::execute(args),
        Commands::Plan(args) => commands::plan::execute(args),
        Commands::NormalizeVersion(args) => commands::normalize_version::execute(args),
        Commands::InitForm(args) => commands::init_form::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if let Some(core) = cause.downcast_ref::<CoreError>() {
            return match core {
                CoreError::MissingRequiredField { .. } => ExitCodes::VALIDATION_FAILURE,
                CoreError::PackageAlreadyExists(_) => ExitCodes::PACKAGE_EXISTS,
                CoreError::UnknownField(_)
                | CoreError::ReadOnlyField(_)
                | CoreError::PathSeparator { .. } => ExitCodes::INVALID_ARGS,
                _ => ExitCodes::GENERAL_ERROR,
            };
        }
        if let Some(spec) = cause.downcast_ref::<SpecError>() {
            return match spec {
                SpecError::UnsupportedFormat(_) | SpecError::InvalidFormat { .. } => {
                    ExitCodes::INVALID_ARGS
                }
                _ => ExitCodes::GENERAL_ERROR,
            };
        }
    }

    ExitCodes::GENERAL_ERROR
}
