//! CLI command definitions.
//!
//! This module defines the command structure for the upmkit CLI.
//! Each subcommand drives one step of authoring a Unity package.

use clap::{Parser, Subcommand};

pub mod common;
pub mod create;
pub mod init_form;
pub mod normalize_version;
pub mod plan;

/// upmkit - Unity package scaffolder
#[derive(Parser)]
#[command(name = "upm")]
#[command(version, about = "upmkit - scaffold Unity Package Manager packages")]
#[command(long_about = r#"
upmkit creates the directory tree and descriptor files of a new Unity
Package Manager package: package.json, runtime and editor assembly
definitions, README.md, CHANGELOG.md and a documentation stub.

COMMANDS:
  create            → Create a package under the Packages directory
  plan              → Show what `create` would write, without writing
  normalize-version → Print the three-segment form of a version string
  init-form         → Write a blank form file to fill in

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure (required field empty)
  4 - Package already exists
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new package
    Create(create::CreateArgs),

    /// Print the build plan for a package without writing it
    Plan(plan::PlanArgs),

    /// Normalize a version string to three segments
    #[command(name = "normalize-version")]
    NormalizeVersion(normalize_version::NormalizeVersionArgs),

    /// Write a blank form file
    #[command(name = "init-form")]
    InitForm(init_form::InitFormArgs),
}
