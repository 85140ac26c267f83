//! Defines the command-line arguments and subcommands for the reqsweep CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "reqsweep",
    version,
    about = "A config-driven request sweep harness with deterministic parameter expansion."
)]
pub struct SweepArgs {
    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Discover suite files under a directory and run them all.
    Run {
        /// The directory containing suite files.
        #[arg(default_value = "suites")]
        path: PathBuf,
        /// Companion process to spawn for the run and kill afterwards.
        #[arg(long)]
        companion: Option<String>,
    },
    /// Print every assembled request for a suite without sending.
    Expand {
        /// The path to the suite file to expand.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Validate a suite file: parse it and expand every axis.
    Check {
        /// The path to the suite file to validate.
        #[arg(required = true)]
        file: PathBuf,
    },
}
