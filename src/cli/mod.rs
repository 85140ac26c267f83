//! The reqsweep command-line interface.
//!
//! This module is the entry point for all CLI commands and orchestrates
//! the core library functions: suite loading, expansion, execution, and
//! reporting.

use std::path::Path;
use std::process;
use std::time::Duration;

use clap::Parser;

use crate::cli::args::{Command, SweepArgs};
use crate::errors::{print_error, SweepError};
use crate::runner::{build_requests, run_dir, RunConfig};
use crate::service::Companion;
use crate::session::EchoSession;
use crate::{config, product};

pub mod args;

/// The main entry point for the CLI.
pub fn run() {
    let args = SweepArgs::parse();

    let mut run_config = RunConfig::default();
    if args.no_color {
        run_config.use_colors = false;
    }

    let result = match args.command {
        Command::Run { path, companion } => handle_run(&path, companion.as_deref(), &run_config),
        Command::Expand { file } => handle_expand(&file, &run_config),
        Command::Check { file } => handle_check(&file, &run_config),
    };

    match result {
        Ok(failures) if failures > 0 => process::exit(1),
        Ok(_) => {}
        Err(e) => {
            print_error(e);
            process::exit(1);
        }
    }
}

/// Handles the `run` subcommand. Returns the number of failed cases.
fn handle_run(
    path: &Path,
    companion: Option<&str>,
    config: &RunConfig,
) -> Result<usize, SweepError> {
    // Held for the duration of the run; killed on drop.
    let _companion = companion
        .map(|cmd| Companion::spawn(cmd, Duration::from_secs(1)))
        .transpose()?;

    let mut session = EchoSession::default();
    let (_, failed, _) = run_dir(path, &mut session, config);
    Ok(failed)
}

/// Handles the `expand` subcommand: prints each assembled request, one
/// block per request, without touching any session.
fn handle_expand(file: &Path, config: &RunConfig) -> Result<usize, SweepError> {
    let suite = config::load_suite(file)?;
    for case in &suite.tests {
        let built = build_requests(case, &config.limits)?;
        println!(
            "# {} ({} requests, {} entries)",
            case.message,
            built.requests.len(),
            built.entries
        );
        for request in &built.requests {
            println!("{}", request);
        }
    }
    Ok(0)
}

/// Handles the `check` subcommand: parse the suite and expand every
/// axis set without rendering or sending anything. Every bad case is
/// diagnosed, not just the first; the count of problems becomes the
/// exit status.
fn handle_check(file: &Path, config: &RunConfig) -> Result<usize, SweepError> {
    let suite = config::load_suite(file)?;
    let mut problems = 0;
    for case in &suite.tests {
        let expanded = crate::axis::normalize(&case.replace, &config.limits)
            .and_then(|axes| product::generate(&axes));
        if let Err(e) = expanded {
            problems += 1;
            print_error(e);
        }
    }
    if problems == 0 {
        println!(
            "{}: {} test case(s) valid",
            file.display(),
            suite.tests.len()
        );
    }
    Ok(problems)
}
