//! Suite execution and reporting.
//!
//! The runner composes the two pure pipeline stages (axis
//! normalization, tuple generation) with template rendering and request
//! assembly, drives a [`Session`] with the assembled requests, checks
//! replies against expectations, and reports pass/fail plus timing and
//! throughput.

use std::path::Path;
use std::time::Instant;

use crate::axis::{normalize, Limits};
use crate::config::{self, Suite, TestCase};
use crate::errors::SweepError;
use crate::product::generate;
use crate::session::Session;
use crate::template::render;

// =============================================================================
// CORE TYPES
// =============================================================================

/// The outcome of one test case.
#[derive(Debug, Clone)]
pub enum CaseResult {
    /// All requests sent and all replies matched.
    Pass {
        suite: String,
        message: String,
        stats: CaseStats,
    },
    /// Expansion, rendering, the session, or a reply check failed.
    Fail {
        suite: String,
        message: String,
        error: String,
        expected: Option<String>,
        actual: Option<String>,
    },
    /// The case was not run.
    Skipped {
        suite: String,
        message: String,
        reason: String,
    },
}

/// Timing and volume figures for a finished case.
#[derive(Debug, Clone, Copy)]
pub struct CaseStats {
    /// Requests actually sent over the session.
    pub requests: usize,
    /// Expanded parameter tuples (0 when no expansion was requested).
    pub entries: usize,
    /// Wall-clock seconds spent in the send loop.
    pub elapsed: f64,
}

impl CaseStats {
    /// Expanded entries per second, the throughput figure reported per
    /// case. Zero when the send loop finished too fast to time.
    pub fn throughput(&self) -> f64 {
        if self.elapsed > 0.0 {
            self.entries as f64 / self.elapsed
        } else {
            0.0
        }
    }
}

/// The fully-assembled request set for one test case.
#[derive(Debug, Clone, PartialEq)]
pub struct Requests {
    /// Rendered requests, in enumeration order.
    pub requests: Vec<String>,
    /// Number of expanded parameter tuples behind them.
    pub entries: usize,
}

/// Configuration for suite execution and reporting.
pub struct RunConfig {
    pub limits: Limits,
    pub use_colors: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            use_colors: atty::is(atty::Stream::Stderr),
        }
    }
}

// Color constants for terminal output
const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

impl RunConfig {
    /// Apply color formatting to text if colors are enabled.
    pub fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}

// =============================================================================
// REQUEST ASSEMBLY
// =============================================================================

/// Expand a test case's axes and render every request it will send.
///
/// Assembly follows the head/tail rule: when the case has a head or a
/// tail, every rendered body is concatenated into ONE request
/// `head + body.. + tail`; when both are empty, each rendered body is
/// its own request. With no `replace` axes at all, the body is the
/// literal request, placeholders untouched.
pub fn build_requests(case: &TestCase, limits: &Limits) -> Result<Requests, SweepError> {
    let axes = normalize(&case.replace, limits)?;

    let Some(tuples) = generate(&axes)? else {
        // No expansion requested: the body is used verbatim.
        let mut request = String::new();
        request.push_str(&case.request_head);
        request.push_str(&case.request_body);
        request.push_str(&case.request_tail);
        return Ok(Requests {
            requests: vec![request],
            entries: 0,
        });
    };

    let entries = tuples.len();
    if case.request_head.is_empty() && case.request_tail.is_empty() {
        let requests = tuples
            .iter()
            .map(|tuple| render(&case.request_body, tuple))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Requests { requests, entries })
    } else {
        let mut request = String::from(&case.request_head);
        for tuple in &tuples {
            request.push_str(&render(&case.request_body, tuple)?);
        }
        request.push_str(&case.request_tail);
        Ok(Requests {
            requests: vec![request],
            entries,
        })
    }
}

// =============================================================================
// EXECUTION
// =============================================================================

/// Execute a single test case over the given session.
pub fn run_case(
    suite: &str,
    case: &TestCase,
    session: &mut dyn Session,
    config: &RunConfig,
) -> CaseResult {
    let fail = |error: String, expected: Option<String>, actual: Option<String>| CaseResult::Fail {
        suite: suite.to_string(),
        message: case.message.clone(),
        error,
        expected,
        actual,
    };

    let built = match build_requests(case, &config.limits) {
        Ok(built) => built,
        // An empty axis makes the product mathematically zero: the case
        // produces no requests, which is not a failure.
        Err(SweepError::EmptyAxis { axis }) => {
            return CaseResult::Skipped {
                suite: suite.to_string(),
                message: case.message.clone(),
                reason: format!("axis {axis} has no values, no requests produced"),
            }
        }
        Err(e) => return fail(e.to_string(), None, None),
    };

    let start = Instant::now();
    for request in &built.requests {
        let reply = match session.exec(request) {
            Ok(reply) => reply,
            Err(e) => return fail(e.to_string(), None, None),
        };
        if let Some(expected) = case.expected_response.as_deref() {
            if reply != expected {
                return fail(
                    "reply did not match expected response".to_string(),
                    Some(expected.to_string()),
                    Some(reply),
                );
            }
        }
    }
    let elapsed = start.elapsed().as_secs_f64();

    CaseResult::Pass {
        suite: suite.to_string(),
        message: case.message.clone(),
        stats: CaseStats {
            requests: built.requests.len(),
            entries: built.entries,
            elapsed,
        },
    }
}

/// Execute every case in a suite. A disabled target yields one Skipped
/// result for the whole suite instead of running anything.
pub fn run_suite(suite: &Suite, session: &mut dyn Session, config: &RunConfig) -> Vec<CaseResult> {
    if !suite.target.enabled {
        return vec![CaseResult::Skipped {
            suite: suite.target.name.clone(),
            message: String::new(),
            reason: "target disabled in suite file".to_string(),
        }];
    }
    suite
        .tests
        .iter()
        .map(|case| run_case(&suite.target.name, case, session, config))
        .collect()
}

/// Discover and run every suite under `root`, reporting as it goes.
/// Returns `(passed, failed, skipped)` counts.
pub fn run_dir<P: AsRef<Path>>(
    root: P,
    session: &mut dyn Session,
    config: &RunConfig,
) -> (usize, usize, usize) {
    let mut results = Vec::new();
    for path in config::discover_suite_files(root) {
        match config::load_suite(&path) {
            Ok(suite) => results.extend(run_suite(&suite, session, config)),
            Err(e) => results.push(CaseResult::Fail {
                suite: path.display().to_string(),
                message: String::new(),
                error: e.to_string(),
                expected: None,
                actual: None,
            }),
        }
    }
    report_results(&results, config);
    partition_results(&results)
}

// =============================================================================
// REPORTING AND OUTPUT
// =============================================================================

/// Partition results by outcome type.
pub fn partition_results(results: &[CaseResult]) -> (usize, usize, usize) {
    let passed = results
        .iter()
        .filter(|r| matches!(r, CaseResult::Pass { .. }))
        .count();
    let failed = results
        .iter()
        .filter(|r| matches!(r, CaseResult::Fail { .. }))
        .count();
    let skipped = results
        .iter()
        .filter(|r| matches!(r, CaseResult::Skipped { .. }))
        .count();
    (passed, failed, skipped)
}

/// Print per-case lines and a summary with colored output.
pub fn report_results(results: &[CaseResult], config: &RunConfig) {
    for r in results {
        match r {
            CaseResult::Pass {
                suite,
                message,
                stats,
            } => {
                println!(
                    "{}: {} [{}] ({} requests, {} entries, {:.3}s, {:.0} entries/sec)",
                    config.colorize("PASS", GREEN),
                    message,
                    suite,
                    stats.requests,
                    stats.entries,
                    stats.elapsed,
                    stats.throughput(),
                );
            }
            CaseResult::Fail { .. } => print_failure(r, config),
            CaseResult::Skipped {
                suite,
                message,
                reason,
            } => {
                println!(
                    "{}: {} [{}] ({})",
                    config.colorize("SKIP", YELLOW),
                    message,
                    suite,
                    reason
                );
            }
        }
    }

    let (passed, failed, skipped) = partition_results(results);
    println!(
        "\nRun summary: total {}, {} {}, {} {}, {} {}",
        results.len(),
        config.colorize("passed", GREEN),
        passed,
        config.colorize("failed", RED),
        failed,
        config.colorize("skipped", YELLOW),
        skipped,
    );
}

/// Print detailed failure information.
pub fn print_failure(r: &CaseResult, config: &RunConfig) {
    if let CaseResult::Fail {
        suite,
        message,
        error,
        expected,
        actual,
    } = r
    {
        eprintln!("{}: {} [{}]", config.colorize("FAIL", RED), message, suite);
        eprintln!("  Error: {}", error);
        if let (Some(expected), Some(actual)) = (expected, actual) {
            eprintln!("  - expected: {}", config.colorize(expected, GREEN));
            eprintln!("  + actual:   {}", config.colorize(actual, RED));
        }
    }
}
