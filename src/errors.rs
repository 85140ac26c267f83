//! Unified error type for the reqsweep harness.
//!
//! Every failure, whether in the expansion core or the surrounding
//! driver, is a [`SweepError`]. The core never logs, retries, or
//! partially recovers: errors are returned to the immediate caller
//! carrying the axis index and, for range faults, the offending bounds,
//! so the CLI can render an actionable diagnostic. Whether one bad test
//! case aborts the whole run is the caller's decision.

use miette::Diagnostic;
use thiserror::Error;

/// The single error type for the whole crate.
#[derive(Debug, Error, Diagnostic)]
pub enum SweepError {
    /// An explicit axis list contains a non-string element.
    #[error("axis {axis}: element {position} is not a string (found {found})")]
    #[diagnostic(
        code(reqsweep::axis::invalid_value),
        help("explicit axis lists hold strings only; quote numeric values, or use a {{start, step, stop}} range")
    )]
    InvalidValue {
        axis: usize,
        position: usize,
        found: &'static str,
    },

    /// A numeric range descriptor cannot be expanded.
    #[error("axis {axis}: range {{start: {start}, step: {step}, stop: {stop}}}: {fault}")]
    #[diagnostic(code(reqsweep::axis::invalid_range))]
    InvalidRange {
        axis: usize,
        start: i64,
        step: i64,
        stop: i64,
        fault: RangeFault,
    },

    /// An axis normalized to zero values, making the product empty.
    #[error("axis {axis} has no values, so the cross product is empty")]
    #[diagnostic(
        code(reqsweep::product::empty_axis),
        help("an empty axis produces no requests; remove the axis or give it at least one value")
    )]
    EmptyAxis { axis: usize },

    /// The total tuple count does not fit in memory arithmetic.
    #[error("cross product of axis lengths {lengths:?} overflows")]
    #[diagnostic(code(reqsweep::product::overflow))]
    ProductOverflow { lengths: Vec<usize> },

    /// Placeholder count in a request body does not match the axis count.
    #[error("request body has {placeholders} placeholder(s) but the tuple carries {arity} value(s)")]
    #[diagnostic(
        code(reqsweep::template::arity),
        help("each replace axis needs exactly one `{{}}` in the request body, in axis order")
    )]
    TemplateArity { placeholders: usize, arity: usize },

    /// A suite file could not be read.
    #[error("failed to read suite file {path}")]
    #[diagnostic(code(reqsweep::config::io))]
    SuiteIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A suite file could not be parsed.
    #[error("failed to parse suite file {path}")]
    #[diagnostic(code(reqsweep::config::parse))]
    SuiteParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// The session collaborator failed to execute a request.
    #[error("session error: {0}")]
    #[diagnostic(code(reqsweep::session::exec))]
    Session(String),

    /// The companion subject process could not be started.
    #[error("failed to spawn companion process '{command}'")]
    #[diagnostic(
        code(reqsweep::companion::spawn),
        help("check that the companion binary is built and on the PATH")
    )]
    Companion {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Why a numeric range descriptor was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeFault {
    /// `step <= 0` would loop forever or run backwards; rejected outright
    /// rather than guessing a reversal or clamping policy.
    NonPositiveStep,
    /// The expansion would exceed the configured per-axis cap.
    CapExceeded { len: u64, cap: usize },
    /// The bounds themselves overflow 64-bit arithmetic.
    Overflow,
}

impl std::fmt::Display for RangeFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeFault::NonPositiveStep => write!(f, "step must be a positive integer"),
            RangeFault::CapExceeded { len, cap } => {
                write!(f, "would expand to {} elements, over the cap of {}", len, cap)
            }
            RangeFault::Overflow => write!(f, "bounds overflow 64-bit integer arithmetic"),
        }
    }
}

/// Prints a SweepError with full miette diagnostics.
///
/// Use this for user-facing error display in the CLI; library callers
/// should propagate the error instead.
pub fn print_error(error: SweepError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
