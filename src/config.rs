//! Suite files: YAML test-case configuration, discovery, and loading.
//!
//! A suite file names a target and lists its test cases:
//!
//! ```yaml
//! target:
//!   name: "local service"
//!   enabled: true
//! tests:
//!   - message: "sweep both knobs"
//!     request_body: "<get item='{}' index='{}'/>"
//!     replace:
//!       - ["alpha", "beta"]
//!       - { start: 0, step: 1, stop: 2 }
//!     expected_response: "<ok/>"
//! ```
//!
//! The `replace` entries are the substitution axes: a sequence is an
//! explicit value list, a `{start, step, stop}` mapping is an inclusive
//! integer range.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

use crate::axis::RawAxis;
use crate::errors::SweepError;

/// A whole suite file: one target plus its test cases.
#[derive(Debug, Clone, Deserialize)]
pub struct Suite {
    pub target: Target,
    #[serde(default)]
    pub tests: Vec<TestCase>,
}

/// The subject a suite runs against. A disabled target skips the whole
/// suite without failing the run.
#[derive(Debug, Clone, Deserialize)]
pub struct Target {
    pub name: String,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
}

fn enabled_default() -> bool {
    true
}

/// One test case: a request template, its substitution axes, and an
/// optional expected reply.
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    /// Human-readable label printed in reports.
    #[serde(default)]
    pub message: String,
    /// Prefix prepended once per assembled request.
    #[serde(default)]
    pub request_head: String,
    /// The body template, one `{}` placeholder per replace axis.
    pub request_body: String,
    /// Suffix appended once per assembled request.
    #[serde(default)]
    pub request_tail: String,
    /// If set, every reply must equal this string exactly.
    #[serde(default)]
    pub expected_response: Option<String>,
    /// Substitution axes, outermost first.
    #[serde(default)]
    pub replace: Vec<RawAxis>,
}

/// Discover suite files (`*.yaml` / `*.yml`) recursively under `root`,
/// in sorted order so runs enumerate suites deterministically.
pub fn discover_suite_files<P: AsRef<Path>>(root: P) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().is_file()
                && e.path()
                    .extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Load and parse one suite file.
pub fn load_suite(path: &Path) -> Result<Suite, SweepError> {
    let content = fs::read_to_string(path).map_err(|source| SweepError::SuiteIo {
        path: path.display().to_string(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| SweepError::SuiteParse {
        path: path.display().to_string(),
        source,
    })
}
