//! Companion subject-under-test process management.
//!
//! A run may spawn the process it intends to exercise, give it a
//! moment to come up, and kill it when the run ends. The child is
//! killed on drop so an early return cannot leak it.

use std::process::{Child, Command};
use std::time::Duration;

use crate::errors::SweepError;

/// A spawned subject process, killed when dropped.
pub struct Companion {
    child: Child,
    command: String,
}

impl Companion {
    /// Spawn `command` (program plus whitespace-separated arguments)
    /// and wait `startup` before returning, so the subject is listening
    /// before the first request hits it.
    pub fn spawn(command: &str, startup: Duration) -> Result<Self, SweepError> {
        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or_else(|| SweepError::Companion {
            command: command.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command line"),
        })?;
        let child = Command::new(program)
            .args(parts)
            .spawn()
            .map_err(|source| SweepError::Companion {
                command: command.to_string(),
                source,
            })?;
        std::thread::sleep(startup);
        Ok(Self {
            child,
            command: command.to_string(),
        })
    }
}

impl Drop for Companion {
    fn drop(&mut self) {
        if let Err(e) = self.child.kill() {
            eprintln!("failed to kill companion '{}': {}", self.command, e);
        }
        let _ = self.child.wait();
    }
}
