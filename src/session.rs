//! The remote-session boundary.
//!
//! The harness owns no transport, protocol framing, or authentication.
//! It drives anything that can take a request string and produce a
//! reply string; embedding applications implement [`Session`] over
//! their real transport.

use crate::errors::SweepError;

/// A connection-like collaborator that executes one request at a time.
pub trait Session {
    /// Send one request and wait for its reply.
    fn exec(&mut self, request: &str) -> Result<String, SweepError>;
}

/// A loopback session that replies with the request verbatim.
///
/// Used by the CLI `run` command so expansion, rendering, and assembly
/// can be exercised end to end without a remote endpoint; a case with
/// `expected_response` equal to its assembled request still checks
/// meaningfully.
#[derive(Debug, Default)]
pub struct EchoSession {
    pub requests_sent: usize,
}

impl Session for EchoSession {
    fn exec(&mut self, request: &str) -> Result<String, SweepError> {
        self.requests_sent += 1;
        Ok(request.to_string())
    }
}
