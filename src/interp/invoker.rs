//! Host program invocation for completion requests.
//!
//! This module provides the trait and implementation for running one
//! completion request against the host binary and capturing its output.

use std::process::Stdio;

use crate::error::{HostError, Result};
use crate::protocol::CompletionRequest;

/// Trait for executing completion requests.
///
/// The interpreter only needs "given a request, return captured standard
/// output"; putting that behind a trait keeps the state machine testable
/// without spawning processes.
pub trait HostInvoker: Send + Sync {
    /// Run one completion request and return the host's standard output.
    ///
    /// # Errors
    /// Returns an error when the host binary cannot be located or executed.
    /// The caller treats this as an invocation failure leading to file
    /// fallback, never as a crash.
    fn invoke(&self, request: &CompletionRequest) -> Result<String>;
}

/// Invoker that spawns the host binary as a child process.
///
/// The call blocks until the host exits; there is no caller-imposed timeout.
/// Standard error is discarded and the exit status is ignored, both per the
/// wire contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessInvoker;

impl ProcessInvoker {
    /// Create a new process invoker.
    pub fn new() -> Self {
        Self
    }
}

impl HostInvoker for ProcessInvoker {
    fn invoke(&self, request: &CompletionRequest) -> Result<String> {
        let output = request
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| HostError::SpawnFailed(format!("{}: {e}", request.program())))?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
