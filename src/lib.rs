//! Dynamic shell-completion bridge
//!
//! This library implements the client side of a completion negotiation
//! protocol: a host program exposes a hidden completion sub-command, and a
//! generated shell script (or this crate's own interpreter) calls it with
//! the user's partially-typed arguments, decodes the returned directive
//! bitmask, and decides between presenting candidates and deferring to the
//! shell's filesystem completion.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `interp`: The canonical protocol interpreter (state machine)
//! - `protocol`: Wire format (requests, responses, directive bitmask)
//! - `script`: Per-shell completion script renderers
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use tabwire::{CompletionRequest, Interpreter, ProcessInvoker};
//!
//! let interpreter = Interpreter::new(Arc::new(ProcessInvoker::new()));
//! let request = CompletionRequest::new("mytool", true, vec!["ap".into()], false);
//! match interpreter.interpret(&request) {
//!     tabwire::CompletionOutcome::Candidates(list) => {
//!         for candidate in list {
//!             println!("{candidate}");
//!         }
//!     }
//!     tabwire::CompletionOutcome::FileFallback => { /* defer to the shell */ }
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod interp;
pub mod protocol;
pub mod script;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TabwireError};
pub use interp::{CompletionOutcome, HostInvoker, Interpreter, ProcessInvoker};
pub use protocol::{Candidate, CompletionRequest, CompletionResponse, Directive};
pub use script::Shell;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
pub fn version() -> &'static str {
    VERSION
}
