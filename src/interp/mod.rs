//! Completion negotiation interpreter.
//!
//! This module is the canonical implementation of the decision procedure
//! that every generated shell script re-expresses in its own dialect: call
//! the host, parse the response, decode the directive, filter by prefix,
//! and decide between presenting candidates and falling back to file
//! completion.
//!
//! # Architecture
//!
//! - **HostInvoker**: runs one request against the host binary
//! - **FilterContext**: per-run candidate buffer (prefix filter, no-space
//!   workaround)
//! - **Interpreter**: the state machine tying the pieces together
//! - **CompletionOutcome**: the run's terminal result
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use tabwire::interp::{Interpreter, ProcessInvoker};
//! use tabwire::protocol::CompletionRequest;
//!
//! let interpreter = Interpreter::new(Arc::new(ProcessInvoker::new()));
//! let request = CompletionRequest::new("mytool", true, vec!["ap".into()], false);
//! let outcome = interpreter.interpret(&request);
//! ```

mod engine;
mod filter;
mod invoker;

pub use engine::{CompletionOutcome, Interpreter};
pub use filter::{FilterContext, NO_SPACE_SENTINEL};
pub use invoker::{HostInvoker, ProcessInvoker};
