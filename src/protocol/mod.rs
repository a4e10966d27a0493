//! Wire protocol between the shell side and the host program.
//!
//! One completion negotiation is a single request/response exchange:
//!
//! - **Request**: `<program> __complete <arg>... [""]` -- the hidden
//!   sub-command invoked with the user's partial command line
//!   ([`CompletionRequest`]).
//! - **Response**: newline-separated candidate lines followed by one
//!   `:<integer>` directive line ([`CompletionResponse`], [`Candidate`],
//!   [`Directive`]).
//!
//! Process exit status is not part of the contract; failure is communicated
//! only through empty output or the `Error` directive flag.

mod directive;
mod request;
mod response;

pub use directive::Directive;
pub use request::{COMPLETE_NO_DESC_REQUEST_CMD, COMPLETE_REQUEST_CMD, CompletionRequest};
pub use response::{Candidate, CompletionResponse};
