//! Error handling module for tabwire.
//!
//! This module provides the crate's error taxonomy:
//! - Configuration loading and validation failures
//! - Host program invocation failures
//! - Script generation failures
//!
//! Note the split between errors and protocol outcomes: everything that can
//! go wrong during a completion negotiation (host missing, empty response,
//! `Error` directive, unsupported filter request) is a normal interpreter
//! outcome that ends in file-completion fallback, not a [`TabwireError`].

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ConfigError, HostError, Result, ScriptError, TabwireError};
