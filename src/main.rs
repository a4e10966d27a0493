//! tabwire - dynamic shell completion bridge
//!
//! Generates shell integration scripts for programs that answer completion
//! requests through a hidden sub-command, and can drive a single completion
//! negotiation directly for debugging.
//!
//! # Usage
//!
//! ```bash
//! # Emit a fish completion script for "mytool"
//! tabwire generate mytool > ~/.config/fish/completions/mytool.fish
//!
//! # Debug one negotiation: what would completion of "mytool sub ap<TAB>" offer?
//! tabwire -v complete mytool sub ap
//! ```

use std::process::ExitCode;

use tabwire::cli::CliInterface;
use tabwire::error::Result;

/// Application entry point
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments
/// 2. Load configuration
/// 3. Initialize logging
/// 4. Dispatch the subcommand
fn run() -> Result<ExitCode> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    cli.handle_command()
}

/// Initialize logging system based on verbosity level
fn initialize_logging(cli: &CliInterface) {
    let level = cli.config().logging.level.to_tracing_level();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false);

    // Candidates go to stdout; logs must never mix into them. Timestamps
    // are off by default since runs are single-shot and interactive.
    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
