//! Command-line interface for tabwire
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and CLI-over-file precedence
//! - Subcommand dispatch (generate, complete, config)

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::config::{Config, LogLevel};
use crate::error::Result;
use crate::interp::{CompletionOutcome, Interpreter, ProcessInvoker};
use crate::protocol::CompletionRequest;
use crate::script::{self, Shell};

/// Dynamic shell-completion bridge
#[derive(Parser, Debug)]
#[command(
    name = "tabwire",
    version,
    about = "Dynamic shell completion for programs speaking the hidden-subcommand protocol",
    long_about = "Generates shell integration scripts for programs that answer completion
requests through a hidden sub-command, and can drive a single completion
negotiation directly for debugging."
)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands for tabwire
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a completion script for a host program
    Generate {
        /// Host program name (must answer the completion sub-command)
        #[arg(value_name = "PROGRAM")]
        program: String,

        /// Target shell (defaults to the configured shell)
        #[arg(long, value_name = "SHELL")]
        shell: Option<String>,

        /// Request candidates without descriptions
        #[arg(long)]
        no_descriptions: bool,

        /// Write the script to a file instead of standard output
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Run one completion negotiation against a host program
    ///
    /// Words are the command line as the shell sees it, program first.
    /// Pass a final "" word to complete at the start of a new argument.
    /// Exits 0 with candidates on stdout, or 1 when the outcome is
    /// file-completion fallback.
    Complete {
        /// Command line words, program name first
        #[arg(
            value_name = "WORD",
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        words: Vec<String>,

        /// Request candidates without descriptions
        #[arg(long)]
        no_descriptions: bool,
    },

    /// Show or validate configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Parse arguments from the process environment and load configuration.
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Build an interface from already-parsed arguments.
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self::load_config(&args)?;
        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments.
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load_from_file(args.config_file.as_deref())?;

        if let Err(e) = config.validate() {
            eprintln!("Warning: Configuration validation failed: {e}");
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        Self::apply_args_to_config(&mut config, args);

        Ok(config)
    }

    /// Apply CLI arguments to configuration.
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Get the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments.
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Dispatch the selected subcommand.
    pub fn handle_command(&self) -> Result<ExitCode> {
        match &self.args.command {
            Commands::Generate {
                program,
                shell,
                no_descriptions,
                output,
            } => {
                self.generate(program, shell.as_deref(), *no_descriptions, output.as_deref())?;
                Ok(ExitCode::SUCCESS)
            }
            Commands::Complete {
                words,
                no_descriptions,
            } => self.complete(words, *no_descriptions),
            Commands::Config { show, validate } => {
                self.handle_config_command(*show, *validate)?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }

    /// Whether host responses should carry descriptions.
    fn descriptions(&self, no_descriptions: bool) -> bool {
        !no_descriptions && self.config.completion.descriptions
    }

    /// Generate a completion script.
    fn generate(
        &self,
        program: &str,
        shell: Option<&str>,
        no_descriptions: bool,
        output: Option<&std::path::Path>,
    ) -> Result<()> {
        let shell = Shell::parse(shell.unwrap_or(&self.config.completion.shell))?;
        let descriptions = self.descriptions(no_descriptions);

        match output {
            Some(path) => script::generate_to_file(shell, program, descriptions, path),
            None => {
                let stdout = std::io::stdout();
                script::generate(shell, program, descriptions, &mut stdout.lock())
            }
        }
    }

    /// Run one completion negotiation and print the result.
    ///
    /// The exit status mirrors the generated script's provider function:
    /// success presents candidates, failure requests file completion.
    fn complete(&self, words: &[String], no_descriptions: bool) -> Result<ExitCode> {
        let descriptions = self.descriptions(no_descriptions);
        let request = CompletionRequest::from_words(words, descriptions)
            .ok_or("complete needs at least the host program word")?;

        let interpreter = Interpreter::new(Arc::new(ProcessInvoker::new()));
        match interpreter.interpret(&request) {
            CompletionOutcome::Candidates(candidates) => {
                for candidate in candidates {
                    println!("{candidate}");
                }
                Ok(ExitCode::SUCCESS)
            }
            CompletionOutcome::FileFallback => Ok(ExitCode::FAILURE),
        }
    }

    /// Handle config subcommand.
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file()?;
        }

        if show {
            self.show_config()?;
        }

        Ok(())
    }

    /// Validate configuration file.
    fn validate_config_file(&self) -> Result<()> {
        let path = self.get_config_path();
        println!("Validating configuration file: {}", path.display());

        if !path.exists() {
            println!("Configuration file does not exist; defaults apply");
            return Ok(());
        }

        match Config::load_from_file(self.args.config_file.as_deref()) {
            Ok(config) => match config.validate() {
                Ok(_) => println!("Configuration is valid"),
                Err(e) => println!("Configuration validation failed: {e}"),
            },
            Err(e) => println!("Failed to load configuration: {e}"),
        }

        Ok(())
    }

    /// Show effective configuration.
    fn show_config(&self) -> Result<()> {
        let path = self.get_config_path();
        println!("Configuration file: {}", path.display());
        println!();
        println!("{}", self.config.to_toml()?);
        Ok(())
    }

    /// Configuration file path (from args or default).
    fn get_config_path(&self) -> PathBuf {
        self.args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_config_path)
    }
}
