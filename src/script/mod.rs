//! Shell completion script generation.
//!
//! Each supported shell is a renderer of the same negotiation logic the
//! [`crate::interp`] module implements canonically; the renderers share one
//! request/response contract and one directive bit table, both taken from
//! [`crate::protocol`].

mod fish;

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, ScriptError};

pub use fish::generate_fish;

/// Shells a completion script can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    /// The fish shell.
    Fish,
}

/// Shell names recognized on the command line and in configuration.
/// Recognized does not mean renderable; only fish has a renderer.
const KNOWN_SHELLS: &[&str] = &["fish", "bash", "zsh", "powershell"];

impl Shell {
    /// Parse a shell name, case-insensitively.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "fish" => Ok(Shell::Fish),
            other if KNOWN_SHELLS.contains(&other) => {
                Err(ScriptError::UnsupportedShell(other.to_string()).into())
            }
            other => Err(ScriptError::UnknownShell(other.to_string()).into()),
        }
    }

    /// Whether a name refers to a shell we know about at all.
    pub fn is_known(name: &str) -> bool {
        KNOWN_SHELLS.contains(&name.to_lowercase().as_str())
    }
}

/// Write the completion script for `shell` and program `name` to `w`.
pub fn generate(shell: Shell, name: &str, include_descriptions: bool, w: &mut dyn Write) -> Result<()> {
    match shell {
        Shell::Fish => fish::generate_fish(w, name, include_descriptions),
    }
}

/// Write the completion script to a file, creating or truncating it.
pub fn generate_to_file(
    shell: Shell,
    name: &str,
    include_descriptions: bool,
    path: &Path,
) -> Result<()> {
    let mut file = fs::File::create(path)?;
    generate(shell, name, include_descriptions, &mut file)
}
