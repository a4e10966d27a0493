use std::{fmt, io};

/// Crate-wide `Result` type using [`TabwireError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, TabwireError>;

/// Top-level error type for tabwire operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
///
/// Completion-protocol failures are deliberately NOT represented here:
/// a failed or malformed host response degrades to the file-completion
/// fallback inside the interpreter and never becomes an error value.
#[derive(Debug)]
pub enum TabwireError {
    /// Configuration errors.
    Config(ConfigError),

    /// Host program invocation errors.
    Host(HostError),

    /// Completion script generation errors.
    Script(ScriptError),

    /// I/O errors.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),

    /// Feature not yet implemented.
    NotImplemented(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },
}

/// Host-invocation-specific errors.
#[derive(Debug)]
pub enum HostError {
    /// The host binary could not be spawned (absent or unexecutable).
    SpawnFailed(String),
}

/// Script-generation-specific errors.
#[derive(Debug)]
pub enum ScriptError {
    /// Shell name is not one we know about at all.
    UnknownShell(String),

    /// Shell is known but has no renderer in this build.
    UnsupportedShell(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for TabwireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabwireError::Config(e) => write!(f, "Configuration error: {e}"),
            TabwireError::Host(e) => write!(f, "Host error: {e}"),
            TabwireError::Script(e) => write!(f, "Script error: {e}"),
            TabwireError::Io(e) => write!(f, "I/O error: {e}"),
            TabwireError::Generic(msg) => write!(f, "{msg}"),
            TabwireError::NotImplemented(msg) => write!(f, "Not implemented: {msg}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
        }
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::SpawnFailed(msg) => write!(f, "Failed to run host program: {msg}"),
        }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownShell(name) => write!(f, "Unknown shell: {name}"),
            ScriptError::UnsupportedShell(name) => {
                write!(f, "Shell '{name}' is not supported yet; supported shells: fish")
            }
        }
    }
}

impl std::error::Error for TabwireError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for HostError {}
impl std::error::Error for ScriptError {}

/* ========================= Conversions to TabwireError ========================= */

impl From<io::Error> for TabwireError {
    fn from(err: io::Error) -> Self {
        TabwireError::Io(err)
    }
}

impl From<ConfigError> for TabwireError {
    fn from(err: ConfigError) -> Self {
        TabwireError::Config(err)
    }
}

impl From<HostError> for TabwireError {
    fn from(err: HostError) -> Self {
        TabwireError::Host(err)
    }
}

impl From<ScriptError> for TabwireError {
    fn from(err: ScriptError) -> Self {
        TabwireError::Script(err)
    }
}

impl From<String> for TabwireError {
    fn from(msg: String) -> Self {
        TabwireError::Generic(msg)
    }
}

impl From<&str> for TabwireError {
    fn from(msg: &str) -> Self {
        TabwireError::Generic(msg.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_config_error() {
        let err = TabwireError::Config(ConfigError::InvalidValue {
            field: "completion.shell".to_string(),
            value: "tcsh".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value 'tcsh' for field 'completion.shell'"
        );
    }

    #[test]
    fn test_display_host_error() {
        let err: TabwireError = HostError::SpawnFailed("mytool: not found".to_string()).into();
        assert!(err.to_string().contains("mytool: not found"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err: TabwireError = io_err.into();
        assert!(matches!(err, TabwireError::Io(_)));
    }
}
