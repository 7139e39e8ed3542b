// LogLens - util/error.rs
//
// Typed errors with context-preserving error chains.
// No string-based error propagation; every variant keeps the path it
// happened on and the causal source for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors produced while reading config.toml.
///
/// Config loading is lenient overall — the caller converts these into
/// startup warnings and falls back to defaults — but the read step itself
/// reports precisely what went wrong.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// I/O error reading the config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Failed to parse '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(
                    f,
                    "I/O error reading config '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Errors produced while loading a log file.
///
/// A missing file is NOT an error — the loader renders a placeholder row for
/// it, exactly as the log page does. Only genuine read failures (permission
/// denied, device errors) surface here.
#[derive(Debug)]
pub enum LoadError {
    /// I/O error reading the log file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read log file '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}
