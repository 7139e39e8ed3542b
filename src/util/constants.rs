// LogLens - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.
// Validated configuration values reference the MIN/DEFAULT/ABSOLUTE values
// defined here rather than inline literals.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogLens";

/// Application identifier used for the platform config directory.
pub const APP_ID: &str = "LogLens";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Page conventions
//
// These mirror the markup convention of the log pages LogLens renders: every
// log row carries a marker class, rows are additionally tagged with the level
// names occurring in them, and a named selection control filters the rows.
// All of them are overridable in config.toml for differently-named pages.
// =============================================================================

/// Default identifier of the level selection control.
pub const DEFAULT_FILTER_CONTROL: &str = "log-filter";

/// Default class tag marking a row as a filterable log entry.
pub const DEFAULT_ENTRY_CLASS: &str = "log-entry";

/// Default sentinel value meaning "show every entry".
pub const DEFAULT_SHOW_ALL: &str = "all";

/// Default level-tag vocabulary, matching the Python logging level names
/// found in the application log files LogLens targets.
pub const DEFAULT_LEVELS: &[&str] = &["debug", "info", "warning", "error", "critical"];

// =============================================================================
// Loader limits
// =============================================================================

/// Default path of the application log file, relative to the working
/// directory (the layout used by the web applications LogLens targets).
pub const DEFAULT_LOG_PATH: &str = "logs/app.log";

/// Text of the single placeholder row shown when the log file does not exist.
pub const MISSING_LOG_PLACEHOLDER: &str = "Log file has not been created yet.";

/// Minimum user-configurable line cap (the viewer must show something).
pub const MIN_MAX_LINES: usize = 100;

/// Maximum number of lines loaded from the log file in one pass.
/// Lines beyond the cap are dropped with a warning so a runaway log file
/// cannot exhaust memory.
pub const DEFAULT_MAX_LINES: usize = 100_000;

/// Hard upper bound on the line cap (prevents configuration mistakes).
pub const ABSOLUTE_MAX_LINES: usize = 1_000_000;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
