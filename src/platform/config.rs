// LogLens - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for LogLens configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/loglens/ or %APPDATA%\LogLens\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[viewer]` section.
    pub viewer: ViewerSection,
    /// `[filter]` section.
    pub filter: FilterSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[viewer]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ViewerSection {
    /// Path of the log file to view.
    pub log_path: Option<String>,
    /// Level vocabulary (lower-case tag strings).
    pub levels: Option<Vec<String>>,
    /// Marker class attached to every row.
    pub entry_class: Option<String>,
    /// Maximum lines loaded from the file.
    pub max_lines: Option<usize>,
}

/// `[filter]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct FilterSection {
    /// Identifier of the level dropdown. An explicitly empty string
    /// disables filtering altogether.
    pub control: Option<String>,
    /// The dropdown value that shows every row.
    pub show_all: Option<String>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// All values are validated against named constants at load time. Invalid
/// values produce actionable warnings and fall back to defaults; the
/// application always starts.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- Viewer --
    /// Path of the log file to view.
    pub log_path: PathBuf,
    /// Level vocabulary (lower-case tag strings).
    pub levels: Vec<String>,
    /// Marker class attached to every row.
    pub entry_class: String,
    /// Maximum lines loaded from the file.
    pub max_lines: usize,

    // -- Filter --
    /// Identifier of the level dropdown. Empty means no dropdown is bound
    /// and the view never filters.
    pub filter_control: String,
    /// The dropdown value that shows every row.
    pub show_all: String,

    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,

    // -- Logging --
    /// Logging level string (applied before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(constants::DEFAULT_LOG_PATH),
            levels: constants::DEFAULT_LEVELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            entry_class: constants::DEFAULT_ENTRY_CLASS.to_string(),
            max_lines: constants::DEFAULT_MAX_LINES,
            filter_control: constants::DEFAULT_FILTER_CONTROL.to_string(),
            show_all: constants::DEFAULT_SHOW_ALL.to_string(),
            dark_mode: true,
            log_level: None,
        }
    }
}

/// Read and parse config.toml at the given path.
pub fn read_config(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. If the file does not exist, returns defaults with no warnings
/// (first-run). If the file is unreadable or unparseable, returns defaults
/// with a warning -- the application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let raw = match read_config(&config_path) {
        Ok(raw) => raw,
        Err(e) => {
            let msg = format!(
                "{e}. Using defaults. See config.example.toml for the expected format."
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    // Validate each field against named constants, accumulating all warnings.
    let mut config = AppConfig::default();

    // -- Viewer: log_path --
    if let Some(ref path) = raw.viewer.log_path {
        if path.trim().is_empty() {
            warnings.push(format!(
                "[viewer] log_path is empty. Using default ({}).",
                constants::DEFAULT_LOG_PATH,
            ));
        } else {
            config.log_path = PathBuf::from(path);
        }
    }

    // -- Viewer: levels --
    if let Some(ref levels) = raw.viewer.levels {
        let cleaned: Vec<String> = levels
            .iter()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        if cleaned.is_empty() {
            warnings.push(
                "[viewer] levels is empty. Using defaults (debug, info, warning, error, critical)."
                    .to_string(),
            );
        } else {
            if cleaned.len() < levels.len() {
                warnings.push(
                    "[viewer] levels contains empty entries; they were ignored.".to_string(),
                );
            }
            config.levels = cleaned;
        }
    }

    // -- Viewer: entry_class --
    if let Some(ref class) = raw.viewer.entry_class {
        if class.trim().is_empty() {
            warnings.push(format!(
                "[viewer] entry_class is empty. Using default ({}).",
                constants::DEFAULT_ENTRY_CLASS,
            ));
        } else {
            config.entry_class = class.trim().to_string();
        }
    }

    // -- Viewer: max_lines --
    if let Some(lines) = raw.viewer.max_lines {
        if (constants::MIN_MAX_LINES..=constants::ABSOLUTE_MAX_LINES).contains(&lines) {
            config.max_lines = lines;
        } else {
            warnings.push(format!(
                "[viewer] max_lines = {lines} is out of range ({}-{}). Using default ({}).",
                constants::MIN_MAX_LINES,
                constants::ABSOLUTE_MAX_LINES,
                constants::DEFAULT_MAX_LINES,
            ));
        }
    }

    // -- Filter: control --
    // An explicitly empty control is a deliberate opt-out, not a mistake.
    if let Some(ref control) = raw.filter.control {
        config.filter_control = control.trim().to_string();
    }

    // -- Filter: show_all --
    if let Some(ref show_all) = raw.filter.show_all {
        let trimmed = show_all.trim();
        if trimmed.is_empty() {
            warnings.push(format!(
                "[filter] show_all is empty. Using default ({}).",
                constants::DEFAULT_SHOW_ALL,
            ));
        } else {
            config.show_all = trimmed.to_string();
        }
    }
    if config.levels.iter().any(|l| l == &config.show_all) {
        warnings.push(format!(
            "[filter] show_all = \"{}\" collides with a level name; selecting that level will show everything.",
            config.show_all,
        ));
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
                ));
            }
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(dir: &Path, content: &str) {
        fs::write(dir.join(constants::CONFIG_FILE_NAME), content).unwrap();
    }

    #[test]
    fn test_missing_file_uses_defaults_without_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());

        assert!(warnings.is_empty());
        assert_eq!(config.filter_control, constants::DEFAULT_FILTER_CONTROL);
        assert_eq!(config.show_all, constants::DEFAULT_SHOW_ALL);
        assert_eq!(config.levels.len(), constants::DEFAULT_LEVELS.len());
    }

    #[test]
    fn test_valid_config_applied() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
[viewer]
log_path = "/var/log/myapp.log"
levels = ["info", "error"]
entry_class = "row"
max_lines = 5000

[filter]
control = "severity"
show_all = "everything"

[ui]
theme = "light"

[logging]
level = "debug"
"#,
        );

        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.log_path, PathBuf::from("/var/log/myapp.log"));
        assert_eq!(config.levels, vec!["info", "error"]);
        assert_eq!(config.entry_class, "row");
        assert_eq!(config.max_lines, 5000);
        assert_eq!(config.filter_control, "severity");
        assert_eq!(config.show_all, "everything");
        assert!(!config.dark_mode);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_empty_control_disables_filtering_without_warning() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[filter]\ncontrol = \"\"\n");

        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert!(config.filter_control.is_empty());
    }

    #[test]
    fn test_out_of_range_max_lines_warns_and_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[viewer]\nmax_lines = 1\n");

        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.max_lines, constants::DEFAULT_MAX_LINES);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("max_lines"));
    }

    #[test]
    fn test_levels_normalised_to_lowercase() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[viewer]\nlevels = [\"INFO\", \" Error \"]\n");

        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert_eq!(config.levels, vec!["info", "error"]);
    }

    #[test]
    fn test_show_all_level_collision_warns() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[filter]\nshow_all = \"info\"\n");

        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.show_all, "info");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("collides"));
    }

    #[test]
    fn test_unparseable_file_warns_and_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "not valid toml [[[");

        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Using defaults"));
        assert_eq!(config.filter_control, constants::DEFAULT_FILTER_CONTROL);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "[viewer]\nfuture_option = true\n\n[brand_new_section]\nx = 1\n",
        );

        let (_, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_invalid_theme_warns() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[ui]\ntheme = \"solarized\"\n");

        let (config, warnings) = load_config(dir.path());
        assert!(config.dark_mode);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("theme"));
    }

    #[test]
    fn test_read_config_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = read_config(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
