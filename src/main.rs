// LogLens - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and validation
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use loglens::app;

pub use loglens::core;
pub use loglens::platform;
pub use loglens::ui;
pub use loglens::util;

use clap::Parser;
use std::path::PathBuf;

/// LogLens - Desktop viewer for an application log file.
///
/// Point LogLens at a log file to browse it with a level dropdown that
/// shows or hides rows by their level tags.
#[derive(Parser, Debug)]
#[command(name = "LogLens", version, about)]
struct Cli {
    /// Log file to view (configured path if omitted).
    path: Option<PathBuf>,

    /// Initial level filter value, applied after the first load.
    #[arg(short = 'f', long = "filter")]
    filter: Option<String>,

    /// Verbose diagnostic logging (same effect as RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is loaded before logging init so the configured level can take
    // effect; validation problems are carried in `warnings` and logged once
    // the subscriber is up.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "LogLens starting"
    );

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    // CLI path overrides the configured log file.
    let log_path = cli.path.clone().unwrap_or_else(|| config.log_path.clone());

    let controller = app::controller::FilterController::bind(
        &config.filter_control,
        &config.levels,
        &config.entry_class,
        &config.show_all,
    );

    let mut state = app::state::AppState::new(
        log_path,
        config.levels.clone(),
        config.entry_class.clone(),
        config.max_lines,
        controller,
        warnings,
    );

    state.load();

    // Apply the initial filter once, after the first load.
    if let Some(ref value) = cli.filter {
        state.on_filter_change(value);
    }

    let dark_mode = config.dark_mode;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([700.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            Ok(Box::new(gui::LogLensApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch LogLens GUI: {e}");
        std::process::exit(1);
    }
}
