// LogLens - lib.rs
//
// Library crate root. Everything except the eframe wiring lives here so the
// integration tests can drive the loader and filter without a window.
//
// The `gui` module is declared in `main.rs` and stays out of the library
// surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
