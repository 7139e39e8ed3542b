// LogLens - util/mod.rs

pub mod constants;
pub mod error;
pub mod logging;
