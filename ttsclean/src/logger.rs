// ttsclean/src/logger.rs
//! Logger setup for the ttsclean binary.
//!
//! `RUST_LOG` is honored unless a level override is given (`--quiet` or
//! `--debug`). Without either, only warnings and errors are shown.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger`. Calling it twice is harmless; the second call is
/// ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
