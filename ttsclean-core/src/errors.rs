//! errors.rs - Custom error types for the ttsclean-core library.
//!
//! Sanitization itself never fails. These errors only surface at the
//! configuration boundary: loading, validating and compiling markdown rules,
//! or selecting a pipeline stage by name.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by the `ttsclean-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TtsCleanError {
    #[error("Failed to compile markdown rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Rule '{0}' has no pattern")]
    MissingPattern(String),

    #[error("Unknown pipeline stage '{0}' (expected one of: markdown, emoticons, operators, whitespace)")]
    UnknownStage(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
