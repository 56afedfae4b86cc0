// ttsclean-core/src/lib.rs
//! # ttsclean Core Library
//!
//! `ttsclean-core` prepares free-form text for a text-to-speech engine. It strips
//! markdown and emoticons, keeps mathematical notation, and spaces operators so
//! formulas are read with natural pauses.
//!
//! The library is pure and stateless: every operation is a total function from
//! text to text. The only fallible step is building a sanitizer from a custom
//! rule configuration.
//!
//! ## Modules
//!
//! * `config`: Defines `MarkdownRule`s and `RuleConfig`, with YAML loading, merging and validation.
//! * `sanitizers`: Compiles and caches markdown rules.
//! * `classify`: The math and emoticon character predicates and their data tables.
//! * `engine`: Defines the `TextStage` trait and per-stage reporting types.
//! * `stages`: The four pipeline stages.
//! * `sanitizer`: `TtsSanitizer`, which runs the stages in order.
//! * `headless`: One-shot convenience functions.
//!
//! ## Pipeline
//!
//! 1. **markdown**: links, emphasis, code, headings, list and quote markers, rules.
//! 2. **emoticons**: kaomoji sequences and decorative characters; math survives.
//! 3. **operators**: a space on both sides of `+ - * / = < > ≤ ≥ ≠ ≈ ≡ →`, after `:`.
//! 4. **whitespace**: runs collapse to one space, ends are trimmed.
//!
//! ## Usage Example
//!
//! ```rust
//! use ttsclean_core::{sanitize_for_tts, TtsSanitizer};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     assert_eq!(sanitize_for_tts("# 标题"), "标题");
//!
//!     let sanitizer = TtsSanitizer::new()?;
//!     assert_eq!(sanitizer.sanitize("**勾股定理**：a²+b²=c²"), "勾股定理：a² + b² = c²");
//!     assert!(sanitizer.is_math_symbol('√'));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Configuration functions return `anyhow::Result` with context; the typed
//! variants live in [`TtsCleanError`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod classify;
pub mod config;
pub mod debug_text;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod sanitizer;
pub mod sanitizers;
pub mod stages;

/// Re-exports the rule configuration types and helpers.
pub use config::{merge_rules, validate_rules, MarkdownRule, RuleConfig, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::TtsCleanError;

/// Re-exports the character predicates.
pub use classify::{classify, is_emoji_or_emoticon, is_math_symbol, CharClass};

/// Re-exports the stage trait and reporting types.
pub use engine::{SanitizeReport, StageKind, StageSummary, TextStage};

pub use sanitizer::TtsSanitizer;

pub use stages::{add_spaces_around_operators, clean_emoticons, normalize_whitespace};

/// Re-exports types and functions for one-shot use.
pub use headless::{default_sanitizer, headless_sanitize_string, sanitize_for_tts};

pub use sanitizers::compiler::{compile_rules, get_or_compile_rules, CompiledRule, CompiledRules};
