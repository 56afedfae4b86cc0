//! This file defines the command-line interface (CLI) for the ttsclean
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use ttsclean_core::StageKind;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "ttsclean",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Prepare text for text-to-speech",
    long_about = "ttsclean strips markdown syntax, emoticons and decorative symbols from text so a text-to-speech engine reads only what matters. Mathematical notation is kept, and operators are spaced so formulas are spoken with natural pauses.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for ttsclean crates)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `ttsclean` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes text from a file, stdin or the command line.
    #[command(about = "Sanitizes text from a file, stdin or the command line for speech synthesis.")]
    Sanitize(SanitizeCommand),

    /// Shows how each character of a string is classified.
    #[command(about = "Shows how each character is classified (math, emoticon, kept or dropped).")]
    Classify(ClassifyCommand),

    /// Lists the markdown rules in the order they are applied.
    #[command(about = "Lists the markdown rules in the order they are applied.")]
    Rules(RulesCommand),
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Path to an input file (reads from stdin if neither this nor --text is given).
    #[arg(long, short = 'i', value_name = "FILE", conflicts_with = "text", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Text to sanitize, given directly on the command line.
    #[arg(long, short = 't', value_name = "TEXT", help = "Sanitize this text instead of reading stdin.")]
    pub text: Option<String>,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Path to a custom markdown rule file (YAML), merged over the built-in rules.
    #[arg(long = "config", value_name = "FILE", env = "TTSCLEAN_CONFIG", help = "Path to a custom markdown rule file (YAML).")]
    pub config: Option<PathBuf>,

    /// Explicitly enable these rule names (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Enable these rule names (comma-separated).")]
    pub enable: Vec<String>,

    /// Explicitly disable these rule names (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Disable these rule names (comma-separated).")]
    pub disable: Vec<String>,

    /// Stop after this pipeline stage.
    #[arg(long = "stage", value_enum, value_name = "STAGE", help = "Run the pipeline only up to this stage.")]
    pub stage: Option<StageArg>,

    /// Process input line by line (useful for streaming data from pipes).
    #[arg(long = "line-buffered", conflicts_with_all = ["diff", "stats"], help = "Sanitize and print each input line as it arrives.")]
    pub line_buffered: bool,

    /// Remove ANSI escape sequences from the input first.
    #[arg(long = "strip-ansi", help = "Remove ANSI escape sequences (colors, cursor movement) before sanitizing.")]
    pub strip_ansi: bool,

    /// Show a unified diff between input and output.
    #[arg(long, short = 'D', help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    /// Print a per-stage summary to stderr.
    #[arg(long = "stats", help = "Print how many characters each stage removed or added.")]
    pub stats: bool,

    /// Print the output and per-stage summary as JSON to stdout.
    #[arg(long = "json-stdout", conflicts_with_all = ["diff", "line_buffered", "output"], help = "Print the result and stage summary as JSON.")]
    pub json_stdout: bool,
}

/// Arguments for the `classify` command.
#[derive(Parser, Debug)]
pub struct ClassifyCommand {
    /// The characters to classify.
    #[arg(value_name = "TEXT", help = "Text whose characters should be classified.")]
    pub text: String,

    /// Print the classification as JSON.
    #[arg(long = "json-stdout", help = "Print the classification as JSON.")]
    pub json_stdout: bool,
}

/// Arguments for the `rules` command.
#[derive(Parser, Debug)]
pub struct RulesCommand {
    /// Path to a custom markdown rule file (YAML), merged over the built-in rules.
    #[arg(long = "config", value_name = "FILE", env = "TTSCLEAN_CONFIG", help = "Path to a custom markdown rule file (YAML).")]
    pub config: Option<PathBuf>,

    /// Print the rules as JSON.
    #[arg(long = "json-stdout", help = "Print the rules as JSON.")]
    pub json_stdout: bool,
}

/// Pipeline stage selector for `--stage`.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum StageArg {
    Markdown,
    Emoticons,
    Operators,
    Whitespace,
}

impl From<StageArg> for StageKind {
    fn from(arg: StageArg) -> Self {
        match arg {
            StageArg::Markdown => StageKind::Markdown,
            StageArg::Emoticons => StageKind::Emoticons,
            StageArg::Operators => StageKind::Operators,
            StageArg::Whitespace => StageKind::Whitespace,
        }
    }
}
