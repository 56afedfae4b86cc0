// ttsclean/src/commands/mod.rs
//! Subcommand implementations.

pub mod classify;
pub mod rules;
pub mod sanitize;

use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;
use std::path::Path;

use ttsclean_core::config::{self, RuleConfig};

use crate::cli::{Cli, Commands};
use crate::ui::output_format;

/// Dispatches the parsed command line.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Sanitize(cmd) => sanitize::run_sanitize(cmd, cli.quiet),
        Commands::Classify(cmd) => classify::run_classify(cmd),
        Commands::Rules(cmd) => rules::run_rules(cmd),
    }
}

/// Built-in rules, with the rules of `config_path` merged over them.
pub(crate) fn load_rule_config(config_path: Option<&Path>) -> Result<RuleConfig> {
    let defaults = RuleConfig::load_default_rules()?;
    let user = config_path.map(RuleConfig::load_from_file).transpose()?;
    Ok(config::merge_rules(defaults, user))
}

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}
