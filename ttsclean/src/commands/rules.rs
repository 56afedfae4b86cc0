// ttsclean/src/commands/rules.rs
//! The `rules` command: lists the markdown rules in application order.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io;

use ttsclean_core::RuleConfig;

use crate::cli::RulesCommand;
use crate::commands::load_rule_config;
use crate::ui::tables;

/// One line of the rule listing. Positions start at 1.
#[derive(Debug, Clone, Serialize)]
pub struct RuleRow {
    pub position: usize,
    pub name: String,
    pub enabled: bool,
    pub multiline: bool,
    pub pattern: Option<String>,
    pub replace_with: String,
    pub description: Option<String>,
}

pub fn rule_rows(config: &RuleConfig) -> Vec<RuleRow> {
    config
        .rules
        .iter()
        .enumerate()
        .map(|(index, rule)| RuleRow {
            position: index + 1,
            name: rule.name.clone(),
            enabled: rule.is_enabled(),
            multiline: rule.multiline,
            pattern: rule.pattern.clone(),
            replace_with: rule.replace_with.clone(),
            description: rule.description.clone(),
        })
        .collect()
}

pub fn run_rules(cmd: &RulesCommand) -> Result<()> {
    let config = load_rule_config(cmd.config.as_deref())?;
    let rows = rule_rows(&config);

    if cmd.json_stdout {
        let json = serde_json::to_string_pretty(&rows).context("Failed to serialize rules")?;
        println!("{json}");
    } else {
        tables::print_rules(&rows, &mut io::stdout().lock())?;
    }
    Ok(())
}
