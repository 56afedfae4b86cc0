//! Configuration management for `ttsclean-core`.
//!
//! This module defines the markdown rule set used by the first pipeline stage.
//! Rules are ordered: each one sees the output of the rules before it, so the
//! position of a rule in the list is part of its meaning. The built-in set is
//! embedded as YAML; users may override rules by name or append new ones.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

static CAPTURE_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{?(\d+)\}?").expect("capture reference pattern is valid"));

/// A single markdown rule: a pattern and what its matches are replaced with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct MarkdownRule {
    /// Unique identifier for the rule (e.g., "heading").
    pub name: String,
    /// Human-readable description of the construct the rule strips.
    pub description: Option<String>,
    /// The regex pattern string.
    pub pattern: Option<String>,
    /// Replacement text; may reference capture groups as `$1`.
    pub replace_with: String,
    /// If true, `^` and `$` match at line boundaries.
    pub multiline: bool,
    /// If true, `.` also matches `\n`.
    pub dot_matches_new_line: bool,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
}

impl Default for MarkdownRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: None,
            replace_with: String::new(),
            multiline: false,
            dot_matches_new_line: false,
            enabled: None,
        }
    }
}

impl MarkdownRule {
    /// Rules are active unless explicitly disabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

/// The ordered markdown rule set.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq, Hash)]
pub struct RuleConfig {
    #[serde(default)]
    pub rules: Vec<MarkdownRule>,
}

impl RuleConfig {
    /// Loads markdown rules from a YAML file and validates them.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: RuleConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_rules(&config.rules)
            .with_context(|| format!("Invalid rules in config file {}", path.display()))?;
        info!("Loaded {} rules from file {}.", config.rules.len(), path.display());

        Ok(config)
    }

    /// Loads the built-in markdown rules from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/markdown_rules.yaml");
        let config: RuleConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default rules")?;

        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }

    /// Turns rules on or off by name. A name in both lists ends up disabled.
    pub fn set_active_rules(&mut self, enable_rules: &[String], disable_rules: &[String]) {
        let enable_set: HashSet<&str> = enable_rules.iter().map(String::as_str).collect();
        let disable_set: HashSet<&str> = disable_rules.iter().map(String::as_str).collect();
        let all_rule_names: HashSet<&str> = self.rules.iter().map(|r| r.name.as_str()).collect();

        for rule_name in enable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `enable_rules` list does not exist.", rule_name);
        }
        for rule_name in disable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `disable_rules` list does not exist.", rule_name);
        }

        for rule in &mut self.rules {
            if disable_set.contains(rule.name.as_str()) {
                rule.enabled = Some(false);
            } else if enable_set.contains(rule.name.as_str()) {
                rule.enabled = Some(true);
            }
        }

        debug!(
            "Active rules after filtering: {}/{}",
            self.rules.iter().filter(|r| r.is_enabled()).count(),
            self.rules.len()
        );
    }

    /// Names of the rules that will run, in application order.
    pub fn active_rule_names(&self) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|r| r.is_enabled())
            .map(|r| r.name.as_str())
            .collect()
    }
}

/// Merges user-defined rules into the defaults.
///
/// A user rule named like an existing rule replaces it at the same position;
/// any other user rule is appended after the defaults in file order.
pub fn merge_rules(default_config: RuleConfig, user_config: Option<RuleConfig>) -> RuleConfig {
    debug!("merge_rules called. Initial default rules count: {}", default_config.rules.len());

    let mut rules = default_config.rules;

    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} user rules.", user_cfg.rules.len());
        for user_rule in user_cfg.rules {
            match rules.iter_mut().find(|r| r.name == user_rule.name) {
                Some(existing) => {
                    debug!("Overriding rule '{}' in place.", user_rule.name);
                    *existing = user_rule;
                }
                None => rules.push(user_rule),
            }
        }
    }

    debug!("Final total rules after merge: {}", rules.len());
    RuleConfig { rules }
}

/// Validates rule integrity: names, pattern presence and size, regex syntax,
/// and capture group references in the replacement.
pub fn validate_rules(rules: &[MarkdownRule]) -> Result<()> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.as_str()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        let pattern = match &rule.pattern {
            Some(p) if !p.is_empty() => p,
            Some(_) => {
                errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
                continue;
            }
            None => {
                errors.push(format!("Rule '{}' is missing the `pattern` field.", rule.name));
                continue;
            }
        };

        if pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(format!(
                "Rule '{}': pattern length ({}) exceeds maximum allowed ({}).",
                rule.name,
                pattern.len(),
                MAX_PATTERN_LENGTH
            ));
            continue;
        }

        let regex = match Regex::new(pattern) {
            Ok(regex) => regex,
            Err(e) => {
                errors.push(format!("Rule '{}' has an invalid regex pattern: {}", rule.name, e));
                continue;
            }
        };

        let group_count = regex.captures_len() - 1;
        for cap in CAPTURE_REFERENCE.captures_iter(&rule.replace_with) {
            if let Ok(group_num) = cap[1].parse::<usize>() {
                if group_num > group_count {
                    errors.push(format!(
                        "Rule '{}': replacement references non-existent capture group '${}'.",
                        rule.name, group_num
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Rule validation failed:\n{}", errors.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str, pattern: &str, replace_with: &str) -> MarkdownRule {
        MarkdownRule {
            name: name.to_string(),
            pattern: Some(pattern.to_string()),
            replace_with: replace_with.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn default_rules_are_valid_and_ordered() {
        let config = RuleConfig::load_default_rules().unwrap();
        validate_rules(&config.rules).unwrap();
        assert_eq!(
            config.active_rule_names(),
            vec![
                "link",
                "underscore_emphasis",
                "asterisk_emphasis",
                "inline_code",
                "code_block",
                "heading",
                "list_marker",
                "block_quote",
                "horizontal_rule",
            ]
        );
    }

    #[test]
    fn line_rules_are_multiline() {
        let config = RuleConfig::load_default_rules().unwrap();
        for rule in &config.rules {
            let line_based = matches!(
                rule.name.as_str(),
                "heading" | "list_marker" | "block_quote" | "horizontal_rule"
            );
            assert_eq!(rule.multiline, line_based, "rule {}", rule.name);
            assert!(!rule.dot_matches_new_line);
        }
    }

    #[test]
    fn rejects_bad_capture_reference() {
        let err = validate_rules(&[rule("bold", r"\*\*(.*?)\*\*", "$2")]).unwrap_err();
        assert!(err.to_string().contains("non-existent capture group '$2'"));
    }

    #[test]
    fn rejects_duplicates_and_empty_patterns() {
        let err = validate_rules(&[rule("a", "x", ""), rule("a", "y", ""), rule("b", "", "")])
            .unwrap_err()
            .to_string();
        assert!(err.contains("Duplicate rule name found: 'a'."));
        assert!(err.contains("Rule 'b' has an empty `pattern` field."));
    }

    #[test]
    fn rejects_overlong_pattern() {
        let long = "a".repeat(MAX_PATTERN_LENGTH + 1);
        let err = validate_rules(&[rule("long", &long, "")]).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum allowed"));
    }

    #[test]
    fn disable_wins_over_enable() {
        let mut config = RuleConfig::load_default_rules().unwrap();
        let names = vec!["heading".to_string()];
        config.set_active_rules(&names, &names);
        assert!(!config.active_rule_names().contains(&"heading"));
    }
}
