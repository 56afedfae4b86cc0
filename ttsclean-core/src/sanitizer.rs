// ttsclean-core/src/sanitizer.rs
//! The `TtsSanitizer`: the four pipeline stages bundled with their compiled
//! markdown rules.
//!
//! A sanitizer is immutable once built, so one instance can serve any number
//! of threads. Building one is the only fallible step (rule compilation);
//! every text operation is total.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;

use crate::classify;
use crate::config::RuleConfig;
use crate::debug_text::loggable;
use crate::engine::{SanitizeReport, StageKind, StageSummary, TextStage};
use crate::stages::{EmoticonCleaner, MarkdownStripper, OperatorSpacer, WhitespaceNormalizer};

#[derive(Debug, Clone)]
pub struct TtsSanitizer {
    config: RuleConfig,
    markdown: MarkdownStripper,
    emoticons: EmoticonCleaner,
    operators: OperatorSpacer,
    whitespace: WhitespaceNormalizer,
}

impl TtsSanitizer {
    /// Builds a sanitizer with the built-in markdown rules.
    pub fn new() -> Result<Self> {
        Self::with_config(RuleConfig::load_default_rules()?)
    }

    /// Builds a sanitizer with a custom markdown rule set.
    pub fn with_config(config: RuleConfig) -> Result<Self> {
        let markdown = MarkdownStripper::new(&config)
            .context("Failed to build markdown stage for TtsSanitizer")?;
        Ok(Self {
            config,
            markdown,
            emoticons: EmoticonCleaner,
            operators: OperatorSpacer,
            whitespace: WhitespaceNormalizer,
        })
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// The stages in execution order.
    pub fn stages(&self) -> [&dyn TextStage; 4] {
        [&self.markdown, &self.emoticons, &self.operators, &self.whitespace]
    }

    pub fn remove_markdown(&self, text: &str) -> String {
        self.markdown.apply(text)
    }

    pub fn clean_emoticons(&self, text: &str) -> String {
        self.emoticons.apply(text)
    }

    pub fn add_spaces_around_operators(&self, text: &str) -> String {
        self.operators.apply(text)
    }

    pub fn normalize_whitespace(&self, text: &str) -> String {
        self.whitespace.apply(text)
    }

    pub fn is_math_symbol(&self, c: char) -> bool {
        classify::is_math_symbol(c)
    }

    pub fn is_emoji_or_emoticon(&self, c: char) -> bool {
        classify::is_emoji_or_emoticon(c)
    }

    /// Prepares `text` for speech synthesis: markdown, then emoticons, then
    /// operator spacing, then whitespace normalization.
    pub fn sanitize(&self, text: &str) -> String {
        if skips_pipeline(text) {
            return String::new();
        }

        debug!("Sanitizing input {}", loggable(text));
        let output = self
            .stages()
            .iter()
            .fold(text.to_string(), |current, stage| stage.apply(&current));
        debug!("Sanitized output {}", loggable(&output));
        output
    }

    /// Like [`sanitize`](Self::sanitize), also recording each stage's effect.
    pub fn sanitize_with_report(&self, text: &str) -> SanitizeReport {
        if skips_pipeline(text) {
            return SanitizeReport { output: String::new(), stages: Vec::new() };
        }
        self.report_until(text, StageKind::Whitespace)
    }

    /// Runs the stages up to and including `last`, recording each stage's
    /// effect. No short-circuits apply.
    pub fn report_until(&self, text: &str, last: StageKind) -> SanitizeReport {
        let mut current = text.to_string();
        let mut stages = Vec::with_capacity(StageKind::ALL.len());
        for stage in self.stages().into_iter().filter(|stage| stage.kind() <= last) {
            let next = stage.apply(&current);
            let summary = StageSummary {
                stage: stage.kind(),
                chars_before: current.chars().count(),
                chars_after: next.chars().count(),
            };
            debug!(
                "Stage '{}': {} -> {} chars",
                summary.stage, summary.chars_before, summary.chars_after
            );
            stages.push(summary);
            current = next;
        }

        SanitizeReport { output: current, stages }
    }

    /// Runs the stages up to and including `last`. The empty-input and lone
    /// `*` short-circuits of `sanitize` do not apply here.
    pub fn run_until(&self, text: &str, last: StageKind) -> String {
        self.stages()
            .iter()
            .take_while(|stage| stage.kind() <= last)
            .fold(text.to_string(), |current, stage| stage.apply(&current))
    }
}

fn skips_pipeline(text: &str) -> bool {
    text.is_empty() || text.trim() == "*"
}
