// ttsclean-core/src/engine.rs
//! Defines the `TextStage` trait and the reporting types shared by the
//! pipeline stages.
//!
//! Every stage is a pure `&str -> String` transformation. The sanitizer runs
//! them strictly in order, feeding each stage the previous stage's output.
//!
//! License: MIT OR APACHE 2.0

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::errors::TtsCleanError;

/// One step of the sanitization pipeline.
///
/// Implementations hold only immutable data (compiled patterns, tables), so a
/// stage can be shared freely between threads.
pub trait TextStage: Send + Sync {
    /// Which pipeline position this stage occupies.
    fn kind(&self) -> StageKind;

    /// Transforms `text`. Must be total: never panic, never fail.
    fn apply(&self, text: &str) -> String;

    fn name(&self) -> &'static str {
        self.kind().as_str()
    }
}

/// The four pipeline positions, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Markdown,
    Emoticons,
    Operators,
    Whitespace,
}

impl StageKind {
    pub const ALL: [StageKind; 4] = [
        StageKind::Markdown,
        StageKind::Emoticons,
        StageKind::Operators,
        StageKind::Whitespace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StageKind::Markdown => "markdown",
            StageKind::Emoticons => "emoticons",
            StageKind::Operators => "operators",
            StageKind::Whitespace => "whitespace",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageKind {
    type Err = TtsCleanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StageKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TtsCleanError::UnknownStage(s.to_string()))
    }
}

/// Character counts around one stage of a sanitize run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageSummary {
    pub stage: StageKind,
    pub chars_before: usize,
    pub chars_after: usize,
}

impl StageSummary {
    pub fn chars_removed(&self) -> usize {
        self.chars_before.saturating_sub(self.chars_after)
    }

    pub fn chars_added(&self) -> usize {
        self.chars_after.saturating_sub(self.chars_before)
    }
}

/// The output of a sanitize run together with what each stage did.
///
/// `stages` is empty when the input hit one of the short-circuits (empty
/// input or a lone `*`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanitizeReport {
    pub output: String,
    pub stages: Vec<StageSummary>,
}
