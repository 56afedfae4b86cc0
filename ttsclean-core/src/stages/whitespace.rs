//! Whitespace normalization stage: every whitespace run becomes one space,
//! and both ends are trimmed.

use crate::engine::{StageKind, TextStage};

#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceNormalizer;

impl TextStage for WhitespaceNormalizer {
    fn kind(&self) -> StageKind {
        StageKind::Whitespace
    }

    fn apply(&self, text: &str) -> String {
        normalize_whitespace(text)
    }
}

pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_and_trims() {
        assert_eq!(normalize_whitespace("  a \n\t b  "), "a b");
        assert_eq!(normalize_whitespace("a\u{3000}\u{3000}b"), "a b");
        assert_eq!(normalize_whitespace(" \n "), "");
    }
}
