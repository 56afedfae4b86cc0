// File: ttsclean-core/src/headless.rs

//! `headless.rs`
//! One-shot helpers for callers that do not want to manage a sanitizer.

use anyhow::Result;
use once_cell::sync::Lazy;

use crate::config::RuleConfig;
use crate::sanitizer::TtsSanitizer;

static DEFAULT_SANITIZER: Lazy<TtsSanitizer> = Lazy::new(|| {
    TtsSanitizer::new().expect("built-in markdown rules must compile")
});

/// Sanitizes `text` for speech synthesis with the built-in rules.
///
/// The sanitizer behind this function is built on first use and shared for
/// the lifetime of the process.
pub fn sanitize_for_tts(text: &str) -> String {
    DEFAULT_SANITIZER.sanitize(text)
}

/// Shared sanitizer with the built-in rules.
pub fn default_sanitizer() -> &'static TtsSanitizer {
    &DEFAULT_SANITIZER
}

/// Sanitizes `content` with a custom rule configuration in a single call.
///
/// # Arguments
///
/// * `config` - The merged RuleConfig (defaults + optional user overrides).
/// * `content` - The string to be sanitized.
pub fn headless_sanitize_string(config: RuleConfig, content: &str) -> Result<String> {
    let sanitizer = TtsSanitizer::with_config(config)?;
    Ok(sanitizer.sanitize(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{merge_rules, MarkdownRule};
    use anyhow::Result;

    #[test]
    fn test_sanitize_for_tts_combined() {
        let input = "# 数学公式说明\n这是一个**重要**的公式：a² + b² = c²，也称为勾股定理。(๑•\u{300}ㅂ•\u{301})و✧";
        assert_eq!(
            sanitize_for_tts(input),
            "数学公式说明 这是一个重要的公式：a² + b² = c²，也称为勾股定理。"
        );
    }

    #[test]
    fn test_headless_sanitize_string_with_custom_rule() -> Result<()> {
        let user = RuleConfig {
            rules: vec![MarkdownRule {
                name: "tts_abbreviation".to_string(),
                pattern: Some("TTS".to_string()),
                replace_with: "语音合成".to_string(),
                ..Default::default()
            }],
        };
        let config = merge_rules(RuleConfig::load_default_rules()?, Some(user));

        let sanitized = headless_sanitize_string(config, "使用**TTS**朗读")?;
        assert_eq!(sanitized, "使用语音合成朗读");
        Ok(())
    }
}
