//! Keeps user text out of debug logs unless explicitly allowed.
//!
//! Text piped into a TTS engine is often private (chat messages, documents).
//! Debug logs show a length placeholder instead, unless the
//! `TTSCLEAN_ALLOW_DEBUG_TEXT` environment variable is set to `true`.

use lazy_static::lazy_static;
use std::borrow::Cow;

lazy_static! {
    static ref TEXT_DEBUG_ALLOWED: bool = {
        std::env::var("TTSCLEAN_ALLOW_DEBUG_TEXT")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Placeholder describing `text` without revealing it.
pub fn redact_text(text: &str) -> String {
    format!("[TEXT: {} chars]", text.chars().count())
}

/// `text` itself when text logging is allowed, otherwise [`redact_text`].
pub fn loggable(text: &str) -> Cow<'_, str> {
    if *TEXT_DEBUG_ALLOWED {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(redact_text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(redact_text("你好"), "[TEXT: 2 chars]");
        assert_eq!(redact_text(""), "[TEXT: 0 chars]");
    }
}
