//! Emoticon cleaning stage.
//!
//! Known kaomoji are removed whole first. The remaining text is then walked
//! one character at a time, and the first matching rule decides:
//!
//! 1. `:` is dropped, leaving a space if it followed a non-whitespace char.
//! 2. Math characters are kept, unless they are also emoticon parts. `|` is
//!    always kept.
//! 3. Emoticon parts are dropped.
//! 4. Punctuation clutter (`*!@#$%^&()`) is dropped.
//! 5. `/` is dropped when an emoticon part sits within two characters of it.
//! 6. Everything else is kept.

use crate::classify::{is_clutter, is_emoji_or_emoticon, is_math_symbol};
use crate::engine::{StageKind, TextStage};

/// Kaomoji removed as whole sequences, in this order, before the character
/// pass.
pub const EMOTICON_SEQUENCES: [&str; 6] = [
    "~(≧▽≦)/~",
    "(๑•\u{300}ㅂ•\u{301})و✧",
    "٩(๑>◡<๑)۶",
    "~≧▽≦/~",
    "≧▽≦",
    "~≧≦~",
];

/// How many characters on each side of a `/` are inspected.
pub const SLASH_WINDOW: usize = 2;

#[derive(Debug, Clone, Copy, Default)]
pub struct EmoticonCleaner;

impl TextStage for EmoticonCleaner {
    fn kind(&self) -> StageKind {
        StageKind::Emoticons
    }

    fn apply(&self, text: &str) -> String {
        clean_emoticons(text)
    }
}

/// Removes emoticons and decorative characters while keeping math notation.
pub fn clean_emoticons(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed == "*" || trimmed.chars().all(is_clutter) {
        return String::new();
    }

    let mut stripped = text.to_string();
    for sequence in EMOTICON_SEQUENCES {
        if stripped.contains(sequence) {
            stripped = stripped.replace(sequence, "");
        }
    }

    let chars: Vec<char> = stripped.chars().collect();
    let mut result = String::with_capacity(stripped.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == ':' {
            if i > 0 && !chars[i - 1].is_whitespace() {
                result.push(' ');
            }
            continue;
        }

        if is_math_symbol(c) && (c == '|' || !is_emoji_or_emoticon(c)) {
            result.push(c);
            continue;
        }

        if is_emoji_or_emoticon(c) || is_clutter(c) {
            continue;
        }

        if c == '/' && slash_in_emoticon(&chars, i) {
            continue;
        }

        result.push(c);
    }

    result
}

fn slash_in_emoticon(chars: &[char], i: usize) -> bool {
    let before = &chars[i.saturating_sub(SLASH_WINDOW)..i];
    let after = &chars[i + 1..(i + 1 + SLASH_WINDOW).min(chars.len())];
    before.iter().chain(after).any(|&c| is_emoji_or_emoticon(c))
}
