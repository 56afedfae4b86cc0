//! Character classification for the emoticon stage.
//!
//! Two predicates decide the fate of every character: whether it carries
//! mathematical meaning, and whether it is decoration or a kaomoji building
//! block. Both combine a Unicode general category check with a curated table.
//! The tables are a compatibility contract and are not derived from Unicode
//! data; do not extend them with whole blocks.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Characters treated as mathematical regardless of their category.
pub const MATH_SYMBOL_TABLE: &str =
    "≌√∈²³⁴⁵⁶⁷⁸⁹₀₁₂₃₄₅₆₇₈₉±×÷≤≥≠≈≡∫∑∏√∞∂∆πφθ+-=*/|→";

/// Characters treated as emoticon parts regardless of their category.
/// Includes the combining grave and acute accents used in `•̀` / `•́`.
pub const EMOTICON_TABLE: &str = concat!(
    "˙´`°•☆★○●□■♡♢♤♧♥♦♠♣☀☁☂☃♨웃유♙♘♚♛♜♝⁂✓✗✘",
    "!@#$%^&[]{}|\\\"'<>,.?~()",
    "๑ㅂㅁㅇㅈㅊㅋㅌㅍㅎㅏㅓㅗㅜㅡㅣ",
    "\u{300}\u{301}",
    "≧▽≦ヾ≡٩۶و✧",
);

/// Punctuation clutter dropped by the emoticon stage.
pub const CLUTTER_CHARS: &str = "*!@#$%^&()";

static MATH_SYMBOLS: Lazy<HashSet<char>> = Lazy::new(|| MATH_SYMBOL_TABLE.chars().collect());

static EMOTICON_CHARS: Lazy<HashSet<char>> = Lazy::new(|| EMOTICON_TABLE.chars().collect());

/// True for general category `Sm` and for every character in
/// [`MATH_SYMBOL_TABLE`].
pub fn is_math_symbol(c: char) -> bool {
    get_general_category(c) == GeneralCategory::MathSymbol || MATH_SYMBOLS.contains(&c)
}

/// True for general categories `So`, `Sk` and `Zs` and for every character in
/// [`EMOTICON_TABLE`].
///
/// Note that `Zs` covers the ordinary space, so the emoticon stage removes
/// spaces between words; the operator stage puts them back around operators.
pub fn is_emoji_or_emoticon(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::OtherSymbol | GeneralCategory::ModifierSymbol | GeneralCategory::SpaceSeparator
    ) || EMOTICON_CHARS.contains(&c)
}

pub fn is_clutter(c: char) -> bool {
    CLUTTER_CHARS.contains(c)
}

/// Diagnostic view of how a single character is classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharClass {
    pub ch: char,
    /// `U+XXXX` notation.
    pub code_point: String,
    /// General category name as reported by `unicode-general-category`.
    pub category: String,
    pub is_math: bool,
    pub is_emoticon: bool,
    /// Whether the emoticon stage keeps the character when it appears on its
    /// own. Colons and slashes depend on context and are reported as dropped
    /// and kept respectively.
    pub kept: bool,
}

/// Classifies `c` the same way the emoticon stage does.
pub fn classify(c: char) -> CharClass {
    let is_math = is_math_symbol(c);
    let is_emoticon = is_emoji_or_emoticon(c);
    let kept = c != ':' && ((is_math && (c == '|' || !is_emoticon)) || (!is_emoticon && !is_clutter(c)));
    CharClass {
        ch: c,
        code_point: format!("U+{:04X}", c as u32),
        category: format!("{:?}", get_general_category(c)),
        is_math,
        is_emoticon,
        kept,
    }
}
