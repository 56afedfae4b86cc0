//! Operator spacing stage.
//!
//! Puts one space on each side of arithmetic and relational operators and one
//! after colons, so a TTS engine pauses around formula parts. Only a literal
//! U+0020 neighbour counts as "already spaced"; doubled spaces are left for
//! the whitespace stage.

use crate::engine::{StageKind, TextStage};

/// Operators that get a space on both sides.
pub const OPERATORS: &str = "+-*/=<>≤≥≠≈≡→";

#[derive(Debug, Clone, Copy, Default)]
pub struct OperatorSpacer;

impl TextStage for OperatorSpacer {
    fn kind(&self) -> StageKind {
        StageKind::Operators
    }

    fn apply(&self, text: &str) -> String {
        add_spaces_around_operators(text)
    }
}

pub fn add_spaces_around_operators(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len() + text.len() / 2);

    for (i, &c) in chars.iter().enumerate() {
        let has_next = i + 1 < chars.len();

        if c == ':' {
            result.push(c);
            if has_next && chars[i + 1] != ' ' {
                result.push(' ');
            }
        } else if OPERATORS.contains(c) {
            if i > 0 && chars[i - 1] != ' ' {
                result.push(' ');
            }
            result.push(c);
            if has_next && chars[i + 1] != ' ' {
                result.push(' ');
            }
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_operators() {
        assert_eq!(add_spaces_around_operators("x+y=z"), "x + y = z");
        assert_eq!(add_spaces_around_operators("a→b"), "a → b");
        assert_eq!(add_spaces_around_operators("a²+b²=c²"), "a² + b² = c²");
    }

    #[test]
    fn respects_existing_spaces() {
        assert_eq!(add_spaces_around_operators("x + y"), "x + y");
        assert_eq!(add_spaces_around_operators("x  +y"), "x  + y");
    }

    #[test]
    fn edges_get_no_padding() {
        assert_eq!(add_spaces_around_operators("-1"), "- 1");
        assert_eq!(add_spaces_around_operators("1-"), "1 -");
        assert_eq!(add_spaces_around_operators("+"), "+");
        assert_eq!(add_spaces_around_operators(""), "");
    }

    #[test]
    fn adjacent_operators() {
        // Both sides are padded independently, giving a double space.
        assert_eq!(add_spaces_around_operators("x=-3"), "x =  - 3");
    }

    #[test]
    fn colons() {
        assert_eq!(add_spaces_around_operators("a:b"), "a: b");
        assert_eq!(add_spaces_around_operators("a: b"), "a: b");
        assert_eq!(add_spaces_around_operators("end:"), "end:");
    }

    #[test]
    fn tab_is_not_a_space() {
        assert_eq!(add_spaces_around_operators("x\t+\ty"), "x\t + \ty");
    }
}
