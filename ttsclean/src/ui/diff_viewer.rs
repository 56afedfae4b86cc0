// ttsclean/src/ui/diff_viewer.rs
//! Unified diff between the original and sanitized text.
//!
//! Removed lines are red, added lines green, when color is supported.

use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes a line-oriented diff of `original` against `sanitized`.
pub fn print_diff<W: Write>(
    original: &str,
    sanitized: &str,
    writer: &mut W,
    supports_color: bool,
) -> io::Result<()> {
    let patch = create_patch(original, sanitized);
    let header = "--- Diff View ---";
    if supports_color {
        writeln!(writer, "{}", header.yellow().bold())?;
    } else {
        writeln!(writer, "{header}")?;
    }

    let mut changed = false;
    for hunk in patch.hunks() {
        for line_change in hunk.lines() {
            let (marker, text) = match line_change {
                DiffLine::Delete(s) => {
                    changed = true;
                    ('-', *s)
                }
                DiffLine::Insert(s) => {
                    changed = true;
                    ('+', *s)
                }
                DiffLine::Context(s) => (' ', *s),
            };
            let text = text.strip_suffix('\n').unwrap_or(text);
            match (marker, supports_color) {
                ('-', true) => writeln!(writer, "{}", format!("- {text}").red())?,
                ('+', true) => writeln!(writer, "{}", format!("+ {text}").green())?,
                _ => writeln!(writer, "{marker} {text}")?,
            }
        }
    }

    if !changed {
        writeln!(writer, "No changes detected.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(original: &str, sanitized: &str) -> String {
        let mut buf = Vec::new();
        print_diff(original, sanitized, &mut buf, false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn shows_removed_and_added_lines() {
        let out = render("# 标题\n", "标题\n");
        assert!(out.contains("- # 标题"));
        assert!(out.contains("+ 标题"));
    }

    #[test]
    fn reports_unchanged_input() {
        let out = render("纯文本\n", "纯文本\n");
        assert!(out.contains("No changes detected."));
    }
}
