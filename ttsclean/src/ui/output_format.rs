// ttsclean/src/ui/output_format.rs
//! Colored status messages written to stderr.
//!
//! Color is applied only when the caller says the target supports it, so
//! redirected output stays plain.

use owo_colors::{AnsiColors, OwoColorize};
use std::io::{self, Write};

fn print_message<W: Write>(
    writer: &mut W,
    prefix: &str,
    color: AnsiColors,
    message: &str,
    supports_color: bool,
) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", prefix.color(color).bold(), message)
    } else {
        writeln!(writer, "{prefix} {message}")
    }
}

pub fn print_info_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, "[ttsclean]", AnsiColors::Cyan, message, supports_color)
}

pub fn print_warn_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, "[ttsclean WARN]", AnsiColors::Yellow, message, supports_color)
}

pub fn print_error_message<W: Write>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    print_message(writer, "[ttsclean ERROR]", AnsiColors::Red, message, supports_color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_has_no_escapes() {
        let mut buf = Vec::new();
        print_error_message(&mut buf, "boom", false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[ttsclean ERROR] boom\n");
    }

    #[test]
    fn colored_output_keeps_message() {
        let mut buf = Vec::new();
        print_info_message(&mut buf, "hello", true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\u{1b}["));
        assert!(text.ends_with("hello\n"));
    }
}
