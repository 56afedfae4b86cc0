// ttsclean/src/ui/tables.rs
//! Tables for `--stats`, `classify` and `rules`.

use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use std::io::{self, Write};

use ttsclean_core::{CharClass, StageSummary};

use crate::commands::rules::RuleRow;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

fn yes_no(flag: bool) -> String {
    if flag { "yes".to_string() } else { "no".to_string() }
}

/// Per-stage character counts.
pub fn print_stage_summary<W: Write>(stages: &[StageSummary], writer: &mut W) -> io::Result<()> {
    if stages.is_empty() {
        return writeln!(writer, "No stages ran.");
    }
    let mut table = new_table(vec!["Stage", "Chars in", "Chars out", "Removed", "Added"]);
    for summary in stages {
        table.add_row(vec![
            summary.stage.to_string(),
            summary.chars_before.to_string(),
            summary.chars_after.to_string(),
            summary.chars_removed().to_string(),
            summary.chars_added().to_string(),
        ]);
    }
    writeln!(writer, "{table}")
}

pub fn print_classification<W: Write>(classes: &[CharClass], writer: &mut W) -> io::Result<()> {
    let mut table = new_table(vec!["Char", "Code point", "Category", "Math", "Emoticon", "Kept"]);
    for class in classes {
        table.add_row(vec![
            class.ch.escape_debug().to_string(),
            class.code_point.clone(),
            class.category.clone(),
            yes_no(class.is_math),
            yes_no(class.is_emoticon),
            yes_no(class.kept),
        ]);
    }
    writeln!(writer, "{table}")
}

pub fn print_rules<W: Write>(rows: &[RuleRow], writer: &mut W) -> io::Result<()> {
    let mut table = new_table(vec!["#", "Name", "Enabled", "Multiline", "Description"]);
    for row in rows {
        table.add_row(vec![
            row.position.to_string(),
            row.name.clone(),
            yes_no(row.enabled),
            yes_no(row.multiline),
            row.description.clone().unwrap_or_default(),
        ]);
    }
    writeln!(writer, "{table}")
}
