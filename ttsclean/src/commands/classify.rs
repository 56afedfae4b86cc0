// ttsclean/src/commands/classify.rs
//! The `classify` command: shows how each character would be treated.

use anyhow::{Context, Result};
use std::io;

use ttsclean_core::{classify, CharClass};

use crate::cli::ClassifyCommand;
use crate::ui::tables;

pub fn run_classify(cmd: &ClassifyCommand) -> Result<()> {
    let classes: Vec<CharClass> = cmd.text.chars().map(classify).collect();

    if cmd.json_stdout {
        let json = serde_json::to_string_pretty(&classes)
            .context("Failed to serialize character classes")?;
        println!("{json}");
    } else {
        tables::print_classification(&classes, &mut io::stdout().lock())?;
    }
    Ok(())
}
