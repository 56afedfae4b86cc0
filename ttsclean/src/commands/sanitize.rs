// ttsclean/src/commands/sanitize.rs
//! The `sanitize` command: reads text, runs the pipeline and writes the result.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, BufRead, BufReader, Read, Write};

use ttsclean_core::{SanitizeReport, StageKind, TtsSanitizer};

use crate::cli::SanitizeCommand;
use crate::commands::{info_msg, load_rule_config, warn_msg};
use crate::ui::{diff_viewer, tables};

pub fn run_sanitize(cmd: &SanitizeCommand, quiet: bool) -> Result<()> {
    info!("Starting sanitize operation.");

    let mut config = load_rule_config(cmd.config.as_deref())?;
    config.set_active_rules(&cmd.enable, &cmd.disable);
    let sanitizer = TtsSanitizer::with_config(config)?;
    let last_stage = cmd.stage.map(StageKind::from);

    if cmd.line_buffered {
        return run_line_buffered(cmd, &sanitizer, last_stage);
    }

    let input = read_input(cmd)?;
    let input = if cmd.strip_ansi { strip_ansi(&input) } else { input };
    if input.trim().is_empty() && !quiet {
        warn_msg("Input is empty; nothing to sanitize.");
    }

    let report = match last_stage {
        Some(last) => sanitizer.report_until(&input, last),
        None => sanitizer.sanitize_with_report(&input),
    };
    debug!(
        "Content sanitized. Original length: {}, Sanitized length: {}",
        input.chars().count(),
        report.output.chars().count()
    );

    if cmd.json_stdout {
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize sanitize report")?;
        println!("{json}");
        return Ok(());
    }

    handle_primary_output(cmd, &input, &report, quiet)?;

    if cmd.stats && !quiet {
        tables::print_stage_summary(&report.stages, &mut io::stderr())?;
    }

    info!("Sanitize operation completed.");
    Ok(())
}

fn handle_primary_output(
    cmd: &SanitizeCommand,
    input: &str,
    report: &SanitizeReport,
    quiet: bool,
) -> Result<()> {
    if let Some(path) = &cmd.output {
        if !quiet {
            info_msg(format!("Writing sanitized content to file: {}", path.display()));
        }
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        if cmd.diff {
            diff_viewer::print_diff(input, &report.output, &mut file, false)?;
        } else {
            writeln!(file, "{}", report.output)?;
        }
    } else {
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        let mut writer = stdout.lock();
        if cmd.diff {
            diff_viewer::print_diff(input, &report.output, &mut writer, supports_color)?;
        } else {
            writeln!(writer, "{}", report.output)?;
        }
    }
    Ok(())
}

/// Sanitizes each line on its own and flushes after every line, so output
/// keeps pace with a slow producer. Markdown constructs spanning lines, such
/// as fenced code blocks, are not recognized in this mode.
fn run_line_buffered(
    cmd: &SanitizeCommand,
    sanitizer: &TtsSanitizer,
    last_stage: Option<StageKind>,
) -> Result<()> {
    let reader: Box<dyn BufRead> = if let Some(text) = &cmd.text {
        Box::new(io::Cursor::new(text.clone().into_bytes()))
    } else if let Some(path) = &cmd.input_file {
        let file = fs::File::open(path)
            .with_context(|| format!("Failed to open input file: {}", path.display()))?;
        Box::new(BufReader::new(file))
    } else {
        Box::new(BufReader::new(io::stdin()))
    };

    let mut writer: Box<dyn Write> = match &cmd.output {
        Some(path) => Box::new(
            fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };

    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        let line = if cmd.strip_ansi { strip_ansi(&line) } else { line };
        let sanitized = sanitize_single_line(&line, sanitizer, last_stage);
        writeln!(writer, "{sanitized}")?;
        writer.flush()?;
    }
    Ok(())
}

pub fn sanitize_single_line(line: &str, sanitizer: &TtsSanitizer, last_stage: Option<StageKind>) -> String {
    match last_stage {
        Some(last) => sanitizer.run_until(line, last),
        None => sanitizer.sanitize(line),
    }
}

fn read_input(cmd: &SanitizeCommand) -> Result<String> {
    if let Some(text) = &cmd.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cmd.input_file {
        info!("Reading input from file: {}", path.display());
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }

    info!("Reading input from stdin.");
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;
    Ok(buffer)
}

fn strip_ansi(text: &str) -> String {
    let stripped = strip_ansi_escapes::strip(text.as_bytes());
    String::from_utf8_lossy(&stripped).into_owned()
}
