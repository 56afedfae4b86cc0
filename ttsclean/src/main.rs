// ttsclean/src/main.rs
//! ttsclean entry point.
//!
//! Parses the command line, sets up logging and dispatches to the selected
//! subcommand. Any error is printed to stderr and the process exits with 1.

use clap::Parser;
use is_terminal::IsTerminal;
use log::LevelFilter;
use std::io;
use std::process::ExitCode;

use ttsclean::cli::Cli;
use ttsclean::commands;
use ttsclean::logger;
use ttsclean::ui::output_format;

fn main() -> ExitCode {
    // A `.env` file may set TTSCLEAN_CONFIG, RUST_LOG or TTSCLEAN_ALLOW_DEBUG_TEXT.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    match commands::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let supports_color = io::stderr().is_terminal();
            let _ = output_format::print_error_message(
                &mut io::stderr(),
                &format!("{e:#}"),
                supports_color,
            );
            ExitCode::FAILURE
        }
    }
}
