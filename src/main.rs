//! ffshort CLI
//!
//! Short, memorable subcommands for common ffmpeg jobs.
//!
//! # Usage
//!
//! ```bash
//! ffshort clip "holiday.mp4" 00:01:00 00:02:00
//! ffshort audio "talk.mp4" -o talk.mp3
//! ffshort speed "in.mp4" 1.5 --overwrite
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use ffshort::cli::commands::{self, Outcome};
use ffshort::cli::{parse_error_summary, Cli, ParseFailure};
use ffshort::output::Console;

const BIN_NAME: &str = env!("CARGO_PKG_NAME");

/// Main entry point for the ffshort CLI application
#[tokio::main]
async fn main() -> ExitCode {
    let console = Console::new();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return handle_parse_error(&console, e),
    };

    console.about(BIN_NAME, env!("CARGO_PKG_VERSION"));
    let verbose = cli.globals.error;

    let code = match commands::execute(cli, &console).await {
        Ok(outcome) => {
            if let Outcome::Completed(_) = &outcome {
                console.output_file(outcome.output_path());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("{:#}", e);
            console.failure(&e, verbose);
            ExitCode::FAILURE
        }
    };

    console.done();
    code
}

/// Help and version exit cleanly. Bad values for a known command fail like
/// any other invalid parameter; everything else is an unrecognized command.
fn handle_parse_error(console: &Console, err: clap::Error) -> ExitCode {
    match ParseFailure::classify(&err) {
        ParseFailure::Informational => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        ParseFailure::InvalidArguments => {
            console.about(BIN_NAME, env!("CARGO_PKG_VERSION"));
            console.invalid_parameter(&parse_error_summary(&err));
            console.done();
            ExitCode::FAILURE
        }
        ParseFailure::UnknownCommand => {
            let verbose = std::env::args().skip(1).any(|arg| arg == "-e" || arg == "--error");
            let detail = verbose.then(|| err.render().to_string());
            console.command_not_found(BIN_NAME, detail.as_deref());
            ExitCode::from(2)
        }
    }
}
