//! Maison CLI
//!
//! Browse the menu, place an order, talk to the assistant and manage the saved display language
//! from a terminal.

use std::{io, process::ExitCode};

use crate::config::Config;

mod cli;
mod config;
mod logging;

fn main() -> ExitCode {
    let config = Config::load();

    if let Err(init_error) = logging::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging is not initialized, must use eprintln"
        )]
        {
            eprintln!("failed to initialize logging: {init_error}");
        }

        return ExitCode::FAILURE;
    }

    match cli::run(config, io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(run_error) => {
            #[expect(clippy::print_stderr, reason = "errors are reported on stderr")]
            {
                eprintln!("{run_error}");
            }

            ExitCode::FAILURE
        }
    }
}
