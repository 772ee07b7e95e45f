//! Main entry point for the xorpad CLI app

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = xorpad::cli_runner::run_cli_app() {
        if e.downcast_ref::<clap::Error>().is_none() {
            eprintln!("Error: {}", e);
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
