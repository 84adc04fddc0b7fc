//! tradedocs: document templates for trading operations.
//!
//! This is the main entry point for the `tradedocs` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cli;
mod commands;
pub mod catalog;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fs;
pub mod migrate;
pub mod preview;
pub mod store;
pub mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command, cli.trader.as_deref()) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
